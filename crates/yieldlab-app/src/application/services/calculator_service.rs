use log::{debug, info};

use crate::application::services::validation::{
    validate_investment_input, validate_referral_input, validate_team_input,
};
use crate::application::ResultExt;
use yieldlab_domain::earnings::{
    compute_investment_projection, compute_referral_reward, compute_team_reward, InvestmentInput,
    InvestmentResult, ReferralInput, ReferralReward, TeamRewardInput, TeamRewardResult,
};
use yieldlab_domain::scenario::CalculatorType;
use yieldlab_domain::shared::DomainError;

/// Validates calculator input and runs the earnings engine
#[derive(Debug, Default, Clone)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    pub fn investment(&self, input: &InvestmentInput) -> Result<InvestmentResult, DomainError> {
        validate_investment_input(input)?;

        let result = compute_investment_projection(input);
        info!(
            "[calculator] investment product={} units={} total_return={:.4} bonus={:.4}",
            input.product_type.as_str(),
            input.unit_count,
            result.total_return,
            result.total_streaming_bonus
        );
        Ok(result)
    }

    pub fn referral(&self, input: &ReferralInput) -> Result<ReferralReward, DomainError> {
        validate_referral_input(input)?;

        let reward = compute_referral_reward(input);
        info!(
            "[calculator] referral direct_units={} second_level_units={:?} daily_total={:.4}",
            input.downline_unit_count, input.second_level_unit_count, reward.total_daily_reward
        );
        Ok(reward)
    }

    pub fn team(&self, input: &TeamRewardInput) -> Result<TeamRewardResult, DomainError> {
        validate_team_input(input)?;

        let reward = compute_team_reward(input)?;
        info!(
            "[calculator] team tier={} small_area_units={} daily_total={:.4}",
            reward.tier.name, input.small_area_performance_units, reward.total_daily_reward
        );
        Ok(reward)
    }

    /// Run the calculator named by `calculator_type` on an untyped input,
    /// as submitted with a saved scenario.
    pub fn evaluate(
        &self,
        calculator_type: CalculatorType,
        input: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        debug!("[calculator] evaluate type={}", calculator_type.as_str());

        match calculator_type {
            CalculatorType::Investment => {
                let input: InvestmentInput = serde_json::from_value(input.clone())
                    .to_validation_err("Invalid investment input")?;
                serde_json::to_value(self.investment(&input)?).to_infra_err()
            }
            CalculatorType::Referral => {
                let input: ReferralInput = serde_json::from_value(input.clone())
                    .to_validation_err("Invalid referral input")?;
                serde_json::to_value(self.referral(&input)?).to_infra_err()
            }
            CalculatorType::Team => {
                let input: TeamRewardInput = serde_json::from_value(input.clone())
                    .to_validation_err("Invalid team input")?;
                serde_json::to_value(self.team(&input)?).to_infra_err()
            }
        }
    }

    /// Check that `input` parses and validates for `calculator_type` without computing
    pub fn check_input(
        &self,
        calculator_type: CalculatorType,
        input: &serde_json::Value,
    ) -> Result<(), DomainError> {
        match calculator_type {
            CalculatorType::Investment => {
                let input: InvestmentInput = serde_json::from_value(input.clone())
                    .to_validation_err("Invalid investment input")?;
                validate_investment_input(&input)
            }
            CalculatorType::Referral => {
                let input: ReferralInput = serde_json::from_value(input.clone())
                    .to_validation_err("Invalid referral input")?;
                validate_referral_input(&input)
            }
            CalculatorType::Team => {
                let input: TeamRewardInput = serde_json::from_value(input.clone())
                    .to_validation_err("Invalid team input")?;
                validate_team_input(&input)
            }
        }
    }
}
