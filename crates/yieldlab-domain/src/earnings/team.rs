use serde::{Deserialize, Serialize};

use super::constants::{DAYS_PER_MONTH, SUPREME_REWARD_RATE};
use super::daily_profit_for_units;
use super::tiers::{find_tier, TierInfo};
use crate::shared::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRewardInput {
    pub current_tier: String,
    /// Units held outside the largest leg of the team
    pub small_area_performance_units: u32,
    /// Units held by the whole team
    pub total_performance_units: u32,
    pub daily_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRewardResult {
    pub tier: TierInfo,
    pub small_area_daily_profit: f64,
    pub team_dividend_reward: f64,
    pub streaming_management_reward: f64,
    pub supreme_reward: f64,
    pub total_daily_reward: f64,
    pub total_monthly_reward: f64,
}

/// Tier reward for a team leader.
///
/// Dividend and streaming-management rewards are percentages of the
/// small-area daily profit. The Supreme tier also earns 5% of the whole
/// team's daily profit.
pub fn compute_team_reward(input: &TeamRewardInput) -> Result<TeamRewardResult, DomainError> {
    let tier = find_tier(&input.current_tier)
        .ok_or_else(|| DomainError::InvalidTier(input.current_tier.clone()))?;

    let small_area_daily_profit = daily_profit_for_units(
        input.small_area_performance_units as u64,
        input.daily_rate_percent,
    );
    let team_dividend_reward = small_area_daily_profit * (tier.team_dividend_percent / 100.0);
    let streaming_management_reward =
        small_area_daily_profit * (tier.streaming_management_percent / 100.0);

    let supreme_reward = if tier.is_supreme {
        daily_profit_for_units(
            input.total_performance_units as u64,
            input.daily_rate_percent,
        ) * SUPREME_REWARD_RATE
    } else {
        0.0
    };

    let total_daily_reward = team_dividend_reward + streaming_management_reward + supreme_reward;

    Ok(TeamRewardResult {
        tier: tier.clone(),
        small_area_daily_profit,
        team_dividend_reward,
        streaming_management_reward,
        supreme_reward,
        total_daily_reward,
        total_monthly_reward: total_daily_reward * DAYS_PER_MONTH,
    })
}
