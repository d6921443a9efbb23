use yieldlab_domain::earnings::constants::{
    LONG_TERM_MAX_RATE_PERCENT, LONG_TERM_MIN_RATE_PERCENT, SHORT_TERM_MAX_DAYS,
    SHORT_TERM_MIN_DAYS,
};
use yieldlab_domain::earnings::{InvestmentInput, ProductType, ReferralInput, TeamRewardInput};
use yieldlab_domain::shared::DomainError;

pub const MAX_SCENARIO_NAME_LEN: usize = 100;
pub const MAX_SCENARIO_NOTES_LEN: usize = 500;

fn invalid(message: impl Into<String>) -> DomainError {
    DomainError::Validation(message.into())
}

pub fn validate_investment_input(input: &InvestmentInput) -> Result<(), DomainError> {
    if input.unit_count < 1 {
        return Err(invalid("Unit count must be at least 1"));
    }

    match input.product_type {
        ProductType::Short => {
            if let Some(days) = input.duration_days {
                if !(SHORT_TERM_MIN_DAYS..=SHORT_TERM_MAX_DAYS).contains(&days) {
                    return Err(invalid(format!(
                        "Short-term duration must be between {} and {} days, got {}",
                        SHORT_TERM_MIN_DAYS, SHORT_TERM_MAX_DAYS, days
                    )));
                }
            }
        }
        ProductType::Long => {
            if let Some(rate) = input.daily_rate_percent {
                if !rate.is_finite()
                    || !(LONG_TERM_MIN_RATE_PERCENT..=LONG_TERM_MAX_RATE_PERCENT).contains(&rate)
                {
                    return Err(invalid(format!(
                        "Long-term daily rate must be between {}% and {}%, got {}",
                        LONG_TERM_MIN_RATE_PERCENT, LONG_TERM_MAX_RATE_PERCENT, rate
                    )));
                }
            }
        }
    }

    Ok(())
}

fn validate_rate(rate: f64) -> Result<(), DomainError> {
    if !rate.is_finite() || rate <= 0.0 || rate > 100.0 {
        return Err(invalid(format!(
            "Daily rate must be greater than 0% and at most 100%, got {}",
            rate
        )));
    }
    Ok(())
}

pub fn validate_referral_input(input: &ReferralInput) -> Result<(), DomainError> {
    validate_rate(input.daily_rate_percent)
}

/// Tier names are checked by the engine itself
pub fn validate_team_input(input: &TeamRewardInput) -> Result<(), DomainError> {
    validate_rate(input.daily_rate_percent)
}

/// Returns the trimmed name
pub fn validate_scenario_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(invalid("Scenario name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_SCENARIO_NAME_LEN {
        return Err(invalid(format!(
            "Scenario name cannot exceed {} characters",
            MAX_SCENARIO_NAME_LEN
        )));
    }
    Ok(trimmed.to_string())
}

pub fn validate_scenario_notes(notes: Option<&str>) -> Result<(), DomainError> {
    match notes {
        Some(n) if n.chars().count() > MAX_SCENARIO_NOTES_LEN => Err(invalid(format!(
            "Scenario notes cannot exceed {} characters",
            MAX_SCENARIO_NOTES_LEN
        ))),
        _ => Ok(()),
    }
}
