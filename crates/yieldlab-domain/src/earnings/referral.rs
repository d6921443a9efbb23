use serde::{Deserialize, Serialize};

use super::constants::{DAYS_PER_MONTH, DIRECT_REFERRAL_RATE, INDIRECT_REFERRAL_RATE};
use super::daily_profit_for_units;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralInput {
    /// Units held by directly referred members
    pub downline_unit_count: u32,
    /// Units held by members referred by the direct downline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_level_unit_count: Option<u32>,
    pub daily_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralReward {
    pub direct_daily_reward: f64,
    pub indirect_daily_reward: f64,
    pub direct_monthly_reward: f64,
    pub indirect_monthly_reward: f64,
    pub total_daily_reward: f64,
    pub total_monthly_reward: f64,
}

/// Two-level referral reward: 20% of the direct downline's daily profit plus
/// 10% of the second level's.
pub fn compute_referral_reward(input: &ReferralInput) -> ReferralReward {
    let direct_daily_reward =
        daily_profit_for_units(input.downline_unit_count as u64, input.daily_rate_percent)
            * DIRECT_REFERRAL_RATE;

    let indirect_daily_reward = match input.second_level_unit_count {
        Some(units) if units > 0 => {
            daily_profit_for_units(units as u64, input.daily_rate_percent)
                * INDIRECT_REFERRAL_RATE
        }
        _ => 0.0,
    };

    let total_daily_reward = direct_daily_reward + indirect_daily_reward;

    ReferralReward {
        direct_daily_reward,
        indirect_daily_reward,
        direct_monthly_reward: direct_daily_reward * DAYS_PER_MONTH,
        indirect_monthly_reward: indirect_daily_reward * DAYS_PER_MONTH,
        total_daily_reward,
        total_monthly_reward: total_daily_reward * DAYS_PER_MONTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_only() {
        let reward = compute_referral_reward(&ReferralInput {
            downline_unit_count: 10,
            second_level_unit_count: None,
            daily_rate_percent: 1.25,
        });

        assert!((reward.direct_daily_reward - 2.5).abs() < 1e-9);
        assert_eq!(reward.indirect_daily_reward, 0.0);
        assert!((reward.total_daily_reward - 2.5).abs() < 1e-9);
        assert!((reward.total_monthly_reward - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_second_level_pays_nothing() {
        let reward = compute_referral_reward(&ReferralInput {
            downline_unit_count: 10,
            second_level_unit_count: Some(0),
            daily_rate_percent: 1.25,
        });
        assert_eq!(reward.indirect_daily_reward, 0.0);
    }

    #[test]
    fn test_direct_is_twice_indirect_for_equal_volume() {
        for (units, rate) in [(1, 1.0), (10, 1.25), (250, 1.5), (7, 1.1)] {
            let reward = compute_referral_reward(&ReferralInput {
                downline_unit_count: units,
                second_level_unit_count: Some(units),
                daily_rate_percent: rate,
            });
            let ratio = reward.direct_daily_reward / reward.indirect_daily_reward;
            assert!((ratio - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_totals_aggregate_both_levels() {
        let reward = compute_referral_reward(&ReferralInput {
            downline_unit_count: 20,
            second_level_unit_count: Some(50),
            daily_rate_percent: 1.0,
        });

        // 2000 * 1% * 20% = 4, 5000 * 1% * 10% = 5
        assert!((reward.direct_daily_reward - 4.0).abs() < 1e-9);
        assert!((reward.indirect_daily_reward - 5.0).abs() < 1e-9);
        assert!((reward.total_daily_reward - 9.0).abs() < 1e-9);
        assert!((reward.total_monthly_reward - 270.0).abs() < 1e-9);
        assert!((reward.indirect_monthly_reward - 150.0).abs() < 1e-9);
    }
}
