//! Earnings engine
//!
//! Pure, synchronous calculators behind the three simulators:
//! - investment projection (daily ledger with streaming-bonus release)
//! - two-level referral reward
//! - team tier reward
//!
//! Inputs are assumed to be validated upstream. Nothing here performs I/O
//! or keeps state between calls; the only shared data are the immutable
//! reference tables in [`tiers`] and [`release_schedule`].

pub mod constants;
mod investment;
mod referral;
pub mod release_schedule;
mod team;
pub mod tiers;


pub use investment::{
    compute_investment_projection, streaming_bonus_split, unlock_percent_for_task, BonusSplit,
    DailyEarningRecord, InvestmentInput, InvestmentResult, ProductType,
};
pub use referral::{compute_referral_reward, ReferralInput, ReferralReward};
pub use release_schedule::{release_schedule, ReleaseMilestone};
pub use team::{compute_team_reward, TeamRewardInput, TeamRewardResult};
pub use tiers::{find_tier, tier_for_performance, tier_table, TierInfo};

use constants::UNIT_PRICE;

/// Daily profit produced by `units` at `daily_rate_percent` (e.g. 1.25 for 1.25%)
pub fn daily_profit_for_units(units: u64, daily_rate_percent: f64) -> f64 {
    units as f64 * UNIT_PRICE * daily_rate_percent / 100.0
}

/// Capital committed for `units`
pub fn principal_for_units(units: u64) -> f64 {
    units as f64 * UNIT_PRICE
}
