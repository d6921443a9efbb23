// ============================================================================
// PRICING
// ============================================================================

/// Price of one investment unit in currency units
pub const UNIT_PRICE: f64 = 100.0;

/// Days used to derive a monthly figure from a daily one
pub const DAYS_PER_MONTH: f64 = 30.0;

// ============================================================================
// SHORT-TERM PRODUCT
// ============================================================================

/// Flat return on principal, independent of duration
pub const SHORT_TERM_RETURN_RATE: f64 = 0.05;

pub const SHORT_TERM_DEFAULT_DAYS: u32 = 7;
pub const SHORT_TERM_MIN_DAYS: u32 = 5;
pub const SHORT_TERM_MAX_DAYS: u32 = 10;

// ============================================================================
// LONG-TERM PRODUCT
// ============================================================================

pub const LONG_TERM_DAYS: u32 = 180;

pub const LONG_TERM_DEFAULT_RATE_PERCENT: f64 = 1.0;
pub const LONG_TERM_MIN_RATE_PERCENT: f64 = 1.0;
pub const LONG_TERM_MAX_RATE_PERCENT: f64 = 1.5;

// ============================================================================
// STREAMING BONUS
// ============================================================================

/// Share of the long-term total return paid out as streaming bonus
pub const STREAMING_BONUS_RATE: f64 = 0.4;

/// Bonus is accrued over exactly this many tasks, one per day
pub const TOTAL_TASKS: u32 = 100;

/// Tasks per release cycle
pub const CYCLE_LENGTH: u32 = 20;

/// Fraction of a completed cycle's bonus that becomes claimable
pub const CYCLE_RELEASE_RATE: f64 = 0.5;

// ============================================================================
// REFERRAL & TEAM
// ============================================================================

pub const DIRECT_REFERRAL_RATE: f64 = 0.20;
pub const INDIRECT_REFERRAL_RATE: f64 = 0.10;

/// Supreme tier bonus on the whole team's daily profit
pub const SUPREME_REWARD_RATE: f64 = 0.05;
