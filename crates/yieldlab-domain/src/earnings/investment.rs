use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::constants::*;
use super::principal_for_units;
use crate::shared::DomainError;

/// Investment product enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[serde(alias = "SHORT", alias = "Short")]
    Short,
    #[serde(alias = "LONG", alias = "Long")]
    Long,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Short => "short",
            ProductType::Long => "long",
        }
    }
}

impl FromStr for ProductType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(ProductType::Short),
            "long" => Ok(ProductType::Long),
            _ => Err(DomainError::InvalidInput(format!(
                "Invalid product type: {s}. Must be 'short' or 'long'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentInput {
    pub unit_count: u32,
    pub product_type: ProductType,
    /// Only read for short-term products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    /// Only read for long-term products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rate_percent: Option<f64>,
}

impl InvestmentInput {
    pub fn short(unit_count: u32, duration_days: Option<u32>) -> Self {
        Self {
            unit_count,
            product_type: ProductType::Short,
            duration_days,
            daily_rate_percent: None,
        }
    }

    pub fn long(unit_count: u32, daily_rate_percent: Option<f64>) -> Self {
        Self {
            unit_count,
            product_type: ProductType::Long,
            duration_days: None,
            daily_rate_percent,
        }
    }

    pub fn principal(&self) -> f64 {
        principal_for_units(self.unit_count as u64)
    }

    pub fn effective_duration_days(&self) -> u32 {
        self.duration_days.unwrap_or(SHORT_TERM_DEFAULT_DAYS)
    }

    pub fn effective_daily_rate_percent(&self) -> f64 {
        self.daily_rate_percent
            .unwrap_or(LONG_TERM_DEFAULT_RATE_PERCENT)
    }
}

/// One simulated day of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEarningRecord {
    pub day: u32,
    /// Streaming-bonus task reached on this day, capped at 100
    pub task_index: u32,
    pub daily_profit: f64,
    /// Bonus accrued on this day alone
    pub streaming_bonus_accrued: f64,
    /// Bonus accrued through `task_index`
    pub accumulated_bonus: f64,
    /// Display annotation, see [`unlock_percent_for_task`]
    pub unlock_percent: f64,
    pub claimable_amount: f64,
    pub locked_amount: f64,
    pub cumulative_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    pub principal: f64,
    pub total_days: u32,
    pub daily_return: f64,
    pub monthly_return: f64,
    pub total_return: f64,
    pub total_streaming_bonus: f64,
    pub daily_streaming_bonus: f64,
    pub bonus_per_task: f64,
    pub total_with_capital: f64,
    pub daily_records: Vec<DailyEarningRecord>,
}

/// Claimable/locked split of the streaming bonus at a given task
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusSplit {
    pub accumulated: f64,
    pub claimable: f64,
    pub locked: f64,
}

/// Split of the bonus accrued through `task_index`.
///
/// Every completed 20-task cycle releases half of that cycle's bonus for good;
/// the rest stays locked until task 100 releases everything. Between release
/// points the claimable part is frozen while the locked part keeps growing.
pub fn streaming_bonus_split(bonus_per_task: f64, task_index: u32) -> BonusSplit {
    let task_index = task_index.min(TOTAL_TASKS);
    let accumulated = bonus_per_task * task_index as f64;

    if task_index == TOTAL_TASKS {
        return BonusSplit {
            accumulated,
            claimable: accumulated,
            locked: 0.0,
        };
    }

    let completed_cycles = task_index / CYCLE_LENGTH;
    let cycle_bonus = bonus_per_task * CYCLE_LENGTH as f64;
    let claimable = completed_cycles as f64 * cycle_bonus * CYCLE_RELEASE_RATE;

    BonusSplit {
        accumulated,
        claimable,
        locked: accumulated - claimable,
    }
}

/// Unlock percentage shown next to a task.
///
/// Flat 50% for every task from 20 up to 99, regardless of how many cycles
/// have completed. The cumulative split in [`streaming_bonus_split`] is what
/// actually moves money.
pub fn unlock_percent_for_task(task_index: u32) -> f64 {
    if task_index >= TOTAL_TASKS {
        100.0
    } else if task_index >= CYCLE_LENGTH {
        CYCLE_RELEASE_RATE * 100.0
    } else {
        0.0
    }
}

pub fn compute_investment_projection(input: &InvestmentInput) -> InvestmentResult {
    let principal = input.principal();

    match input.product_type {
        ProductType::Short => project_short_term(principal, input.effective_duration_days()),
        ProductType::Long => project_long_term(
            principal,
            input.effective_daily_rate_percent(),
            LONG_TERM_DAYS,
        ),
    }
}

fn project_short_term(principal: f64, total_days: u32) -> InvestmentResult {
    let total_return = principal * SHORT_TERM_RETURN_RATE;
    let daily_return = total_return / total_days as f64;

    let mut cumulative_profit = 0.0;
    let daily_records = (1..=total_days)
        .map(|day| {
            cumulative_profit += daily_return;
            DailyEarningRecord {
                day,
                task_index: day.min(TOTAL_TASKS),
                daily_profit: daily_return,
                streaming_bonus_accrued: 0.0,
                accumulated_bonus: 0.0,
                unlock_percent: 0.0,
                claimable_amount: 0.0,
                locked_amount: 0.0,
                cumulative_profit,
            }
        })
        .collect();

    InvestmentResult {
        principal,
        total_days,
        daily_return,
        monthly_return: daily_return * DAYS_PER_MONTH,
        total_return,
        total_streaming_bonus: 0.0,
        daily_streaming_bonus: 0.0,
        bonus_per_task: 0.0,
        total_with_capital: principal + total_return,
        daily_records,
    }
}

/// Long-term projection over `total_days`.
///
/// When `total_days` is below the task count, zero-profit records are appended
/// so the bonus ledger still runs through task 100.
pub(crate) fn project_long_term(
    principal: f64,
    daily_rate_percent: f64,
    total_days: u32,
) -> InvestmentResult {
    let daily_return = principal * daily_rate_percent / 100.0;
    let total_return = daily_return * total_days as f64;
    let total_streaming_bonus = total_return * STREAMING_BONUS_RATE;
    let bonus_per_task = total_streaming_bonus / TOTAL_TASKS as f64;

    let record_count = total_days.max(TOTAL_TASKS);
    let mut daily_records = Vec::with_capacity(record_count as usize);
    let mut cumulative_profit = 0.0;

    for day in 1..=record_count {
        let daily_profit = if day <= total_days { daily_return } else { 0.0 };
        cumulative_profit += daily_profit;

        let task_index = day.min(TOTAL_TASKS);
        let split = streaming_bonus_split(bonus_per_task, task_index);

        daily_records.push(DailyEarningRecord {
            day,
            task_index,
            daily_profit,
            streaming_bonus_accrued: if day <= TOTAL_TASKS {
                bonus_per_task
            } else {
                0.0
            },
            accumulated_bonus: split.accumulated,
            unlock_percent: unlock_percent_for_task(task_index),
            claimable_amount: split.claimable,
            locked_amount: split.locked,
            cumulative_profit,
        });
    }

    InvestmentResult {
        principal,
        total_days,
        daily_return,
        monthly_return: daily_return * DAYS_PER_MONTH,
        total_return,
        total_streaming_bonus,
        daily_streaming_bonus: bonus_per_task,
        bonus_per_task,
        total_with_capital: principal + total_return,
        daily_records,
    }
}
