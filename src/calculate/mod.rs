//! Scoring calculation engine.
//!
//! Computes derived metrics for one match:
//! - Team totals and per-member averages
//! - Each player's deviation from their team average
//! - Clamped gain components and the final LP delta

pub mod gain;
pub mod team;

pub use gain::*;
pub use team::*;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{PlayerRecord, RelativePerformance, TeamAggregate};

/// Round to two decimal places, half away from zero.
///
/// Rounds the exact decimal value of the float, so `0.075` (stored as
/// 0.07499999...) becomes `0.07`. Values outside the decimal range are
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let scaled = rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32);
    unsigned_zero(scaled)
}

/// Proportional distance of `value` from `average`, rounded to two decimals.
///
/// A zero average yields a deviation of zero.
pub fn relative_deviation(value: f64, average: f64) -> f64 {
    if average == 0.0 {
        0.0
    } else {
        round2((value - average) / average)
    }
}

/// Compare a player against their own team's averages.
pub fn relative_performance(player: &PlayerRecord, team: &TeamAggregate) -> RelativePerformance {
    RelativePerformance {
        kp: relative_deviation(player.kp as f64, team.avg_kp),
        deaths: relative_deviation(player.deaths as f64, team.avg_deaths),
        damage_done: relative_deviation(player.damage_done as f64, team.avg_damage_done),
        damage_taken: relative_deviation(player.damage_taken as f64, team.avg_damage_taken),
        healed: relative_deviation(player.healed as f64, team.avg_healed),
    }
}

/// Serialized output never shows `-0.0`.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
