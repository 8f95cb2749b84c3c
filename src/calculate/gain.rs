//! Gain scoring: relative deviations to a bounded LP delta.

use crate::models::{GainBreakdown, RelativePerformance};

use super::round2;

/// Lower bound of every gain component.
pub const GAIN_FLOOR: f64 = -4.0;

/// Upper bound of every gain component.
pub const GAIN_CEILING: f64 = 4.0;

/// Fixed multiplier applied to a deviation before weighting.
pub const GAIN_MULTIPLIER: f64 = 10.0;

/// Base LP for winning (negated for a loss).
pub const WIN_LP: f64 = 10.0;

pub const KP_WEIGHT: f64 = 2.0;
pub const DEATHS_WEIGHT: f64 = -1.0;
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Two-sided clamp.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp to `[GAIN_FLOOR, GAIN_CEILING]`.
pub fn clamp_gain(value: f64) -> f64 {
    clamp(value, GAIN_FLOOR, GAIN_CEILING)
}

/// `clamp(round2(ratio * 10) * weight)`.
///
/// `scale` is accepted for call-site compatibility but the multiplier is
/// always [`GAIN_MULTIPLIER`]; scoring outcomes depend on that.
pub fn scaled_gain(ratio: f64, _scale: f64, weight: f64) -> f64 {
    let gain = clamp_gain(round2(ratio * GAIN_MULTIPLIER) * weight);
    if gain == 0.0 {
        0.0
    } else {
        gain
    }
}

/// Weighted gain components for one player.
pub fn score_gains(relative: &RelativePerformance) -> GainBreakdown {
    GainBreakdown {
        kp: scaled_gain(relative.kp, GAIN_MULTIPLIER, KP_WEIGHT),
        deaths: scaled_gain(relative.deaths, GAIN_MULTIPLIER, DEATHS_WEIGHT),
        damage_done: scaled_gain(relative.damage_done, GAIN_MULTIPLIER, DEFAULT_WEIGHT),
        damage_taken: scaled_gain(relative.damage_taken, GAIN_MULTIPLIER, DEFAULT_WEIGHT),
        healed: scaled_gain(relative.healed, GAIN_MULTIPLIER, DEFAULT_WEIGHT),
    }
}

/// Final LP delta: win/loss base, KP and deaths gains, plus the best
/// single combat component.
pub fn lp_gain(win: bool, gains: &GainBreakdown) -> f64 {
    let base = if win { WIN_LP } else { -WIN_LP };
    round2(base + gains.kp + gains.deaths + gains.best_combat_gain())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-7.5, -4.0, 4.0), -4.0);
        assert_eq!(clamp(9.0, -4.0, 4.0), 4.0);
        assert_eq!(clamp(1.5, -4.0, 4.0), 1.5);
        assert_eq!(clamp(-4.0, -4.0, 4.0), -4.0);
    }

    #[test]
    fn test_scaled_gain_default_weight() {
        assert_eq!(scaled_gain(0.25, 10.0, 1.0), 2.5);
        assert_eq!(scaled_gain(-0.13, 10.0, 1.0), -1.3);
        assert_eq!(scaled_gain(0.0, 10.0, 1.0), 0.0);
    }

    #[test]
    fn test_scaled_gain_ignores_scale() {
        assert_eq!(scaled_gain(0.2, 100.0, 1.0), scaled_gain(0.2, 10.0, 1.0));
        assert_eq!(scaled_gain(0.2, 0.0, 1.0), 2.0);
    }

    #[test]
    fn test_scaled_gain_below_midpoint_kp() {
        // Player KP 43 against a team average of 40
        let relative = crate::calculate::relative_deviation(43.0, 40.0);
        assert_eq!(scaled_gain(relative, 10.0, KP_WEIGHT), 1.4);
    }

    #[test]
    fn test_scaled_gain_clamped() {
        assert_eq!(scaled_gain(1.0, 10.0, KP_WEIGHT), 4.0);
        assert_eq!(scaled_gain(-0.9, 10.0, 1.0), -4.0);
    }

    #[test]
    fn test_deaths_weight_negates() {
        // Dying more than the team average costs LP
        assert_eq!(scaled_gain(0.2, 10.0, DEATHS_WEIGHT), -2.0);
        assert_eq!(scaled_gain(-0.3, 10.0, DEATHS_WEIGHT), 3.0);
        assert_eq!(scaled_gain(0.5, 10.0, DEATHS_WEIGHT), -4.0);
    }

    #[test]
    fn test_scaled_gain_no_negative_zero() {
        assert!(scaled_gain(0.0, 10.0, DEATHS_WEIGHT).is_sign_positive());
    }

    #[test]
    fn test_score_gains() {
        let relative = RelativePerformance {
            kp: 0.1,
            deaths: 0.1,
            damage_done: 0.2,
            damage_taken: -0.1,
            healed: 0.3,
        };

        let gains = score_gains(&relative);

        assert_eq!(gains.kp, 2.0);
        assert_eq!(gains.deaths, -1.0);
        assert_eq!(gains.damage_done, 2.0);
        assert_eq!(gains.damage_taken, -1.0);
        assert_eq!(gains.healed, 3.0);
    }

    #[test]
    fn test_lp_gain_counts_only_best_combat_component() {
        let gains = GainBreakdown {
            kp: 2.0,
            deaths: -1.0,
            damage_done: 2.0,
            damage_taken: -1.0,
            healed: 3.0,
        };
        assert_eq!(lp_gain(true, &gains), 14.0);
        assert_eq!(lp_gain(false, &gains), -6.0);
    }

    #[test]
    fn test_lp_gain_neutral() {
        let gains = GainBreakdown::default();
        assert_eq!(lp_gain(true, &gains), 10.0);
        assert_eq!(lp_gain(false, &gains), -10.0);
    }

    #[test]
    fn test_lp_gain_rounded() {
        let gains = GainBreakdown {
            kp: 0.1,
            deaths: 0.2,
            ..Default::default()
        };
        assert_eq!(lp_gain(true, &gains), 10.3);
    }

    #[test]
    fn test_lp_gain_bounds() {
        let best = GainBreakdown {
            kp: 4.0,
            deaths: 4.0,
            damage_done: 4.0,
            damage_taken: 4.0,
            healed: 4.0,
        };
        let worst = GainBreakdown {
            kp: -4.0,
            deaths: -4.0,
            damage_done: -4.0,
            damage_taken: -4.0,
            healed: -4.0,
        };
        assert_eq!(lp_gain(true, &best), 22.0);
        assert_eq!(lp_gain(false, &worst), -22.0);
    }

    proptest! {
        #[test]
        fn test_clamp_idempotent(x in -1e6f64..1e6) {
            let once = clamp_gain(x);
            prop_assert_eq!(clamp_gain(once), once);
            prop_assert!((GAIN_FLOOR..=GAIN_CEILING).contains(&once));
        }

        #[test]
        fn test_clamp_identity_in_range(x in -4.0f64..=4.0) {
            prop_assert_eq!(clamp_gain(x), x);
        }

        #[test]
        fn test_scaled_gain_pure(ratio in -10.0f64..10.0, weight in -2.0f64..2.0) {
            prop_assert_eq!(
                scaled_gain(ratio, GAIN_MULTIPLIER, weight).to_bits(),
                scaled_gain(ratio, GAIN_MULTIPLIER, weight).to_bits()
            );
        }

        #[test]
        fn test_lp_gain_pure_and_bounded(
            win in any::<bool>(),
            kp in -1.0f64..1.0,
            deaths in -1.0f64..1.0,
            damage in -1.0f64..1.0,
        ) {
            let gains = score_gains(&RelativePerformance {
                kp,
                deaths,
                damage_done: damage,
                damage_taken: damage,
                healed: damage,
            });
            let first = lp_gain(win, &gains);
            prop_assert_eq!(first.to_bits(), lp_gain(win, &gains).to_bits());
            prop_assert!(first.abs() <= WIN_LP + 3.0 * GAIN_CEILING);
        }
    }
}
