use daybook_protocol::SentimentStat;

/// Slope applied to the score before squashing. Steep enough that anything
/// but near-neutral polarity lands close to +/-1.
pub const STEEPNESS: f64 = 10.0;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Collapses a (score, magnitude) pair into one signed emotional weight.
///
/// The score is pushed through a steep logistic curve and recentered onto
/// [-1, 1], then scaled by magnitude, so intensity dominates the ranking and
/// small polarity differences at the extremes barely matter.
///
/// Expects `-1 <= score <= 1` and `magnitude >= 0`; values outside that range
/// are not clamped.
pub fn combine(score: f64, magnitude: f64) -> f64 {
    (sigmoid(score * STEEPNESS) - 0.5) * 2.0 * magnitude
}

pub fn combine_stat(stat: &SentimentStat) -> f64 {
    combine(stat.score, stat.magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_neutral_score_has_no_weight() {
        assert_eq!(combine(0.0, 5.0), 0.0);
        assert_eq!(combine(0.7, 0.0), 0.0);
    }

    #[test]
    fn test_strong_negative_is_near_full_magnitude() {
        let weight = combine(-0.9, 3.0);
        assert!((weight - (-2.9996)).abs() < 1e-3, "got {weight}");
        assert!(weight < -2.0);
    }

    #[test]
    fn test_sign_follows_score() {
        assert!(combine(0.2, 1.0) > 0.0);
        assert!(combine(-0.2, 1.0) < 0.0);
        assert!((combine(0.3, 2.0) + combine(-0.3, 2.0)).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn test_monotonic_in_score(
            low in -1.0f64..0.999,
            step in 0.001f64..1.0,
            magnitude in 0.01f64..100.0,
        ) {
            let high = (low + step).min(1.0);
            prop_assume!(high > low);
            prop_assert!(combine(low, magnitude) < combine(high, magnitude));
        }

        #[test]
        fn test_bounded_by_magnitude(score in -1.0f64..=1.0, magnitude in 0.0f64..1000.0) {
            let weight = combine(score, magnitude);
            prop_assert!(weight.abs() <= magnitude);
            prop_assert_eq!(weight, combine_stat(&SentimentStat::new(score, magnitude)));
        }
    }
}
