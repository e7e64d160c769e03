//! Synthetic risk-history series for the detail chart.
//!
//! The monitor keeps no real history, so opening the detail view fabricates a
//! trailing 48-hour series around the patient's current risk value: one point
//! per hour, oldest first, ending at "now". Unlike the live vitals walk, the
//! series is clamped to the chart's fixed 0–100 axis.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of hourly points in a generated series.
pub const HISTORY_POINTS: usize = 48;

/// Total jitter range around the current risk value (±5).
pub const HISTORY_JITTER_RANGE: f64 = 10.0;

/// One sample of the synthetic risk series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPoint {
    pub timestamp: DateTime<Utc>,
    /// Risk percentage, clamped to [0, 100].
    pub value: f64,
}

/// Generate the trailing 48-hour series for `current_risk`.
///
/// Timestamps are spaced exactly one hour apart, oldest first, with the last
/// point at `now`. Each value is an independent draw
/// `clamp(current_risk + (U(0,1) - 0.5) * 10, 0, 100)` — a fresh series is
/// produced on every call and never kept in sync with the live roster.
pub fn risk_history(current_risk: f64, now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<RiskPoint> {
    (0..HISTORY_POINTS)
        .map(|i| {
            let hours_back = (HISTORY_POINTS - 1 - i) as i64;
            RiskPoint {
                timestamp: now - Duration::hours(hours_back),
                value: (current_risk + (rng.gen::<f64>() - 0.5) * HISTORY_JITTER_RANGE)
                    .clamp(0.0, 100.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn series_has_forty_eight_hourly_points_ending_now() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(11);

        let series = risk_history(68.0, now, &mut rng);

        assert_eq!(series.len(), HISTORY_POINTS);
        assert_eq!(series.last().unwrap().timestamp, now);
        for pair in series.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::hours(1));
        }
    }

    #[test]
    fn values_stay_within_chart_axis() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(5);

        for risk in [0.0, 12.0, 68.0, 100.0] {
            let series = risk_history(risk, now, &mut rng);
            for point in &series {
                assert!(point.value >= 0.0 && point.value <= 100.0);
            }
        }
    }

    #[test]
    fn low_risk_clamps_at_zero() {
        // Every draw pinned near 0.0 subtracts the full 5.0 jitter.
        let mut rng = StepRng::new(0, 0);
        let series = risk_history(0.0, Utc::now(), &mut rng);

        assert!(series.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn high_risk_clamps_at_one_hundred() {
        // Every draw pinned near 1.0 adds the full 5.0 jitter.
        let mut rng = StepRng::new(u64::MAX, 0);
        let series = risk_history(100.0, Utc::now(), &mut rng);

        assert!(series.iter().all(|p| p.value == 100.0));
    }

    #[test]
    fn values_jitter_around_the_current_risk() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(23);

        let series = risk_history(50.0, now, &mut rng);
        for point in &series {
            assert!((point.value - 50.0).abs() <= HISTORY_JITTER_RANGE / 2.0);
        }
    }
}
