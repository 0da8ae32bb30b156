//! Synthetic visibility trend for reports.

use std::f64::consts::PI;

use brightrank_core::VisibilityPoint;
use rand::Rng;

/// Build `points` weekly scores that drift toward `current_score`.
///
/// The series starts somewhere in `10..=90` around the current score, moves
/// linearly toward it, and wobbles by up to ±7.5 in the middle of the range
/// (weighted by `sin(progress·π)`, so the ends stay on the line). Scores are
/// clamped to `0..=100` and rounded. Labels run `Week 1`, `Week 2`, …, with
/// the last point labelled `Current` and set to exactly `current_score`.
pub fn generate_visibility_trend<R: Rng + ?Sized>(
    current_score: u32,
    points: usize,
    rng: &mut R,
) -> Vec<VisibilityPoint> {
    if points == 0 {
        return Vec::new();
    }

    let current = f64::from(current_score);
    let start = (current + (rng.random::<f64>() - 0.6) * 40.0).clamp(10.0, 90.0);
    #[allow(clippy::cast_precision_loss)]
    let span = (points - 1).max(1) as f64;

    let mut trend: Vec<VisibilityPoint> = (0..points)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let progress = i as f64 / span;
            let baseline = start + (current - start) * progress;
            let fluctuation = (rng.random::<f64>() - 0.5) * 15.0 * (progress * PI).sin();
            let date = if i == points - 1 {
                "Current".to_string()
            } else {
                format!("Week {}", i + 1)
            };
            // Clamped to 0..=100 above.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let score = (baseline + fluctuation).clamp(0.0, 100.0).round() as u32;
            VisibilityPoint { date, score }
        })
        .collect();

    if let Some(last) = trend.last_mut() {
        last.score = current_score;
    }
    trend
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn labels_weeks_and_ends_on_current() {
        let mut rng = StdRng::seed_from_u64(1);
        let trend = generate_visibility_trend(72, 7, &mut rng);
        let labels: Vec<&str> = trend.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Week 1", "Week 2", "Week 3", "Week 4", "Week 5", "Week 6", "Current"]
        );
        assert_eq!(trend[6].score, 72);
    }

    #[test]
    fn first_point_lies_in_start_band() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let trend = generate_visibility_trend(50, 7, &mut rng);
            // sin(0) = 0, so the first point is the clamped start score.
            assert!((10..=90).contains(&trend[0].score), "seed {seed}: {trend:?}");
        }
    }

    #[test]
    fn scores_stay_within_bounds() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            for current in [0, 5, 95, 100] {
                let trend = generate_visibility_trend(current, 7, &mut rng);
                assert!(trend.iter().all(|p| p.score <= 100));
                assert_eq!(trend.last().unwrap().score, current);
            }
        }
    }

    #[test]
    fn unclamped_current_score_is_kept_verbatim() {
        let mut rng = StdRng::seed_from_u64(3);
        let trend = generate_visibility_trend(140, 4, &mut rng);
        assert_eq!(trend.last().unwrap().score, 140);
        assert!(trend[..3].iter().all(|p| p.score <= 100));
    }

    #[test]
    fn degenerate_lengths() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(generate_visibility_trend(60, 0, &mut rng).is_empty());
        let single = generate_visibility_trend(60, 1, &mut rng);
        assert_eq!(
            single,
            vec![VisibilityPoint {
                date: "Current".to_string(),
                score: 60
            }]
        );
    }
}
