#[cfg(test)]
mod tests {
    use avoidance_core::assessment::{RiskFactors, Trajectory, TrajectorySample};
    use avoidance_core::config::PredictionConfig;
    use avoidance_core::enums::RiskLevel;
    use avoidance_core::error::AvoidanceError;
    use avoidance_core::types::{TrackState, Vector3};

    use crate::collision::CollisionRiskAssessor;
    use crate::separation::{analyze, find_minimum};
    use crate::trajectory::TrajectoryPredictor;

    fn track(position: (f64, f64, f64), velocity: (f64, f64, f64)) -> TrackState {
        TrackState::new(
            Vector3::new(position.0, position.1, position.2),
            Vector3::new(velocity.0, velocity.1, velocity.2),
            1.0,
        )
    }

    fn stationary_trajectory(distances: &[f64]) -> Trajectory {
        let samples = distances
            .iter()
            .enumerate()
            .map(|(i, d)| TrajectorySample {
                position: Vector3::new(*d, 0.0, 0.0),
                velocity: Vector3::ZERO,
                time_offset: i as f64,
                confidence: 1.0,
                risk_factors: RiskFactors::default(),
            })
            .collect();
        Trajectory::new(samples, 1.0)
    }

    // ---- TrajectoryPredictor ----

    #[test]
    fn test_predict_sample_count_and_spacing() {
        let predictor = TrajectoryPredictor::default();
        let traj = predictor
            .predict(Vector3::ZERO, Vector3::new(100.0, 0.0, 0.0), 60.0, 60, 1.0)
            .unwrap();
        assert_eq!(traj.len(), 60);
        assert!((traj.time_step() - 1.0).abs() < 1e-12);
        for (i, s) in traj.samples().iter().enumerate() {
            assert!((s.time_offset - i as f64).abs() < 1e-9);
            assert!((s.position.x - 100.0 * (i + 1) as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn test_position_advances_before_first_sample() {
        let predictor = TrajectoryPredictor::default();
        let traj = predictor
            .predict(
                Vector3::new(0.0, 0.0, 1_000.0),
                Vector3::new(0.0, 50.0, -10.0),
                60.0,
                60,
                1.0,
            )
            .unwrap();
        let first = traj.samples()[0];
        assert_eq!(first.time_offset, 0.0);
        assert!((first.position.y - 50.0).abs() < 1e-9);
        assert!((first.position.z - 990.0).abs() < 1e-9);

        // The last sample sits at the horizon end
        let last = traj.samples()[59];
        assert!((last.time_offset - 59.0).abs() < 1e-9);
        assert!((last.position.y - 3_000.0).abs() < 1e-6);
        assert!((last.position.z - 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_overflowing_trajectory_rejected() {
        let predictor = TrajectoryPredictor::default();
        let result = predictor.predict(
            Vector3::ZERO,
            Vector3::new(1e307, 0.0, 0.0),
            60.0,
            60,
            1.0,
        );
        assert_eq!(
            result,
            Err(AvoidanceError::NumericDegeneracy { field: "trajectory" })
        );
    }

    #[test]
    fn test_predict_rejects_bad_arguments() {
        let predictor = TrajectoryPredictor::default();
        assert!(matches!(
            predictor.predict(Vector3::ZERO, Vector3::ZERO, 60.0, 0, 1.0),
            Err(AvoidanceError::InvalidArgument(_))
        ));
        assert!(matches!(
            predictor.predict(Vector3::ZERO, Vector3::ZERO, 0.0, 60, 1.0),
            Err(AvoidanceError::InvalidArgument(_))
        ));
        assert!(matches!(
            predictor.predict(Vector3::ZERO, Vector3::ZERO, -1.0, 60, 1.0),
            Err(AvoidanceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_confidence_decays_linearly() {
        let predictor = TrajectoryPredictor::default();
        let traj = predictor
            .predict(Vector3::ZERO, Vector3::ZERO, 60.0, 60, 0.8)
            .unwrap();
        let samples = traj.samples();
        assert!((samples[0].confidence - 0.8).abs() < 1e-12);
        assert!((samples[30].confidence - 0.4).abs() < 1e-12);
        for pair in samples.windows(2) {
            assert!(pair[1].confidence <= pair[0].confidence);
            assert!(pair[1].confidence >= 0.0);
        }
    }

    #[test]
    fn test_initial_confidence_clamped() {
        let predictor = TrajectoryPredictor::default();
        let traj = predictor
            .predict(Vector3::ZERO, Vector3::ZERO, 10.0, 5, 3.0)
            .unwrap();
        assert_eq!(traj.samples()[0].confidence, 1.0);
    }

    #[test]
    fn test_risk_factors_clamped() {
        let predictor = TrajectoryPredictor::default();

        // Above the altitude norm and far away: both factors bottom out at 0
        let traj = predictor
            .predict(
                Vector3::new(10_000.0, 0.0, 60_000.0),
                Vector3::new(900.0, 0.0, 0.0),
                60.0,
                60,
                1.0,
            )
            .unwrap();
        for s in traj.samples() {
            let f = s.risk_factors;
            assert_eq!(f.speed, 1.0);
            assert_eq!(f.altitude, 0.0);
            assert_eq!(f.proximity, 0.0);
        }

        // Below sea level at the origin with zero velocity
        let traj = predictor
            .predict(Vector3::new(0.0, 0.0, -100.0), Vector3::ZERO, 60.0, 1, 1.0)
            .unwrap();
        let f = traj.samples()[0].risk_factors;
        assert_eq!(f.speed, 0.0);
        assert_eq!(f.altitude, 1.0);
        assert!((f.proximity - (1.0 - 100.0 / 5000.0)).abs() < 1e-12);
    }

    #[test]
    fn test_risk_factor_values() {
        let predictor = TrajectoryPredictor::default();
        let traj = predictor
            .predict(
                Vector3::new(0.0, 0.0, 25_000.0),
                Vector3::new(200.0, 0.0, 0.0),
                60.0,
                60,
                1.0,
            )
            .unwrap();
        let f = traj.samples()[0].risk_factors;
        assert!((f.speed - 0.5).abs() < 1e-12);
        assert!((f.altitude - 0.5).abs() < 1e-12);
        assert_eq!(f.proximity, 0.0);
    }

    #[test]
    fn test_custom_prediction_config() {
        let predictor = TrajectoryPredictor::new(PredictionConfig {
            horizon_secs: 30.0,
            steps: 15,
            ..Default::default()
        });
        let traj = predictor
            .predict_track(&track((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)))
            .unwrap();
        assert_eq!(traj.len(), 15);
        assert!((traj.time_step() - 2.0).abs() < 1e-12);
    }

    // ---- SeparationAnalyzer ----

    #[test]
    fn test_analyze_rejects_length_mismatch() {
        let a = stationary_trajectory(&[1.0, 2.0, 3.0]);
        let b = stationary_trajectory(&[1.0, 2.0]);
        assert!(matches!(
            analyze(&a, &b),
            Err(AvoidanceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_analyze_rejects_time_misalignment() {
        let predictor = TrajectoryPredictor::default();
        let a = predictor
            .predict(Vector3::ZERO, Vector3::ZERO, 60.0, 10, 1.0)
            .unwrap();
        let b = predictor
            .predict(Vector3::ZERO, Vector3::ZERO, 30.0, 10, 1.0)
            .unwrap();
        assert!(matches!(
            analyze(&a, &b),
            Err(AvoidanceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_analyze_combines_factors_and_confidence() {
        let predictor = TrajectoryPredictor::default();
        let a = predictor
            .predict(
                Vector3::new(0.0, 0.0, 10_000.0),
                Vector3::new(400.0, 0.0, 0.0),
                60.0,
                60,
                0.9,
            )
            .unwrap();
        let b = predictor
            .predict(
                Vector3::new(1_000.0, 0.0, 40_000.0),
                Vector3::ZERO,
                60.0,
                60,
                0.5,
            )
            .unwrap();
        let seps = analyze(&a, &b).unwrap();
        assert_eq!(seps.len(), 60);

        let first = seps[0];
        let fa = a.samples()[0].risk_factors;
        let fb = b.samples()[0].risk_factors;
        assert_eq!(first.risk_factors.speed, fa.speed.max(fb.speed));
        assert_eq!(first.risk_factors.altitude, fa.altitude.max(fb.altitude));
        let mean =
            (fa.speed + fa.altitude + fa.proximity + fb.speed + fb.altitude + fb.proximity) / 6.0;
        assert!((first.risk_factors.combined_risk - mean).abs() < 1e-12);
        assert_eq!(first.confidence, 0.5);
        // Ownship has already advanced 400 m at the first sample
        assert!((first.distance - (600.0f64.powi(2) + 30_000.0f64.powi(2)).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_find_minimum_earliest_tie() {
        let a = stationary_trajectory(&[500.0, 200.0, 300.0, 200.0]);
        let b = stationary_trajectory(&[0.0, 0.0, 0.0, 0.0]);
        let seps = analyze(&a, &b).unwrap();
        let (index, sample) = find_minimum(&seps).unwrap();
        assert_eq!(index, 1);
        assert_eq!(sample.distance, 200.0);
        assert_eq!(sample.time_offset, 1.0);
    }

    #[test]
    fn test_find_minimum_empty() {
        assert!(find_minimum(&[]).is_none());
    }

    #[test]
    fn test_find_minimum_skips_non_finite_distances() {
        let a = stationary_trajectory(&[800.0, 600.0, 100.0, 700.0]);
        let b = stationary_trajectory(&[0.0, 0.0, 0.0, 0.0]);
        let mut seps = analyze(&a, &b).unwrap();
        seps[1].distance = f64::NAN;
        seps[3].distance = f64::INFINITY;

        let (index, sample) = find_minimum(&seps).unwrap();
        assert_eq!(index, 2);
        assert_eq!(sample.distance, 100.0);

        seps[2].distance = f64::NAN;
        let (index, _) = find_minimum(&seps).unwrap();
        assert_eq!(index, 0);

        seps[0].distance = f64::NAN;
        assert!(find_minimum(&seps).is_none());
    }

    #[test]
    fn test_analyze_rejects_overflowing_distance() {
        let a = stationary_trajectory(&[1e308, 1e308]);
        let b = stationary_trajectory(&[-1e308, -1e308]);
        assert_eq!(
            analyze(&a, &b),
            Err(AvoidanceError::NumericDegeneracy { field: "separation" })
        );
    }

    #[test]
    fn test_stationary_pair_constant_separation() {
        let predictor = TrajectoryPredictor::default();
        let a = predictor
            .predict(Vector3::new(0.0, 0.0, 1_000.0), Vector3::ZERO, 60.0, 60, 1.0)
            .unwrap();
        let b = predictor
            .predict(Vector3::new(300.0, 400.0, 1_000.0), Vector3::ZERO, 60.0, 60, 0.7)
            .unwrap();
        let seps = analyze(&a, &b).unwrap();
        for s in &seps {
            assert!((s.distance - 500.0).abs() < 1e-9);
        }
        for pair in seps.windows(2) {
            assert!(pair[1].confidence <= pair[0].confidence);
        }
    }

    // ---- CollisionRiskAssessor ----

    #[test]
    fn test_classify_boundaries() {
        let assessor = CollisionRiskAssessor::default();
        assert_eq!(assessor.classify(0.0), RiskLevel::Critical);
        assert_eq!(assessor.classify(299.9), RiskLevel::Critical);
        assert_eq!(assessor.classify(300.0), RiskLevel::High);
        assert_eq!(assessor.classify(499.9), RiskLevel::High);
        assert_eq!(assessor.classify(500.0), RiskLevel::Medium);
        assert_eq!(assessor.classify(1_000.0), RiskLevel::Low);
        assert_eq!(assessor.classify(1_999.9), RiskLevel::Low);
        assert_eq!(assessor.classify(2_000.0), RiskLevel::None);
    }

    #[test]
    fn test_closing_intruder_reduces_separation() {
        let assessor = CollisionRiskAssessor::default();
        let ownship = track((0.0, 0.0, 10_000.0), (0.0, 0.0, 0.0));
        let intruder = track((5_000.0, 5_000.0, 9_500.0), (-220.0, 0.0, -100.0));
        let initial = ownship.position.distance_to(&intruder.position);

        let assessment = assessor.assess(&ownship, &intruder).unwrap();
        assert!(
            assessment.min_separation < initial,
            "min separation {} should be below initial {initial}",
            assessment.min_separation
        );
        assert!(assessment.time_to_closest > 0.0);
        assert_eq!(assessment.separation_history.len(), 60);
        assert_eq!(assessment.ownship_trajectory.len(), 60);
        assert_eq!(assessment.separation_scale, 1.0);
    }

    #[test]
    fn test_head_on_is_critical() {
        let assessor = CollisionRiskAssessor::default();
        let ownship = track((0.0, 0.0, 5_000.0), (100.0, 0.0, 0.0));
        let intruder = track((4_000.0, 0.0, 5_000.0), (-100.0, 0.0, 0.0));
        let assessment = assessor.assess(&ownship, &intruder).unwrap();
        assert_eq!(assessment.level, RiskLevel::Critical);
        assert!(assessment.min_separation < 1e-6);
        // Contact at t = 20 s is recorded by sample 19
        assert!((assessment.time_to_closest - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_velocities_reject_assessment() {
        let assessor = CollisionRiskAssessor::default();
        let ownship = track((0.0, 0.0, 10_000.0), (1e307, 0.0, 0.0));
        let intruder = track((1_000.0, 0.0, 10_000.0), (1e307, 0.0, 0.0));
        assert!(matches!(
            assessor.assess(&ownship, &intruder),
            Err(AvoidanceError::NumericDegeneracy { .. })
        ));
    }

    #[test]
    fn test_assess_is_pure() {
        let assessor = CollisionRiskAssessor::default();
        let ownship = track((0.0, 0.0, 8_000.0), (150.0, 20.0, 0.0));
        let intruder = track((3_000.0, 1_000.0, 8_200.0), (-120.0, 0.0, -5.0));
        let first = assessor.assess(&ownship, &intruder).unwrap();
        let second = assessor.assess(&ownship, &intruder).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distant_stationary_pair_is_none() {
        let assessor = CollisionRiskAssessor::default();
        let ownship = track((0.0, 0.0, 10_000.0), (0.0, 0.0, 0.0));
        let intruder = track((20_000.0, 0.0, 10_000.0), (0.0, 0.0, 0.0));
        let assessment = assessor.assess(&ownship, &intruder).unwrap();
        assert_eq!(assessment.level, RiskLevel::None);
        assert_eq!(assessment.time_to_closest, 0.0);
    }
}
