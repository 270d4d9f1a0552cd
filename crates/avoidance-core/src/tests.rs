#[cfg(test)]
mod tests {
    use crate::assessment::{DomainConditions, WeatherConditions};
    use crate::config::{EngineConfig, Ladder};
    use crate::enums::*;
    use crate::error::{AvoidanceError, ConfigError};
    use crate::events::Alert;
    use crate::inputs::{resolve_pair, GeoPoint, Obstacle, TerrainInput, TrackReport, WeatherInput};
    use crate::types::*;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::None < RiskLevel::Low);
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert_eq!(RiskLevel::default(), RiskLevel::None);
    }

    #[test]
    fn test_risk_level_serde() {
        let variants = vec![
            RiskLevel::None,
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
            let back: RiskLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_alert_tag_wire_names() {
        assert_eq!(
            serde_json::to_string(&AlertTag::ResolutionAdvisory).unwrap(),
            "\"RA\""
        );
        assert_eq!(
            serde_json::to_string(&AlertTag::TerrainAdvisory).unwrap(),
            "\"TERRAIN_ADVISORY\""
        );
        let back: AlertTag = serde_json::from_str("\"TA\"").unwrap();
        assert_eq!(back, AlertTag::TrafficAlert);
    }

    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            tag: AlertTag::WeatherAlert,
            message: "WEATHER WARNING".to_string(),
            urgency: Urgency::Critical,
            recommended_action: "DIVERT".to_string(),
            conditions: Some(DomainConditions::Weather(WeatherConditions {
                visibility: 800.0,
                precipitation: 12.0,
                wind_speed: 55.0,
                wind_direction: 270.0,
                cloud_ceiling: 300.0,
            })),
        };
        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains("\"domain\":\"weather\""));
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert, back);
    }

    #[test]
    fn test_alert_without_conditions_omits_field() {
        let alert = Alert {
            tag: AlertTag::Info,
            message: "Traffic information".to_string(),
            urgency: Urgency::Low,
            recommended_action: "CONTINUE MONITORING".to_string(),
            conditions: None,
        };
        let json = serde_json::to_string(&alert).unwrap();
        assert!(!json.contains("conditions"));
    }

    #[test]
    fn test_vector_geometry() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.magnitude() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_speed_heading_conversion() {
        // East at 100 kn
        let v = Vector3::from_speed_heading(100.0, 90.0, 0.0);
        assert!((v.x - 100.0).abs() < 1e-9);
        assert!(v.y.abs() < 1e-9);
        assert!((v.heading_deg() - 90.0).abs() < 1e-9);

        // North, descending
        let v = Vector3::from_speed_heading(50.0, 0.0, -10.0);
        assert!((v.y - 50.0).abs() < 1e-9);
        assert_eq!(v.z, -10.0);
    }

    #[test]
    fn test_saturating_ratio_never_nan() {
        assert_eq!(saturating_ratio(0.0, 0.0), 1.0);
        assert_eq!(saturating_ratio(5.0, f64::INFINITY), 1.0);
        assert_eq!(saturating_ratio(f64::INFINITY, 400.0), 1.0);
        assert_eq!(saturating_ratio(200.0, 400.0), 0.5);
        assert_eq!(saturating_ratio(-1.0, 400.0), 0.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(1.7), 1.0);
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(flight_level_label(33_000.0), "FL330");
        assert_eq!(flight_level_label(9_500.0), "9500ft");
        assert_eq!(speed_category(450.0), "high");
        assert_eq!(speed_category(250.0), "medium");
        assert_eq!(speed_category(120.0), "low");
        assert_eq!(cardinal_heading(0.0), "N");
        assert_eq!(cardinal_heading(90.0), "E");
        assert_eq!(cardinal_heading(225.0), "SW");
        assert_eq!(cardinal_heading(350.0), "N");
    }

    #[test]
    fn test_track_report_missing_fields() {
        let no_position = TrackReport {
            velocity: Some(Vector3::ZERO),
            ..Default::default()
        };
        assert_eq!(
            no_position.resolve(None),
            Err(AvoidanceError::MissingField("position"))
        );

        let no_velocity = TrackReport {
            position: Some(Vector3::ZERO),
            ..Default::default()
        };
        assert_eq!(
            no_velocity.resolve(None),
            Err(AvoidanceError::MissingField("velocity"))
        );

        let speed_only = TrackReport {
            position: Some(Vector3::ZERO),
            speed: Some(200.0),
            ..Default::default()
        };
        assert_eq!(
            speed_only.resolve(None),
            Err(AvoidanceError::MissingField("heading"))
        );
    }

    #[test]
    fn test_track_report_rejects_nan() {
        let report = TrackReport::local(Vector3::new(f64::NAN, 0.0, 0.0), Vector3::ZERO);
        assert_eq!(
            report.resolve(None),
            Err(AvoidanceError::NumericDegeneracy { field: "position" })
        );
    }

    #[test]
    fn test_track_report_confidence_clamped() {
        let report = TrackReport::local(Vector3::ZERO, Vector3::ZERO).with_confidence(1.4);
        assert_eq!(report.resolve(None).unwrap().confidence, 1.0);

        let report = TrackReport::local(Vector3::ZERO, Vector3::ZERO);
        assert_eq!(report.resolve(None).unwrap().confidence, 1.0);
    }

    #[test]
    fn test_geodetic_pair_centred_on_ownship() {
        let ownship = TrackReport {
            geo: Some(GeoPoint {
                lat: 47.0,
                lon: 8.0,
                altitude: 10_000.0,
            }),
            speed: Some(250.0),
            heading: Some(90.0),
            ..Default::default()
        };
        let intruder = TrackReport {
            geo: Some(GeoPoint {
                lat: 47.01,
                lon: 8.0,
                altitude: 9_500.0,
            }),
            speed: Some(220.0),
            heading: Some(180.0),
            ..Default::default()
        };
        let (own, intr) = resolve_pair(&ownship, &intruder).unwrap();
        assert!(own.position.x.abs() < 1e-6 && own.position.y.abs() < 1e-6);
        assert!((intr.position.y - 1113.2).abs() < 0.5, "got {}", intr.position.y);
        assert!((intr.velocity.y + 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_frames_rejected() {
        let ownship = TrackReport::local(Vector3::ZERO, Vector3::ZERO);
        let intruder = TrackReport {
            geo: Some(GeoPoint {
                lat: 1.0,
                lon: 1.0,
                altitude: 0.0,
            }),
            velocity: Some(Vector3::ZERO),
            ..Default::default()
        };
        assert_eq!(
            resolve_pair(&ownship, &intruder),
            Err(AvoidanceError::MixedFrames)
        );
        assert_eq!(
            resolve_pair(&intruder, &ownship),
            Err(AvoidanceError::MixedFrames)
        );
    }

    #[test]
    fn test_weather_defaults_from_empty_json() {
        let weather: WeatherInput = serde_json::from_str("{}").unwrap();
        assert_eq!(weather, WeatherInput::default());
        assert_eq!(weather.visibility, 10_000.0);

        let weather: WeatherInput = serde_json::from_str(r#"{"wind_speed": 40}"#).unwrap();
        assert_eq!(weather.wind_speed, 40.0);
        assert_eq!(weather.visibility, 10_000.0);
    }

    #[test]
    fn test_terrain_defaults_and_obstacles() {
        let terrain: TerrainInput = serde_json::from_str(
            r#"{"terrain_elevation": 8000,
                "terrain_obstacles": [{"type": "peak", "elevation": 8500, "distance": 5000}]}"#,
        )
        .unwrap();
        assert_eq!(terrain.terrain_clearance, 10_000.0);
        let obstacle: &Obstacle = &terrain.terrain_obstacles[0];
        assert_eq!(obstacle.kind, "peak");
        assert_eq!(obstacle.height_above(terrain.terrain_elevation), 500.0);
        assert_eq!(obstacle.height_above(9_000.0), 0.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        EngineConfig::default().validate().unwrap();
        let parsed = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(parsed, EngineConfig::default());
    }

    #[test]
    fn test_config_rejects_zero_steps() {
        let mut config = EngineConfig::default();
        config.prediction.steps = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive("prediction.steps"))
        ));
    }

    #[test]
    fn test_config_rejects_unordered_separation() {
        let mut config = EngineConfig::default();
        config.separation.high = 200.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Unordered("separation"))
        ));
    }

    #[test]
    fn test_config_rejects_inverted_ladder() {
        let mut config = EngineConfig::default();
        config.weather.visibility = Ladder::higher_is_worse([1_000.0, 3_000.0, 5_000.0, 8_000.0]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Unordered("weather.visibility"))
        ));
    }

    #[test]
    fn test_config_rejects_shrinking_multiplier() {
        let mut config = EngineConfig::default();
        config.fusion.terrain_clearance.moderate = 0.9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Multiplier("fusion.terrain_clearance"))
        ));
    }

    #[test]
    fn test_config_parse_error() {
        assert!(matches!(
            EngineConfig::from_json_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"prediction": {"horizon_secs": -5}}"#),
            Err(ConfigError::NonPositive("prediction.horizon_secs"))
        ));
    }
}
