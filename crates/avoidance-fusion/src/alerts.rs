//! Deterministic mapping from assessments to crew alerts.

use avoidance_core::assessment::{
    CollisionAssessment, DomainAssessment, TerrainAssessment, WeatherAssessment,
};
use avoidance_core::enums::{AlertTag, Domain, RiskLevel, Urgency};
use avoidance_core::events::Alert;

const ACTION_RA: &str = "IMMEDIATE EVASIVE ACTION REQUIRED";
const ACTION_TA: &str = "PREPARE FOR EVASIVE ACTION";
const ACTION_ADVISORY: &str = "MONITOR AND MAINTAIN SEPARATION";
const ACTION_INFO: &str = "CONTINUE MONITORING";

/// Traffic alert for a (fused) collision assessment.
pub fn generate_collision_alert(assessment: &CollisionAssessment) -> Alert {
    let sep = assessment.min_separation;
    let ttc = assessment.time_to_closest;
    let (tag, urgency, message, action) = match assessment.level {
        RiskLevel::Critical => (
            AlertTag::ResolutionAdvisory,
            Urgency::Critical,
            format!("RESOLUTION ADVISORY! Critical separation: {sep:.1}m in {ttc:.1}s"),
            ACTION_RA,
        ),
        RiskLevel::High => (
            AlertTag::TrafficAlert,
            Urgency::High,
            format!("TRAFFIC ALERT! Minimum separation: {sep:.1}m in {ttc:.1}s"),
            ACTION_TA,
        ),
        RiskLevel::Medium => (
            AlertTag::Advisory,
            Urgency::Medium,
            format!("Traffic advisory: Separation: {sep:.1}m in {ttc:.1}s"),
            ACTION_ADVISORY,
        ),
        RiskLevel::Low | RiskLevel::None => (
            AlertTag::Info,
            Urgency::Low,
            format!("Traffic information: Separation: {sep:.1}m in {ttc:.1}s"),
            ACTION_INFO,
        ),
    };
    Alert {
        tag,
        message,
        urgency,
        recommended_action: action.to_string(),
        conditions: None,
    }
}

/// Escalation alert (HIGH/CRITICAL only) followed by one advisory per
/// recommendation, in recommendation order.
pub fn generate_domain_alerts<A: DomainAssessment>(assessment: &A) -> Vec<Alert> {
    let domain = assessment.domain();
    let mut alerts = Vec::with_capacity(assessment.recommendations().len() + 1);

    if let Some(alert) = escalation_alert(assessment) {
        alerts.push(alert);
    }

    let advisory_tag = match domain {
        Domain::Weather => AlertTag::WeatherAdvisory,
        Domain::Terrain => AlertTag::TerrainAdvisory,
    };
    alerts.extend(assessment.recommendations().iter().map(|rec| Alert {
        tag: advisory_tag,
        message: rec.clone(),
        urgency: Urgency::Medium,
        recommended_action: rec.clone(),
        conditions: None,
    }));
    alerts
}

fn escalation_alert<A: DomainAssessment>(assessment: &A) -> Option<Alert> {
    let score = assessment.risk_score();
    let (tag, urgency, message, action) = match (assessment.domain(), assessment.level()) {
        (Domain::Weather, RiskLevel::Critical) => (
            AlertTag::WeatherAlert,
            Urgency::Critical,
            format!("WEATHER WARNING! Critical weather conditions (risk score {score:.2})"),
            "DIVERT OR HOLD CLEAR OF WEATHER",
        ),
        (Domain::Weather, RiskLevel::High) => (
            AlertTag::WeatherAlert,
            Urgency::High,
            format!("Weather alert: Hazardous weather conditions (risk score {score:.2})"),
            "PREPARE FOR WEATHER DEVIATION",
        ),
        (Domain::Terrain, RiskLevel::Critical) => (
            AlertTag::TerrainAlert,
            Urgency::Critical,
            format!("TERRAIN WARNING! Critical terrain proximity (risk score {score:.2})"),
            "PULL UP - CLIMB IMMEDIATELY",
        ),
        (Domain::Terrain, RiskLevel::High) => (
            AlertTag::TerrainAlert,
            Urgency::High,
            format!("Terrain alert: Hazardous terrain proximity (risk score {score:.2})"),
            "INCREASE TERRAIN CLEARANCE",
        ),
        _ => return None,
    };
    Some(Alert {
        tag,
        message,
        urgency,
        recommended_action: action.to_string(),
        conditions: Some(assessment.conditions()),
    })
}

/// Full ranked list: collision alert, then weather, then terrain.
pub fn generate_alerts(
    collision: &CollisionAssessment,
    weather: Option<&WeatherAssessment>,
    terrain: Option<&TerrainAssessment>,
) -> Vec<Alert> {
    let mut alerts = vec![generate_collision_alert(collision)];
    if let Some(w) = weather {
        alerts.extend(generate_domain_alerts(w));
    }
    if let Some(t) = terrain {
        alerts.extend(generate_domain_alerts(t));
    }
    alerts
}
