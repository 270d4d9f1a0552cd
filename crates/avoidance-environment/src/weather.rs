//! Weather risk: visibility, precipitation, wind, turbulence, icing, lightning.

use tracing::debug;

use avoidance_core::assessment::{WeatherAssessment, WeatherConditions, WeatherFactors};
use avoidance_core::config::WeatherConfig;
use avoidance_core::inputs::WeatherInput;

use crate::ladder::{self, LevelAdvice, MetricAdvice};

const VISIBILITY: MetricAdvice = MetricAdvice {
    critical: "Consider alternate routing due to low visibility",
    caution: "Increase separation distances due to reduced visibility",
};

const PRECIPITATION: MetricAdvice = MetricAdvice {
    critical: "Activate weather radar and maintain increased separation",
    caution: "Monitor precipitation intensity and adjust speed accordingly",
};

const WIND: MetricAdvice = MetricAdvice {
    critical: "Consider altitude change due to strong winds",
    caution: "Adjust speed and heading for wind compensation",
};

const TURBULENCE: MetricAdvice = MetricAdvice {
    critical: "Activate turbulence mode and increase separation",
    caution: "Maintain increased separation in turbulent conditions",
};

const ICING: MetricAdvice = MetricAdvice {
    critical: "Activate anti-ice systems and consider altitude change",
    caution: "Monitor icing conditions and activate anti-ice as needed",
};

const LIGHTNING: MetricAdvice = MetricAdvice {
    critical: "Maintain maximum separation from storm cells",
    caution: "Monitor lightning activity and adjust route if necessary",
};

const CLOSING: LevelAdvice = LevelAdvice {
    critical: "Consider immediate diversion or holding pattern",
    high: "Increase situational awareness and prepare for possible diversion",
    medium: "Maintain increased vigilance and monitor weather conditions",
};

/// Scores a weather observation.
#[derive(Debug, Clone, Default)]
pub struct WeatherRiskAssessor {
    config: WeatherConfig,
}

impl WeatherRiskAssessor {
    pub fn new(config: WeatherConfig) -> Self {
        Self { config }
    }

    /// Per-metric scores. Turbulence, icing and lightning are already
    /// indices and pass through clamped to [0, 1]; a NaN index scores 1.0.
    pub fn factors(&self, weather: &WeatherInput) -> WeatherFactors {
        WeatherFactors {
            visibility: ladder::score(&self.config.visibility, weather.visibility),
            precipitation: ladder::score(&self.config.precipitation, weather.precipitation_rate),
            wind: ladder::score(&self.config.wind, weather.wind_speed),
            turbulence: ladder::index_score(weather.turbulence_index),
            icing: ladder::index_score(weather.icing_potential),
            lightning: ladder::index_score(weather.lightning_activity),
        }
    }

    pub fn assess(&self, weather: &WeatherInput) -> WeatherAssessment {
        let factors = self.factors(weather);
        let risk_score = ladder::mean(&factors.values());
        let level = ladder::level_for_score(risk_score);

        let mut recommendations = Vec::new();
        let advice = [
            (factors.visibility, &VISIBILITY),
            (factors.precipitation, &PRECIPITATION),
            (factors.wind, &WIND),
            (factors.turbulence, &TURBULENCE),
            (factors.icing, &ICING),
            (factors.lightning, &LIGHTNING),
        ];
        for (score, metric) in advice {
            ladder::advise(score, metric, &mut recommendations);
        }
        if let Some(closing) = ladder::closing_advice(level, &CLOSING) {
            recommendations.push(closing.to_string());
        }

        debug!(risk_score, %level, count = recommendations.len(), "weather assessed");

        WeatherAssessment {
            level,
            risk_score,
            risk_factors: factors,
            recommendations,
            conditions: WeatherConditions {
                visibility: weather.visibility,
                precipitation: weather.precipitation_rate,
                wind_speed: weather.wind_speed,
                wind_direction: weather.wind_direction,
                cloud_ceiling: weather.cloud_ceiling,
            },
        }
    }
}
