//! Summary of a weather payload: temperature bucket and active phenomena

use serde::{Deserialize, Serialize};

use super::weather::{Main, WeatherPayload};

/// Coarse perceived-temperature category
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBucket {
    Hot,
    Cold,
    Moderate,
}

impl TemperatureBucket {
    /// Feels-like temperatures strictly above this are hot
    pub const HOT_ABOVE: f64 = 85.0;
    /// Feels-like temperatures strictly below this are cold
    pub const COLD_BELOW: f64 = 60.0;

    #[must_use]
    pub fn from_feels_like(feels_like: f64) -> Self {
        if feels_like > Self::HOT_ABOVE {
            TemperatureBucket::Hot
        } else if feels_like < Self::COLD_BELOW {
            TemperatureBucket::Cold
        } else {
            TemperatureBucket::Moderate
        }
    }
}

/// Response body of `GET /weather`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherCondition {
    /// Weather categories in provider order
    pub activity: Vec<String>,
    pub condition: TemperatureBucket,
}

impl Main {
    #[must_use]
    pub fn temperature_bucket(&self) -> TemperatureBucket {
        TemperatureBucket::from_feels_like(self.feels_like)
    }
}

impl WeatherPayload {
    #[must_use]
    pub fn summarize(&self) -> WeatherCondition {
        WeatherCondition::from(self)
    }
}

impl From<&WeatherPayload> for WeatherCondition {
    fn from(payload: &WeatherPayload) -> Self {
        Self {
            activity: payload
                .weather
                .iter()
                .filter(|phenomenon| !phenomenon.main.is_empty())
                .map(|phenomenon| phenomenon.main.clone())
                .collect(),
            condition: payload.main.temperature_bucket(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather::Phenomenon;
    use rstest::rstest;

    fn phenomenon(id: i64, main: &str) -> Phenomenon {
        Phenomenon {
            id,
            main: main.to_string(),
            ..Phenomenon::default()
        }
    }

    #[rstest]
    #[case(78.0, TemperatureBucket::Moderate)]
    #[case(58.4, TemperatureBucket::Cold)]
    #[case(89.2, TemperatureBucket::Hot)]
    #[case(85.0, TemperatureBucket::Moderate)]
    #[case(60.0, TemperatureBucket::Moderate)]
    #[case(85.01, TemperatureBucket::Hot)]
    #[case(59.99, TemperatureBucket::Cold)]
    #[case(-40.0, TemperatureBucket::Cold)]
    #[case(298.74, TemperatureBucket::Hot)]
    fn test_temperature_bucket(#[case] feels_like: f64, #[case] expected: TemperatureBucket) {
        assert_eq!(TemperatureBucket::from_feels_like(feels_like), expected);
    }

    #[test]
    fn test_bucket_uses_feels_like_only() {
        let main = Main {
            temp: 73.2,
            feels_like: 78.0,
            temp_min: 68.7,
            temp_max: 92.0,
            pressure: 12,
            humidity: 32,
            sea_level: 5984,
            ground_level: 0,
        };
        assert_eq!(main.temperature_bucket(), TemperatureBucket::Moderate);
    }

    #[test]
    fn test_summarize_keeps_order_and_drops_empty_categories() {
        let payload = WeatherPayload {
            weather: vec![
                phenomenon(701, "Mist"),
                phenomenon(0, ""),
                phenomenon(501, "Rain"),
                phenomenon(211, "Thunderstorm"),
            ],
            main: Main {
                feels_like: 58.4,
                ..Main::default()
            },
            ..WeatherPayload::default()
        };

        assert_eq!(
            payload.summarize(),
            WeatherCondition {
                activity: vec![
                    "Mist".to_string(),
                    "Rain".to_string(),
                    "Thunderstorm".to_string()
                ],
                condition: TemperatureBucket::Cold,
            }
        );
    }

    #[test]
    fn test_summarize_without_phenomena() {
        let condition = WeatherPayload::default().summarize();
        assert!(condition.activity.is_empty());
        assert_eq!(condition.condition, TemperatureBucket::Cold);
    }

    #[test]
    fn test_condition_json_shape() {
        let condition = WeatherCondition {
            activity: vec!["Rain".to_string()],
            condition: TemperatureBucket::Hot,
        };
        assert_eq!(
            serde_json::to_string(&condition).unwrap(),
            r#"{"activity":["Rain"],"condition":"hot"}"#
        );

        let empty = WeatherCondition {
            activity: Vec::new(),
            condition: TemperatureBucket::Moderate,
        };
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"activity":[],"condition":"moderate"}"#
        );
    }
}
