//! Outdoor-suitability classification.

use crate::types::{Forecast, WeatherSnapshot};

/// Weather classifications that rule out outdoor activities.
const UNSUITABLE: [&str; 4] = ["Thunderstorm", "Rain", "Snow", "Extreme"];

/// Whether the given weather classification supports outdoor activities.
///
/// Open-world: anything outside the fixed unsuitable set — including
/// unrecognized or empty classifications — counts as suitable.
pub fn is_outdoor_suitable(weather_main: &str) -> bool {
    !UNSUITABLE.contains(&weather_main)
}

/// The canonical "current" weather: the first forecast day. Evaluated once
/// per load and applied uniformly to every candidate in that load.
pub fn current_weather(forecast: &Forecast) -> Option<&WeatherSnapshot> {
    forecast.days.first().map(|day| &day.weather)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ForecastDay, LocationInfo};

    #[test]
    fn unsuitable_set_is_exact() {
        for main in ["Thunderstorm", "Rain", "Snow", "Extreme"] {
            assert!(!is_outdoor_suitable(main), "{main} should be unsuitable");
        }
        for main in ["Clear", "Clouds", "Drizzle", "Haze", "", "rain"] {
            assert!(is_outdoor_suitable(main), "{main:?} should be suitable");
        }
    }

    #[test]
    fn current_weather_is_first_day() {
        let forecast = Forecast {
            location: LocationInfo {
                name: "Tokyo".into(),
                country: "Demo".into(),
            },
            days: vec![
                ForecastDay {
                    date: "2024-06-01".parse().unwrap(),
                    weather: WeatherSnapshot {
                        main: "Rain".into(),
                        description: "light rain".into(),
                        icon: "10d".into(),
                    },
                    temp_max_c: 22,
                    temp_min_c: 15,
                    humidity: 60,
                    wind_kph: 10,
                },
                ForecastDay {
                    date: "2024-06-02".parse().unwrap(),
                    weather: WeatherSnapshot {
                        main: "Clear".into(),
                        description: "clear sky".into(),
                        icon: "01d".into(),
                    },
                    temp_max_c: 25,
                    temp_min_c: 17,
                    humidity: 50,
                    wind_kph: 8,
                },
            ],
        };
        assert_eq!(current_weather(&forecast).unwrap().main, "Rain");

        let empty = Forecast {
            location: forecast.location.clone(),
            days: Vec::new(),
        };
        assert!(current_weather(&empty).is_none());
    }
}
