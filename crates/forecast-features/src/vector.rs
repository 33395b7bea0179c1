//! Feature Vector Assembly

use crate::TimeFeatures;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of features the model was trained on.
pub const FEATURE_DIMENSION: usize = 12;

/// Feature names in model order. This order is a contract with the training
/// pipeline; reordering silently corrupts every prediction.
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "air_temperature",
    "dew_point_temperature",
    "relative_humidity",
    "wind_speed",
    "wind_direction",
    "hour",
    "day",
    "month",
    "day_of_week",
    "is_weekend",
    "lag_1h",
    "lag_24h",
];

/// Weather readings from the request body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherReadings {
    pub air_temperature: f64,
    pub dew_point_temperature: f64,
    pub relative_humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
}

/// Feature vector for model inference
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureVector {
    pub air_temperature: f64,
    pub dew_point_temperature: f64,
    pub relative_humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub hour: f64,
    pub day: f64,
    pub month: f64,
    pub day_of_week: f64,
    pub is_weekend: f64,
    pub lag_1h: f64,
    pub lag_24h: f64,
}

impl FeatureVector {
    /// Assemble the vector from its three ingredient groups.
    pub fn assemble(
        weather: &WeatherReadings,
        time: &TimeFeatures,
        lag_1h: f64,
        lag_24h: f64,
    ) -> Self {
        debug!(
            hour = time.hour,
            day_of_week = time.day_of_week,
            is_weekend = time.is_weekend,
            "assembling feature vector"
        );
        Self {
            air_temperature: weather.air_temperature,
            dew_point_temperature: weather.dew_point_temperature,
            relative_humidity: weather.relative_humidity,
            wind_speed: weather.wind_speed,
            wind_direction: weather.wind_direction,
            hour: f64::from(time.hour),
            day: f64::from(time.day),
            month: f64::from(time.month),
            day_of_week: f64::from(time.day_of_week),
            is_weekend: f64::from(time.is_weekend),
            lag_1h,
            lag_24h,
        }
    }

    /// Flatten into the model-order array described by [`FEATURE_NAMES`].
    pub fn as_array(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.air_temperature,
            self.dew_point_temperature,
            self.relative_humidity,
            self.wind_speed,
            self.wind_direction,
            self.hour,
            self.day,
            self.month,
            self.day_of_week,
            self.is_weekend,
            self.lag_1h,
            self.lag_24h,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_timestamp;
    use proptest::prelude::*;

    fn sample_weather() -> WeatherReadings {
        WeatherReadings {
            air_temperature: 21.5,
            dew_point_temperature: 12.0,
            relative_humidity: 55.0,
            wind_speed: 3.4,
            wind_direction: 180.0,
        }
    }

    #[test]
    fn test_model_order() {
        let time = TimeFeatures::from_datetime(parse_timestamp("2024-03-16T09:00").unwrap());
        let fv = FeatureVector::assemble(&sample_weather(), &time, 2.5, 2.8);
        let arr = fv.as_array();

        assert_eq!(arr.len(), FEATURE_DIMENSION);
        assert_eq!(arr[0], 21.5); // air_temperature
        assert_eq!(arr[4], 180.0); // wind_direction
        assert_eq!(arr[5], 9.0); // hour
        assert_eq!(arr[8], 5.0); // day_of_week (Saturday)
        assert_eq!(arr[9], 1.0); // is_weekend
        assert_eq!(arr[10], 2.5); // lag_1h
        assert_eq!(arr[11], 2.8); // lag_24h
    }

    proptest! {
        #[test]
        fn prop_dimension_and_order_hold(
            air in -60.0f64..60.0,
            dew in -60.0f64..40.0,
            hum in 0.0f64..100.0,
            speed in 0.0f64..60.0,
            dir in 0.0f64..360.0,
            lag_1h in 0.0f64..50.0,
            lag_24h in 0.0f64..50.0,
            day_offset in 0i64..365,
            hour in 0u32..24,
        ) {
            let base = parse_timestamp("2024-01-01T00:00").unwrap()
                + chrono::Duration::days(day_offset)
                + chrono::Duration::hours(i64::from(hour));
            let time = TimeFeatures::from_datetime(base);
            let weather = WeatherReadings {
                air_temperature: air,
                dew_point_temperature: dew,
                relative_humidity: hum,
                wind_speed: speed,
                wind_direction: dir,
            };

            let arr = FeatureVector::assemble(&weather, &time, lag_1h, lag_24h).as_array();

            prop_assert_eq!(arr.len(), FEATURE_DIMENSION);
            prop_assert_eq!(arr[0], air);
            prop_assert_eq!(arr[1], dew);
            prop_assert_eq!(arr[2], hum);
            prop_assert_eq!(arr[3], speed);
            prop_assert_eq!(arr[4], dir);
            prop_assert_eq!(arr[5], f64::from(time.hour));
            prop_assert_eq!(arr[9], f64::from(time.is_weekend));
            prop_assert_eq!(arr[10], lag_1h);
            prop_assert_eq!(arr[11], lag_24h);
            // weekend flag agrees with the weekday index
            prop_assert_eq!(arr[9] == 1.0, arr[8] >= 5.0);
        }
    }
}
