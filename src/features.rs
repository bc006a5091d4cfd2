use crate::models::feature_vector::FeatureVector;
use crate::models::weather_reading::WeatherReading;

/// Projects a weather reading into the classifier input row.
///
/// The slot order is pressure, dewpoint, humidity, cloud, sunshine, wind direction and wind
/// speed, which must match the order the classifier was trained on. Values are passed through
/// as-is, integer readings are only widened to f64.
///
/// # Arguments
///
/// * 'reading' - the weather reading to project
pub fn build(reading: &WeatherReading) -> FeatureVector {
    FeatureVector::new([
        reading.pressure,
        reading.dewpoint,
        reading.humidity as f64,
        reading.cloud as f64,
        reading.sunshine,
        reading.wind_direction as f64,
        reading.wind_speed as f64,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feature_vector::{FEATURE_COUNT, FEATURE_ORDER};
    use crate::models::weather_reading::Field;

    fn reading() -> WeatherReading {
        WeatherReading {
            pressure: 1002.4,
            dewpoint: -3.5,
            humidity: 77,
            cloud: 6,
            sunshine: 2.1,
            wind_direction: 275,
            wind_speed: 33,
        }
    }

    #[test]
    fn build_keeps_fixed_order() {
        let vector = build(&reading());
        assert_eq!(vector.as_slice().len(), FEATURE_COUNT);
        assert_eq!(vector.as_slice(), &[1002.4, -3.5, 77.0, 6.0, 2.1, 275.0, 33.0]);
    }

    #[test]
    fn build_maps_every_field_to_its_slot() {
        let reading = reading();
        let vector = build(&reading);
        for field in Field::ALL {
            assert_eq!(vector[field], reading.get(field), "slot for {}", field);
        }
        let names = vector.named().map(|(n, _)| n).collect::<Vec<&str>>();
        assert_eq!(names, FEATURE_ORDER.to_vec());
    }

    #[test]
    fn build_is_idempotent() {
        let reading = reading();
        assert_eq!(build(&reading), build(&reading));
    }

    #[test]
    fn build_on_bounds() {
        let low = WeatherReading {
            pressure: 950.0, dewpoint: -20.0, humidity: 0, cloud: 0, sunshine: 0.0, wind_direction: 0, wind_speed: 0,
        };
        let high = WeatherReading {
            pressure: 1050.0, dewpoint: 40.0, humidity: 100, cloud: 8, sunshine: 15.0, wind_direction: 360, wind_speed: 150,
        };
        assert_eq!(build(&low).as_slice(), &[950.0, -20.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(build(&high).as_slice(), &[1050.0, 40.0, 100.0, 8.0, 15.0, 360.0, 150.0]);
    }
}
