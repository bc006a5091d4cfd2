use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::errors::PresetError;
use crate::models::weather_reading::WeatherReading;

/// The named demonstration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    RainyDay,
    DryDay,
}

const RAINY_DAY: WeatherReading = WeatherReading {
    pressure: 995.0,
    dewpoint: 20.0,
    humidity: 95,
    cloud: 8,
    sunshine: 0.5,
    wind_direction: 210,
    wind_speed: 55,
};

const DRY_DAY: WeatherReading = WeatherReading {
    pressure: 1025.0,
    dewpoint: 5.0,
    humidity: 40,
    cloud: 1,
    sunshine: 12.0,
    wind_direction: 150,
    wind_speed: 10,
};

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::RainyDay, Preset::DryDay];

    /// Returns the full reading the preset stands for
    pub fn reading(&self) -> WeatherReading {
        match self {
            Preset::RainyDay => RAINY_DAY,
            Preset::DryDay   => DRY_DAY,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Preset::RainyDay => write!(f, "rainy day"),
            Preset::DryDay   => write!(f, "dry day"),
        }
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace(['_', '-'], " ");
        match name.split_whitespace().collect::<Vec<&str>>().join(" ").as_str() {
            "rainy day" | "rainy" => Ok(Preset::RainyDay),
            "dry day" | "dry"     => Ok(Preset::DryDay),
            _ => Err(PresetError::Unknown(s.trim().to_string())),
        }
    }
}

/// Returns the reading for the named preset
///
/// # Arguments
///
/// * 'preset_name' - one of the preset names, e.g. "rainy day" or "dry day"
pub fn apply(preset_name: &str) -> Result<WeatherReading, PresetError> {
    Ok(preset_name.parse::<Preset>()?.reading())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rainy_day_values() {
        let reading = apply("rainy day").unwrap();
        assert_eq!(reading.pressure, 995.0);
        assert_eq!(reading.dewpoint, 20.0);
        assert_eq!(reading.humidity, 95);
        assert_eq!(reading.cloud, 8);
        assert_eq!(reading.sunshine, 0.5);
        assert_eq!(reading.wind_direction, 210);
        assert_eq!(reading.wind_speed, 55);
    }

    #[test]
    fn dry_day_values() {
        let reading = apply("dry day").unwrap();
        assert_eq!(reading, WeatherReading {
            pressure: 1025.0, dewpoint: 5.0, humidity: 40, cloud: 1, sunshine: 12.0, wind_direction: 150, wind_speed: 10,
        });
    }

    #[test]
    fn presets_are_within_bounds() {
        for preset in Preset::ALL {
            assert!(preset.reading().validate().is_ok(), "{}", preset);
        }
    }

    #[test]
    fn name_spellings() {
        assert_eq!("Rainy Day".parse::<Preset>(), Ok(Preset::RainyDay));
        assert_eq!("rainy_day".parse::<Preset>(), Ok(Preset::RainyDay));
        assert_eq!(" dry ".parse::<Preset>(), Ok(Preset::DryDay));
        assert_eq!(apply("snowy day"), Err(PresetError::Unknown("snowy day".to_string())));
    }
}
