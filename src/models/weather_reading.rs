use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::StateError;

/// The seven weather readings of a session
///
/// Units: pressure in hPa, dewpoint in °C, humidity in %, cloud in oktas, sunshine in hours,
/// wind direction in degrees and wind speed in km/h.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WeatherReading {
    pub pressure: f64,
    pub dewpoint: f64,
    pub humidity: u8,
    pub cloud: u8,
    pub sunshine: f64,
    #[serde(alias = "winddirection")]
    pub wind_direction: u16,
    #[serde(alias = "windspeed")]
    pub wind_speed: u16,
}

/// Session start values
impl Default for WeatherReading {
    fn default() -> Self {
        Self {
            pressure: 1015.0,
            dewpoint: 12.0,
            humidity: 65,
            cloud: 4,
            sunshine: 7.6,
            wind_direction: 180,
            wind_speed: 20,
        }
    }
}

impl WeatherReading {
    /// Returns the value of the given field widened to f64
    ///
    /// # Arguments
    ///
    /// * 'field' - the field to read
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Pressure      => self.pressure,
            Field::Dewpoint      => self.dewpoint,
            Field::Humidity      => self.humidity as f64,
            Field::Cloud         => self.cloud as f64,
            Field::Sunshine      => self.sunshine,
            Field::WindDirection => self.wind_direction as f64,
            Field::WindSpeed     => self.wind_speed as f64,
        }
    }

    /// Sets a field after checking it against the field bounds.
    /// Float fields are snapped to their step, integer fields must be whole numbers.
    /// On error the reading is left untouched.
    ///
    /// # Arguments
    ///
    /// * 'field' - the field to set
    /// * 'value' - the new value
    pub fn set(&mut self, field: Field, value: f64) -> Result<(), StateError> {
        let value = field.check(value)?;
        match field {
            Field::Pressure      => self.pressure = value,
            Field::Dewpoint      => self.dewpoint = value,
            Field::Humidity      => self.humidity = value as u8,
            Field::Cloud         => self.cloud = value as u8,
            Field::Sunshine      => self.sunshine = value,
            Field::WindDirection => self.wind_direction = value as u16,
            Field::WindSpeed     => self.wind_speed = value as u16,
        }
        Ok(())
    }

    /// Checks that every field is within its bounds
    ///
    pub fn validate(&self) -> Result<(), StateError> {
        for field in Field::ALL {
            field.check(self.get(field))?;
        }
        Ok(())
    }
}

/// The weather reading fields, in column order
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Pressure,
    Dewpoint,
    Humidity,
    Cloud,
    Sunshine,
    WindDirection,
    WindSpeed,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Pressure,
        Field::Dewpoint,
        Field::Humidity,
        Field::Cloud,
        Field::Sunshine,
        Field::WindDirection,
        Field::WindSpeed,
    ];

    /// Column name as used when the classifier was trained
    pub fn column(&self) -> &'static str {
        match self {
            Field::Pressure      => "pressure",
            Field::Dewpoint      => "dewpoint",
            Field::Humidity      => "humidity",
            Field::Cloud         => "cloud",
            Field::Sunshine      => "sunshine",
            Field::WindDirection => "winddirection",
            Field::WindSpeed     => "windspeed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Pressure      => "Pressure (hPa)",
            Field::Dewpoint      => "Dew Point (°C)",
            Field::Humidity      => "Humidity (%)",
            Field::Cloud         => "Cloud Cover (oktas)",
            Field::Sunshine      => "Sunshine (hours)",
            Field::WindDirection => "Wind Direction (degrees)",
            Field::WindSpeed     => "Wind Speed (km/h)",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            Field::Pressure => Some("Atmospheric pressure at sea level"),
            Field::Cloud    => Some("Cloudiness measured in eighths of the sky"),
            _ => None,
        }
    }

    /// Inclusive bounds for the field
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Field::Pressure      => (950.0, 1050.0),
            Field::Dewpoint      => (-20.0, 40.0),
            Field::Humidity      => (0.0, 100.0),
            Field::Cloud         => (0.0, 8.0),
            Field::Sunshine      => (0.0, 15.0),
            Field::WindDirection => (0.0, 360.0),
            Field::WindSpeed     => (0.0, 150.0),
        }
    }

    /// Slider step, integer fields step by one
    pub fn step(&self) -> f64 {
        if self.is_integer() { 1.0 } else { 0.1 }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, Field::Pressure | Field::Dewpoint | Field::Sunshine)
    }

    /// Returns the value as it would be stored for this field or why it can't be
    ///
    /// # Arguments
    ///
    /// * 'value' - the value to check
    fn check(&self, value: f64) -> Result<f64, StateError> {
        if !value.is_finite() {
            return Err(StateError::NotANumber(*self, value.to_string()));
        }
        if self.is_integer() && value.fract() != 0.0 {
            return Err(StateError::NotAnInteger(*self, value));
        }

        let value = if self.is_integer() { value } else { (value / self.step()).round() * self.step() };
        let value = (value * 10.0).round() / 10.0;

        let (min, max) = self.bounds();
        if value < min || value > max {
            return Err(StateError::OutOfBounds(*self, min, max, value));
        }

        Ok(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl FromStr for Field {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace(['_', ' ', '-'], "");
        match name.as_str() {
            "pressure"      => Ok(Field::Pressure),
            "dewpoint"      => Ok(Field::Dewpoint),
            "humidity"      => Ok(Field::Humidity),
            "cloud"         => Ok(Field::Cloud),
            "sunshine"      => Ok(Field::Sunshine),
            "winddirection" => Ok(Field::WindDirection),
            "windspeed"     => Ok(Field::WindSpeed),
            _ => Err(StateError::UnknownField(s.trim().to_string())),
        }
    }
}
