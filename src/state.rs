use log::info;
use crate::errors::{PresetError, StateError};
use crate::models::weather_reading::{Field, WeatherReading};
use crate::presets;

/// Session owned input state, the only mutable piece of the session
pub struct InputState {
    reading: WeatherReading,
}

impl InputState {
    /// Returns a new input state starting out from the given reading
    ///
    /// # Arguments
    ///
    /// * 'initial' - reading to start the session with
    pub fn new(initial: WeatherReading) -> InputState {
        Self { reading: initial }
    }

    pub fn reading(&self) -> &WeatherReading {
        &self.reading
    }

    /// Sets one field, as when a slider is moved
    ///
    /// # Arguments
    ///
    /// * 'field' - field to set
    /// * 'value' - new value, must be within the field bounds
    pub fn set(&mut self, field: Field, value: f64) -> Result<(), StateError> {
        self.reading.set(field, value)
    }

    /// Overwrites all seven fields with the preset values, an unknown preset leaves the
    /// state as it is
    ///
    /// # Arguments
    ///
    /// * 'preset_name' - name of the preset to load, e.g. "rainy day"
    pub fn apply_preset(&mut self, preset_name: &str) -> Result<(), PresetError> {
        self.reading = presets::apply(preset_name)?;
        info!("loaded preset '{}'", preset_name.trim());
        Ok(())
    }
}

impl Default for InputState {
    fn default() -> Self {
        InputState::new(WeatherReading::default())
    }
}
