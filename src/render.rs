use std::fmt::Write;
use crate::config::Theme;
use crate::forecast::ForecastDay;
use crate::models::feature_vector::FeatureVector;
use crate::models::prediction::PredictionResult;
use crate::models::weather_reading::{Field, WeatherReading};
use crate::presets::Preset;

/// Upper end of the factor chart axis, larger values are clamped
const CHART_AXIS_MAX: f64 = 100.0;

/// Width in characters of a full bar in the factor chart
const CHART_WIDTH: usize = 40;

pub fn banner(theme: Theme) -> String {
    match theme {
        Theme::Pro => "\
==================================================
 🌌 Rainfall Prediction Pro
    An interactive app to forecast tomorrow's weather.
==================================================
".to_string(),
        Theme::Classic => "\
--------------------------------------------------
 🌦️ Rainfall Prediction
    Will it rain tomorrow? Adjust today's weather and ask.
--------------------------------------------------
".to_string(),
    }
}

pub fn help() -> String {
    let mut out = String::from("Commands:\n");
    out.push_str("  show                    show current weather inputs\n");
    out.push_str("  set <field> <value>     set one reading, e.g. 'set humidity 80'\n");
    let presets = Preset::ALL.iter().map(|p| format!("'{}'", p)).collect::<Vec<String>>();
    let _ = writeln!(out, "  preset <name>           load a preset: {}", presets.join(", "));
    out.push_str("  predict                 predict rainfall for tomorrow\n");
    out.push_str("  forecast                show an illustrative 5-day outlook\n");
    out.push_str("  explain                 explain the weather metrics\n");
    out.push_str("  help                    show this help\n");
    out.push_str("  quit                    leave\n");
    out.push_str("Fields:\n");
    for field in Field::ALL {
        let (min, max) = field.bounds();
        let _ = write!(out, "  {:<14} {:<26} {} to {}, step {}", field.column(), field.label(), min, max, field.step());
        if let Some(help) = field.help() {
            let _ = write!(out, " ({})", help);
        }
        out.push('\n');
    }
    out
}

/// Formats a reading value the way its field is stepped
fn format_value(field: Field, value: f64) -> String {
    if field.is_integer() {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Column name with its first letter in upper case
fn title(column: &str) -> String {
    let mut chars = column.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Table of the current inputs
///
/// # Arguments
///
/// * 'reading' - the current weather reading
pub fn input_table(reading: &WeatherReading) -> String {
    let mut out = String::from("Current Weather Inputs\n");
    let _ = writeln!(out, "  {:<14} {:>8}", "", "Values");
    for field in Field::ALL {
        let _ = writeln!(out, "  {:<14} {:>8}", field.column(), format_value(field, reading.get(field)));
    }
    out
}

/// Bar chart of the feature vector on a 0 to 100 axis
///
/// # Arguments
///
/// * 'vector' - the feature vector to chart
pub fn factor_chart(vector: &FeatureVector) -> String {
    let mut out = String::from("Weather Factors Visualization\n");
    for (name, value) in vector.named() {
        let filled = (value.clamp(0.0, CHART_AXIS_MAX) / CHART_AXIS_MAX * CHART_WIDTH as f64).round() as usize;
        let _ = writeln!(out, "  {:<14} |{}{}| {}",
                         title(name), "#".repeat(filled), " ".repeat(CHART_WIDTH - filled), value);
    }
    out
}

/// The outcome panel shown after a successful prediction
///
/// # Arguments
///
/// * 'result' - the prediction result
pub fn outcome(result: &PredictionResult) -> String {
    let mut out = String::from("Prediction Outcome\n");
    if result.will_rain() {
        out.push_str("  ☔ It will likely rain!\n");
        out.push_str("  💡 Suggestion: Don't forget to carry an umbrella!\n");
    } else {
        out.push_str("  ☀️ It will likely be dry!\n");
        out.push_str("  💡 Suggestion: A great day for outdoor activities!\n");
    }
    if let Some(p) = result.probabilities {
        let _ = writeln!(out, "  Probability of rain: {:.0}%", p.rain * 100.0);
    }
    out
}

/// Message shown when a prediction could not be made
pub fn prediction_error(message: &str) -> String {
    format!("Prediction Outcome\n  ❌ {}\n", message)
}

/// The illustrative outlook, always captioned as non-predictive
///
/// # Arguments
///
/// * 'days' - the forecast days to show
pub fn forecast_panel(days: &[ForecastDay]) -> String {
    let mut out = String::from("Example 5-Day Outlook\n");
    out.push_str("  This is an illustrative forecast and is not based on a predictive model.\n");
    for day in days {
        let _ = writeln!(out, "  {}  {}  {}°C", day.date.format("%a"), day.sky, day.temperature);
    }
    out
}

pub fn explanations() -> String {
    "\
Understanding the Weather Metrics
  - Pressure (hPa): Hectopascals, a unit for measuring atmospheric pressure. High pressure is
    often associated with clear skies, while low pressure can indicate stormy weather.
  - Dew Point (°C): The temperature to which air must be cooled to become saturated with water
    vapor. A higher dew point means more moisture in the air.
  - Cloud Cover (oktas): A scale from 0 to 8 measuring what fraction of the sky is covered in
    clouds. 0 is a clear sky, 8 is completely overcast.

When is Rain Likely?
  Rain isn't caused by a single factor, but rather a combination of conditions. The likelihood
  of rain increases significantly when you observe the following:
  - Low Atmospheric Pressure: When pressure is low (e.g., below 1000 hPa), air rises, cools,
    and moisture condenses to form rain.
  - High Humidity & Dew Point: High humidity (> 85%) means the air is saturated. When the dew
    point is close to the air temperature, rain is more probable.
  - High Cloud Cover & Low Sunshine: A mostly overcast sky (7-8 oktas) with little sunshine
    indicates conditions are ripe for precipitation.
  Try 'preset rainy' to see a typical combination of these factors.
".to_string()
}
