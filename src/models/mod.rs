pub mod weather_reading;
pub mod feature_vector;
pub mod prediction;
