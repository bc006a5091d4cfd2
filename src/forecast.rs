use std::fmt;
use std::fmt::Formatter;
use chrono::{NaiveDate, TimeDelta};
use rand::Rng;

/// Number of days in the illustrative outlook
pub const FORECAST_DAYS: usize = 5;

/// Sky state of an illustrative forecast day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sky {
    Clear,
    Rainy,
}

impl fmt::Display for Sky {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Sky::Clear => write!(f, "☀️"),
            Sky::Rainy => write!(f, "🌧️"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub sky: Sky,
    pub temperature: i64,
}

impl Sky {
    /// Half-open temperature range for this sky, offset from the truncated dewpoint
    ///
    /// # Arguments
    ///
    /// * 'dewpoint' - current dewpoint in °C
    pub fn temperature_range(&self, dewpoint: f64) -> (i64, i64) {
        let d = dewpoint.trunc() as i64;
        match self {
            Sky::Clear => (d + 5, d + 15),
            Sky::Rainy => (d, d + 10),
        }
    }
}

/// Draws a made up outlook for the days following today.
///
/// This has nothing to do with the classifier, sky and temperature are uniform random draws
/// and the result must always be presented as non-predictive.
///
/// # Arguments
///
/// * 'rng' - random source
/// * 'dewpoint' - current dewpoint in °C which the temperatures are offset from
/// * 'today' - the day before the first forecast day
pub fn illustrative_forecast<R: Rng>(rng: &mut R, dewpoint: f64, today: NaiveDate) -> Vec<ForecastDay> {
    (1..=FORECAST_DAYS as i64)
        .map(|i| {
            let sky = if rng.random_bool(0.5) { Sky::Clear } else { Sky::Rainy };
            let (low, high) = sky.temperature_range(dewpoint);

            ForecastDay {
                date: today + TimeDelta::days(i),
                sky,
                temperature: rng.random_range(low..high),
            }
        })
        .collect()
}
