use std::io::{BufRead, Write};
use chrono::{Local, NaiveDate};
use log::{error, info, warn};
use rand::Rng;
use crate::config::{Config, Theme};
use crate::errors::{SessionError, StateError};
use crate::features;
use crate::forecast::illustrative_forecast;
use crate::manager_model::Predictor;
use crate::models::weather_reading::Field;
use crate::render;
use crate::state::InputState;

/// A user command as typed on one line
#[derive(Debug, PartialEq)]
enum Command {
    Show,
    Set(String, String),
    Preset(String),
    Predict,
    Forecast,
    Explain,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Command {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_lowercase().as_str() {
            ""                  => Command::Empty,
            "show"              => Command::Show,
            "predict"           => Command::Predict,
            "forecast"          => Command::Forecast,
            "explain"           => Command::Explain,
            "help" | "?"        => Command::Help,
            "quit" | "exit"     => Command::Quit,
            "preset" | "load"   => Command::Preset(rest.to_string()),
            "set" => match rest.rsplit_once(char::is_whitespace) {
                Some((field, value)) => Command::Set(field.trim().to_string(), value.to_string()),
                None => Command::Unknown(line.to_string()),
            },
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// One user session: the input state, the predictor and how to present them
pub struct Session {
    state: InputState,
    predictor: Predictor,
    theme: Theme,
}

impl Session {
    /// Returns a new session set up from configuration
    ///
    /// # Arguments
    ///
    /// * 'config' - the loaded configuration
    pub fn new(config: &Config) -> Session {
        Session::with_parts(
            InputState::new(config.initial),
            Predictor::new(&config.files.model_file),
            config.general.theme,
        )
    }

    pub fn with_parts(state: InputState, predictor: Predictor, theme: Theme) -> Session {
        Self { state, predictor, theme }
    }

    /// Handles one line of user input and returns what to show, None when the user leaves
    ///
    /// # Arguments
    ///
    /// * 'line' - the input line
    pub fn handle(&mut self, line: &str) -> Option<String> {
        let out = match Command::parse(line) {
            Command::Empty    => String::new(),
            Command::Quit     => return None,
            Command::Help     => render::help(),
            Command::Explain  => render::explanations(),
            Command::Show     => self.show(),
            Command::Predict  => self.predict(),
            Command::Forecast => self.forecast(&mut rand::rng(), Local::now().date_naive()),
            Command::Set(field, value) => self.set(&field, &value),
            Command::Preset(name) => self.preset(&name),
            Command::Unknown(cmd) => format!("Unknown command '{}', type 'help' for commands\n", cmd),
        };

        Some(out)
    }

    /// Runs the session until the user quits or input ends
    ///
    /// # Arguments
    ///
    /// * 'input' - where commands are read from
    /// * 'output' - where the page is written to
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), SessionError> {
        write!(output, "{}", render::banner(self.theme))?;
        writeln!(output, "Type 'help' for commands.")?;
        write!(output, "{}", self.show())?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            match self.handle(&line?) {
                Some(out) => write!(output, "{}> ", out)?,
                None => break,
            }
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    fn show(&self) -> String {
        let vector = features::build(self.state.reading());
        format!("{}\n{}", render::input_table(self.state.reading()), render::factor_chart(&vector))
    }

    fn set(&mut self, field: &str, value: &str) -> String {
        let result = field.parse::<Field>().and_then(|field| {
            let parsed = value.parse::<f64>().map_err(|_| StateError::NotANumber(field, value.to_string()))?;
            self.state.set(field, parsed).map(|_| field)
        });

        match result {
            Ok(field) => format!("{} set to {}\n", field.label(), self.state.reading().get(field)),
            Err(e) => {
                warn!("rejected input: {}", e);
                format!("Invalid input: {}\n", e)
            },
        }
    }

    fn preset(&mut self, name: &str) -> String {
        match self.state.apply_preset(name) {
            Ok(()) => format!("Loaded preset '{}'\n{}", name.trim(), self.show()),
            Err(e) => format!("{}\n", e),
        }
    }

    /// Predicts from the current inputs, errors are reported to the user and leave the
    /// input state as it is
    fn predict(&mut self) -> String {
        let vector = features::build(self.state.reading());

        match self.predictor.predict(&vector) {
            Ok(result) => {
                info!("predicted {} for {:?}", result.label, vector.as_slice());
                render::outcome(&result)
            },
            Err(e) => {
                error!("prediction failed: {}", e);
                render::prediction_error(&e.user_message())
            },
        }
    }

    fn forecast<R: Rng>(&self, rng: &mut R, today: NaiveDate) -> String {
        let days = illustrative_forecast(rng, self.state.reading().dewpoint, today);
        render::forecast_panel(&days)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;
    use super::*;
    use crate::manager_model::classifier::tests::FOREST_JSON;
    use crate::models::weather_reading::WeatherReading;
    use crate::presets::Preset;

    fn session(model_file: &std::path::Path) -> Session {
        Session::with_parts(InputState::default(), Predictor::new(model_file), Theme::Pro)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("  "), Command::Empty);
        assert_eq!(Command::parse("PREDICT"), Command::Predict);
        assert_eq!(Command::parse("preset rainy day"), Command::Preset("rainy day".to_string()));
        assert_eq!(Command::parse("set wind speed 40"), Command::Set("wind speed".to_string(), "40".to_string()));
        assert_eq!(Command::parse("set humidity"), Command::Unknown("set humidity".to_string()));
        assert_eq!(Command::parse("dance"), Command::Unknown("dance".to_string()));
    }

    #[test]
    fn set_and_preset() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir.path().join("model.json"));

        let out = session.handle("set humidity 80").unwrap();
        assert!(out.contains("Humidity (%) set to 80"));
        assert_eq!(session.state.reading().humidity, 80);

        let out = session.handle("set cloud 12").unwrap();
        assert!(out.starts_with("Invalid input"));
        assert_eq!(session.state.reading().cloud, 4);

        let out = session.handle("set sunshine lots").unwrap();
        assert!(out.contains("'lots' is not a number"));

        session.handle("preset dry").unwrap();
        let out = session.handle("preset rainy day").unwrap();
        assert!(out.contains("Loaded preset 'rainy day'"));
        assert_eq!(*session.state.reading(), Preset::RainyDay.reading());

        assert!(session.handle("preset foggy").unwrap().contains("unknown preset"));
    }

    #[test]
    fn missing_model_keeps_state() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir.path().join("rainfall_prediction_model.json"));
        session.handle("preset rainy").unwrap();
        let before: WeatherReading = *session.state.reading();

        let out = session.handle("predict").unwrap();
        assert!(out.contains("Model file not found"));
        assert_eq!(*session.state.reading(), before);
    }

    #[test]
    fn predict_with_bundle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rainfall_prediction_model.json");
        fs::write(&path, format!(r#"{{"model": {}}}"#, FOREST_JSON)).unwrap();
        let mut session = session(&path);

        session.handle("preset rainy").unwrap();
        assert!(session.handle("predict").unwrap().contains("It will likely rain!"));

        session.handle("preset dry").unwrap();
        assert!(session.handle("predict").unwrap().contains("It will likely be dry!"));
    }

    #[test]
    fn forecast_uses_current_dewpoint() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir.path().join("model.json"));
        session.handle("set dewpoint 30").unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let out = session.forecast(&mut rng, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert!(out.contains("not based on a predictive model"));
        let temps = out.lines()
            .filter_map(|l| l.trim().strip_suffix("°C"))
            .filter_map(|l| l.rsplit(' ').next())
            .map(|t| t.parse::<i64>().unwrap())
            .collect::<Vec<i64>>();
        assert_eq!(temps.len(), 5);
        assert!(temps.iter().all(|t| (30..45).contains(t)));
    }

    #[test]
    fn run_until_quit() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir.path().join("model.json"));
        let input = Cursor::new("set humidity 90\nquit\nset humidity 10\n");
        let mut output: Vec<u8> = Vec::new();

        session.run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Rainfall Prediction Pro"));
        assert!(text.contains("Current Weather Inputs"));
        assert_eq!(session.state.reading().humidity, 90);
    }
}
