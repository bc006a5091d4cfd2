use std::io;
use anyhow::{Context, Result};
use crate::initialization::init;
use crate::session::Session;

mod config;
mod errors;
mod features;
mod forecast;
mod initialization;
mod logging;
mod manager_model;
mod models;
mod presets;
mod render;
mod session;
mod state;

fn main() -> Result<()> {
    let config = init().context("failed to start rainfall")?;

    let mut session = Session::new(&config);
    session.run(io::stdin().lock(), io::stdout().lock())
        .context("session ended unexpectedly")?;

    Ok(())
}
