mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{CliModeResult, history_mode, info_mode, search_mode, write_mode};
use mood_core::{Config, MoodTracker};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::new();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mood: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(file) = &cli.file {
        config.data_file = file.clone();
    }
    let tracker = MoodTracker::with_config(config);

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: tracker.config.date_format.to_string(),
        use_color: cli.color.enabled(),
    }));

    if let CliModeResult::Finish = info_mode(cli, &renderer, &tracker) {
        return Ok(());
    }

    if let CliModeResult::Finish = write_mode(cli, &renderer, &tracker)? {
        return Ok(());
    }

    if let CliModeResult::Finish = search_mode(cli, &renderer, &tracker) {
        return Ok(());
    }

    history_mode(cli, &renderer, &tracker)?;
    Ok(())
}
