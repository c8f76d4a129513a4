use super::CliModeResult;
use crate::{Cli, render::Renderer};
use mood_core::MoodTracker;

pub fn info_mode(cli: &Cli, renderer: &Renderer, tracker: &MoodTracker) -> CliModeResult {
    if cli.path {
        renderer.print_info(&format!("{}", tracker.store.path().display()));
        return CliModeResult::Finish;
    }
    if cli.moods {
        renderer.print_moods(&tracker.config.moods);
        return CliModeResult::Finish;
    }
    CliModeResult::NothingToDo
}
