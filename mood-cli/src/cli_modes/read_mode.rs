use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mood_core::{MoodTracker, Period};

pub fn search_mode(cli: &Cli, renderer: &Renderer, tracker: &MoodTracker) -> CliModeResult {
    let Some(keyword) = cli.search.as_deref() else {
        return CliModeResult::NothingToDo;
    };

    let result = tracker.search(keyword);
    if result.log.is_empty() {
        renderer.print_info(&format!("No stories found for '{keyword}'."));
    } else {
        renderer.print_info(&format!(
            "{} stories found for '{keyword}'.",
            result.log.len()
        ));
        renderer.print_entries(&result.log, Some(keyword));
    }
    renderer.print_errors(&result.errors);
    CliModeResult::Finish
}

/// Statistics view. Runs for `--history`, and for a bare `mood` with the monthly period.
pub fn history_mode(cli: &Cli, renderer: &Renderer, tracker: &MoodTracker) -> Result<CliModeResult> {
    let period = cli.history.unwrap_or(Period::Monthly);
    let history = tracker.history(period);

    renderer.print_history(&history, &tracker.config.moods);
    renderer.print_errors(&history.errors);

    if cli.export {
        let dir = cli
            .export_dir
            .as_deref()
            .unwrap_or(tracker.config.export_dir.as_path());
        let path = tracker.export(period, dir)?;
        renderer.print_info(&format!(
            "Exported {} entries to {}",
            history.window.len(),
            path.display()
        ));
    }
    Ok(CliModeResult::Finish)
}
