use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mood_core::{MoodTracker, NewEntry};

pub fn write_mode(cli: &Cli, renderer: &Renderer, tracker: &MoodTracker) -> Result<CliModeResult> {
    let Some(mood) = cli.mood.as_deref() else {
        return Ok(CliModeResult::NothingToDo);
    };

    let date = cli.date.as_deref();
    // A bad date or mood must fail before the editor, or the typed story is lost.
    NewEntry {
        date,
        story: "",
        mood,
    }
    .check_header(&tracker.config.moods, tracker.config.reference_date)?;

    let story = if !cli.text.is_empty() {
        cli.text.join(" ")
    } else {
        let editor = resolve_editor(&tracker.config.editor);
        // The editor leaves a final newline behind.
        create_editor_buffer(&editor)?.trim_end().to_string()
    };
    if story.trim().is_empty() {
        renderer.print_info("No entry to save, because no text was received.");
        return Ok(CliModeResult::Finish);
    }

    let entry = tracker.add_entry(NewEntry {
        date,
        story: &story,
        mood,
    })?;
    renderer.print_info(&format!(
        "Added new entry to {}",
        tracker.store.path().display()
    ));
    renderer.print_entry_line(&entry);
    Ok(CliModeResult::Finish)
}
