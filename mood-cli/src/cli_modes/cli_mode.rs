/// Whether a mode handled the invocation or the next one should try.
#[derive(Debug)]
pub enum CliModeResult {
    Finish,
    NothingToDo,
}
