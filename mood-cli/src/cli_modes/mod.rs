mod cli_mode;
mod editor_utils;
mod info_mode;
mod read_mode;
mod write_mode;

pub use cli_mode::CliModeResult;
pub use info_mode::info_mode;
pub use read_mode::{history_mode, search_mode};
pub use write_mode::write_mode;
