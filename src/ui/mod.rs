//! Terminal output
//!
//! Uses `cliclack` for styled output in interactive terminals, with plain
//! `[OK]`/`[FAIL]` lines in CI and when stdout is piped (the usual case
//! for package manager hooks).

mod context;
mod output;
mod progress;
mod table;
mod theme;

pub use context::UiContext;
pub use output::{intro, key_value, key_value_status, outro_success, step_info};
pub use progress::{DownloadProgress, TaskSpinner};
pub use table::render_platform_table;
pub use theme::{init_theme, DistTheme};
