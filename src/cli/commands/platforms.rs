//! Platforms command - print the supported platform table

use crate::platform::SUPPORTED_PLATFORMS;
use crate::ui::render_platform_table;

/// Execute the platforms command
pub fn execute() {
    print!("{}", render_platform_table(&SUPPORTED_PLATFORMS));
}
