//! Uninstall command - remove the cached executable

use crate::error::DistResult;
use crate::lifecycle::BinaryManager;
use crate::ui::{TaskSpinner, UiContext};

/// Execute the uninstall command
pub async fn execute(manager: &BinaryManager, ctx: &UiContext) -> DistResult<()> {
    let mut spinner = TaskSpinner::new(ctx);
    spinner.start(&format!("Removing {}...", manager.package().name));

    match manager.uninstall().await {
        Ok(()) => {
            spinner.stop(&format!("Removed {}", manager.package().name));
            Ok(())
        }
        Err(e) => {
            spinner.stop_error("Removal failed");
            Err(e)
        }
    }
}
