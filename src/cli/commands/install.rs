//! Install command - download and cache the executable

use crate::error::DistResult;
use crate::lifecycle::BinaryManager;
use crate::ui::{self, UiContext};

/// Execute the install command
pub async fn execute(manager: &BinaryManager, ctx: &UiContext) -> DistResult<()> {
    let status = manager.status()?;
    let package = manager.package();

    ui::intro(ctx, &format!("Installing {}", package.name));
    ui::step_info(ctx, &format!("Target: {}", status.platform.build_target));
    ui::step_info(ctx, &format!("Source: {}", status.artifact.download_url));

    let path = manager.install().await?;

    ui::outro_success(ctx, &format!("Installed {}", path.display()));
    Ok(())
}
