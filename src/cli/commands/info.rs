//! Info command - show what the lifecycle operations act on

use crate::error::DistResult;
use crate::lifecycle::BinaryManager;
use crate::ui::{self, UiContext};

/// Execute the info command
pub fn execute(manager: &BinaryManager, ctx: &UiContext) -> DistResult<()> {
    let status = manager.status()?;
    let package = manager.package();

    ui::intro(ctx, &format!("{} {}", package.name, package.version));
    ui::key_value(ctx, "Platform", &manager.host().to_string());
    ui::key_value(ctx, "Target", status.platform.build_target);
    ui::key_value(ctx, "Artifact version", manager.artifact_version());
    ui::key_value(ctx, "Download URL", &status.artifact.download_url);
    ui::key_value(ctx, "Executable", &status.executable.display().to_string());
    ui::key_value_status(
        ctx,
        "Installed",
        if status.present { "yes" } else { "no" },
        status.present,
    );

    Ok(())
}
