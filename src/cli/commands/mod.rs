//! CLI command implementations

pub mod info;
pub mod install;
pub mod platforms;
pub mod run;
pub mod uninstall;

pub use info::execute as info;
pub use install::execute as install;
pub use platforms::execute as platforms;
pub use run::execute as run;
pub use uninstall::execute as uninstall;
