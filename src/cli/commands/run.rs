//! Run command - launch the cached executable

use crate::error::DistResult;
use crate::lifecycle::BinaryManager;

/// Execute the run command, returning the child's exit code
///
/// Prints nothing itself; the child owns stdout and stderr.
pub async fn execute(args: &[String], manager: &BinaryManager) -> DistResult<i32> {
    manager.run(args).await
}

/// Process exit status for a child exit code
///
/// Codes outside `0..=255` keep their low byte, as the OS would report them.
pub fn process_exit_code(code: i32) -> u8 {
    (code & 0xff) as u8
}
