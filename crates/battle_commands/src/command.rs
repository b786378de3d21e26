//! The command contract

use crate::error::Result;

/// A unit of game behavior, executed immediately or queued for a later tick
///
/// Commands hold shared handles to their targets, so executing one
/// takes `&self` and may be repeated; a queued move command runs once per
/// drain cycle.
pub trait Command: Send + Sync {
    /// Short name for logs and diagnostics
    fn name(&self) -> &str;

    /// Run the command
    fn execute(&self) -> Result<()>;
}
