//! Audit log command

use crate::audit::AuditLogger;
use crate::config::SplitPaths;
use crate::error::SplitResult;

/// Handle `splitbill log`
pub fn handle_log_command(paths: &SplitPaths, limit: usize) -> SplitResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
