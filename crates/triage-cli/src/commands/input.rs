//! Reading task lists from files or stdin.

use std::io::Read;
use std::path::Path;

use triage_core::{parse_task_list, RawTask};

/// Read a JSON task list from `path`, or from stdin when `path` is absent or `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not valid JSON, or is not
/// a list.
pub fn read_tasks(path: Option<&Path>) -> Result<Vec<RawTask>, Box<dyn std::error::Error>> {
    let content = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| format!("cannot read {}: {e}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let tasks = parse_task_list(&content)?;
    tracing::debug!(count = tasks.len(), "read task list");
    Ok(tasks)
}
