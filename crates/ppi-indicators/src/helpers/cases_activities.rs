//! Accessors scoped to one activity within one case.

use std::collections::BTreeSet;

use ppi_transform::EventLog;

use super::{ensure_activity, ensure_case};
use crate::error::Result;

/// Instances of `activity` in `case_id`.
///
/// Both keys must exist in the log, but the activity need not occur in that
/// particular case; the result is then empty.
pub fn inst(log: &EventLog, case_id: &str, activity: &str) -> Result<BTreeSet<String>> {
    ensure_case(log, case_id)?;
    ensure_activity(log, activity)?;
    Ok(log
        .events()
        .iter()
        .filter(|e| e.case_id == case_id && e.activity == activity)
        .map(|e| e.instance_id.clone())
        .collect())
}

/// Number of times `activity` was instantiated in `case_id`.
pub fn count(log: &EventLog, case_id: &str, activity: &str) -> Result<usize> {
    Ok(inst(log, case_id, activity)?.len())
}
