//! Quality indicators per activity, across all cases.

use ppi_transform::EventLog;

use crate::error::Result;
use crate::helpers::{activities, instances};

/// Instances of the activity carried out by `human_resource`.
pub fn activity_instance_count_by_human_resource(
    log: &EventLog,
    activity: &str,
    human_resource: &str,
) -> Result<usize> {
    let mut count = 0;
    for instance_id in activities::inst(log, activity)? {
        if instances::hres(log, &instance_id)?.as_deref() == Some(human_resource) {
            count += 1;
        }
    }
    Ok(count)
}
