//! Time indicators per activity instance.

use chrono::TimeDelta;
use ppi_transform::EventLog;

use crate::error::Result;
use crate::helpers::instances;

/// Elapsed time between the START and COMPLETE events of the instance.
///
/// Instances recorded without a START have a zero service time.
pub fn service_time(log: &EventLog, instance_id: &str) -> Result<TimeDelta> {
    Ok(instances::ctime(log, instance_id)? - instances::stime(log, instance_id)?)
}
