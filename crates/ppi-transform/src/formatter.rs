//! Event log formatting pipeline.
//!
//! raw table -> standardized columns -> lifecycle events -> instance ids ->
//! canonical table.

use polars::prelude::DataFrame;
use ppi_model::{ColumnMapping, FormatOptions};
use tracing::{info, warn};

use crate::canonical::{build_canonical_frame, validate_explicit_instances};
use crate::classify::classify_log;
use crate::columns::standardize_columns;
use crate::error::Result;
use crate::frame::{CanonicalEvent, EventLog};
use crate::ids::{InstanceIdGenerator, UuidIds};
use crate::matcher::match_instances;
use crate::split::split_events;

/// Format a raw event log into a canonical explicit-interval log.
///
/// Instance ids for logs that lack them are random UUIDs.
pub fn format_event_log(
    table: &DataFrame,
    mapping: &ColumnMapping,
    options: &FormatOptions,
) -> Result<EventLog> {
    format_event_log_with(table, mapping, options, &mut UuidIds)
}

/// Format a raw event log, drawing generated instance ids from `ids`.
pub fn format_event_log_with<G>(
    table: &DataFrame,
    mapping: &ColumnMapping,
    options: &FormatOptions,
    ids: &mut G,
) -> Result<EventLog>
where
    G: InstanceIdGenerator + ?Sized,
{
    let shape = classify_log(mapping);
    info!(shape = %shape, rows = table.height(), "formatting event log");

    let standardized = standardize_columns(table, mapping)?;
    let events = split_events(&standardized, shape, options)?;

    let instance_ids: Vec<String> = if shape.needs_matching() {
        let matched = match_instances(&events, ids);
        if matched.degenerate_count() > 0 {
            warn!(
                complete_only = matched.complete_only,
                start_only = matched.start_only,
                "activity instances with a single event"
            );
        }
        info!(
            instances = matched.instance_count(),
            paired = matched.paired,
            "matched start and complete events"
        );
        matched.instance_ids
    } else {
        validate_explicit_instances(&events)?;
        events
            .iter()
            .map(|e| e.instance_id.clone().unwrap_or_default())
            .collect()
    };

    let data = build_canonical_frame(&standardized, shape, &events, &instance_ids)?;
    let canonical: Vec<CanonicalEvent> = events
        .into_iter()
        .zip(instance_ids)
        .map(|(event, instance_id)| CanonicalEvent {
            case_id: event.case_id,
            activity: event.activity,
            timestamp: event.timestamp,
            phase: event.phase,
            instance_id,
        })
        .collect();

    let log = EventLog::new(data, canonical, shape);
    info!(
        events = log.len(),
        cases = log.case_ids().len(),
        activities = log.activities().len(),
        "event log formatted"
    );
    Ok(log)
}
