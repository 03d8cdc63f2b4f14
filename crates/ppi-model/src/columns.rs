//! Canonical column names and lifecycle phases.
//!
//! Event logs arrive with arbitrary column naming. After mapping, every column
//! the engine knows about carries one of the [`StandardColumn`] names, which
//! follow the XES attribute conventions (`case:concept:name`, `concept:name`,
//! `time:timestamp`, ...). The string form is only used at table boundaries.

use std::fmt;
use std::str::FromStr;

/// A canonical column of an event log.
///
/// Variants are declared in the order they appear in a canonical table:
/// the five structural columns first, then passthrough attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardColumn {
    CaseId,
    Activity,
    Timestamp,
    LifecycleTransition,
    Instance,
    StartTimestamp,
    TotalCost,
    HumanResource,
    Role,
    Resource,
    OutcomeUnit,
    FixedCost,
    VariableCost,
    LaborCost,
    InventoryCost,
    Client,
    MaintenanceCost,
    MissedDeadlineCost,
    TransportationCost,
    WarehousingCost,
    Quality,
}

impl StandardColumn {
    /// Every canonical column, in canonical table order.
    pub const ALL: [StandardColumn; 21] = [
        StandardColumn::CaseId,
        StandardColumn::Activity,
        StandardColumn::Timestamp,
        StandardColumn::LifecycleTransition,
        StandardColumn::Instance,
        StandardColumn::StartTimestamp,
        StandardColumn::TotalCost,
        StandardColumn::HumanResource,
        StandardColumn::Role,
        StandardColumn::Resource,
        StandardColumn::OutcomeUnit,
        StandardColumn::FixedCost,
        StandardColumn::VariableCost,
        StandardColumn::LaborCost,
        StandardColumn::InventoryCost,
        StandardColumn::Client,
        StandardColumn::MaintenanceCost,
        StandardColumn::MissedDeadlineCost,
        StandardColumn::TransportationCost,
        StandardColumn::WarehousingCost,
        StandardColumn::Quality,
    ];

    /// The columns every mapping must provide.
    pub const REQUIRED: [StandardColumn; 3] = [
        StandardColumn::CaseId,
        StandardColumn::Activity,
        StandardColumn::Timestamp,
    ];

    /// Returns the wire name used as the column header.
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardColumn::CaseId => "case:concept:name",
            StandardColumn::Activity => "concept:name",
            StandardColumn::Timestamp => "time:timestamp",
            StandardColumn::LifecycleTransition => "lifecycle:transition",
            StandardColumn::Instance => "concept:instance",
            StandardColumn::StartTimestamp => "start_timestamp",
            StandardColumn::TotalCost => "cost:total",
            StandardColumn::HumanResource => "human_resource",
            StandardColumn::Role => "org:role",
            StandardColumn::Resource => "org:resource",
            StandardColumn::OutcomeUnit => "outcome_unit",
            StandardColumn::FixedCost => "cost:fixed",
            StandardColumn::VariableCost => "cost:variable",
            StandardColumn::LaborCost => "cost:labor",
            StandardColumn::InventoryCost => "cost:inventory",
            StandardColumn::Client => "client",
            StandardColumn::MaintenanceCost => "cost:maintenance",
            StandardColumn::MissedDeadlineCost => "cost:missed_deadline",
            StandardColumn::TransportationCost => "cost:transportation",
            StandardColumn::WarehousingCost => "cost:warehousing",
            StandardColumn::Quality => "quality",
        }
    }

    /// Returns the name of the [`ColumnMapping`](crate::ColumnMapping) field
    /// that configures this column.
    pub fn mapping_field(&self) -> &'static str {
        match self {
            StandardColumn::CaseId => "case_id_key",
            StandardColumn::Activity => "activity_key",
            StandardColumn::Timestamp => "timestamp_key",
            StandardColumn::LifecycleTransition => "lifecycle_type_key",
            StandardColumn::Instance => "instance_key",
            StandardColumn::StartTimestamp => "start_timestamp_key",
            StandardColumn::TotalCost => "total_cost_key",
            StandardColumn::HumanResource => "human_resource_key",
            StandardColumn::Role => "role_key",
            StandardColumn::Resource => "resource_key",
            StandardColumn::OutcomeUnit => "outcome_unit_key",
            StandardColumn::FixedCost => "fixed_cost_key",
            StandardColumn::VariableCost => "variable_cost_key",
            StandardColumn::LaborCost => "labor_cost_key",
            StandardColumn::InventoryCost => "inventory_cost_key",
            StandardColumn::Client => "client_key",
            StandardColumn::MaintenanceCost => "maintenance_cost_key",
            StandardColumn::MissedDeadlineCost => "missed_deadline_cost_key",
            StandardColumn::TransportationCost => "transportation_cost_key",
            StandardColumn::WarehousingCost => "warehousing_cost_key",
            StandardColumn::Quality => "quality_key",
        }
    }

    /// Returns true for case id, activity, and timestamp.
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Returns true for the cost columns that indicators aggregate.
    pub fn is_cost(&self) -> bool {
        matches!(
            self,
            StandardColumn::TotalCost
                | StandardColumn::FixedCost
                | StandardColumn::VariableCost
                | StandardColumn::LaborCost
                | StandardColumn::InventoryCost
                | StandardColumn::MaintenanceCost
                | StandardColumn::MissedDeadlineCost
                | StandardColumn::TransportationCost
                | StandardColumn::WarehousingCost
        )
    }

    /// Comma-separated list of every wire name, used in error messages.
    pub fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(StandardColumn::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for StandardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardColumn {
    type Err = String;

    /// Parse a wire name. Matching is exact: `org:role` and `ORG:ROLE` are
    /// different columns in XES.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| format!("Unknown standard column: {s}"))
    }
}

/// Whether an event marks the start or the completion of an activity instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LifecyclePhase {
    Start,
    Complete,
}

impl LifecyclePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecyclePhase::Start => "start",
            LifecyclePhase::Complete => "complete",
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecyclePhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(LifecyclePhase::Start),
            "complete" => Ok(LifecyclePhase::Complete),
            _ => Err(format!("Unknown lifecycle phase: {s}")),
        }
    }
}
