//! Column mapping from source log columns to canonical columns.
//!
//! A mapping can be written out field by field ([`ColumnMapping`], the
//! `[mapping]` table of a dataset config) or supplied as a raw dictionary of
//! canonical wire name to source column ([`ColumnMapping::from_standard_names`]).
//! Both forms resolve to the same ordered [`StandardMapping`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::columns::StandardColumn;
use crate::error::{MappingError, Result};

/// Canonical column to source column, ordered by canonical table position.
pub type StandardMapping = BTreeMap<StandardColumn, String>;

/// Source column names for each canonical column of an event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnMapping {
    // Mandatory columns
    pub case_id_key: String,
    pub activity_key: String,
    pub timestamp_key: String,

    // Optional columns
    #[serde(default)]
    pub start_timestamp_key: Option<String>,
    #[serde(default)]
    pub total_cost_key: Option<String>,
    #[serde(default)]
    pub human_resource_key: Option<String>,
    #[serde(default)]
    pub role_key: Option<String>,
    #[serde(default)]
    pub resource_key: Option<String>,
    #[serde(default)]
    pub outcome_unit_key: Option<String>,
    #[serde(default)]
    pub fixed_cost_key: Option<String>,
    #[serde(default)]
    pub variable_cost_key: Option<String>,
    #[serde(default)]
    pub labor_cost_key: Option<String>,
    #[serde(default)]
    pub inventory_cost_key: Option<String>,
    #[serde(default)]
    pub client_key: Option<String>,
    #[serde(default)]
    pub maintenance_cost_key: Option<String>,
    #[serde(default)]
    pub missed_deadline_cost_key: Option<String>,
    #[serde(default)]
    pub transportation_cost_key: Option<String>,
    #[serde(default)]
    pub warehousing_cost_key: Option<String>,
    #[serde(default)]
    pub quality_key: Option<String>,
    #[serde(default)]
    pub lifecycle_type_key: Option<String>,
    #[serde(default)]
    pub instance_key: Option<String>,
}

impl ColumnMapping {
    /// Create a mapping with only the mandatory columns set.
    pub fn new(
        case_id_key: impl Into<String>,
        activity_key: impl Into<String>,
        timestamp_key: impl Into<String>,
    ) -> Self {
        Self {
            case_id_key: case_id_key.into(),
            activity_key: activity_key.into(),
            timestamp_key: timestamp_key.into(),
            start_timestamp_key: None,
            total_cost_key: None,
            human_resource_key: None,
            role_key: None,
            resource_key: None,
            outcome_unit_key: None,
            fixed_cost_key: None,
            variable_cost_key: None,
            labor_cost_key: None,
            inventory_cost_key: None,
            client_key: None,
            maintenance_cost_key: None,
            missed_deadline_cost_key: None,
            transportation_cost_key: None,
            warehousing_cost_key: None,
            quality_key: None,
            lifecycle_type_key: None,
            instance_key: None,
        }
    }

    /// Build a mapping from canonical wire names to source columns.
    ///
    /// Every key must be a canonical name and the three mandatory columns must
    /// be present.
    pub fn from_standard_names<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut resolved = StandardMapping::new();
        for (key, value) in entries {
            let name = key.as_ref();
            let column =
                name.parse::<StandardColumn>()
                    .map_err(|_| MappingError::UnknownColumn {
                        name: name.to_string(),
                        expected: StandardColumn::expected_names(),
                    })?;
            resolved.insert(column, value.into());
        }

        let mut take_required = |column: StandardColumn| {
            resolved
                .remove(&column)
                .ok_or(MappingError::MissingRequiredField {
                    field: column.mapping_field(),
                    column,
                })
        };
        let case_id = take_required(StandardColumn::CaseId)?;
        let activity = take_required(StandardColumn::Activity)?;
        let timestamp = take_required(StandardColumn::Timestamp)?;

        let mut mapping = Self::new(case_id, activity, timestamp);
        for (column, source) in resolved {
            mapping = mapping.with_column(column, source);
        }
        Ok(mapping)
    }

    /// Set the source column for any canonical column.
    #[must_use]
    pub fn with_column(mut self, column: StandardColumn, source: impl Into<String>) -> Self {
        let source = source.into();
        match column {
            StandardColumn::CaseId => self.case_id_key = source,
            StandardColumn::Activity => self.activity_key = source,
            StandardColumn::Timestamp => self.timestamp_key = source,
            optional => *self.optional_slot_mut(optional) = Some(source),
        }
        self
    }

    /// Returns the source column configured for a canonical column.
    pub fn source_for(&self, column: StandardColumn) -> Option<&str> {
        match column {
            StandardColumn::CaseId => Some(&self.case_id_key),
            StandardColumn::Activity => Some(&self.activity_key),
            StandardColumn::Timestamp => Some(&self.timestamp_key),
            StandardColumn::StartTimestamp => self.start_timestamp_key.as_deref(),
            StandardColumn::TotalCost => self.total_cost_key.as_deref(),
            StandardColumn::HumanResource => self.human_resource_key.as_deref(),
            StandardColumn::Role => self.role_key.as_deref(),
            StandardColumn::Resource => self.resource_key.as_deref(),
            StandardColumn::OutcomeUnit => self.outcome_unit_key.as_deref(),
            StandardColumn::FixedCost => self.fixed_cost_key.as_deref(),
            StandardColumn::VariableCost => self.variable_cost_key.as_deref(),
            StandardColumn::LaborCost => self.labor_cost_key.as_deref(),
            StandardColumn::InventoryCost => self.inventory_cost_key.as_deref(),
            StandardColumn::Client => self.client_key.as_deref(),
            StandardColumn::MaintenanceCost => self.maintenance_cost_key.as_deref(),
            StandardColumn::MissedDeadlineCost => self.missed_deadline_cost_key.as_deref(),
            StandardColumn::TransportationCost => self.transportation_cost_key.as_deref(),
            StandardColumn::WarehousingCost => self.warehousing_cost_key.as_deref(),
            StandardColumn::Quality => self.quality_key.as_deref(),
            StandardColumn::LifecycleTransition => self.lifecycle_type_key.as_deref(),
            StandardColumn::Instance => self.instance_key.as_deref(),
        }
    }

    /// Returns true if the mapping configures the given column.
    pub fn has(&self, column: StandardColumn) -> bool {
        self.source_for(column).is_some()
    }

    /// Resolve to canonical column -> source column, configured slots only.
    pub fn to_standard_mapping(&self) -> StandardMapping {
        StandardColumn::ALL
            .iter()
            .filter_map(|column| {
                self.source_for(*column)
                    .map(|source| (*column, source.to_string()))
            })
            .collect()
    }

    /// Reject mappings where two canonical columns share a source column.
    pub fn validate(&self) -> Result<()> {
        let mut seen: BTreeMap<&str, StandardColumn> = BTreeMap::new();
        for column in StandardColumn::ALL {
            let Some(source) = self.source_for(column) else {
                continue;
            };
            if let Some(first) = seen.insert(source, column) {
                return Err(MappingError::DuplicateSourceColumn {
                    source_column: source.to_string(),
                    first,
                    second: column,
                });
            }
        }
        Ok(())
    }

    fn optional_slot_mut(&mut self, column: StandardColumn) -> &mut Option<String> {
        match column {
            StandardColumn::StartTimestamp => &mut self.start_timestamp_key,
            StandardColumn::TotalCost => &mut self.total_cost_key,
            StandardColumn::HumanResource => &mut self.human_resource_key,
            StandardColumn::Role => &mut self.role_key,
            StandardColumn::Resource => &mut self.resource_key,
            StandardColumn::OutcomeUnit => &mut self.outcome_unit_key,
            StandardColumn::FixedCost => &mut self.fixed_cost_key,
            StandardColumn::VariableCost => &mut self.variable_cost_key,
            StandardColumn::LaborCost => &mut self.labor_cost_key,
            StandardColumn::InventoryCost => &mut self.inventory_cost_key,
            StandardColumn::Client => &mut self.client_key,
            StandardColumn::MaintenanceCost => &mut self.maintenance_cost_key,
            StandardColumn::MissedDeadlineCost => &mut self.missed_deadline_cost_key,
            StandardColumn::TransportationCost => &mut self.transportation_cost_key,
            StandardColumn::WarehousingCost => &mut self.warehousing_cost_key,
            StandardColumn::Quality => &mut self.quality_key,
            StandardColumn::LifecycleTransition => &mut self.lifecycle_type_key,
            StandardColumn::Instance => &mut self.instance_key,
            StandardColumn::CaseId | StandardColumn::Activity | StandardColumn::Timestamp => {
                unreachable!("mandatory columns are not optional slots")
            }
        }
    }
}
