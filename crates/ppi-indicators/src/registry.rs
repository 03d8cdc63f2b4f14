//! Indicator registry.
//!
//! Every indicator is registered once with its dimension, granularity, and
//! the arguments it needs. The runner uses the declared parameters to report
//! missing arguments without calling the indicator.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use ppi_transform::EventLog;
use serde::Serialize;

use crate::arguments::IndicatorArguments;
use crate::error::{IndicatorError, Result};
use crate::indicators;
use crate::value::IndicatorValue;

/// Performance dimension an indicator measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Cost,
    Flexibility,
    General,
    Quality,
    Time,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Cost,
        Dimension::Flexibility,
        Dimension::General,
        Dimension::Quality,
        Dimension::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Cost => "cost",
            Dimension::Flexibility => "flexibility",
            Dimension::General => "general",
            Dimension::Quality => "quality",
            Dimension::Time => "time",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown dimension: {s}"))
    }
}

/// What an indicator is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Activities,
    Cases,
    Groups,
    Instances,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Activities,
        Granularity::Cases,
        Granularity::Groups,
        Granularity::Instances,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Activities => "activities",
            Granularity::Cases => "cases",
            Granularity::Groups => "groups",
            Granularity::Instances => "instances",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown granularity: {s}"))
    }
}

/// The fixed vocabulary of indicator arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    CaseId,
    CaseIds,
    ActivityName,
    InstanceId,
    ActivityA,
    ActivityB,
    StartTime,
    EndTime,
    HumanResourceName,
    RoleName,
    AutomatedActivities,
    DesiredActivities,
    UnwantedActivities,
    DirectCostActivities,
    ActivitiesSubset,
    Deadline,
    Expectation,
    Value,
    AggregationMode,
}

impl Param {
    pub fn as_str(&self) -> &'static str {
        match self {
            Param::CaseId => "case_id",
            Param::CaseIds => "case_ids",
            Param::ActivityName => "activity_name",
            Param::InstanceId => "instance_id",
            Param::ActivityA => "activity_a",
            Param::ActivityB => "activity_b",
            Param::StartTime => "start_time",
            Param::EndTime => "end_time",
            Param::HumanResourceName => "human_resource_name",
            Param::RoleName => "role_name",
            Param::AutomatedActivities => "automated_activities",
            Param::DesiredActivities => "desired_activities",
            Param::UnwantedActivities => "unwanted_activities",
            Param::DirectCostActivities => "direct_cost_activities",
            Param::ActivitiesSubset => "activities_subset",
            Param::Deadline => "deadline",
            Param::Expectation => "expectation",
            Param::Value => "value",
            Param::AggregationMode => "aggregation_mode",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signature shared by every indicator entry point.
pub type ComputeFn = fn(&EventLog, &IndicatorArguments) -> Result<IndicatorValue>;

/// One registered indicator.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSpec {
    pub dimension: Dimension,
    pub granularity: Granularity,
    pub name: &'static str,
    pub params: &'static [Param],
    compute: Option<ComputeFn>,
}

impl IndicatorSpec {
    pub(crate) fn new(
        dimension: Dimension,
        granularity: Granularity,
        name: &'static str,
        params: &'static [Param],
        compute: ComputeFn,
    ) -> Self {
        Self {
            dimension,
            granularity,
            name,
            params,
            compute: Some(compute),
        }
    }

    /// A catalogued indicator without a computation yet.
    pub(crate) fn not_implemented(
        dimension: Dimension,
        granularity: Granularity,
        name: &'static str,
        params: &'static [Param],
    ) -> Self {
        Self {
            dimension,
            granularity,
            name,
            params,
            compute: None,
        }
    }

    pub fn is_implemented(&self) -> bool {
        self.compute.is_some()
    }

    /// `dimension.granularity`, the group the indicator is listed under.
    pub fn module(&self) -> String {
        format!("{}.{}", self.dimension, self.granularity)
    }

    /// Declared parameters that `args` does not provide.
    pub fn missing_params(&self, args: &IndicatorArguments) -> Vec<Param> {
        self.params
            .iter()
            .copied()
            .filter(|param| !args.has(*param))
            .collect()
    }

    pub fn evaluate(&self, log: &EventLog, args: &IndicatorArguments) -> Result<IndicatorValue> {
        match self.compute {
            Some(compute) => compute(log, args),
            None => Err(IndicatorError::NotImplemented {
                indicator: self.name,
            }),
        }
    }
}

static REGISTRY: OnceLock<Vec<IndicatorSpec>> = OnceLock::new();

/// Every registered indicator, sorted by dimension, granularity, and name.
pub fn registry() -> &'static [IndicatorSpec] {
    REGISTRY.get_or_init(build_registry)
}

fn build_registry() -> Vec<IndicatorSpec> {
    let mut specs = Vec::new();
    indicators::cost::register(&mut specs);
    indicators::flexibility::register(&mut specs);
    indicators::general::register(&mut specs);
    indicators::quality::register(&mut specs);
    indicators::time::register(&mut specs);
    specs.sort_by(|a, b| {
        (a.dimension, a.granularity, a.name).cmp(&(b.dimension, b.granularity, b.name))
    });
    specs
}

/// Filter the registry. Empty filters select everything.
///
/// Unknown names are rejected, listing the allowed values.
pub fn select_indicators<D, G>(dimensions: &[D], granularities: &[G]) -> Result<Vec<IndicatorSpec>>
where
    D: AsRef<str>,
    G: AsRef<str>,
{
    let dimensions = parse_filter::<Dimension, D>(
        dimensions,
        "dimension",
        &Dimension::ALL.map(|d| d.as_str()),
    )?;
    let granularities = parse_filter::<Granularity, G>(
        granularities,
        "granularity",
        &Granularity::ALL.map(|g| g.as_str()),
    )?;

    Ok(registry()
        .iter()
        .filter(|spec| dimensions.is_empty() || dimensions.contains(&spec.dimension))
        .filter(|spec| granularities.is_empty() || granularities.contains(&spec.granularity))
        .copied()
        .collect())
}

fn parse_filter<T, S>(values: &[S], kind: &'static str, allowed: &[&str]) -> Result<Vec<T>>
where
    T: FromStr,
    S: AsRef<str>,
{
    let mut parsed = Vec::with_capacity(values.len());
    let mut unknown = Vec::new();
    for value in values {
        match value.as_ref().parse::<T>() {
            Ok(item) => parsed.push(item),
            Err(_) => unknown.push(value.as_ref().to_string()),
        }
    }
    if !unknown.is_empty() {
        unknown.sort();
        return Err(IndicatorError::UnknownSelection {
            kind,
            unknown: unknown.join(", "),
            allowed: allowed.join(", "),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_registry_is_sorted_and_unique() {
        let specs = registry();
        assert!(!specs.is_empty());
        let keys: Vec<_> = specs
            .iter()
            .map(|s| (s.dimension, s.granularity, s.name))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_flexibility_and_general_have_no_instance_indicators() {
        assert!(registry().iter().all(|s| {
            !matches!(s.dimension, Dimension::Flexibility | Dimension::General)
                || s.granularity != Granularity::Instances
        }));
    }

    #[test]
    fn test_every_dimension_is_registered() {
        let dimensions: BTreeSet<Dimension> = registry().iter().map(|s| s.dimension).collect();
        assert_eq!(dimensions.len(), Dimension::ALL.len());
    }

    #[test]
    fn test_select_filters_by_dimension_and_granularity() {
        let selected = select_indicators(&["time"], &["cases"]).unwrap();
        assert!(!selected.is_empty());
        assert!(selected.iter().all(|s| {
            s.dimension == Dimension::Time && s.granularity == Granularity::Cases
        }));
    }

    #[test]
    fn test_select_rejects_unknown_names() {
        let err = select_indicators(&["speed", "cost", "agility"], &[] as &[&str]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown dimension(s): agility, speed; allowed: cost, flexibility, general, quality, time"
        );
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("Cost".parse::<Dimension>(), Ok(Dimension::Cost));
        assert!("money".parse::<Dimension>().is_err());
        assert_eq!(" groups ".parse::<Granularity>(), Ok(Granularity::Groups));
    }
}
