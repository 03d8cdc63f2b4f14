//! Indicator argument bundles.
//!
//! Arguments come from the `[arguments]` table of a dataset configuration.
//! Anything left out there can be filled with values sampled from the log
//! itself, so a first run exercises every indicator.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use ppi_model::StandardColumn;
use ppi_transform::EventLog;
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::registry::Param;

/// How cost values of an activity instance are aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// One event per instance: the COMPLETE event, else the START event.
    #[default]
    Sgl,
    /// Sum of the START and COMPLETE events.
    Sum,
}

impl AggregationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationMode::Sgl => "sgl",
            AggregationMode::Sum => "sum",
        }
    }
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A free-form comparison value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Number(n) => write!(f, "{n}"),
            ArgumentValue::Text(t) => f.write_str(t),
        }
    }
}

/// Optional values for every [`Param`].
///
/// Timestamps are RFC 3339 strings. `deadline` and `expectation` are
/// durations in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorArguments {
    pub case_id: Option<String>,
    pub case_ids: Option<Vec<String>>,
    pub activity_name: Option<String>,
    pub instance_id: Option<String>,
    pub activity_a: Option<String>,
    pub activity_b: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub human_resource_name: Option<String>,
    pub role_name: Option<String>,
    pub automated_activities: Option<BTreeSet<String>>,
    pub desired_activities: Option<BTreeSet<String>>,
    pub unwanted_activities: Option<BTreeSet<String>>,
    #[serde(alias = "direct_costs_activities")]
    pub direct_cost_activities: Option<BTreeSet<String>>,
    pub activities_subset: Option<BTreeSet<String>>,
    pub deadline: Option<f64>,
    pub expectation: Option<f64>,
    pub value: Option<ArgumentValue>,
    pub aggregation_mode: Option<AggregationMode>,
}

fn required<T: ?Sized>(value: Option<&T>, param: Param) -> Result<&T> {
    value.ok_or(IndicatorError::MissingArgument { param })
}

fn seconds(value: f64) -> TimeDelta {
    TimeDelta::milliseconds((value * 1000.0).round() as i64)
}

impl IndicatorArguments {
    /// Deserialize from a TOML table such as a dataset's `[arguments]`.
    pub fn from_toml_table(table: toml::Table) -> Result<Self> {
        toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| IndicatorError::InvalidArguments {
                message: e.to_string(),
            })
    }

    /// Whether a value for `param` is present.
    pub fn has(&self, param: Param) -> bool {
        match param {
            Param::CaseId => self.case_id.is_some(),
            Param::CaseIds => self.case_ids.is_some(),
            Param::ActivityName => self.activity_name.is_some(),
            Param::InstanceId => self.instance_id.is_some(),
            Param::ActivityA => self.activity_a.is_some(),
            Param::ActivityB => self.activity_b.is_some(),
            Param::StartTime => self.start_time.is_some(),
            Param::EndTime => self.end_time.is_some(),
            Param::HumanResourceName => self.human_resource_name.is_some(),
            Param::RoleName => self.role_name.is_some(),
            Param::AutomatedActivities => self.automated_activities.is_some(),
            Param::DesiredActivities => self.desired_activities.is_some(),
            Param::UnwantedActivities => self.unwanted_activities.is_some(),
            Param::DirectCostActivities => self.direct_cost_activities.is_some(),
            Param::ActivitiesSubset => self.activities_subset.is_some(),
            Param::Deadline => self.deadline.is_some(),
            Param::Expectation => self.expectation.is_some(),
            Param::Value => self.value.is_some(),
            Param::AggregationMode => self.aggregation_mode.is_some(),
        }
    }

    pub fn case_id(&self) -> Result<&str> {
        required(self.case_id.as_deref(), Param::CaseId)
    }

    pub fn case_ids(&self) -> Result<&[String]> {
        required(self.case_ids.as_deref(), Param::CaseIds)
    }

    pub fn activity_name(&self) -> Result<&str> {
        required(self.activity_name.as_deref(), Param::ActivityName)
    }

    pub fn instance_id(&self) -> Result<&str> {
        required(self.instance_id.as_deref(), Param::InstanceId)
    }

    pub fn human_resource_name(&self) -> Result<&str> {
        required(self.human_resource_name.as_deref(), Param::HumanResourceName)
    }

    pub fn role_name(&self) -> Result<&str> {
        required(self.role_name.as_deref(), Param::RoleName)
    }

    pub fn automated_activities(&self) -> Result<&BTreeSet<String>> {
        required(self.automated_activities.as_ref(), Param::AutomatedActivities)
    }

    pub fn desired_activities(&self) -> Result<&BTreeSet<String>> {
        required(self.desired_activities.as_ref(), Param::DesiredActivities)
    }

    pub fn direct_cost_activities(&self) -> Result<&BTreeSet<String>> {
        required(self.direct_cost_activities.as_ref(), Param::DirectCostActivities)
    }

    pub fn deadline(&self) -> Result<TimeDelta> {
        required(self.deadline.as_ref(), Param::Deadline).map(|s| seconds(*s))
    }

    pub fn expectation(&self) -> Result<TimeDelta> {
        required(self.expectation.as_ref(), Param::Expectation).map(|s| seconds(*s))
    }

    pub fn aggregation_mode(&self) -> Result<AggregationMode> {
        required(self.aggregation_mode.as_ref(), Param::AggregationMode).copied()
    }

    /// Keep every value already set, taking the rest from `defaults`.
    pub fn or(self, defaults: IndicatorArguments) -> IndicatorArguments {
        IndicatorArguments {
            case_id: self.case_id.or(defaults.case_id),
            case_ids: self.case_ids.or(defaults.case_ids),
            activity_name: self.activity_name.or(defaults.activity_name),
            instance_id: self.instance_id.or(defaults.instance_id),
            activity_a: self.activity_a.or(defaults.activity_a),
            activity_b: self.activity_b.or(defaults.activity_b),
            start_time: self.start_time.or(defaults.start_time),
            end_time: self.end_time.or(defaults.end_time),
            human_resource_name: self.human_resource_name.or(defaults.human_resource_name),
            role_name: self.role_name.or(defaults.role_name),
            automated_activities: self.automated_activities.or(defaults.automated_activities),
            desired_activities: self.desired_activities.or(defaults.desired_activities),
            unwanted_activities: self.unwanted_activities.or(defaults.unwanted_activities),
            direct_cost_activities: self
                .direct_cost_activities
                .or(defaults.direct_cost_activities),
            activities_subset: self.activities_subset.or(defaults.activities_subset),
            deadline: self.deadline.or(defaults.deadline),
            expectation: self.expectation.or(defaults.expectation),
            value: self.value.or(defaults.value),
            aggregation_mode: self.aggregation_mode.or(defaults.aggregation_mode),
        }
    }

    /// Arguments drawn deterministically from the log.
    ///
    /// Keys are the first values in table order. Time windows cover the middle
    /// half of the log. The expectation is the mean case duration and the
    /// deadline twice that.
    pub fn sampled_from(log: &EventLog) -> IndicatorArguments {
        let cases = log.case_ids();
        let activities = log.activities();
        let leading = |n: usize| -> Option<BTreeSet<String>> {
            (!activities.is_empty())
                .then(|| activities.iter().take(n).map(|a| (*a).to_string()).collect())
        };

        let (start_time, end_time) = time_window(log);
        let mean_duration = mean_case_seconds(log);

        IndicatorArguments {
            case_id: cases.first().map(|c| (*c).to_string()),
            case_ids: (!cases.is_empty())
                .then(|| cases.iter().take(3).map(|c| (*c).to_string()).collect()),
            activity_name: activities.first().map(|a| (*a).to_string()),
            instance_id: log.events().first().map(|e| e.instance_id.clone()),
            activity_a: activities.first().map(|a| (*a).to_string()),
            activity_b: activities
                .get(1)
                .or(activities.first())
                .map(|a| (*a).to_string()),
            start_time,
            end_time,
            human_resource_name: first_text(log, StandardColumn::HumanResource),
            role_name: first_text(log, StandardColumn::Role),
            automated_activities: leading(2),
            desired_activities: leading(2),
            unwanted_activities: activities
                .last()
                .map(|a| BTreeSet::from([(*a).to_string()])),
            direct_cost_activities: leading(2),
            activities_subset: leading(2),
            deadline: mean_duration.map(|s| s * 2.0),
            expectation: mean_duration,
            value: Some(ArgumentValue::Number(1.0)),
            aggregation_mode: Some(AggregationMode::Sgl),
        }
    }
}

fn first_text(log: &EventLog, column: StandardColumn) -> Option<String> {
    if !log.has_column(column) {
        return None;
    }
    (0..log.len()).find_map(|row| log.text(row, column))
}

fn time_window(log: &EventLog) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let times = log.events().iter().map(|e| e.timestamp);
    let (Some(min), Some(max)) = (times.clone().min(), times.max()) else {
        return (None, None);
    };
    let span = max - min;
    (Some(min + span / 4), Some(min + span * 3 / 4))
}

fn mean_case_seconds(log: &EventLog) -> Option<f64> {
    let cases = log.case_ids();
    if cases.is_empty() {
        return None;
    }
    let total: f64 = cases
        .iter()
        .map(|case_id| {
            let times = log
                .events()
                .iter()
                .filter(|e| e.case_id == *case_id)
                .map(|e| e.timestamp);
            match (times.clone().min(), times.max()) {
                (Some(min), Some(max)) => (max - min).num_milliseconds() as f64 / 1000.0,
                _ => 0.0,
            }
        })
        .sum();
    Some(total / cases.len() as f64)
}
