//! Quality dimension.

pub mod activities;
pub mod cases;
pub mod groups;

use crate::registry::{ComputeFn, Dimension, Granularity, IndicatorSpec, Param};
use crate::value::IndicatorValue;

const INSTANCE_MODE: &[Param] = &[Param::InstanceId, Param::AggregationMode];
const CASE: &[Param] = &[Param::CaseId];
const CASE_HRES: &[Param] = &[Param::CaseId, Param::HumanResourceName];
const CASE_ROLE: &[Param] = &[Param::CaseId, Param::RoleName];
const CASE_UNWANTED: &[Param] = &[Param::CaseId, Param::UnwantedActivities];
const ACTIVITY: &[Param] = &[Param::ActivityName];
const GROUP: &[Param] = &[Param::CaseIds];
const GROUP_HRES: &[Param] = &[Param::CaseIds, Param::HumanResourceName];
const GROUP_ROLE: &[Param] = &[Param::CaseIds, Param::RoleName];

fn spec(
    granularity: Granularity,
    name: &'static str,
    params: &'static [Param],
    compute: ComputeFn,
) -> IndicatorSpec {
    IndicatorSpec::new(Dimension::Quality, granularity, name, params, compute)
}

fn pending(granularity: Granularity, name: &'static str, params: &'static [Param]) -> IndicatorSpec {
    IndicatorSpec::not_implemented(Dimension::Quality, granularity, name, params)
}

pub(crate) fn register(specs: &mut Vec<IndicatorSpec>) {
    let instances = Granularity::Instances;
    specs.extend([
        pending(
            instances,
            "outcome_unit_count_considering_single_events_of_activity_instances",
            &[Param::InstanceId],
        ),
        pending(instances, "successful_outcome_unit_count", INSTANCE_MODE),
        pending(instances, "successful_outcome_unit_percentage", INSTANCE_MODE),
        pending(instances, "total_cost_and_client_count_ratio", INSTANCE_MODE),
    ]);

    let g = Granularity::Cases;
    specs.extend([
        spec(g, "activity_instance_count_by_human_resource", CASE_HRES, |log, args| {
            cases::activity_instance_count_by_human_resource(
                log,
                args.case_id()?,
                args.human_resource_name()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "activity_instance_count_by_role", CASE_ROLE, |log, args| {
            cases::activity_instance_count_by_role(log, args.case_id()?, args.role_name()?)
                .map(IndicatorValue::from)
        }),
        spec(
            g,
            "automated_activity_count",
            &[Param::CaseId, Param::AutomatedActivities],
            |log, args| {
                cases::automated_activity_count(log, args.case_id()?, args.automated_activities()?)
                    .map(IndicatorValue::from)
            },
        ),
        pending(g, "overall_quality", CASE),
        pending(g, "repeatability", CASE),
        pending(g, "rework_count", CASE),
        pending(g, "rework_count_by_value", &[Param::CaseId, Param::Value]),
        pending(
            g,
            "rework_of_activities_subset",
            &[Param::CaseId, Param::ActivitiesSubset],
        ),
        pending(g, "rework_percentage", CASE),
        pending(g, "unwanted_activity_count", CASE_UNWANTED),
        pending(g, "unwanted_activity_instance_count", CASE_UNWANTED),
    ]);

    let g = Granularity::Activities;
    specs.extend([
        spec(
            g,
            "activity_instance_count_by_human_resource",
            &[Param::ActivityName, Param::HumanResourceName],
            |log, args| {
                activities::activity_instance_count_by_human_resource(
                    log,
                    args.activity_name()?,
                    args.human_resource_name()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        pending(g, "human_resource_count", ACTIVITY),
        pending(g, "rework_count", ACTIVITY),
        pending(
            g,
            "rework_time",
            &[Param::ActivityName, Param::CaseId],
        ),
    ]);

    let g = Granularity::Groups;
    specs.extend([
        spec(g, "activity_instance_count_by_human_resource", GROUP_HRES, |log, args| {
            groups::activity_instance_count_by_human_resource(
                log,
                args.case_ids()?,
                args.human_resource_name()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(
            g,
            "expected_activity_instance_count_by_human_resource",
            GROUP_HRES,
            |log, args| {
                groups::expected_activity_instance_count_by_human_resource(
                    log,
                    args.case_ids()?,
                    args.human_resource_name()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        spec(g, "activity_instance_count_by_role", GROUP_ROLE, |log, args| {
            groups::activity_instance_count_by_role(log, args.case_ids()?, args.role_name()?)
                .map(IndicatorValue::from)
        }),
        spec(g, "expected_activity_instance_count_by_role", GROUP_ROLE, |log, args| {
            groups::expected_activity_instance_count_by_role(log, args.case_ids()?, args.role_name()?)
                .map(IndicatorValue::from)
        }),
        pending(
            g,
            "case_count_where_activity_during_time_frame",
            &[Param::CaseIds, Param::ActivityA, Param::StartTime, Param::EndTime],
        ),
        pending(g, "case_count_with_rework", GROUP),
        pending(g, "rework_count", GROUP),
    ]);
}
