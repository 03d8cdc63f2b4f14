//! Cost dimension.

pub mod activities;
pub mod cases;
pub mod groups;
pub mod instances;

use ppi_model::StandardColumn;

use crate::arguments::AggregationMode;
use crate::registry::{ComputeFn, Dimension, Granularity, IndicatorSpec, Param};
use crate::value::IndicatorValue;

const INSTANCE: &[Param] = &[Param::InstanceId];
const INSTANCE_MODE: &[Param] = &[Param::InstanceId, Param::AggregationMode];
const CASE: &[Param] = &[Param::CaseId];
const CASE_MODE: &[Param] = &[Param::CaseId, Param::AggregationMode];
const ACTIVITY: &[Param] = &[Param::ActivityName];
const ACTIVITY_MODE: &[Param] = &[Param::ActivityName, Param::AggregationMode];
const GROUP: &[Param] = &[Param::CaseIds];
const GROUP_MODE: &[Param] = &[Param::CaseIds, Param::AggregationMode];

fn spec(
    granularity: Granularity,
    name: &'static str,
    params: &'static [Param],
    compute: ComputeFn,
) -> IndicatorSpec {
    IndicatorSpec::new(Dimension::Cost, granularity, name, params, compute)
}

pub(crate) fn register(specs: &mut Vec<IndicatorSpec>) {
    register_instances(specs);
    register_cases(specs);
    register_activities(specs);
    register_groups(specs);
}

fn register_instances(specs: &mut Vec<IndicatorSpec>) {
    let g = Granularity::Instances;
    specs.extend([
        spec(g, "fixed_cost_for_single_events_of_activity_instances", INSTANCE, |log, args| {
            instances::instance_cost(log, args.instance_id()?, StandardColumn::FixedCost, AggregationMode::Sgl)
                .map(IndicatorValue::from)
        }),
        spec(g, "fixed_cost_for_sum_of_all_events_of_activity_instances", INSTANCE, |log, args| {
            instances::instance_cost(log, args.instance_id()?, StandardColumn::FixedCost, AggregationMode::Sum)
                .map(IndicatorValue::from)
        }),
        spec(g, "inventory_cost_for_single_events_of_activity_instances", INSTANCE, |log, args| {
            instances::instance_cost(log, args.instance_id()?, StandardColumn::InventoryCost, AggregationMode::Sgl)
                .map(IndicatorValue::from)
        }),
        spec(g, "inventory_cost_for_sum_of_all_events_of_activity_instances", INSTANCE, |log, args| {
            instances::instance_cost(log, args.instance_id()?, StandardColumn::InventoryCost, AggregationMode::Sum)
                .map(IndicatorValue::from)
        }),
        spec(g, "labor_cost_for_single_events_of_activity_instances", INSTANCE, |log, args| {
            instances::instance_cost(log, args.instance_id()?, StandardColumn::LaborCost, AggregationMode::Sgl)
                .map(IndicatorValue::from)
        }),
        spec(g, "labor_cost_for_sum_of_all_events_of_activity_instances", INSTANCE, |log, args| {
            instances::instance_cost(log, args.instance_id()?, StandardColumn::LaborCost, AggregationMode::Sum)
                .map(IndicatorValue::from)
        }),
        spec(g, "total_cost_for_single_events_of_activity_instances", INSTANCE, |log, args| {
            instances::instance_cost(log, args.instance_id()?, StandardColumn::TotalCost, AggregationMode::Sgl)
                .map(IndicatorValue::from)
        }),
        spec(g, "total_cost_for_sum_of_all_events_of_activity_instances", INSTANCE, |log, args| {
            instances::instance_cost(log, args.instance_id()?, StandardColumn::TotalCost, AggregationMode::Sum)
                .map(IndicatorValue::from)
        }),
        spec(g, "labor_cost_and_total_cost_ratio", INSTANCE_MODE, |log, args| {
            instances::labor_cost_and_total_cost_ratio(log, args.instance_id()?, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        IndicatorSpec::not_implemented(Dimension::Cost, g, "total_cost_and_lead_time_ratio", INSTANCE_MODE),
        IndicatorSpec::not_implemented(Dimension::Cost, g, "total_cost_and_outcome_unit_ratio", INSTANCE_MODE),
    ]);
}

fn register_cases(specs: &mut Vec<IndicatorSpec>) {
    let g = Granularity::Cases;
    specs.extend([
        spec(
            g,
            "automated_activity_cost",
            &[Param::CaseId, Param::AggregationMode, Param::AutomatedActivities],
            |log, args| {
                cases::automated_activity_cost(
                    log,
                    args.case_id()?,
                    args.aggregation_mode()?,
                    args.automated_activities()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        spec(
            g,
            "desired_activity_count",
            &[Param::CaseId, Param::DesiredActivities],
            |log, args| {
                cases::desired_activity_count(log, args.case_id()?, args.desired_activities()?)
                    .map(IndicatorValue::from)
            },
        ),
        spec(
            g,
            "direct_cost",
            &[Param::CaseId, Param::AggregationMode, Param::DirectCostActivities],
            |log, args| {
                cases::direct_cost(
                    log,
                    args.case_id()?,
                    args.aggregation_mode()?,
                    args.direct_cost_activities()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        spec(g, "fixed_cost", CASE_MODE, |log, args| {
            cases::case_cost(log, args.case_id()?, StandardColumn::FixedCost, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        spec(g, "inventory_cost", CASE_MODE, |log, args| {
            cases::case_cost(log, args.case_id()?, StandardColumn::InventoryCost, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        spec(g, "labor_cost", CASE_MODE, |log, args| {
            cases::case_cost(log, args.case_id()?, StandardColumn::LaborCost, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        spec(g, "total_cost", CASE_MODE, |log, args| {
            cases::case_cost(log, args.case_id()?, StandardColumn::TotalCost, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        spec(g, "labor_cost_and_total_cost_ratio", CASE_MODE, |log, args| {
            cases::labor_cost_and_total_cost_ratio(log, args.case_id()?, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        spec(g, "maintenance_cost", CASE, |log, args| {
            cases::maintenance_cost(log, args.case_id()?).map(IndicatorValue::from)
        }),
        spec(g, "missed_deadline_cost", CASE, |log, args| {
            cases::missed_deadline_cost(log, args.case_id()?).map(IndicatorValue::from)
        }),
        spec(g, "resource_count", CASE, |log, args| {
            cases::resource_count(log, args.case_id()?).map(IndicatorValue::from)
        }),
    ]);
}

fn register_activities(specs: &mut Vec<IndicatorSpec>) {
    let g = Granularity::Activities;
    specs.extend([
        spec(g, "fixed_cost", ACTIVITY_MODE, |log, args| {
            activities::activity_cost(
                log,
                args.activity_name()?,
                StandardColumn::FixedCost,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "inventory_cost", ACTIVITY_MODE, |log, args| {
            activities::activity_cost(
                log,
                args.activity_name()?,
                StandardColumn::InventoryCost,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "labor_cost", ACTIVITY_MODE, |log, args| {
            activities::activity_cost(
                log,
                args.activity_name()?,
                StandardColumn::LaborCost,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "total_cost", ACTIVITY_MODE, |log, args| {
            activities::activity_cost(
                log,
                args.activity_name()?,
                StandardColumn::TotalCost,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "labor_cost_and_total_cost_ratio", ACTIVITY_MODE, |log, args| {
            activities::labor_cost_and_total_cost_ratio(
                log,
                args.activity_name()?,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "human_resource_count", ACTIVITY, |log, args| {
            activities::human_resource_count(log, args.activity_name()?).map(IndicatorValue::from)
        }),
        spec(g, "resource_count", ACTIVITY, |log, args| {
            activities::resource_count(log, args.activity_name()?).map(IndicatorValue::from)
        }),
        spec(g, "rework_count", ACTIVITY, |log, args| {
            activities::rework_count(log, args.activity_name()?).map(IndicatorValue::from)
        }),
        IndicatorSpec::not_implemented(Dimension::Cost, g, "rework_cost", ACTIVITY),
    ]);
}

fn register_groups(specs: &mut Vec<IndicatorSpec>) {
    let g = Granularity::Groups;
    specs.extend([
        spec(g, "fixed_cost", GROUP_MODE, |log, args| {
            groups::group_cost(log, args.case_ids()?, StandardColumn::FixedCost, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        spec(g, "expected_fixed_cost", GROUP_MODE, |log, args| {
            groups::expected_group_cost(
                log,
                args.case_ids()?,
                StandardColumn::FixedCost,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "inventory_cost", GROUP_MODE, |log, args| {
            groups::group_cost(
                log,
                args.case_ids()?,
                StandardColumn::InventoryCost,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "expected_inventory_cost", GROUP_MODE, |log, args| {
            groups::expected_group_cost(
                log,
                args.case_ids()?,
                StandardColumn::InventoryCost,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "labor_cost", GROUP_MODE, |log, args| {
            groups::group_cost(log, args.case_ids()?, StandardColumn::LaborCost, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        spec(g, "expected_labor_cost", GROUP_MODE, |log, args| {
            groups::expected_group_cost(
                log,
                args.case_ids()?,
                StandardColumn::LaborCost,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "total_cost", GROUP_MODE, |log, args| {
            groups::group_cost(log, args.case_ids()?, StandardColumn::TotalCost, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        spec(g, "expected_total_cost", GROUP_MODE, |log, args| {
            groups::expected_group_cost(
                log,
                args.case_ids()?,
                StandardColumn::TotalCost,
                args.aggregation_mode()?,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "maintenance_cost", GROUP, |log, args| {
            groups::group_latest_value(log, args.case_ids()?, StandardColumn::MaintenanceCost)
                .map(IndicatorValue::from)
        }),
        spec(g, "expected_maintenance_cost", GROUP, |log, args| {
            groups::expected_group_latest_value(log, args.case_ids()?, StandardColumn::MaintenanceCost)
                .map(IndicatorValue::from)
        }),
        spec(g, "missed_deadline_cost", GROUP, |log, args| {
            groups::group_latest_value(log, args.case_ids()?, StandardColumn::MissedDeadlineCost)
                .map(IndicatorValue::from)
        }),
        spec(g, "expected_missed_deadline_cost", GROUP, |log, args| {
            groups::expected_group_latest_value(
                log,
                args.case_ids()?,
                StandardColumn::MissedDeadlineCost,
            )
            .map(IndicatorValue::from)
        }),
        spec(g, "resource_count", GROUP, |log, args| {
            groups::resource_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec(g, "expected_resource_count", GROUP, |log, args| {
            groups::expected_resource_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec(g, "labor_cost_and_total_cost_ratio", GROUP_MODE, |log, args| {
            groups::labor_cost_and_total_cost_ratio(log, args.case_ids()?, args.aggregation_mode()?)
                .map(IndicatorValue::from)
        }),
        spec(
            g,
            "automated_activity_cost",
            &[Param::CaseIds, Param::AggregationMode, Param::AutomatedActivities],
            |log, args| {
                groups::automated_activity_cost(
                    log,
                    args.case_ids()?,
                    args.aggregation_mode()?,
                    args.automated_activities()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        spec(
            g,
            "expected_automated_activity_cost",
            &[Param::CaseIds, Param::AggregationMode, Param::AutomatedActivities],
            |log, args| {
                groups::expected_automated_activity_cost(
                    log,
                    args.case_ids()?,
                    args.aggregation_mode()?,
                    args.automated_activities()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        spec(
            g,
            "direct_cost",
            &[Param::CaseIds, Param::AggregationMode, Param::DirectCostActivities],
            |log, args| {
                groups::direct_cost(
                    log,
                    args.case_ids()?,
                    args.aggregation_mode()?,
                    args.direct_cost_activities()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        spec(
            g,
            "expected_direct_cost",
            &[Param::CaseIds, Param::AggregationMode, Param::DirectCostActivities],
            |log, args| {
                groups::expected_direct_cost(
                    log,
                    args.case_ids()?,
                    args.aggregation_mode()?,
                    args.direct_cost_activities()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        spec(
            g,
            "desired_activity_count",
            &[Param::CaseIds, Param::DesiredActivities],
            |log, args| {
                groups::desired_activity_count(log, args.case_ids()?, args.desired_activities()?)
                    .map(IndicatorValue::from)
            },
        ),
        spec(
            g,
            "expected_desired_activity_count",
            &[Param::CaseIds, Param::DesiredActivities],
            |log, args| {
                groups::expected_desired_activity_count(
                    log,
                    args.case_ids()?,
                    args.desired_activities()?,
                )
                .map(IndicatorValue::from)
            },
        ),
    ]);
}
