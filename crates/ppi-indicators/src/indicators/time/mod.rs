//! Time dimension.

pub mod activities;
pub mod cases;
pub mod instances;

use crate::registry::{ComputeFn, Dimension, Granularity, IndicatorSpec, Param};
use crate::value::IndicatorValue;

const INSTANCE: &[Param] = &[Param::InstanceId];
const CASE: &[Param] = &[Param::CaseId];
const CASE_AUTOMATED: &[Param] = &[Param::CaseId, Param::AutomatedActivities];
const CASE_A_B: &[Param] = &[Param::CaseId, Param::ActivityA, Param::ActivityB];
const ACTIVITY: &[Param] = &[Param::ActivityName];

fn spec(
    granularity: Granularity,
    name: &'static str,
    params: &'static [Param],
    compute: ComputeFn,
) -> IndicatorSpec {
    IndicatorSpec::new(Dimension::Time, granularity, name, params, compute)
}

fn pending(granularity: Granularity, name: &'static str, params: &'static [Param]) -> IndicatorSpec {
    IndicatorSpec::not_implemented(Dimension::Time, granularity, name, params)
}

pub(crate) fn register(specs: &mut Vec<IndicatorSpec>) {
    specs.extend([
        spec(Granularity::Instances, "service_time", INSTANCE, |log, args| {
            instances::service_time(log, args.instance_id()?).map(IndicatorValue::from)
        }),
        pending(Granularity::Instances, "lead_time", INSTANCE),
        pending(Granularity::Instances, "service_and_lead_time_ratio", INSTANCE),
        pending(Granularity::Instances, "waiting_time", INSTANCE),
    ]);

    specs.extend([
        spec(Granularity::Cases, "automated_activity_count", CASE_AUTOMATED, |log, args| {
            cases::automated_activity_count(log, args.case_id()?, args.automated_activities()?)
                .map(IndicatorValue::from)
        }),
        spec(
            Granularity::Cases,
            "automated_activity_instance_count",
            CASE_AUTOMATED,
            |log, args| {
                cases::automated_activity_instance_count(
                    log,
                    args.case_id()?,
                    args.automated_activities()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        spec(Granularity::Cases, "lead_time", CASE, |log, args| {
            cases::lead_time(log, args.case_id()?).map(IndicatorValue::from)
        }),
        spec(
            Granularity::Cases,
            "lead_time_deviation_from_deadline",
            &[Param::CaseId, Param::Deadline],
            |log, args| {
                cases::lead_time_deviation_from_deadline(log, args.case_id()?, args.deadline()?)
                    .map(IndicatorValue::from)
            },
        ),
        spec(
            Granularity::Cases,
            "lead_time_deviation_from_expectation",
            &[Param::CaseId, Param::Expectation],
            |log, args| {
                cases::lead_time_deviation_from_expectation(
                    log,
                    args.case_id()?,
                    args.expectation()?,
                )
                .map(IndicatorValue::from)
            },
        ),
        spec(Granularity::Cases, "service_and_lead_time_ratio", CASE, |log, args| {
            cases::service_and_lead_time_ratio(log, args.case_id()?).map(IndicatorValue::from)
        }),
        spec(Granularity::Cases, "service_time", CASE, |log, args| {
            cases::service_time(log, args.case_id()?).map(IndicatorValue::from)
        }),
        pending(Granularity::Cases, "active_time", CASE),
        pending(Granularity::Cases, "automated_activity_service_time", CASE_AUTOMATED),
        pending(Granularity::Cases, "handover_count", CASE),
        pending(
            Granularity::Cases,
            "lead_time_from_activity_a",
            &[Param::CaseId, Param::ActivityA],
        ),
        pending(Granularity::Cases, "lead_time_from_activity_a_to_b", CASE_A_B),
        pending(
            Granularity::Cases,
            "lead_time_to_activity_a",
            &[Param::CaseId, Param::ActivityA],
        ),
        pending(Granularity::Cases, "service_time_from_activity_a_to_b", CASE_A_B),
        pending(Granularity::Cases, "waiting_time", CASE),
        pending(Granularity::Cases, "waiting_time_from_activity_a_to_b", CASE_A_B),
    ]);

    specs.extend([
        spec(Granularity::Activities, "service_time", ACTIVITY, |log, args| {
            activities::service_time(log, args.activity_name()?).map(IndicatorValue::from)
        }),
        pending(Granularity::Activities, "lead_time", ACTIVITY),
        pending(Granularity::Activities, "service_and_lead_time_ratio", ACTIVITY),
        pending(Granularity::Activities, "waiting_time", ACTIVITY),
    ]);
}
