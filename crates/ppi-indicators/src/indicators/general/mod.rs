//! General dimension. Only defined over groups of cases.

pub mod groups;

use crate::registry::{ComputeFn, Dimension, Granularity, IndicatorSpec, Param};
use crate::value::IndicatorValue;

const GROUP: &[Param] = &[Param::CaseIds];

fn spec(name: &'static str, compute: ComputeFn) -> IndicatorSpec {
    IndicatorSpec::new(Dimension::General, Granularity::Groups, name, GROUP, compute)
}

pub(crate) fn register(specs: &mut Vec<IndicatorSpec>) {
    specs.extend([
        spec("activity_count", |log, args| {
            groups::activity_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec("expected_activity_count", |log, args| {
            groups::expected_activity_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec("activity_instance_count", |log, args| {
            groups::activity_instance_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec("expected_activity_instance_count", |log, args| {
            groups::expected_activity_instance_count(log, args.case_ids()?)
                .map(IndicatorValue::from)
        }),
        spec("case_count", |log, args| {
            groups::case_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec("human_resource_count", |log, args| {
            groups::human_resource_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec("expected_human_resource_count", |log, args| {
            groups::expected_human_resource_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec("resource_count", |log, args| {
            groups::resource_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec("expected_resource_count", |log, args| {
            groups::expected_resource_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec("role_count", |log, args| {
            groups::role_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
        spec("expected_role_count", |log, args| {
            groups::expected_role_count(log, args.case_ids()?).map(IndicatorValue::from)
        }),
    ]);
}
