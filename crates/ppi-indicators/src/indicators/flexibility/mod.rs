//! Flexibility dimension.
//!
//! Catalogued so selections and reports list them; none is computed yet.

use crate::registry::{Dimension, Granularity, IndicatorSpec, Param};

const CASE: &[Param] = &[Param::CaseId];
const ACTIVITY: &[Param] = &[Param::ActivityName];
const GROUP: &[Param] = &[Param::CaseIds];

pub(crate) fn register(specs: &mut Vec<IndicatorSpec>) {
    let pending = |granularity: Granularity, name: &'static str, params: &'static [Param]| {
        IndicatorSpec::not_implemented(Dimension::Flexibility, granularity, name, params)
    };
    specs.extend([
        pending(Granularity::Activities, "activity_instance_and_human_resource_count_ratio", ACTIVITY),
        pending(Granularity::Activities, "client_count", ACTIVITY),
        pending(Granularity::Activities, "directly_follows_relations_count", ACTIVITY),
        pending(Granularity::Activities, "human_resource_count", ACTIVITY),
        pending(Granularity::Cases, "activity_and_role_count_ratio", CASE),
        pending(Granularity::Cases, "directly_follows_relations_count", CASE),
        pending(Granularity::Cases, "human_resource_count", CASE),
        pending(Granularity::Cases, "optional_activity_count", CASE),
        pending(Granularity::Cases, "optionality", CASE),
        pending(Granularity::Cases, "role_count", CASE),
        pending(Granularity::Cases, "variant_case_coverage", CASE),
        pending(Granularity::Groups, "variant_count", GROUP),
    ]);
}
