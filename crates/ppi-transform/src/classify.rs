use ppi_model::{ColumnMapping, LogShape, StandardColumn};

/// Determine a log's shape from which columns its mapping configures.
///
/// Table contents are never inspected. The first matching rule wins:
///
/// | lifecycle | instance | start timestamp | shape |
/// |---|---|---|---|
/// | yes | yes | any | `ExplicitInterval` |
/// | yes | no | any | `DerivableInterval` |
/// | no | any | yes | `ProductionStyle` |
/// | no | any | no | `Atomic` |
pub fn classify_log(mapping: &ColumnMapping) -> LogShape {
    let lifecycle = mapping.has(StandardColumn::LifecycleTransition);
    let instance = mapping.has(StandardColumn::Instance);
    let start = mapping.has(StandardColumn::StartTimestamp);

    if lifecycle && instance {
        LogShape::ExplicitInterval
    } else if lifecycle {
        LogShape::DerivableInterval
    } else if start {
        LogShape::ProductionStyle
    } else {
        LogShape::Atomic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ColumnMapping {
        ColumnMapping::new("case", "activity", "ts")
    }

    #[test]
    fn test_atomic() {
        assert_eq!(classify_log(&base()), LogShape::Atomic);
    }

    #[test]
    fn test_instance_without_lifecycle_is_atomic() {
        let mapping = base().with_column(StandardColumn::Instance, "inst");
        assert_eq!(classify_log(&mapping), LogShape::Atomic);
    }

    #[test]
    fn test_production_style() {
        let mapping = base().with_column(StandardColumn::StartTimestamp, "start");
        assert_eq!(classify_log(&mapping), LogShape::ProductionStyle);
    }

    #[test]
    fn test_derivable_interval() {
        let mapping = base().with_column(StandardColumn::LifecycleTransition, "lifecycle");
        assert_eq!(classify_log(&mapping), LogShape::DerivableInterval);
    }

    #[test]
    fn test_lifecycle_wins_over_start_timestamp() {
        let mapping = base()
            .with_column(StandardColumn::LifecycleTransition, "lifecycle")
            .with_column(StandardColumn::StartTimestamp, "start");
        assert_eq!(classify_log(&mapping), LogShape::DerivableInterval);
    }

    #[test]
    fn test_explicit_interval() {
        let mapping = base()
            .with_column(StandardColumn::LifecycleTransition, "lifecycle")
            .with_column(StandardColumn::Instance, "inst")
            .with_column(StandardColumn::StartTimestamp, "start");
        assert_eq!(classify_log(&mapping), LogShape::ExplicitInterval);
    }
}
