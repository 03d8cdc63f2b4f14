use std::fmt;

/// Structural shape of an input event log.
///
/// Determined from which optional columns the mapping configures. Exactly one
/// shape applies to any mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogShape {
    /// One row per activity occurrence, a single timestamp.
    Atomic,
    /// Lifecycle column present, instance ids missing.
    DerivableInterval,
    /// One row per occurrence with both start and complete timestamps.
    ProductionStyle,
    /// Lifecycle column and instance ids both present.
    ExplicitInterval,
}

impl LogShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogShape::Atomic => "ATOMIC",
            LogShape::DerivableInterval => "DERIVABLE_INTERVAL",
            LogShape::ProductionStyle => "PRODUCTION_STYLE",
            LogShape::ExplicitInterval => "EXPLICIT_INTERVAL",
        }
    }

    /// Returns true when rows must be split into start and complete events.
    pub fn needs_splitting(&self) -> bool {
        matches!(self, LogShape::Atomic | LogShape::ProductionStyle)
    }

    /// Returns true when instance ids have to be inferred.
    pub fn needs_matching(&self) -> bool {
        !matches!(self, LogShape::ExplicitInterval)
    }
}

impl fmt::Display for LogShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
