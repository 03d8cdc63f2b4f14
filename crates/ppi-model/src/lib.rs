pub mod columns;
pub mod error;
pub mod mapping;
pub mod options;
pub mod shape;

pub use columns::{LifecyclePhase, StandardColumn};
pub use error::{MappingError, Result};
pub use mapping::{ColumnMapping, StandardMapping};
pub use options::{FormatOptions, TimestampFormat};
pub use shape::LogShape;
