pub mod kind;
pub mod performance;
pub mod render;
pub mod traits;

pub use kind::ReportKind;
pub use performance::PerformanceReport;
pub use render::render;
pub use traits::{ReportEngine, ReportRow};
