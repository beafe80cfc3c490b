pub mod dispatcher;
pub mod loader;
pub mod record;

pub use dispatcher::ReportProcessor;
pub use loader::{read_records, LoaderOptions, RecordLoader};
pub use record::Record;
