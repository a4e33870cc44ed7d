//! Package generators for test data.
//!
//! - [`RecordGenerator`]: raw sensor packages for every activity kind

pub mod record;

pub use record::{GenError, RecordGenerator};
