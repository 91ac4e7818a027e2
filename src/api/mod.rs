//! Remote data source: absence records and per-absence conflict status.

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::errors::AppResult;
use crate::models::{AbsenceRecord, Conflict};

/// Read-only access to absence data.
///
/// Conflict lookups are issued from several threads at once.
pub trait AbsenceSource: Sync {
    fn fetch_absences(&self) -> AppResult<Vec<AbsenceRecord>>;

    fn fetch_conflict(&self, absence_id: i64) -> AppResult<Conflict>;
}
