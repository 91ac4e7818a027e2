pub mod absence;
pub mod absence_type;
pub mod conflict;

pub use absence::{AbsenceRecord, Employee};
pub use absence_type::AbsenceType;
pub use conflict::Conflict;
