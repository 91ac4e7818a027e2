use serde::Deserialize;

/// Conflict status of a single absence, as returned by `/conflict/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Conflict {
    pub conflicts: bool,
}

impl Conflict {
    pub fn new(conflicts: bool) -> Self {
        Self { conflicts }
    }
}
