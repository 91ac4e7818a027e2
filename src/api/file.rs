use crate::api::AbsenceSource;
use crate::errors::{AppError, AppResult};
use crate::models::{AbsenceRecord, Conflict};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Offline source backed by JSON files.
///
/// The absences file holds the same array the API returns. The optional
/// conflicts file is an object keyed by absence id:
/// `{ "1": { "conflicts": true } }`. Without it every absence reports no
/// conflict; with it, ids missing from the file fail like a failed request.
pub struct FileSource {
    absences: Vec<AbsenceRecord>,
    conflicts: Option<HashMap<String, Conflict>>,
}

impl FileSource {
    pub fn open(absences: &Path, conflicts: Option<&Path>) -> AppResult<Self> {
        log::debug!("reading absences from {}", absences.display());
        let absences = serde_json::from_str(&fs::read_to_string(absences)?)?;

        let conflicts = match conflicts {
            Some(p) => {
                log::debug!("reading conflicts from {}", p.display());
                Some(serde_json::from_str(&fs::read_to_string(p)?)?)
            }
            None => None,
        };

        Ok(Self {
            absences,
            conflicts,
        })
    }

    pub fn from_parts(
        absences: Vec<AbsenceRecord>,
        conflicts: Option<HashMap<String, Conflict>>,
    ) -> Self {
        Self {
            absences,
            conflicts,
        }
    }
}

impl AbsenceSource for FileSource {
    fn fetch_absences(&self) -> AppResult<Vec<AbsenceRecord>> {
        Ok(self.absences.clone())
    }

    fn fetch_conflict(&self, absence_id: i64) -> AppResult<Conflict> {
        match &self.conflicts {
            None => Ok(Conflict::default()),
            Some(map) => map
                .get(&absence_id.to_string())
                .copied()
                .ok_or(AppError::ConflictNotFound(absence_id)),
        }
    }
}
