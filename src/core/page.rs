//! Page orchestration: fetch records, fetch conflicts, hand both to the
//! row builder.

use crate::api::AbsenceSource;
use crate::core::routes::{HOME_PATH, employee_path};
use crate::core::rows::{AbsenceField, absence_columns, absences_to_table_rows};
use crate::errors::{AppError, AppResult};
use crate::models::{AbsenceRecord, Conflict};
use crate::table::{SortConfig, SortableTable, TableRow};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

pub const CONFLICT_WARNING: &str = "There was an error fetching all conflict data.";

/// Upper bound on concurrent conflict requests.
const CONFLICT_WORKERS: usize = 8;

pub struct AbsencePage {
    pub title: String,
    pub current_path: String,
    pub rows: Vec<TableRow<AbsenceField>>,
    /// Non-blocking problem to show above the table.
    pub warning: Option<String>,
}

impl AbsencePage {
    pub fn into_table(
        self,
        default_sort: Option<SortConfig<AbsenceField>>,
    ) -> SortableTable<AbsenceField> {
        SortableTable::new(absence_columns(), self.rows, default_sort)
    }
}

/// Fetch the conflict flag of every absence and align it to `absences`.
///
/// Requests run on up to [`CONFLICT_WORKERS`] scoped threads and are
/// joined by absence id, so the order in which they complete does not
/// matter. Any failure, or a count that does not match, yields `None`:
/// partial conflict data is never shown.
pub fn load_conflicts(
    source: &dyn AbsenceSource,
    absences: &[AbsenceRecord],
) -> Option<Vec<Conflict>> {
    let next = &AtomicUsize::new(0);
    let workers = CONFLICT_WORKERS.min(absences.len());

    let responses: Vec<(i64, AppResult<Conflict>)> = thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                s.spawn(move || {
                    let mut out = Vec::new();
                    while let Some(absence) = absences.get(next.fetch_add(1, Ordering::Relaxed)) {
                        out.push((absence.id, source.fetch_conflict(absence.id)));
                    }
                    out
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| {
                h.join().unwrap_or_else(|_| {
                    log::error!("conflict worker panicked");
                    Vec::new()
                })
            })
            .collect()
    });

    let mut by_id: HashMap<i64, Conflict> = HashMap::with_capacity(absences.len());
    let mut failed = 0usize;

    for (id, response) in responses {
        match response {
            Ok(c) => {
                by_id.insert(id, c);
            }
            Err(e) => {
                log::warn!("conflict lookup for absence {id} failed: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 || by_id.len() != absences.len() {
        log::warn!(
            "suppressing conflicts: {} of {} fetched, {} failed",
            by_id.len(),
            absences.len(),
            failed
        );
        return None;
    }

    absences.iter().map(|a| by_id.get(&a.id).copied()).collect()
}

fn build_page(
    source: &dyn AbsenceSource,
    absences: &[AbsenceRecord],
    title: String,
    current_path: String,
    with_conflicts: bool,
) -> AbsencePage {
    let (conflicts, warning) = if with_conflicts && !absences.is_empty() {
        match load_conflicts(source, absences) {
            Some(c) => (Some(c), None),
            None => (None, Some(CONFLICT_WARNING.to_string())),
        }
    } else {
        (None, None)
    };

    let rows = absences_to_table_rows(absences, conflicts.as_deref(), Some(current_path.as_str()));

    AbsencePage {
        title,
        current_path,
        rows,
        warning,
    }
}

/// The absences overview.
pub fn load_page(source: &dyn AbsenceSource, with_conflicts: bool) -> AppResult<AbsencePage> {
    let absences = source.fetch_absences()?;
    log::info!("fetched {} absences", absences.len());

    Ok(build_page(
        source,
        &absences,
        "Absences".to_string(),
        HOME_PATH.to_string(),
        with_conflicts,
    ))
}

/// Detail view: one employee's absences, with links to self disabled.
pub fn load_employee_page(
    source: &dyn AbsenceSource,
    employee_id: &str,
    with_conflicts: bool,
) -> AppResult<AbsencePage> {
    let absences: Vec<AbsenceRecord> = source
        .fetch_absences()?
        .into_iter()
        .filter(|a| a.employee.id == employee_id)
        .collect();

    let Some(first) = absences.first() else {
        return Err(AppError::EmployeeNotFound(employee_id.to_string()));
    };
    let title = first.employee.full_name();
    log::info!("employee {employee_id}: {} absences", absences.len());

    Ok(build_page(
        source,
        &absences,
        title,
        employee_path(employee_id),
        with_conflicts,
    ))
}
