//! Shapes absence records into generic table rows.

use crate::core::routes::employee_path;
use crate::models::{AbsenceRecord, Conflict};
use crate::table::{Cell, CellValue, Element, TableColumn, TableField, TableRow};
use crate::utils::date::format_dmy;
use crate::utils::formatting::yes_no;

pub const CONFLICT_GLYPH: &str = "⚠️";
pub const CONFLICT_LABEL: &str = "Conflict";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsenceField {
    Name,
    Type,
    Approved,
    StartDate,
    EndDate,
}

impl TableField for AbsenceField {
    fn key(&self) -> &'static str {
        match self {
            AbsenceField::Name => "name",
            AbsenceField::Type => "type",
            AbsenceField::Approved => "approved",
            AbsenceField::StartDate => "startDate",
            AbsenceField::EndDate => "endDate",
        }
    }

    fn all() -> &'static [Self] {
        &[
            AbsenceField::Name,
            AbsenceField::Type,
            AbsenceField::Approved,
            AbsenceField::StartDate,
            AbsenceField::EndDate,
        ]
    }
}

/// Header order of the absences table.
pub fn absence_columns() -> Vec<TableColumn<AbsenceField>> {
    vec![
        TableColumn::new("Name", AbsenceField::Name, true),
        TableColumn::new("Type", AbsenceField::Type, true),
        TableColumn::new("Approved", AbsenceField::Approved, false),
        TableColumn::new("Start Date", AbsenceField::StartDate, true),
        TableColumn::new("End Date", AbsenceField::EndDate, true),
    ]
}

/// Build one row per absence.
///
/// `conflicts` is aligned with `absences` by index; callers must pass
/// `None` rather than a misaligned slice. The name link is disabled when
/// `current_path` is already that employee's page.
pub fn absences_to_table_rows(
    absences: &[AbsenceRecord],
    conflicts: Option<&[Conflict]>,
    current_path: Option<&str>,
) -> Vec<TableRow<AbsenceField>> {
    absences
        .iter()
        .enumerate()
        .map(|(index, absence)| {
            let has_conflict = conflicts
                .and_then(|c| c.get(index))
                .is_some_and(|c| c.conflicts);
            absence_to_row(absence, has_conflict, current_path)
        })
        .collect()
}

fn absence_to_row(
    absence: &AbsenceRecord,
    has_conflict: bool,
    current_path: Option<&str>,
) -> TableRow<AbsenceField> {
    let start = absence.start_date;
    let end = absence.end_date();
    let name = absence.employee.full_name();

    TableRow::new(
        absence.id,
        vec![
            Cell::new(
                AbsenceField::Name,
                name_element(absence, &name, has_conflict, current_path),
                CellValue::Text(name),
            ),
            Cell::new(
                AbsenceField::Type,
                type_element(absence),
                CellValue::Text(absence.absence_type.as_str().to_string()),
            ),
            Cell::new(
                AbsenceField::Approved,
                yes_no(absence.approved),
                CellValue::Bool(absence.approved),
            )
            .with_sortable(false),
            Cell::new(
                AbsenceField::StartDate,
                format_dmy(&start),
                CellValue::Date(start),
            ),
            Cell::new(AbsenceField::EndDate, format_dmy(&end), CellValue::Date(end)),
        ],
    )
}

fn name_element(
    absence: &AbsenceRecord,
    name: &str,
    has_conflict: bool,
    current_path: Option<&str>,
) -> Element {
    let to = employee_path(&absence.employee.id);
    let disabled = current_path == Some(to.as_str());

    let mut children = vec![Element::text(name)];
    if has_conflict {
        children.push(Element::text(" "));
        children.push(Element::icon(CONFLICT_GLYPH, CONFLICT_LABEL));
    }

    Element::Link {
        to,
        disabled,
        children,
    }
}

fn type_element(absence: &AbsenceRecord) -> Element {
    let label = Element::text(absence.absence_type.label());
    match absence.absence_type.icon() {
        Some((glyph, alt)) => Element::Group(vec![
            Element::icon(glyph, alt),
            Element::text(" "),
            label,
        ]),
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AbsenceType, Employee};
    use crate::utils::date::parse_start_date;

    #[allow(clippy::too_many_arguments)]
    fn absence(
        id: i64,
        emp: &str,
        first: &str,
        last: &str,
        ty: AbsenceType,
        start: &str,
        days: u32,
        approved: bool,
    ) -> AbsenceRecord {
        AbsenceRecord {
            id,
            start_date: parse_start_date(start).unwrap(),
            days,
            absence_type: ty,
            employee: Employee {
                id: emp.into(),
                first_name: first.into(),
                last_name: last.into(),
            },
            approved,
        }
    }

    fn mock_absences() -> Vec<AbsenceRecord> {
        vec![
            absence(1, "1", "John", "Doe", AbsenceType::Sickness, "2024-01-01", 3, true),
            absence(2, "2", "Jane", "Smith", AbsenceType::AnnualLeave, "2024-01-02", 5, false),
        ]
    }

    fn mock_conflicts() -> Vec<Conflict> {
        vec![Conflict::new(true), Conflict::new(false)]
    }

    fn cell(row: &TableRow<AbsenceField>, f: AbsenceField) -> &Cell<AbsenceField> {
        row.cell(f).unwrap()
    }

    #[test]
    fn returns_one_row_per_absence_with_every_column() {
        let rows = absences_to_table_rows(&mock_absences(), None, None);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.data.len(), absence_columns().len());
            for col in absence_columns() {
                assert_eq!(row.data.iter().filter(|c| c.column == col.field).count(), 1);
            }
        }
        assert_eq!(rows[0].id, crate::table::RowId::Number(1));
    }

    #[test]
    fn conflict_indicator_only_when_flagged() {
        let conflicts = mock_conflicts();
        let rows = absences_to_table_rows(&mock_absences(), Some(&conflicts), None);

        let john = &cell(&rows[0], AbsenceField::Name).element;
        assert!(john.has_icon(CONFLICT_LABEL));
        assert_eq!(john.plain(), "John Doe ⚠️");

        let jane = &cell(&rows[1], AbsenceField::Name).element;
        assert!(!jane.has_icon(CONFLICT_LABEL));

        let none = absences_to_table_rows(&mock_absences(), None, None);
        assert!(none.iter().all(|r| !cell(r, AbsenceField::Name).element.has_icon(CONFLICT_LABEL)));
    }

    #[test]
    fn name_value_is_plain_text() {
        let conflicts = mock_conflicts();
        let rows = absences_to_table_rows(&mock_absences(), Some(&conflicts), None);
        assert_eq!(
            cell(&rows[0], AbsenceField::Name).value,
            CellValue::Text("John Doe".into())
        );
    }

    #[test]
    fn current_path_disables_own_link() {
        fn link(row: &TableRow<AbsenceField>) -> Option<(&str, bool)> {
            cell(row, AbsenceField::Name).element.link()
        }

        let rows = absences_to_table_rows(
            &mock_absences(),
            Some(&mock_conflicts()),
            Some("/employees/1"),
        );
        assert_eq!(link(&rows[0]), Some(("/employees/1", true)));
        assert_eq!(link(&rows[1]), Some(("/employees/2", false)));

        let rows = absences_to_table_rows(&mock_absences(), None, None);
        assert_eq!(link(&rows[0]), Some(("/employees/1", false)));
    }

    #[test]
    fn formats_start_and_end_dates() {
        let rows = absences_to_table_rows(&mock_absences(), None, None);
        assert_eq!(cell(&rows[0], AbsenceField::StartDate).element.plain(), "01/01/2024");
        assert_eq!(cell(&rows[1], AbsenceField::StartDate).element.plain(), "02/01/2024");
        assert_eq!(cell(&rows[0], AbsenceField::EndDate).element.plain(), "04/01/2024");
        assert_eq!(cell(&rows[1], AbsenceField::EndDate).element.plain(), "07/01/2024");

        let CellValue::Date(end) = cell(&rows[0], AbsenceField::EndDate).value else {
            panic!("end date value is not a date");
        };
        assert_eq!(end, parse_start_date("2024-01-04").unwrap());
    }

    #[test]
    fn type_and_approved_cells() {
        let rows = absences_to_table_rows(&mock_absences(), None, None);
        let ty = cell(&rows[1], AbsenceField::Type);
        assert_eq!(ty.element.plain(), "🏖️ Annual Leave");
        assert_eq!(ty.value, CellValue::Text("ANNUAL_LEAVE".into()));

        let approved = cell(&rows[0], AbsenceField::Approved);
        assert_eq!(approved.element.plain(), "Yes");
        assert_eq!(approved.value, CellValue::Bool(true));
        assert_eq!(approved.sortable, Some(false));
        assert_eq!(cell(&rows[1], AbsenceField::Approved).element.plain(), "No");
    }

    #[test]
    fn unsupported_type_has_empty_label() {
        let a = absence(9, "9", "A", "B", AbsenceType::from_wire("OTHER"), "2024-02-01", 1, true);
        let rows = absences_to_table_rows(&[a], None, None);
        let ty = cell(&rows[0], AbsenceField::Type);
        assert_eq!(ty.element.plain(), "");
        assert_eq!(ty.value, CellValue::Text("OTHER".into()));
    }

    #[test]
    fn short_conflict_slice_never_flags_missing_rows() {
        let one = vec![Conflict::new(true)];
        let mut absences = mock_absences();
        absences.reverse();
        let rows = absences_to_table_rows(&absences, Some(&one), None);
        assert!(cell(&rows[0], AbsenceField::Name).element.has_icon(CONFLICT_LABEL));
        assert!(!cell(&rows[1], AbsenceField::Name).element.has_icon(CONFLICT_LABEL));
    }

    #[test]
    fn column_keys_parse_back() {
        assert_eq!(AbsenceField::from_key("startDate").unwrap(), AbsenceField::StartDate);
        assert_eq!(AbsenceField::from_key("NAME").unwrap(), AbsenceField::Name);
        assert!(AbsenceField::from_key("days").is_err());
    }
}
