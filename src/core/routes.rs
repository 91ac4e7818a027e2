//! Navigation targets inside the app.

pub const HOME_PATH: &str = "/";

/// Detail path for an employee, e.g. `/employees/42`.
pub fn employee_path(employee_id: &str) -> String {
    format!("/employees/{employee_id}")
}

/// Inverse of [`employee_path`].
pub fn employee_id_from_path(path: &str) -> Option<&str> {
    path.strip_prefix("/employees/").filter(|id| !id.is_empty())
}

/// Command a user runs to follow a link to `path`.
pub fn command_for_path(path: &str) -> Option<String> {
    if path == HOME_PATH {
        return Some("absview list".to_string());
    }
    employee_id_from_path(path).map(|id| format!("absview employee {id}"))
}
