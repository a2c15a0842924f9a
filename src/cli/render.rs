//! Plain-text tables for the terminal.

use crate::model::AttendanceStatus;
use crate::utils::format::display_date;
use crate::views::{AttendanceList, EmployeeList, LoadState};

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

pub fn employees(list: &EmployeeList) -> String {
    let mut out = format!("All Employees ({})\n", list.caption());

    match list.state() {
        LoadState::Loading => {}
        LoadState::Error(msg) => out.push_str(&msg),
        LoadState::Empty | LoadState::NoMatches => out.push_str("No employees yet."),
        LoadState::Ready => {
            let rows: Vec<Vec<String>> = list
                .employees()
                .iter()
                .map(|e| {
                    let mut name = e.full_name.clone();
                    if list.is_deleting(e.id) {
                        name.push_str(" (removing)");
                    }
                    vec![
                        e.id.to_string(),
                        e.employee_id.clone(),
                        name,
                        e.email.clone(),
                        e.department.clone(),
                    ]
                })
                .collect();
            out.push_str(&table(
                &["ID", "Employee ID", "Full Name", "Email", "Department"],
                &rows,
            ));
        }
    }
    out
}

pub fn attendance(list: &AttendanceList) -> String {
    let mut out = String::from("Attendance Records");

    let state = list.state();
    if state != LoadState::Loading {
        let s = list.summary();
        out.push_str(&format!(
            " ({} total · {} present · {} absent)",
            s.total, s.present, s.absent
        ));
    }
    out.push('\n');

    match state {
        LoadState::Loading => {}
        LoadState::Error(msg) => out.push_str(&msg),
        LoadState::Empty => out.push_str("No attendance records yet"),
        LoadState::NoMatches => out.push_str("No records match your filters."),
        LoadState::Ready => {
            let rows: Vec<Vec<String>> = list
                .filtered()
                .iter()
                .map(|a| {
                    vec![
                        a.employee_name.clone(),
                        display_date(a.date),
                        status_badge(a.status),
                    ]
                })
                .collect();
            out.push_str(&table(&["Employee", "Date", "Status"], &rows));
        }
    }
    out
}

fn status_badge(status: AttendanceStatus) -> String {
    match status {
        AttendanceStatus::Present => "● Present".to_string(),
        AttendanceStatus::Absent => "○ Absent".to_string(),
    }
}

/// `label: message` lines for inline form errors.
pub fn field_errors<'a>(errors: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    errors
        .into_iter()
        .map(|(label, msg)| format!("  {label}: {msg}"))
        .collect::<Vec<_>>()
        .join("\n")
}
