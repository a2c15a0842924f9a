//! Command-line front end: one subcommand per form or list action.

pub mod commands;
pub mod render;

use crate::model::{AttendanceStatus, StatusFilter};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// HR admin console for employee records and daily attendance
#[derive(Parser, Debug)]
#[command(name = "hrm", author, version, about, long_about = None)]
pub struct Args {
    /// Backend base url; overrides HRM_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register, list and remove employees
    #[command(subcommand)]
    Employees(EmployeeCommand),

    /// Mark and review attendance
    #[command(subcommand)]
    Attendance(AttendanceCommand),
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCommand {
    /// Show every employee
    List,

    /// Register a new employee
    Add {
        /// Admin-assigned code, e.g. EMP001
        #[arg(long, default_value = "")]
        employee_id: String,
        #[arg(long, default_value = "")]
        full_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        department: String,
    },

    /// Remove employees by their numeric id
    Delete {
        #[arg(required = true)]
        ids: Vec<u64>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AttendanceCommand {
    /// Show attendance records with optional filters
    List {
        /// Only records of this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// all, present or absent
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Ask the backend for one employee's records only
        #[arg(long)]
        employee: Option<u64>,
    },

    /// Mark one employee present or absent for a day
    Mark {
        /// Numeric id of the employee
        #[arg(long)]
        employee: Option<u64>,

        /// Defaults to today; future dates are refused
        #[arg(long)]
        date: Option<NaiveDate>,

        /// present or absent
        #[arg(long, default_value = "present")]
        status: AttendanceStatus,
    },
}
