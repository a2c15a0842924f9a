pub mod attendance;
pub mod employee;

pub use attendance::{Attendance, AttendanceQuery, AttendanceStatus, NewAttendance, StatusFilter};
pub use employee::{Employee, NewEmployee};
