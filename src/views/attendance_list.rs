use crate::api::HrmApi;
use crate::model::{Attendance, AttendanceQuery, AttendanceStatus, StatusFilter};
use crate::views::LoadState;
use chrono::NaiveDate;
use tracing::warn;

pub const LOAD_ERROR: &str = "Failed to load attendance records.";

/// Counts over everything fetched, independent of the filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}

#[derive(Debug)]
pub struct AttendanceList {
    records: Vec<Attendance>,
    loading: bool,
    error: Option<String>,
    query: AttendanceQuery,
    date_filter: Option<NaiveDate>,
    status_filter: StatusFilter,
}

impl Default for AttendanceList {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceList {
    pub fn new() -> Self {
        Self::with_query(AttendanceQuery::default())
    }

    /// A list whose fetch is narrowed by the backend before any client filter.
    pub fn with_query(query: AttendanceQuery) -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            query,
            date_filter: None,
            status_filter: StatusFilter::All,
        }
    }

    /// Fetch the records. Also the retry action.
    pub async fn load<A: HrmApi + ?Sized>(&mut self, api: &A) {
        self.loading = true;
        self.error = None;

        match api.list_attendance(self.query).await {
            Ok(records) => self.records = records,
            Err(e) => {
                warn!(error = %e, "Attendance list fetch failed");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }

        self.loading = false;
    }

    pub fn records(&self) -> &[Attendance] {
        &self.records
    }

    pub fn date_filter(&self) -> Option<NaiveDate> {
        self.date_filter
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        self.date_filter = date;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status_filter = status;
    }

    pub fn clear_date_filter(&mut self) {
        self.date_filter = None;
    }

    pub fn clear_status_filter(&mut self) {
        self.status_filter = StatusFilter::All;
    }

    pub fn clear_filters(&mut self) {
        self.clear_date_filter();
        self.clear_status_filter();
    }

    pub fn has_active_filters(&self) -> bool {
        self.date_filter.is_some() || self.status_filter != StatusFilter::All
    }

    /// Records matching the date AND the status filter.
    pub fn filtered(&self) -> Vec<&Attendance> {
        self.records
            .iter()
            .filter(|a| self.date_filter.is_none_or(|d| a.date == d))
            .filter(|a| self.status_filter.matches(a.status))
            .collect()
    }

    pub fn summary(&self) -> AttendanceSummary {
        let present = self
            .records
            .iter()
            .filter(|a| a.status == AttendanceStatus::Present)
            .count();
        let absent = self
            .records
            .iter()
            .filter(|a| a.status == AttendanceStatus::Absent)
            .count();

        AttendanceSummary {
            total: self.records.len(),
            present,
            absent,
        }
    }

    pub fn state(&self) -> LoadState {
        if self.loading {
            LoadState::Loading
        } else if let Some(e) = &self.error {
            LoadState::Error(e.clone())
        } else if self.records.is_empty() {
            LoadState::Empty
        } else if self.filtered().is_empty() {
            LoadState::NoMatches
        } else {
            LoadState::Ready
        }
    }
}
