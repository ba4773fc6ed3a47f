use chrono::{DateTime, Utc};

use super::{field, Field, QueryOptions};
use crate::enums::{Fidelity, JobDifficulty, JobStatus, Priority};

/// Filters for `get_job_list`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobListOptions {
    pub create_date_from: Option<DateTime<Utc>>,
    pub create_date_to: Option<DateTime<Utc>>,
    pub start_date_from: Option<DateTime<Utc>>,
    pub start_date_to: Option<DateTime<Utc>>,
    pub due_date_from: Option<DateTime<Utc>>,
    pub due_date_to: Option<DateTime<Utc>>,
    pub complete_date_from: Option<DateTime<Utc>>,
    pub complete_date_to: Option<DateTime<Utc>>,
    pub job_status: Option<JobStatus>,
    pub fidelity: Option<Fidelity>,
    pub priority: Option<Priority>,
    pub turnaround_time_hours_from: Option<i32>,
    pub turnaround_time_hours_to: Option<i32>,
    pub job_name: Option<String>,
    pub external_id: Option<String>,
    pub job_difficulty: Option<JobDifficulty>,
    /// Sent as `Username`.
    pub sub_account: Option<String>,
}

impl QueryOptions for JobListOptions {
    fn fields() -> &'static [Field<Self>] {
        static FIELDS: &[Field<JobListOptions>] = &[
            field!(JobListOptions, "CreateDateFrom", create_date_from: DateTime<Utc>),
            field!(JobListOptions, "CreateDateTo", create_date_to: DateTime<Utc>),
            field!(JobListOptions, "StartDateFrom", start_date_from: DateTime<Utc>),
            field!(JobListOptions, "StartDateTo", start_date_to: DateTime<Utc>),
            field!(JobListOptions, "DueDateFrom", due_date_from: DateTime<Utc>),
            field!(JobListOptions, "DueDateTo", due_date_to: DateTime<Utc>),
            field!(JobListOptions, "CompleteDateFrom", complete_date_from: DateTime<Utc>),
            field!(JobListOptions, "CompleteDateTo", complete_date_to: DateTime<Utc>),
            field!(JobListOptions, "JobStatus", job_status: JobStatus),
            field!(JobListOptions, "Fidelity", fidelity: Fidelity),
            field!(JobListOptions, "Priority", priority: Priority),
            field!(JobListOptions, "TurnaroundTimeHoursFrom", turnaround_time_hours_from: i32),
            field!(JobListOptions, "TurnaroundTimeHoursTo", turnaround_time_hours_to: i32),
            field!(JobListOptions, "JobName", job_name: String),
            field!(JobListOptions, "ExternalId", external_id: String),
            field!(JobListOptions, "JobDifficulty", job_difficulty: JobDifficulty),
            field!(JobListOptions, "Username", sub_account: String),
        ];
        FIELDS
    }
}
