use super::{field, Field, QueryOptions};
use crate::enums::Language;

/// Parameters for `create_job`.
///
/// The default asks for an English job, the server's own default.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJobOptions {
    pub job_name: Option<String>,
    pub language: Option<Language>,
    pub external_id: Option<String>,
    /// Create the job under this sub-account; sent as `username`.
    pub sub_account: Option<String>,
}

impl Default for NewJobOptions {
    fn default() -> Self {
        Self {
            job_name: None,
            language: Some(Language::English),
            external_id: None,
            sub_account: None,
        }
    }
}

impl QueryOptions for NewJobOptions {
    fn fields() -> &'static [Field<Self>] {
        static FIELDS: &[Field<NewJobOptions>] = &[
            field!(NewJobOptions, "job_name", job_name: String),
            field!(NewJobOptions, "language", language: Language),
            field!(NewJobOptions, "external_id", external_id: String),
            field!(NewJobOptions, "username", sub_account: String),
        ];
        FIELDS
    }
}
