use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;
use uuid::Uuid;

use crate::enums::{
    Fidelity, JobDifficulty, JobStatus, Priority, SpeakerGender, Tag, TokenType,
};
use crate::options::value::parse_date;

/// Server timestamps usually come without an offset; they are UTC.
fn wire_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => parse_date(text).map(Some).map_err(serde::de::Error::custom),
    }
}

/// Returned by `create_job`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateJobResult {
    #[serde(rename = "JobId")]
    pub job_id: Uuid,
    #[serde(rename = "TaskId")]
    pub task_id: Uuid,
}

/// A job as returned by `get_job_info` and `get_job_list`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Job {
    #[serde(rename = "JobId")]
    pub job_id: Uuid,

    #[serde(rename = "JobName", default)]
    pub job_name: Option<String>,

    /// Only filled in job lists.
    #[serde(rename = "Username", default)]
    pub username: Option<String>,

    #[serde(rename = "MediaLengthSeconds", default)]
    pub media_length_seconds: Option<f64>,

    #[serde(rename = "ExternalID", default)]
    pub external_id: Option<String>,

    #[serde(rename = "Priority", default)]
    pub priority: Option<Priority>,

    #[serde(rename = "Fidelity", default)]
    pub fidelity: Option<Fidelity>,

    #[serde(rename = "JobStatus", default)]
    pub job_status: Option<JobStatus>,

    #[serde(rename = "TurnaroundTimeHours", default)]
    pub turnaround_time_hours: Option<i32>,

    #[serde(rename = "SourceLanguage", default)]
    pub source_language: Option<String>,

    #[serde(rename = "TargetLanguage", default)]
    pub target_language: Option<String>,

    #[serde(rename = "CreationDate", default, deserialize_with = "wire_date")]
    pub creation_date: Option<DateTime<Utc>>,

    #[serde(rename = "StartDate", default, deserialize_with = "wire_date")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(rename = "DueDate", default, deserialize_with = "wire_date")]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(rename = "CompletedDate", default, deserialize_with = "wire_date")]
    pub completed_date: Option<DateTime<Utc>>,

    #[serde(rename = "ReturnDate", default, deserialize_with = "wire_date")]
    pub return_date: Option<DateTime<Utc>>,

    #[serde(rename = "AuthorizationDate", default, deserialize_with = "wire_date")]
    pub authorization_date: Option<DateTime<Utc>>,

    // The API has shipped both spellings.
    #[serde(rename = "JobDifficulty", alias = "JobDiffiulty", default)]
    pub job_difficulty: Option<JobDifficulty>,

    #[serde(rename = "ReturnTargets", default)]
    pub return_targets: Option<serde_json::Value>,

    #[serde(rename = "Options", default)]
    pub options: Option<serde_json::Value>,
}

impl Job {
    /// COMPLETE.
    pub fn is_complete(&self) -> bool {
        self.job_status == Some(JobStatus::Complete)
    }

    /// MEDIA_FAILURE.
    pub fn is_failed(&self) -> bool {
        self.job_status == Some(JobStatus::MediaFailure)
    }
}

/// Returned by `get_job_list`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobList {
    #[serde(rename = "Username", default)]
    pub username: Option<String>,

    #[serde(rename = "ActiveJobs", default)]
    pub active_jobs: Vec<Job>,
}

/// Full timed transcript of a job, returned by `get_element_list`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElementList {
    pub version: Option<i32>,
    /// Milliseconds.
    pub start_time: Option<i64>,
    /// Milliseconds.
    pub end_time: Option<i64>,
    pub language: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub keywords: HashMap<String, MetaToken>,
    #[serde(default)]
    pub topics: HashMap<String, MetaToken>,
    #[serde(default)]
    pub entities: HashMap<String, MetaToken>,
}

impl ElementList {
    /// Plain text of every token, segments separated by newlines.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(Segment::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Segment {
    pub speaker_change: Option<bool>,
    pub speaker_id: Option<i32>,
    pub interpolated: Option<bool>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    #[serde(default)]
    pub sequences: Vec<Sequence>,
    pub style: Option<String>,
}

impl Segment {
    fn text(&self) -> String {
        let mut out = String::new();
        for token in self.sequences.iter().flat_map(|s| s.tokens.iter()) {
            let word = token.display_as.as_deref().unwrap_or(&token.value);
            if !out.is_empty() && token.token_type != Some(TokenType::Punctuation) {
                out.push(' ');
            }
            out.push_str(word);
        }
        out
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sequence {
    pub interpolated: Option<bool>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub confidence_score: Option<f32>,
    #[serde(default)]
    pub tokens: Vec<Token>,
    pub style: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Token {
    pub interpolated: Option<bool>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", default)]
    pub token_type: Option<TokenType>,
    pub display_as: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub style: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Speaker {
    pub name: Option<String>,
    pub id: Option<i32>,
    pub gender: Option<SpeakerGender>,
}

/// A keyword, topic or entity and where it occurs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetaToken {
    pub display_name: Option<String>,
    pub url: Option<Url>,
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
}

/// Milliseconds.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct TimeRange {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

/// One entry of `get_list_of_element_lists`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElementListVersion {
    #[serde(default, deserialize_with = "wire_date")]
    pub version: Option<DateTime<Utc>>,
    pub iwp_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Single-field response bodies (not part of the public API surface)
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub(crate) struct ApiTokenResponse {
    #[serde(rename = "ApiToken")]
    pub api_token: Uuid,
}

#[derive(Deserialize)]
pub(crate) struct ApiKeyResponse {
    #[serde(rename = "ApiKey")]
    pub api_key: Uuid,
}

#[derive(Deserialize)]
pub(crate) struct TaskIdResponse {
    #[serde(rename = "TaskId")]
    pub task_id: Uuid,
}

#[derive(Deserialize)]
pub(crate) struct MediaUrlResponse {
    #[serde(rename = "MediaUrl")]
    pub media_url: Url,
}

#[derive(Deserialize)]
pub(crate) struct CaptionUrlResponse {
    #[serde(rename = "CaptionUrl")]
    pub caption_url: String,
}

/// Body of every non-2xx API response.
#[derive(Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(rename = "ErrorType")]
    pub error_type: String,
    #[serde(rename = "ErrorComment", default)]
    pub error_comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_decodes_wire_vocabulary() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "JobId": "6ba7b8109dad11d180b400c04fd430c8",
            "JobName": "interview",
            "Fidelity": "HIGH",
            "Priority": "STANDARD",
            "JobStatus": "In Process",
            "CreationDate": "2014-05-06T10:49:38.341715",
            "DueDate": null,
            "JobDiffiulty": "Good"
        }))
        .unwrap();

        assert_eq!(job.fidelity, Some(Fidelity::Professional));
        assert_eq!(job.priority, Some(Priority::Standard));
        assert_eq!(job.job_status, Some(JobStatus::InProcess));
        assert_eq!(job.job_difficulty, Some(JobDifficulty::Good));
        assert!(job.creation_date.is_some());
        assert!(job.due_date.is_none());
        assert!(!job.is_complete());
    }

    #[test]
    fn element_list_text_joins_tokens() {
        let list: ElementList = serde_json::from_value(serde_json::json!({
            "version": 3,
            "segments": [{
                "sequences": [
                    {"tokens": [{"value": "hello", "type": "word"}]},
                    {"tokens": [{"value": "world", "type": "word", "tags": ["ENDS_SENTENCE"]},
                                {"value": ".", "type": "punctuation"}]}
                ]
            }],
            "speakers": [{"name": "Ann", "id": 1, "gender": "FEMALE"}]
        }))
        .unwrap();

        assert_eq!(list.text(), "hello world.");
        assert_eq!(list.speakers[0].gender, Some(SpeakerGender::Female));
        assert_eq!(list.segments[0].sequences[1].tokens[0].tags, vec![Tag::EndsSentence]);
    }
}
