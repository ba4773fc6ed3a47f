//! # cielo24 for Rust
//!
//! Client for the [cielo24](https://cielo24.com) transcription and
//! captioning API. Create jobs, attach media, request transcription and
//! fetch transcripts, captions and element lists with async Rust.
//!
//! ## Quick start
//!
//! ```no_run
//! use cielo24::{CaptionFormat, CaptionOptions, Client};
//!
//! #[tokio::main]
//! async fn main() -> cielo24::Result<()> {
//!     let client = Client::new();
//!     let token = client.login("api_user", "secret", true).await?;
//!
//!     for job in client.get_job_list(token, None).await?.active_jobs {
//!         if !job.is_complete() {
//!             continue;
//!         }
//!         let options = CaptionOptions {
//!             caption_by_sentence: Some(true),
//!             ..Default::default()
//!         };
//!         let srt = client
//!             .get_caption(token, job.job_id, CaptionFormat::Srt, Some(&options))
//!             .await?;
//!         println!("{srt}");
//!     }
//!
//!     client.logout(token).await
//! }
//! ```
//!
//! ## Builder pattern
//!
//! ```no_run
//! use cielo24::ClientBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> cielo24::Result<()> {
//! let client = ClientBuilder::new()
//!     .server_url(cielo24::SANDBOX_SERVER_URL)
//!     .max_retries(5)
//!     .timeout(Duration::from_secs(120))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Options
//!
//! The option bags in [`options`] render to query strings and can be filled
//! from `key=value` strings, as the command line tool does:
//!
//! ```
//! use cielo24::options::{QueryOptions, TranscriptOptions};
//!
//! let mut options = TranscriptOptions::default();
//! options.populate_from_raw_pairs(&["create_paragraphs=true", "timecode_interval=30"])?;
//! assert_eq!(options.to_query(), "create_paragraphs=true&timecode_interval=30");
//! # Ok::<(), cielo24::Cielo24Error>(())
//! ```

mod client;
mod errors;
mod models;

pub mod enums;
pub mod options;
pub mod query;

pub use client::{
    Client, ClientBuilder, StatisticsRequest, TranscriptionRequest, API_VERSION,
    DEFAULT_SERVER_URL, SANDBOX_SERVER_URL,
};
pub use enums::{
    CaptionFormat, Case, CustomerApprovalStep, CustomerApprovalTool, ErrorType, Fidelity, Flags,
    JobDifficulty, JobStatus, Language, LineEnding, Priority, SpeakerGender, SpeakerId, Tag,
    TaskType, TokenType, WireEnum,
};
pub use errors::{Cielo24Error, Result};
pub use models::{
    CreateJobResult, ElementList, ElementListVersion, Job, JobList, MetaToken, Segment, Sequence,
    Speaker, TimeRange, Token,
};
pub use options::{
    CaptionOptions, CommonOptions, JobListOptions, NewJobOptions, PerformTranscriptionOptions,
    QueryOptions, TranscriptOptions,
};
