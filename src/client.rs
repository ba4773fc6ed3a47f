use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use crate::enums::{CaptionFormat, ErrorType, Fidelity, Language, Priority, WireEnum};
use crate::errors::{Cielo24Error, Result};
use crate::models::{
    ApiKeyResponse, ApiTokenResponse, CaptionUrlResponse, CreateJobResult, ElementList,
    ElementListVersion, ErrorResponse, Job, JobList, MediaUrlResponse, TaskIdResponse,
};
use crate::options::value::{format_date, join_quoted};
use crate::options::{
    CaptionOptions, JobListOptions, NewJobOptions, PerformTranscriptionOptions, QueryOptions,
    TranscriptOptions,
};
use crate::query::{Escaping, QueryBuilder};

/// Production API.
pub const DEFAULT_SERVER_URL: &str = "https://api.cielo24.com";
/// Sandbox API for integration testing; jobs there are never worked on.
pub const SANDBOX_SERVER_URL: &str = "https://sandbox.cielo24.com";
/// Value of the `v` parameter sent with every request.
pub const API_VERSION: u32 = 1;

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(5 * 60);

mod paths {
    pub const LOGIN: &str = "/api/account/login";
    pub const LOGOUT: &str = "/api/account/logout";
    pub const UPDATE_PASSWORD: &str = "/api/account/update_password";
    pub const GENERATE_API_KEY: &str = "/api/account/generate_api_key";
    pub const REMOVE_API_KEY: &str = "/api/account/remove_api_key";
    pub const CREATE_JOB: &str = "/api/job/new";
    pub const AUTHORIZE_JOB: &str = "/api/job/authorize";
    pub const DELETE_JOB: &str = "/api/job/del";
    pub const JOB_INFO: &str = "/api/job/info";
    pub const JOB_LIST: &str = "/api/job/list";
    pub const ADD_MEDIA: &str = "/api/job/add_media";
    pub const ADD_MEDIA_URL: &str = "/api/job/add_media_url";
    pub const MEDIA: &str = "/api/job/media";
    pub const PERFORM_TRANSCRIPTION: &str = "/api/job/perform_transcription";
    pub const TRANSCRIPT: &str = "/api/job/get_transcript";
    pub const CAPTION: &str = "/api/job/get_caption";
    pub const ELEMENT_LIST: &str = "/api/job/get_elementlist";
    pub const ELEMENT_LISTS: &str = "/api/job/list_elementlists";
    pub const AGGREGATE_STATISTICS: &str = "/api/job/aggregate_statistics";
}

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use cielo24::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> cielo24::Result<()> {
/// let client = ClientBuilder::new()
///     .server_url(cielo24::SANDBOX_SERVER_URL)
///     .max_retries(5)
///     .download_timeout(Duration::from_secs(600))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    server_url: Option<String>,
    max_retries: u32,
    timeout: Duration,
    download_timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            server_url: None,
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT,
            download_timeout: DEFAULT_DOWNLOAD_TIMEOUT,
        }
    }

    /// Override the server (defaults to `CIELO24_SERVER_URL`, then
    /// `https://api.cielo24.com`).
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Retries for GET requests that fail with 5xx or a network error
    /// (defaults to 3). Other requests are never retried.
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Timeout for ordinary calls (defaults to 60 seconds).
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    /// Timeout for transcript, caption and element list downloads
    /// (defaults to 5 minutes).
    pub fn download_timeout(mut self, d: Duration) -> Self {
        self.download_timeout = d;
        self
    }

    /// Build the [`Client`].
    ///
    /// Returns [`Cielo24Error::Url`] if the server URL does not parse.
    pub fn build(self) -> Result<Client> {
        let server_url = self
            .server_url
            .or_else(|| std::env::var("CIELO24_SERVER_URL").ok())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Url::parse(&server_url)?;

        let http = reqwest::Client::builder().build()?;

        Ok(Client {
            server_url: server_url.trim_end_matches('/').to_string(),
            http,
            max_retries: self.max_retries,
            timeout: self.timeout,
            download_timeout: self.download_timeout,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-call payload other than the query string.
enum Payload {
    Form(String),
    Bytes(Vec<u8>, &'static str),
}

/// The cielo24 API client.
///
/// Every call that needs authentication takes the API token returned by
/// [`login`](Self::login); the client itself holds no session.
///
/// # Example
///
/// ```no_run
/// use cielo24::{Client, Fidelity, TranscriptionRequest};
///
/// # async fn example() -> cielo24::Result<()> {
/// let client = Client::new();
/// let token = client.login("api_user", "secret", true).await?;
///
/// let job = client.create_job(token, &Default::default()).await?;
/// let media: url::Url = "https://example.com/talk.mp4".parse()?;
/// client.add_media_url(token, job.job_id, &media).await?;
/// client
///     .perform_transcription(token, job.job_id, &TranscriptionRequest::new(Fidelity::Premium))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    server_url: String,
    http: reqwest::Client,
    max_retries: u32,
    timeout: Duration,
    download_timeout: Duration,
}

/// Parameters of [`Client::perform_transcription`].
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub fidelity: Fidelity,
    pub priority: Option<Priority>,
    /// Called by the server when the job completes.
    pub callback_url: Option<Url>,
    pub turnaround_hours: Option<i32>,
    pub target_language: Option<Language>,
    pub options: Option<PerformTranscriptionOptions>,
}

impl TranscriptionRequest {
    pub fn new(fidelity: Fidelity) -> Self {
        Self {
            fidelity,
            priority: None,
            callback_url: None,
            turnaround_hours: None,
            target_language: None,
            options: None,
        }
    }
}

/// Parameters of [`Client::aggregate_statistics`].
#[derive(Debug, Clone, Default)]
pub struct StatisticsRequest {
    pub metrics: Option<Vec<String>>,
    pub group_by: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub sub_account: Option<String>,
}

impl Client {
    /// Create a client for the production API with default settings.
    ///
    /// Unlike [`ClientBuilder::build`] this ignores `CIELO24_SERVER_URL` and
    /// always talks to [`DEFAULT_SERVER_URL`]. For customization, use
    /// [`ClientBuilder`] instead.
    pub fn new() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            http: reqwest::Client::new(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT,
            download_timeout: DEFAULT_DOWNLOAD_TIMEOUT,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    // -----------------------------------------------------------------------
    // Access control
    // -----------------------------------------------------------------------

    /// Log in with a username and password and return a new API token.
    ///
    /// With `use_headers` the credentials travel in `x-auth-*` headers
    /// instead of the query string.
    pub async fn login(&self, username: &str, password: &str, use_headers: bool) -> Result<Uuid> {
        require("username", username)?;
        require("password", password)?;

        let mut query = version_query();
        let mut headers = Vec::new();
        if use_headers {
            headers.push(("x-auth-user", username.to_string()));
            headers.push(("x-auth-password", password.to_string()));
        } else {
            query = query.add("username", username)?.add("password", password)?;
        }

        let resp: ApiTokenResponse = self
            .request_json(Method::GET, paths::LOGIN, query, &headers)
            .await?;
        Ok(resp.api_token)
    }

    /// Log in with a username and a secure API key.
    pub async fn login_with_key(
        &self,
        username: &str,
        secure_key: Uuid,
        use_headers: bool,
    ) -> Result<Uuid> {
        require("username", username)?;
        if secure_key.is_nil() {
            return Err(Cielo24Error::required("secure_key"));
        }

        let key = secure_key.simple().to_string();
        let mut query = version_query();
        let mut headers = Vec::new();
        if use_headers {
            headers.push(("x-auth-user", username.to_string()));
            headers.push(("x-auth-securekey", key));
        } else {
            query = query.add("username", username)?.add("securekey", key)?;
        }

        let resp: ApiTokenResponse = self
            .request_json(Method::GET, paths::LOGIN, query, &headers)
            .await?;
        Ok(resp.api_token)
    }

    pub async fn logout(&self, api_token: Uuid) -> Result<()> {
        let query = access_query(api_token)?;
        self.request_text(Method::GET, paths::LOGOUT, query, &[]).await?;
        Ok(())
    }

    /// Change the password of the account, or of `sub_account`.
    ///
    /// The parameters are sent as a form body so the password stays out of
    /// the URL.
    pub async fn update_password(
        &self,
        api_token: Uuid,
        new_password: &str,
        sub_account: Option<&str>,
    ) -> Result<()> {
        require("new_password", new_password)?;

        let form = access_query(api_token)?
            .add("new_password", new_password)?
            .add_optional("username", sub_account)?
            .to_query(Escaping::Escaped);

        self.send(
            Method::POST,
            paths::UPDATE_PASSWORD,
            QueryBuilder::new(),
            Escaping::Escaped,
            &[],
            Some(Payload::Form(form)),
            self.timeout,
        )
        .await?;
        Ok(())
    }

    /// Create a secure API key for `username`.
    ///
    /// Without `force_new` the server may hand back an existing key.
    pub async fn generate_api_key(
        &self,
        api_token: Uuid,
        username: &str,
        force_new: bool,
    ) -> Result<Uuid> {
        require("username", username)?;

        let query = access_query(api_token)?
            .add("account_id", username)?
            .add("force_new", force_new.to_string())?;

        let resp: ApiKeyResponse = self
            .request_json(Method::GET, paths::GENERATE_API_KEY, query, &[])
            .await?;
        Ok(resp.api_key)
    }

    /// Deactivate a secure API key.
    pub async fn remove_api_key(&self, api_token: Uuid, secure_key: Uuid) -> Result<()> {
        let query = access_query(api_token)?.add_uuid("api_securekey", secure_key)?;
        self.request_text(Method::GET, paths::REMOVE_API_KEY, query, &[])
            .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Job control
    // -----------------------------------------------------------------------

    pub async fn create_job(
        &self,
        api_token: Uuid,
        job: &NewJobOptions,
    ) -> Result<CreateJobResult> {
        let query = access_query(api_token)?.add_mapping(job.to_mapping())?;
        self.request_json(Method::GET, paths::CREATE_JOB, query, &[])
            .await
    }

    pub async fn authorize_job(&self, api_token: Uuid, job_id: Uuid) -> Result<()> {
        let query = job_query(api_token, job_id)?;
        self.request_text(Method::GET, paths::AUTHORIZE_JOB, query, &[])
            .await?;
        Ok(())
    }

    /// Delete a job; returns the id of the deletion task.
    pub async fn delete_job(&self, api_token: Uuid, job_id: Uuid) -> Result<Uuid> {
        let query = job_query(api_token, job_id)?;
        let resp: TaskIdResponse = self
            .request_json(Method::GET, paths::DELETE_JOB, query, &[])
            .await?;
        Ok(resp.task_id)
    }

    pub async fn get_job_info(&self, api_token: Uuid, job_id: Uuid) -> Result<Job> {
        let query = job_query(api_token, job_id)?;
        self.request_json(Method::GET, paths::JOB_INFO, query, &[])
            .await
    }

    /// List jobs, optionally filtered.
    pub async fn get_job_list(
        &self,
        api_token: Uuid,
        options: Option<&JobListOptions>,
    ) -> Result<JobList> {
        let mut query = access_query(api_token)?;
        if let Some(options) = options {
            query = query.add_mapping(options.to_mapping())?;
        }
        self.request_json(Method::GET, paths::JOB_LIST, query, &[])
            .await
    }

    /// Upload a local media file to a job; returns the task id.
    pub async fn add_media_file(
        &self,
        api_token: Uuid,
        job_id: Uuid,
        path: impl AsRef<Path>,
    ) -> Result<Uuid> {
        let bytes = tokio::fs::read(path).await?;
        self.add_media_bytes(api_token, job_id, bytes).await
    }

    /// Upload media held in memory to a job; returns the task id.
    pub async fn add_media_bytes(
        &self,
        api_token: Uuid,
        job_id: Uuid,
        media: Vec<u8>,
    ) -> Result<Uuid> {
        let query = job_query(api_token, job_id)?;
        let text = self
            .send(
                Method::POST,
                paths::ADD_MEDIA,
                query,
                Escaping::Escaped,
                &[],
                Some(Payload::Bytes(media, "video/mp4")),
                self.download_timeout,
            )
            .await?
            .text()
            .await?;
        let resp: TaskIdResponse = serde_json::from_str(&text)?;
        Ok(resp.task_id)
    }

    /// Point a job at media the server downloads itself; returns the task id.
    pub async fn add_media_url(&self, api_token: Uuid, job_id: Uuid, media_url: &Url) -> Result<Uuid> {
        self.send_media_url(api_token, job_id, media_url, paths::ADD_MEDIA)
            .await
    }

    /// Like [`add_media_url`](Self::add_media_url) for media embedded in a
    /// page (YouTube and similar).
    pub async fn add_embedded_media_url(
        &self,
        api_token: Uuid,
        job_id: Uuid,
        media_url: &Url,
    ) -> Result<Uuid> {
        self.send_media_url(api_token, job_id, media_url, paths::ADD_MEDIA_URL)
            .await
    }

    /// URL of the media attached to a job.
    pub async fn get_media(&self, api_token: Uuid, job_id: Uuid) -> Result<Url> {
        let query = job_query(api_token, job_id)?;
        let resp: MediaUrlResponse = self
            .request_json(Method::GET, paths::MEDIA, query, &[])
            .await?;
        Ok(resp.media_url)
    }

    /// Request transcription of a job's media; returns the task id.
    pub async fn perform_transcription(
        &self,
        api_token: Uuid,
        job_id: Uuid,
        request: &TranscriptionRequest,
    ) -> Result<Uuid> {
        let options = match &request.options {
            Some(options) => Some(serde_json::to_string(&options.to_mapping())?),
            None => None,
        };

        let query = job_query(api_token, job_id)?
            .add("transcription_fidelity", request.fidelity.describe())?
            .add_optional("priority", request.priority.map(WireEnum::describe))?
            .add_optional("callback_url", request.callback_url.as_ref().map(Url::to_string))?
            .add_optional("turnaround_hours", request.turnaround_hours.map(|h| h.to_string()))?
            .add_optional("target_language", request.target_language.map(WireEnum::describe))?
            .add_optional("options", options)?;

        let resp: TaskIdResponse = self
            .request_json(Method::GET, paths::PERFORM_TRANSCRIPTION, query, &[])
            .await?;
        Ok(resp.task_id)
    }

    /// Transcript text of a completed job.
    pub async fn get_transcript(
        &self,
        api_token: Uuid,
        job_id: Uuid,
        options: Option<&TranscriptOptions>,
    ) -> Result<String> {
        let mut query = job_query(api_token, job_id)?;
        if let Some(options) = options {
            query = query.add_mapping(options.to_mapping())?;
        }
        self.download_text(paths::TRANSCRIPT, query).await
    }

    /// Caption file contents, or its URL when `build_url` is set.
    pub async fn get_caption(
        &self,
        api_token: Uuid,
        job_id: Uuid,
        format: CaptionFormat,
        options: Option<&CaptionOptions>,
    ) -> Result<String> {
        let mut query = job_query(api_token, job_id)?.add("caption_format", format.describe())?;
        if let Some(options) = options {
            query = query.add_mapping(options.to_mapping())?;
        }
        let text = self.download_text(paths::CAPTION, query).await?;

        if options.and_then(|o| o.build_url) != Some(true) {
            return Ok(text);
        }
        let resp: CaptionUrlResponse = serde_json::from_str(&text)?;
        Ok(resp.caption_url)
    }

    /// The element list of a job, the latest unless `version` is given.
    pub async fn get_element_list(
        &self,
        api_token: Uuid,
        job_id: Uuid,
        version: Option<DateTime<Utc>>,
    ) -> Result<ElementList> {
        let query = job_query(api_token, job_id)?
            .add_optional("elementlist_version", version.as_ref().map(format_date))?;
        let text = self.download_text(paths::ELEMENT_LIST, query).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get_list_of_element_lists(
        &self,
        api_token: Uuid,
        job_id: Uuid,
    ) -> Result<Vec<ElementListVersion>> {
        let query = job_query(api_token, job_id)?;
        self.request_json(Method::GET, paths::ELEMENT_LISTS, query, &[])
            .await
    }

    /// Account-wide usage statistics.
    ///
    /// The metrics list is sent unescaped (`metrics=["a","b"]`), which the
    /// endpoint requires.
    pub async fn aggregate_statistics(
        &self,
        api_token: Uuid,
        request: &StatisticsRequest,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        let query = access_query(api_token)?
            .add_optional("metrics", request.metrics.as_ref().map(|m| join_quoted(m, ",")))?
            .add_optional("group_by", request.group_by.as_deref())?
            .add_optional("start_date", request.start_date.as_ref().map(format_date))?
            .add_optional("end_date", request.end_date.as_ref().map(format_date))?
            .add_optional("account_id", request.sub_account.as_deref())?;

        let response = self
            .send(
                Method::GET,
                paths::AGGREGATE_STATISTICS,
                query,
                Escaping::Verbatim,
                &[],
                None,
                self.timeout,
            )
            .await?;
        Ok(response.json().await?)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    async fn send_media_url(
        &self,
        api_token: Uuid,
        job_id: Uuid,
        media_url: &Url,
        path: &str,
    ) -> Result<Uuid> {
        let query = job_query(api_token, job_id)?.add("media_url", media_url.as_str())?;
        let resp: TaskIdResponse = self.request_json(Method::GET, path, query, &[]).await?;
        Ok(resp.task_id)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: QueryBuilder,
        headers: &[(&'static str, String)],
    ) -> Result<T> {
        let response = self
            .send(method, path, query, Escaping::Escaped, headers, None, self.timeout)
            .await?;
        Ok(response.json().await?)
    }

    async fn request_text(
        &self,
        method: Method,
        path: &str,
        query: QueryBuilder,
        headers: &[(&'static str, String)],
    ) -> Result<String> {
        let response = self
            .send(method, path, query, Escaping::Escaped, headers, None, self.timeout)
            .await?;
        Ok(response.text().await?)
    }

    async fn download_text(&self, path: &str, query: QueryBuilder) -> Result<String> {
        let response = self
            .send(
                Method::GET,
                path,
                query,
                Escaping::Escaped,
                &[],
                None,
                self.download_timeout,
            )
            .await?;
        Ok(response.text().await?)
    }

    /// Execute one API call, retrying GETs on transient failures.
    ///
    /// Retries are performed for HTTP 5xx responses and network-level errors,
    /// with exponential backoff: 1s, 2s, 4s, ...
    #[allow(clippy::too_many_arguments)]
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: QueryBuilder,
        escaping: Escaping,
        headers: &[(&'static str, String)],
        payload: Option<Payload>,
        timeout: Duration,
    ) -> Result<reqwest::Response> {
        let url = query.build_url(&self.server_url, path, escaping);
        let retries = if method == Method::GET {
            self.max_retries
        } else {
            0
        };

        let mut last_err: Option<Cielo24Error> = None;

        for attempt in 0..=retries {
            if attempt > 0 {
                let backoff = Duration::from_secs(1 << (attempt - 1).min(5));
                tracing::warn!(
                    path,
                    attempt,
                    backoff_secs = backoff.as_secs(),
                    error = ?last_err,
                    "cielo24_request_retry"
                );
                tokio::time::sleep(backoff).await;
            }

            let mut req = self.http.request(method.clone(), &url).timeout(timeout);
            for (name, value) in headers {
                req = req.header(*name, value);
            }
            req = match &payload {
                Some(Payload::Form(form)) => req
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(form.clone()),
                Some(Payload::Bytes(bytes, content_type)) => {
                    req.header(CONTENT_TYPE, *content_type).body(bytes.clone())
                }
                None => req,
            };

            // The query carries tokens and passwords; only the path is logged.
            tracing::debug!(method = %method, path, attempt, "cielo24_request");

            let response = match req.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_err = Some(Cielo24Error::Transport(e));
                    continue;
                }
            };

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }

            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            let err = error_from_body(status_code, body);

            if status.is_server_error() {
                last_err = Some(err);
                continue;
            }
            return Err(err);
        }

        Err(last_err.unwrap_or_else(|| Cielo24Error::Http {
            status: 0,
            body: "request failed after all retries".into(),
        }))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an error response to [`Cielo24Error::Api`] when it carries the
/// standard `ErrorType`/`ErrorComment` payload.
fn error_from_body(status: u16, body: String) -> Cielo24Error {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(payload) => Cielo24Error::Api {
            error_type: ErrorType::parse_wire(&payload.error_type).ok(),
            raw_type: payload.error_type,
            message: payload.error_comment,
        },
        Err(_) => Cielo24Error::Http { status, body },
    }
}

fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Cielo24Error::required(name));
    }
    Ok(())
}

fn version_query() -> QueryBuilder {
    QueryBuilder::new().add_api_version(API_VERSION)
}

fn access_query(api_token: Uuid) -> Result<QueryBuilder> {
    version_query().add_api_token(api_token)
}

fn job_query(api_token: Uuid, job_id: Uuid) -> Result<QueryBuilder> {
    access_query(api_token)?.add_job_id(job_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_becomes_api_error() {
        let err = error_from_body(
            400,
            r#"{"ErrorType": "BAD_API_TOKEN", "ErrorComment": "token expired"}"#.into(),
        );
        match err {
            Cielo24Error::Api {
                error_type,
                raw_type,
                message,
            } => {
                assert_eq!(error_type, Some(ErrorType::BadApiToken));
                assert_eq!(raw_type, "BAD_API_TOKEN");
                assert_eq!(message, "token expired");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_error_type_keeps_raw_string() {
        let err = error_from_body(400, r#"{"ErrorType": "BRAND_NEW"}"#.into());
        assert!(matches!(
            err,
            Cielo24Error::Api { error_type: None, ref raw_type, .. } if raw_type == "BRAND_NEW"
        ));
        assert_eq!(err.to_string(), "BRAND_NEW: ");
    }

    #[test]
    fn plain_body_becomes_http_error() {
        let err = error_from_body(502, "Bad Gateway".into());
        assert!(matches!(err, Cielo24Error::Http { status: 502, .. }));
    }

    #[test]
    fn new_ignores_server_url_environment() {
        assert_eq!(Client::new().server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn job_query_rejects_nil_ids() {
        assert!(job_query(Uuid::nil(), Uuid::new_v4()).is_err());
    }
}
