use uuid::Uuid;
use wiremock::matchers::{body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cielo24::options::QueryOptions;
use cielo24::{
    CaptionFormat, CaptionOptions, Case, Cielo24Error, Client, ClientBuilder, ErrorType, Fidelity,
    JobStatus, NewJobOptions, PerformTranscriptionOptions, Priority, StatisticsRequest,
    TranscriptionRequest,
};

const TOKEN: &str = "7ca5dc5c7cce449fb0fff719307e8f5f";
const JOB_ID: &str = "6ba7b8109dad11d180b400c04fd430c8";
const TASK_ID: &str = "0b8fd3ba0e7b4d0c8b0a33c9bd1b0f6e";

fn client(server: &MockServer) -> Client {
    ClientBuilder::new()
        .server_url(server.uri())
        .max_retries(0)
        .build()
        .unwrap()
}

fn token() -> Uuid {
    TOKEN.parse().unwrap()
}

fn job_id() -> Uuid {
    JOB_ID.parse().unwrap()
}

#[tokio::test]
async fn login_sends_credentials_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/account/login"))
        .and(query_param("v", "1"))
        .and(query_param("username", "api_user"))
        .and(query_param("password", "p@ss word"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ApiToken": TOKEN
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client(&server)
        .login("api_user", "p@ss word", false)
        .await
        .unwrap();
    assert_eq!(token.simple().to_string(), TOKEN);
}

#[tokio::test]
async fn login_with_headers_keeps_secrets_out_of_the_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/account/login"))
        .and(header("x-auth-user", "api_user"))
        .and(header("x-auth-password", "secret"))
        .and(query_param_is_missing("password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ApiToken": TOKEN
        })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .login("api_user", "secret", true)
        .await
        .unwrap();
}

#[tokio::test]
async fn login_rejects_empty_credentials_before_sending() {
    let server = MockServer::start().await;
    let err = client(&server).login("", "secret", false).await.unwrap_err();
    assert!(matches!(err, Cielo24Error::Argument { name: "username", .. }));
}

#[tokio::test]
async fn error_payload_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(path("/api/job/info"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "ErrorType": "BAD_API_TOKEN",
            "ErrorComment": "api_token is not valid"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_job_info(token(), job_id())
        .await
        .unwrap_err();
    match err {
        Cielo24Error::Api {
            error_type,
            message,
            ..
        } => {
            assert_eq!(error_type, Some(ErrorType::BadApiToken));
            assert_eq!(message, "api_token is not valid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn create_job_sends_job_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/job/new"))
        .and(query_param("api_token", TOKEN))
        .and(query_param("job_name", "board meeting"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "JobId": JOB_ID,
            "TaskId": TASK_ID
        })))
        .expect(1)
        .mount(&server)
        .await;

    let job = NewJobOptions {
        job_name: Some("board meeting".into()),
        ..Default::default()
    };
    let created = client(&server).create_job(token(), &job).await.unwrap();
    assert_eq!(created.job_id, job_id());
}

#[tokio::test]
async fn job_info_decodes_wire_vocabulary() {
    let server = MockServer::start().await;
    Mock::given(path("/api/job/info"))
        .and(query_param("job_id", JOB_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "JobId": JOB_ID,
            "JobStatus": "Complete",
            "Fidelity": "MECHANICAL",
            "Priority": "STANDARD",
            "CreationDate": "2014-05-06T10:49:38.341715"
        })))
        .mount(&server)
        .await;

    let job = client(&server)
        .get_job_info(token(), job_id())
        .await
        .unwrap();
    assert_eq!(job.job_status, Some(JobStatus::Complete));
    assert_eq!(job.fidelity, Some(Fidelity::Mechanical));
    assert!(job.is_complete());
}

#[tokio::test]
async fn perform_transcription_sends_options_as_json() {
    let server = MockServer::start().await;
    Mock::given(path("/api/job/perform_transcription"))
        .and(query_param("transcription_fidelity", "PROFESSIONAL"))
        .and(query_param("priority", "PRIORITY"))
        .and(query_param("callback_url", "https://example.com/done"))
        .and(query_param("options", r#"{"notes":"two speakers"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "TaskId": TASK_ID
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = TranscriptionRequest::new(Fidelity::Professional);
    request.priority = Some(Priority::Priority);
    request.callback_url = Some("https://example.com/done".parse().unwrap());
    request.options = Some(PerformTranscriptionOptions {
        notes: Some("two speakers".into()),
        ..Default::default()
    });

    let task_id = client(&server)
        .perform_transcription(token(), job_id(), &request)
        .await
        .unwrap();
    assert_eq!(task_id.simple().to_string(), TASK_ID);
}

#[tokio::test]
async fn callback_url_is_sent_in_normalized_form() {
    let server = MockServer::start().await;
    Mock::given(path("/api/job/perform_transcription"))
        .and(query_param("callback_url", "https://example.com/?job=7&step=done"))
        .and(query_param_is_missing("options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "TaskId": TASK_ID
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = TranscriptionRequest::new(Fidelity::Mechanical);
    // A bare host gains the root path when parsed.
    request.callback_url = Some("https://example.com?job=7&step=done".parse().unwrap());

    client(&server)
        .perform_transcription(token(), job_id(), &request)
        .await
        .unwrap();
}

#[tokio::test]
async fn caption_returns_body_by_default() {
    let server = MockServer::start().await;
    Mock::given(path("/api/job/get_caption"))
        .and(query_param("caption_format", "SRT"))
        .and(query_param("caption_by_sentence", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("1\n00:00:00,000 --> 00:00:01,000\nhi\n"),
        )
        .mount(&server)
        .await;

    let options = CaptionOptions {
        caption_by_sentence: Some(true),
        ..Default::default()
    };
    let srt = client(&server)
        .get_caption(token(), job_id(), CaptionFormat::Srt, Some(&options))
        .await
        .unwrap();
    assert!(srt.starts_with("1\n00:00:00,000"));
}

#[tokio::test]
async fn empty_option_values_are_sent() {
    let server = MockServer::start().await;
    Mock::given(path("/api/job/get_caption"))
        .and(query_param("force_case", ""))
        .and(query_param("srt_format", ""))
        .respond_with(ResponseTemplate::new(200).set_body_string("caption"))
        .expect(1)
        .mount(&server)
        .await;

    let mut options = CaptionOptions {
        force_case: Some(Case::Unchanged),
        ..Default::default()
    };
    options.populate_from_raw_pairs(&["srt_format"]).unwrap();

    let caption = client(&server)
        .get_caption(token(), job_id(), CaptionFormat::Srt, Some(&options))
        .await
        .unwrap();
    assert_eq!(caption, "caption");
}

#[tokio::test]
async fn caption_with_build_url_returns_the_url() {
    let server = MockServer::start().await;
    Mock::given(path("/api/job/get_caption"))
        .and(query_param("build_url", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "CaptionUrl": "https://cdn.example.com/caption.srt"
        })))
        .mount(&server)
        .await;

    let options = CaptionOptions {
        build_url: Some(true),
        ..Default::default()
    };
    let url = client(&server)
        .get_caption(token(), job_id(), CaptionFormat::Srt, Some(&options))
        .await
        .unwrap();
    assert_eq!(url, "https://cdn.example.com/caption.srt");
}

#[tokio::test]
async fn update_password_posts_a_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/account/update_password"))
        .and(query_param_is_missing("new_password"))
        .and(body_string(format!(
            "api_token={TOKEN}&new_password=n%26w&v=1"
        )))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .update_password(token(), "n&w", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn add_media_uploads_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/job/add_media"))
        .and(header("content-type", "video/mp4"))
        .and(body_string("fake media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "TaskId": TASK_ID
        })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .add_media_bytes(token(), job_id(), b"fake media".to_vec())
        .await
        .unwrap();
}

#[tokio::test]
async fn aggregate_statistics_sends_metrics_verbatim() {
    let server = MockServer::start().await;
    Mock::given(path("/api/job/aggregate_statistics"))
        .and(query_param("metrics", r#"["billable_minutes_total","media_minutes"]"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = StatisticsRequest {
        metrics: Some(vec!["billable_minutes_total".into(), "media_minutes".into()]),
        ..Default::default()
    };
    let stats = client(&server)
        .aggregate_statistics(token(), &request)
        .await
        .unwrap();
    assert!(stats.contains_key("data"));
}

#[tokio::test]
async fn server_errors_are_retried_for_reads() {
    let server = MockServer::start().await;
    Mock::given(path("/api/job/media"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(path("/api/job/media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "MediaUrl": "https://cdn.example.com/media.mp4"
        })))
        .mount(&server)
        .await;

    let client = ClientBuilder::new()
        .server_url(server.uri())
        .max_retries(1)
        .build()
        .unwrap();
    let media = client.get_media(token(), job_id()).await.unwrap();
    assert_eq!(media.as_str(), "https://cdn.example.com/media.mp4");
}
