//! Quick-start walkthrough against the cielo24 sandbox.
//!
//! Run with:
//!   CIELO24_USERNAME=... CIELO24_PASSWORD=... cargo run --example quickstart
//!
//! Sandbox jobs are never worked on, so the transcript step only succeeds
//! for jobs that were already complete.

use cielo24::options::QueryOptions;
use cielo24::{
    CaptionFormat, CaptionOptions, ClientBuilder, Fidelity, NewJobOptions, Priority,
    TranscriptOptions, TranscriptionRequest,
};

#[tokio::main]
async fn main() -> cielo24::Result<()> {
    let username = std::env::var("CIELO24_USERNAME").unwrap_or_default();
    let password = std::env::var("CIELO24_PASSWORD").unwrap_or_default();

    // -----------------------------------------------------------------------
    // 1. Create a client and log in
    // -----------------------------------------------------------------------
    let client = ClientBuilder::new()
        .server_url(cielo24::SANDBOX_SERVER_URL)
        .build()?;
    let token = client.login(&username, &password, true).await?;

    // -----------------------------------------------------------------------
    // 2. Create a job, attach media and request transcription
    // -----------------------------------------------------------------------
    let job = NewJobOptions {
        job_name: Some("quickstart".into()),
        ..Default::default()
    };
    let created = client.create_job(token, &job).await?;
    println!("Job created: {}", created.job_id.simple());

    let media: url::Url = "https://example.com/media/interview.mp4".parse()?;
    client.add_media_url(token, created.job_id, &media).await?;

    let mut request = TranscriptionRequest::new(Fidelity::Premium);
    request.priority = Some(Priority::Standard);
    let task_id = client
        .perform_transcription(token, created.job_id, &request)
        .await?;
    println!("Transcription task: {}", task_id.simple());

    // -----------------------------------------------------------------------
    // 3. Fetch output for completed jobs
    // -----------------------------------------------------------------------
    let mut transcript_options = TranscriptOptions::default();
    transcript_options.populate_from_raw_pairs(&["create_paragraphs=true"])?;

    let caption_options = CaptionOptions {
        caption_by_sentence: Some(true),
        characters_per_caption_line: Some(42),
        ..Default::default()
    };

    for job in client.get_job_list(token, None).await?.active_jobs {
        if !job.is_complete() {
            continue;
        }
        let name = job.job_name.as_deref().unwrap_or("(unnamed)");
        println!("== {name} ==");

        let transcript = client
            .get_transcript(token, job.job_id, Some(&transcript_options))
            .await?;
        println!("{transcript}");

        let srt = client
            .get_caption(token, job.job_id, CaptionFormat::Srt, Some(&caption_options))
            .await?;
        println!("{srt}");
    }

    client.logout(token).await
}
