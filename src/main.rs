use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use url::Url;
use uuid::Uuid;

use cielo24::options::value::parse_date;
use cielo24::{
    CaptionFormat, CaptionOptions, Cielo24Error, Client, ClientBuilder, Fidelity, JobListOptions,
    Language, NewJobOptions, PerformTranscriptionOptions, Priority, QueryOptions,
    TranscriptOptions, TranscriptionRequest,
};

#[derive(Parser)]
#[command(name = "cielo24", version, about = "Command line client for the cielo24 API")]
struct Cli {
    #[arg(short = 'u', long, env = "CIELO24_USERNAME", global = true)]
    username: Option<String>,

    #[arg(short = 'p', long, env = "CIELO24_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    /// Secure API key, used instead of the password.
    #[arg(short = 'k', long = "securekey", env = "CIELO24_API_KEY", hide_env_values = true, global = true)]
    secure_key: Option<Uuid>,

    /// Reuse a token from an earlier `login` instead of logging in again.
    #[arg(short = 'N', long = "api-token", env = "CIELO24_API_TOKEN", hide_env_values = true, global = true)]
    api_token: Option<Uuid>,

    #[arg(short = 's', long = "server", env = "CIELO24_SERVER_URL", global = true)]
    server_url: Option<String>,

    /// Send login credentials in headers rather than the query string.
    #[arg(short = 'H', long = "use-headers", global = true)]
    use_headers: bool,

    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and print the API token.
    Login,
    Logout,
    GenerateApiKey {
        /// Account to create the key for; defaults to --username.
        #[arg(long)]
        account: Option<String>,
        #[arg(long)]
        force_new: bool,
    },
    RemoveApiKey {
        key: Uuid,
    },
    UpdatePassword {
        new_password: String,
        #[arg(long)]
        sub_account: Option<String>,
    },
    /// Create a job and print its job and task ids.
    Create {
        #[arg(short = 'n', long)]
        name: Option<String>,
        #[arg(short = 'l', long, default_value = "en")]
        language: Language,
        #[arg(long)]
        external_id: Option<String>,
        #[arg(long)]
        sub_account: Option<String>,
        /// Extra job option as key=value.
        #[arg(short = 'J', value_name = "KEY=VALUE")]
        job_options: Vec<String>,
    },
    Authorize {
        job_id: Uuid,
    },
    Delete {
        job_id: Uuid,
    },
    JobInfo {
        job_id: Uuid,
    },
    /// List jobs; filters are given as -O key=value.
    List {
        #[arg(short = 'O', value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    /// Attach media from a local file or a URL.
    AddMedia {
        job_id: Uuid,
        #[arg(short = 'f', long, required_unless_present = "url", conflicts_with = "url")]
        file: Option<PathBuf>,
        #[arg(short = 'm', long)]
        url: Option<Url>,
    },
    AddEmbeddedMedia {
        job_id: Uuid,
        url: Url,
    },
    GetMedia {
        job_id: Uuid,
    },
    PerformTranscription {
        job_id: Uuid,
        #[arg(short = 'F', long, default_value = "MECHANICAL")]
        fidelity: Fidelity,
        #[arg(short = 'P', long)]
        priority: Option<Priority>,
        #[arg(short = 'C', long)]
        callback_url: Option<Url>,
        #[arg(short = 'T', long)]
        turnaround_hours: Option<i32>,
        #[arg(long)]
        target_language: Option<Language>,
        #[arg(short = 'O', value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    GetTranscript {
        job_id: Uuid,
        #[arg(short = 'O', value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    GetCaption {
        job_id: Uuid,
        #[arg(short = 'c', long = "format", default_value = "SRT")]
        format: CaptionFormat,
        #[arg(short = 'O', value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    GetElementlist {
        job_id: Uuid,
        #[arg(short = 'e', long = "version", value_parser = parse_date)]
        version: Option<DateTime<Utc>>,
    },
    ListElementlists {
        job_id: Uuid,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("cielo24=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> cielo24::Result<()> {
    let mut builder = ClientBuilder::new();
    if let Some(server_url) = &cli.server_url {
        builder = builder.server_url(server_url);
    }
    let client = builder.build()?;

    if let Command::Login = cli.command {
        let token = login(&client, &cli).await?;
        println!("{}", token.simple());
        return Ok(());
    }

    let token = match cli.api_token {
        Some(token) => token,
        None => login(&client, &cli).await?,
    };

    match cli.command {
        Command::Login => {}
        Command::Logout => client.logout(token).await?,
        Command::GenerateApiKey { account, force_new } => {
            let account = account
                .or(cli.username)
                .ok_or_else(|| Cielo24Error::required("account"))?;
            let key = client.generate_api_key(token, &account, force_new).await?;
            println!("{}", key.simple());
        }
        Command::RemoveApiKey { key } => client.remove_api_key(token, key).await?,
        Command::UpdatePassword {
            new_password,
            sub_account,
        } => {
            client
                .update_password(token, &new_password, sub_account.as_deref())
                .await?
        }
        Command::Create {
            name,
            language,
            external_id,
            sub_account,
            job_options,
        } => {
            let mut job = NewJobOptions {
                job_name: name,
                language: Some(language),
                external_id,
                sub_account,
            };
            job.populate_from_raw_pairs(&job_options)?;
            let created = client.create_job(token, &job).await?;
            tracing::info!(job_id = %created.job_id, "job_created");
            print_json(&created)?;
        }
        Command::Authorize { job_id } => client.authorize_job(token, job_id).await?,
        Command::Delete { job_id } => {
            let task_id = client.delete_job(token, job_id).await?;
            println!("{}", task_id.simple());
        }
        Command::JobInfo { job_id } => print_json(&client.get_job_info(token, job_id).await?)?,
        Command::List { options } => {
            let options = raw_options::<JobListOptions>(&options)?;
            print_json(&client.get_job_list(token, options.as_ref()).await?)?;
        }
        Command::AddMedia { job_id, file, url } => {
            let task_id = match (file, url) {
                (Some(file), _) => client.add_media_file(token, job_id, file).await?,
                (None, Some(url)) => client.add_media_url(token, job_id, &url).await?,
                (None, None) => return Err(Cielo24Error::required("media")),
            };
            println!("{}", task_id.simple());
        }
        Command::AddEmbeddedMedia { job_id, url } => {
            let task_id = client.add_embedded_media_url(token, job_id, &url).await?;
            println!("{}", task_id.simple());
        }
        Command::GetMedia { job_id } => println!("{}", client.get_media(token, job_id).await?),
        Command::PerformTranscription {
            job_id,
            fidelity,
            priority,
            callback_url,
            turnaround_hours,
            target_language,
            options,
        } => {
            let request = TranscriptionRequest {
                fidelity,
                priority,
                callback_url,
                turnaround_hours,
                target_language,
                options: raw_options::<PerformTranscriptionOptions>(&options)?,
            };
            let task_id = client.perform_transcription(token, job_id, &request).await?;
            tracing::info!(%job_id, task_id = %task_id, "transcription_requested");
            println!("{}", task_id.simple());
        }
        Command::GetTranscript { job_id, options } => {
            let options = raw_options::<TranscriptOptions>(&options)?;
            let transcript = client
                .get_transcript(token, job_id, options.as_ref())
                .await?;
            println!("{transcript}");
        }
        Command::GetCaption {
            job_id,
            format,
            options,
        } => {
            let options = raw_options::<CaptionOptions>(&options)?;
            let caption = client
                .get_caption(token, job_id, format, options.as_ref())
                .await?;
            println!("{caption}");
        }
        Command::GetElementlist { job_id, version } => {
            print_json(&client.get_element_list(token, job_id, version).await?)?
        }
        Command::ListElementlists { job_id } => {
            print_json(&client.get_list_of_element_lists(token, job_id).await?)?
        }
    }

    Ok(())
}

/// Prefer the secure key when both it and a password are present.
async fn login(client: &Client, cli: &Cli) -> cielo24::Result<Uuid> {
    let username = cli
        .username
        .as_deref()
        .ok_or_else(|| Cielo24Error::required("username"))?;

    match (cli.secure_key, cli.password.as_deref()) {
        (Some(key), _) => client.login_with_key(username, key, cli.use_headers).await,
        (None, Some(password)) => client.login(username, password, cli.use_headers).await,
        (None, None) => Err(Cielo24Error::required("password")),
    }
}

/// `None` when no `key=value` strings were given.
fn raw_options<O: QueryOptions + Default>(raw: &[String]) -> cielo24::Result<Option<O>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut options = O::default();
    options.populate_from_raw_pairs(raw)?;
    Ok(Some(options))
}

fn print_json<T: Serialize>(value: &T) -> cielo24::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn element_list_version_accepts_wire_dates() {
        let cli = Cli::try_parse_from([
            "cielo24",
            "get-elementlist",
            "6ba7b8109dad11d180b400c04fd430c8",
            "-e",
            "2014-05-06T10:49:38.0000000+00:00",
        ])
        .unwrap();
        let Command::GetElementlist { version, .. } = cli.command else {
            panic!("wrong subcommand");
        };
        assert_eq!(version, Some(Utc.with_ymd_and_hms(2014, 5, 6, 10, 49, 38).unwrap()));
    }

    #[test]
    fn raw_options_are_none_when_absent() {
        assert!(raw_options::<CaptionOptions>(&[]).unwrap().is_none());
        let options = raw_options::<CaptionOptions>(&["srt_format".to_string()])
            .unwrap()
            .unwrap();
        assert_eq!(options.srt_format.as_deref(), Some(""));
    }
}
