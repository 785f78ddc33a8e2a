use clap::{Arg, ArgMatches, Command};
use color_eyre::Result;
use std::sync::Arc;

mod adapters;
mod application;
mod domain;
mod ports;

use adapters::{
    api::{ApiAttachmentRepository, AttachmentClient, ReqwestTransport},
    cache::AttachmentListCache,
    config::{FileConfigStore, TOKEN_ENV_VAR},
    tui::{run_tui, widgets::attachments_table, App},
};
use application::{AppError, AttachmentService, StateManager};
use domain::{parse_tags, AttachmentSummary, AttachmentUploadRequest, Priority};
use ports::{AppConfig, ConfigStore};

fn cli() -> Command {
    Command::new("task-attachments")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Attach files to tasks in a remote task API")
        .long_about("Upload attachment metadata to a task-management API and browse the attachments of a task.\n\nRun without a subcommand for the interactive interface.")
        .arg(
            Arg::new("base_url")
                .long("base-url")
                .value_name("URL")
                .env("ATTACHMENTS_BASE_URL")
                .help("API root, e.g. https://abc123.execute-api.us-east-1.amazonaws.com/dev")
                .global(true),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .value_name("TOKEN")
                .env(TOKEN_ENV_VAR)
                .help("Value sent verbatim in the Authorization header")
                .global(true),
        )
        .arg(
            Arg::new("no_token")
                .long("no-token")
                .action(clap::ArgAction::SetTrue)
                .help("Send no Authorization header this run, even if a token is stored")
                .global(true),
        )
        .subcommand(
            Command::new("upload")
                .about("Attach a file reference to a task")
                .arg(
                    Arg::new("task")
                        .long("task")
                        .short('t')
                        .value_name("TASK_ID")
                        .required(true),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .value_name("FILE_NAME")
                        .required(true),
                )
                .arg(
                    Arg::new("path")
                        .long("path")
                        .short('p')
                        .value_name("FILE_PATH")
                        .help("Path or URL of the file; only this reference is sent")
                        .required(true),
                )
                .arg(
                    Arg::new("priority")
                        .long("priority")
                        .value_parser(["low", "medium", "high"])
                        .default_value("medium"),
                )
                .arg(
                    Arg::new("tags")
                        .long("tags")
                        .value_name("TAGS")
                        .help("Comma-separated tags, e.g. \"design, docs\"")
                        .default_value(""),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List the attachments of a task")
                .arg(
                    Arg::new("task")
                        .long("task")
                        .short('t')
                        .value_name("TASK_ID")
                        .help("Defaults to the last task used"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(clap::ArgAction::SetTrue)
                        .help("Print raw JSON instead of a table"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Remove an attachment from a task")
                .arg(
                    Arg::new("task")
                        .long("task")
                        .short('t')
                        .value_name("TASK_ID")
                        .required(true),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .value_name("FILE_ID")
                        .required(true),
                )
                .arg(
                    Arg::new("path")
                        .long("path")
                        .short('p')
                        .value_name("FILE_PATH")
                        .help("Stored path of the attachment, as returned by list")
                        .required(true),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the stored API token"))
}

/// Apply `--base-url`, `--token` and `--no-token` on top of the loaded config.
/// Returns the token to use for this run; only a `--token` value is persisted.
fn apply_overrides(config: &mut AppConfig, matches: &ArgMatches) -> Option<String> {
    if let Some(base_url) = matches.get_one::<String>("base_url") {
        config.set_base_url(base_url);
    }

    if matches.get_flag("no_token") {
        config.api_token = None;
        return None;
    }
    if let Some(token) = matches.get_one::<String>("token") {
        config.api_token = Some(token.clone());
    }
    config.api_token.clone()
}

fn upload_request(matches: &ArgMatches) -> Result<AttachmentUploadRequest> {
    let arg = |name: &str| {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default()
    };

    let priority: Priority = arg("priority").parse()?;
    let request = AttachmentUploadRequest::new(
        arg("task"),
        arg("name"),
        arg("path"),
        priority,
        parse_tags(&arg("tags")),
    )?;
    Ok(request)
}

fn print_table(files: &[AttachmentSummary]) {
    let rows: Vec<[String; 3]> = files.iter().map(attachments_table::row_cells).collect();

    let mut widths = attachments_table::HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let [file, priority, uploaded] = attachments_table::HEADERS;
    println!(
        "{:<w0$}  {:<w1$}  {}",
        file,
        priority,
        uploaded,
        w0 = widths[0],
        w1 = widths[1]
    );
    for [file, priority, uploaded] in &rows {
        println!(
            "{:<w0$}  {:<w1$}  {}",
            file,
            priority,
            uploaded,
            w0 = widths[0],
            w1 = widths[1]
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Log to a file; the TUI owns stdout
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("task-attachments.log")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let matches = cli().get_matches();

    let config_store = Arc::new(FileConfigStore::new()?);

    if let Some(("logout", _)) = matches.subcommand() {
        config_store.clear_api_token().await?;
        println!("Stored API token removed");
        return Ok(());
    }

    // Load configuration, then let flags and env vars override it
    let mut config = config_store.load_config().await?;
    let token = apply_overrides(&mut config, &matches);

    let base_url = config.base_url.clone().ok_or_else(|| {
        eprintln!("❌ No API base URL configured!");
        eprintln!();
        eprintln!("Run: export ATTACHMENTS_BASE_URL=https://<api-id>.execute-api.<region>.amazonaws.com/<stage>");
        eprintln!("Or pass --base-url once; it is remembered afterwards.");
        eprintln!();
        AppError::BaseUrlRequired
    })?;

    config_store.save_config(&config).await?;

    // Create dependencies
    let transport = Arc::new(ReqwestTransport::new()?);
    let client = AttachmentClient::new(transport, base_url, token);
    let repository = Arc::new(ApiAttachmentRepository::new(client));
    let list_cache = Arc::new(AttachmentListCache::new(config.cache_ttl_seconds, 1000));

    let attachment_service = Arc::new(AttachmentService::new(repository, list_cache));
    let state_manager = Arc::new(StateManager::new(attachment_service, config_store));

    match matches.subcommand() {
        Some(("upload", upload_matches)) => {
            let request = match upload_request(upload_matches) {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(2);
                }
            };

            match state_manager.upload(&request).await {
                Ok(result) => {
                    let json = serde_json::to_string_pretty(&result)?;
                    println!("{json}");
                }
                Err(e) => {
                    eprintln!("❌ Upload failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(("list", list_matches)) => {
            state_manager.initialize().await?;

            let files = match list_matches.get_one::<String>("task") {
                Some(task_id) => {
                    state_manager
                        .get_attachments(&task_id.as_str().into(), false)
                        .await
                }
                None => state_manager.get_attachments_for_current_task(false).await,
            };

            match files {
                Ok(files) if list_matches.get_flag("json") => {
                    let json = serde_json::to_string_pretty(&files)?;
                    println!("{json}");
                }
                Ok(files) => print_table(&files),
                Err(e) => {
                    eprintln!("❌ Failed to list attachments: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(("delete", delete_matches)) => {
            let arg = |name: &str| {
                delete_matches
                    .get_one::<String>(name)
                    .cloned()
                    .unwrap_or_default()
            };

            match state_manager
                .delete(&arg("task").into(), &arg("file").into(), &arg("path"))
                .await
            {
                Ok(()) => println!("Deleted {}", arg("file")),
                Err(e) => {
                    eprintln!("❌ Failed to delete attachment: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            let app = App::new(state_manager);

            if let Err(e) = run_tui(app).await {
                match e.downcast_ref::<AppError>() {
                    Some(AppError::Config(err)) => {
                        eprintln!("❌ {err}");
                    }
                    _ => {
                        eprintln!("❌ Application error: {e}");
                    }
                }
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("❌ Unknown command");
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_upload_args_to_request() {
        let matches = cli().get_matches_from([
            "task-attachments",
            "upload",
            "--task",
            "a/b",
            "--name",
            "design.pdf",
            "--path",
            "uploads/design.pdf",
            "--priority",
            "high",
            "--tags",
            "design, docs, , design",
        ]);
        let (_, upload_matches) = matches.subcommand().unwrap();
        let request = upload_request(upload_matches).unwrap();

        assert_eq!(request.task_id.as_str(), "a/b");
        assert_eq!(request.priority, Priority::High);
        assert_eq!(request.tags, vec!["design", "docs", "design"]);
    }

    #[test]
    fn test_upload_defaults() {
        let matches = cli().get_matches_from([
            "task-attachments",
            "upload",
            "-t",
            "t1",
            "-n",
            "a.txt",
            "-p",
            "a.txt",
        ]);
        let (_, upload_matches) = matches.subcommand().unwrap();
        let request = upload_request(upload_matches).unwrap();

        assert_eq!(request.priority, Priority::Medium);
        assert!(request.tags.is_empty());
    }

    #[test]
    fn test_no_token_overrides_stored_token() {
        let mut config = AppConfig {
            api_token: Some("stored".to_string()),
            ..Default::default()
        };
        let matches = cli().get_matches_from(["task-attachments", "--no-token", "list"]);

        assert_eq!(apply_overrides(&mut config, &matches), None);
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn test_token_flag_used_verbatim() {
        let mut config = AppConfig::default();
        let matches = cli().get_matches_from([
            "task-attachments",
            "--base-url",
            "https://api.example.com/dev/",
            "--token",
            " raw token ",
            "list",
        ]);

        assert_eq!(apply_overrides(&mut config, &matches).as_deref(), Some(" raw token "));
        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com/dev"));
    }

    #[test]
    fn test_stored_token_kept_without_flags() {
        let mut config = AppConfig {
            api_token: Some("stored".to_string()),
            ..Default::default()
        };
        let matches = cli().get_matches_from(["task-attachments", "list"]);

        // An ATTACHMENTS_TOKEN in the test environment would take precedence
        if std::env::var(TOKEN_ENV_VAR).is_err() {
            assert_eq!(apply_overrides(&mut config, &matches).as_deref(), Some("stored"));
        }
    }

    #[test]
    fn test_logout_subcommand() {
        let matches = cli().get_matches_from(["task-attachments", "logout"]);
        assert_eq!(matches.subcommand_name(), Some("logout"));
    }

    #[test]
    fn test_invalid_priority_rejected() {
        let result = cli().try_get_matches_from([
            "task-attachments",
            "upload",
            "-t",
            "t1",
            "-n",
            "a.txt",
            "-p",
            "a.txt",
            "--priority",
            "urgent",
        ]);
        assert!(result.is_err());
    }
}
