mod cli;

use crate::cli::{Command, StorageBackendArg, CLI};
use anyhow::anyhow;
use clap::Parser;
use pocketlink_app::{telemetry, App, AppConfig};
use pocketlink_core::{Journal, MemoryJournal, SystemClock, TracingJournal};
use pocketlink_generator::RandomGenerator;
use pocketlink_redirector::Resolution;
use pocketlink_shortener::{AllocatorSettings, ShortenRequest};
use pocketlink_storage::{Backend, FileBackend, InMemoryBackend};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

type CliApp = App<Box<dyn Backend>, RandomGenerator, SystemClock>;

fn main() -> anyhow::Result<ExitCode> {
    let config = CLI::parse();
    telemetry::init(config.log_format.into()).map_err(|e| anyhow!(e))?;

    info!(
        storage_backend = %config.storage,
        data_dir = %config.data_dir.display(),
        base_url = %config.base_url,
        "starting pocketlink"
    );

    let backend: Box<dyn Backend> = match config.storage {
        StorageBackendArg::File => Box::new(FileBackend::new(&config.data_dir)),
        StorageBackendArg::InMemory => Box::new(InMemoryBackend::new()),
    };

    // journal entries go to the log unless they are printed at the end
    let memory_journal = Arc::new(MemoryJournal::new());
    let journal: Arc<dyn Journal> = if config.show_journal {
        memory_journal.clone()
    } else {
        Arc::new(TracingJournal)
    };

    let app_config = AppConfig::builder()
        .base_url(config.base_url.clone())
        .allocator(
            AllocatorSettings::builder()
                .default_validity_minutes(config.default_validity)
                .build(),
        )
        .build();
    let app = App::open(
        backend,
        RandomGenerator::default(),
        SystemClock,
        journal,
        app_config,
    );

    let code = run(&app, config.command);

    if config.show_journal {
        for entry in memory_journal.entries() {
            println!("{}", serde_json::to_string(&entry)?);
        }
    }

    Ok(code)
}

fn run(app: &CliApp, command: Command) -> ExitCode {
    match command {
        Command::Shorten {
            url,
            code,
            validity,
        } => {
            let request = ShortenRequest {
                long_url: url,
                custom_code: code,
                validity_minutes: validity,
            };
            match app.shorten(&request) {
                Ok(shortened) => {
                    println!("{}", shortened.short_url);
                    println!("Expires: {}", shortened.record.expires_at);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    ExitCode::FAILURE
                }
            }
        }
        Command::Visit { path } => match app.visit(&path) {
            Resolution::Active(record) => {
                println!("{}", record.long_url);
                ExitCode::SUCCESS
            }
            resolution @ Resolution::Expired(_) => {
                eprintln!("{}", resolution.user_message().unwrap_or_default());
                ExitCode::from(2)
            }
            resolution @ Resolution::NotFound => {
                eprintln!("{}", resolution.user_message().unwrap_or_default());
                ExitCode::FAILURE
            }
        },
        Command::List => {
            let links = app.links();
            if links.is_empty() {
                println!("No URLs shortened yet.");
            }
            for record in &links {
                let status = if app.is_expired(record) {
                    "expired"
                } else {
                    "active"
                };
                println!(
                    "{}\t{}\texpires {}\t[{}]",
                    app.short_url(&record.short_code),
                    record.long_url,
                    record.expires_at,
                    status
                );
            }
            ExitCode::SUCCESS
        }
    }
}
