//! Zipslides CLI - run the upload simulation against local files
//!
//! # Commands
//!
//! ```bash
//! zipslides check deck.pptx notes.txt     # Intake only: accepted / rejected
//! zipslides upload deck.pptx report.pdf   # Intake + simulated upload
//! zipslides samples                       # Show the seeded dashboard registry
//! zipslides size 1536                     # Format a byte count
//! ```
//!
//! Defaults come from the environment (`.env` supported), see
//! [`AppConfig::from_lookup`](zipslides::AppConfig::from_lookup).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use zipslides::{
    format_count, format_date, format_file_size, partition, run_batch, AppConfig, AppError,
    AppResult, AppState, Clock, FileHandle, InstantClock, LocalFile, PresentationRegistry, TokioClock, UploadEvent,
};

#[derive(Parser)]
#[command(name = "zipslides")]
#[command(about = "Simulate Zipslides presentation uploads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate files without uploading
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Validate and simulate uploading files
    Upload {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Per-file delay in milliseconds (default: 2000)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Share link base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Skip the delay entirely
        #[arg(long)]
        instant: bool,

        /// Print the resulting registry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the sample presentations
    Samples {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a byte count
    Size {
        /// Number of bytes
        bytes: u64,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let result = match cli.command {
        Commands::Check { files } => cmd_check(&files, &config),

        Commands::Upload {
            files,
            delay_ms,
            base_url,
            instant,
            json,
        } => {
            let mut config = config;
            if let Some(ms) = delay_ms {
                config = config.with_upload_delay(Duration::from_millis(ms));
            }
            if let Some(url) = base_url {
                config = config.with_share_base_url(url);
            }
            if instant {
                cmd_upload(&files, &config, &InstantClock::new(), json).await
            } else {
                cmd_upload(&files, &config, &TokioClock, json).await
            }
        }

        Commands::Samples { json } => cmd_samples(json),

        Commands::Size { bytes } => {
            println!("{}", format_file_size(bytes));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn open_all(paths: &[PathBuf]) -> AppResult<Vec<LocalFile>> {
    paths
        .iter()
        .map(|p| {
            LocalFile::open(p).map_err(|source| AppError::File {
                path: p.display().to_string(),
                source,
            })
        })
        .collect()
}

fn cmd_check(paths: &[PathBuf], config: &AppConfig) -> AppResult<()> {
    let files = open_all(paths)?;
    let report = partition(files, config.max_file_size);

    for (file, kind) in &report.accepted {
        println!(
            "✅ {} ({}, {})",
            file.path().display(),
            kind,
            format_file_size(file.size())
        );
    }
    for rejection in &report.rejected {
        println!("❌ {}", rejection.user_message());
    }

    eprintln!(
        "\n{} accepted, {} rejected",
        report.accepted_count(),
        report.rejected_count()
    );
    Ok(())
}

async fn cmd_upload<C: Clock>(
    paths: &[PathBuf],
    config: &AppConfig,
    clock: &C,
    json: bool,
) -> AppResult<()> {
    let files = open_all(paths)?;
    let mut state = AppState::new();
    state.begin_upload();

    eprintln!("📤 Uploading {} file(s)...", files.len());
    let summary = run_batch(clock, config, files, |event| {
        if let UploadEvent::Started { name } = &event {
            eprintln!("   ⏳ {}", name);
        }
        if let Some(notice) = state.apply_upload_event(event) {
            eprintln!("   {} {}", notice.level.emoji(), notice.message);
        }
    })
    .await;
    state.finish_upload();

    if summary.skipped > 0 {
        eprintln!("   ⚠️  {} file(s) not processed", summary.skipped);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&state.registry)?);
    } else {
        print_registry(&state.registry);
    }

    match summary.failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn cmd_samples(json: bool) -> AppResult<()> {
    let registry = PresentationRegistry::with_samples();
    if json {
        println!("{}", serde_json::to_string_pretty(&registry)?);
    } else {
        print_registry(&registry);
    }
    Ok(())
}

fn print_registry(registry: &PresentationRegistry) {
    println!("\n{}", "=".repeat(70));
    println!(
        "📊 {} presentation(s) • {} • {}",
        registry.len(),
        format_count(registry.total_views(), "view"),
        format_count(registry.total_downloads(), "download")
    );
    println!("{}", "=".repeat(70));

    for record in registry {
        println!("   {}", record.name);
        println!(
            "      {} • {}",
            format_file_size(record.size),
            format_date(&record.uploaded_at)
        );
        println!("      {}", record.share_link);
    }
}
