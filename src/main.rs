use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warkah_studio::models::{Config, Mode, ModeResult};
use warkah_studio::studio::Studio;

#[derive(Debug, Parser)]
#[command(name = "warkah-studio")]
#[command(about = "Wedding style analysis and pose prompt generation")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,

    /// Emit results as JSON instead of formatted text.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a reference image and produce a single style prompt
    Analyze {
        /// Path to a JPG, PNG, or WebP reference image
        image: PathBuf,
    },
    /// Generate eight pose-variation prompts from a reference image
    Poses {
        /// Path to a JPG, PNG, or WebP reference image
        image: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warkah_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut studio = Studio::new(&config);

    let (mode, image) = match &args.command {
        Command::Analyze { image } => (Mode::Analyzer, image.clone()),
        Command::Poses { image } => (Mode::Poses, image.clone()),
    };
    studio.switch_mode(mode);

    studio.select_image_from_path(&image).await;
    if let Some(alert) = studio.take_alert() {
        error!("{}: {}", alert.title, alert.message);
        std::process::exit(1);
    }

    info!("Submitting {} request", mode.as_str());
    studio.submit().await;
    if let Some(alert) = studio.take_alert() {
        error!("{}: {}", alert.title, alert.message);
        std::process::exit(1);
    }

    match &studio.session(mode).result {
        Some(ModeResult::Style(prompt)) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({ "prompt": prompt }))?
                );
            } else {
                println!("{}", prompt);
            }
        }
        Some(ModeResult::Poses(batch)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(batch.prompts())?);
            } else {
                for (i, pose) in batch.prompts().iter().enumerate() {
                    println!("{}. {}", i + 1, pose.title);
                    println!("   {}", pose.prompt);
                    println!();
                }
            }
        }
        None => {
            error!("Submission finished without a result");
            std::process::exit(1);
        }
    }

    Ok(())
}
