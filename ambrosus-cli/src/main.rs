//! Ambrosus viewer command line
//!
//! Exercises the viewer core without a device:
//! 1. Translate a decoded barcode into its lookup query
//! 2. Lay out a formatted-section list as a detail screen would
//! 3. Resolve a scan against an offline records file
//!
//! Usage:
//!   ambrosus translate 4006381333931 --symbology org.gs1.EAN-13
//!   ambrosus layout sections.json --width 414
//!   ambrosus instructions --launch --already-shown

use ambrosus_cli::{
    instructions_report, layout_report_from_json, outcome_report, resolve_scan, TranslationReport,
};
use ambrosus_types::DecodedScan;
use ambrosus_viewer::mock::Records;
use ambrosus_viewer::ViewerConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ambrosus")]
#[command(about = "Ambrosus viewer scan and layout tools")]
struct Args {
    /// Path to a viewer configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a decoded barcode into a lookup query
    Translate {
        /// Decoded barcode payload
        value: String,
        /// Vendor symbology tag
        #[arg(short, long, default_value = "org.iso.QRCode")]
        symbology: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Lay out a JSON list of formatted sections
    Layout {
        /// File holding the section list
        sections: PathBuf,
        /// Viewport width in points (overrides the configuration)
        #[arg(short, long)]
        width: Option<f64>,
    },
    /// Resolve a scan against a records file
    Resolve {
        /// Decoded barcode payload
        value: String,
        #[arg(short, long, default_value = "org.iso.QRCode")]
        symbology: String,
        /// File holding assets and events
        #[arg(short, long)]
        records: PathBuf,
    },
    /// Print the onboarding instructions
    Instructions {
        /// Apply the first-launch rule instead of always printing
        #[arg(long)]
        launch: bool,
        /// The instructions were shown on an earlier launch
        #[arg(long)]
        already_shown: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            ViewerConfig::load(path).context("Failed to load configuration")?
        }
        None => ViewerConfig::default(),
    };
    debug!("Configuration: {:?}", config);

    match args.command {
        Command::Translate { value, symbology, json } => {
            let report = TranslationReport::new(&value, &symbology);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
        }
        Command::Layout { sections, width } => {
            if let Some(width) = width {
                config.viewport_width = width;
            }
            let json = fs::read_to_string(&sections)
                .with_context(|| format!("Failed to read {}", sections.display()))?;
            print!("{}", layout_report_from_json(&json, &config)?);
        }
        Command::Resolve { value, symbology, records } => {
            let records = Records::load(&records).context("Failed to load records")?;
            let outcome = resolve_scan(records, DecodedScan::new(value, symbology), &config).await?;
            print!("{}", outcome_report(&outcome, &config));
        }
        Command::Instructions { launch, already_shown } => {
            match instructions_report(&config, launch, already_shown) {
                Some(text) => print!("{text}"),
                None => info!("Instructions already shown or disabled"),
            }
        }
    }

    Ok(())
}
