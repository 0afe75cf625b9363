//! # CLI Module
//!
//! Command-line interface for the screenshot namer.
//!
//! Nothing is captured: the device is described by flags and the namer runs
//! against an in-memory target, so the printed name is exactly what a live
//! target would have been asked to save.
//!
//! ## Usage
//! ```bash
//! # Name a screenshot
//! shot-name name screen1 --model "iPhone Simulator" --width 375 --height 667 --language en
//!
//! # Older layout and table
//! shot-name name screen1 --model iPhone --width 320 --height 568 --layout runner --scheme legacy
//!
//! # Classify only
//! shot-name classify --model iPad --width 1024 --height 768 --output json
//!
//! # Show the classification table
//! shot-name table
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::{style, Term};
use screenshot_namer::core::config::load_config_or_default;
use screenshot_namer::core::device::{DeviceClassTable, MatchPolicy, ScreenRect};
use screenshot_namer::core::filename::FilenameLayout;
use screenshot_namer::core::namer::{Classification, ScreenshotNamer};
use screenshot_namer::core::target::RecordingTarget;
use screenshot_namer::error::Result;
use std::path::PathBuf;
use tracing::debug;

/// Screenshot Namer - name UI-test screenshots after the device they show
#[derive(Parser, Debug)]
#[command(name = "shot-name")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the filename a screenshot would be saved under
    Name {
        /// Screenshot name passed by the test script
        name: String,

        #[command(flatten)]
        device: DeviceArgs,

        /// Preferred language of the app under test
        #[arg(short, long)]
        language: Option<String>,

        /// Filename layout (overrides the config file)
        #[arg(long)]
        layout: Option<Layout>,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Print the device class and orientation for a screen
    Classify {
        #[command(flatten)]
        device: DeviceArgs,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Print the classification table in use
    Table {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

#[derive(Args, Debug)]
struct DeviceArgs {
    /// Device model as reported by the target
    #[arg(short, long)]
    model: String,

    /// Screen width in points
    #[arg(long)]
    width: f64,

    /// Screen height in points
    #[arg(long)]
    height: f64,
}

#[derive(Args, Debug)]
struct SettingsArgs {
    /// Classification table (overrides the config file)
    #[arg(long)]
    scheme: Option<Scheme>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Layout {
    /// {language}-{device}-{orientation}-{name}
    Dashed,
    /// {device}___{orientation}___{name}
    Underscored,
    /// {device}-{orientation}-{language}-{name}
    Runner,
}

impl From<Layout> for FilenameLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Dashed => FilenameLayout::dashed(),
            Layout::Underscored => FilenameLayout::underscored(),
            Layout::Runner => FilenameLayout::runner(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scheme {
    /// Exact 4", 4.7" and 5.5" screen sizes
    Modern,
    /// Tall phone vs. short phone
    Legacy,
}

impl From<Scheme> for DeviceClassTable {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Modern => DeviceClassTable::modern(),
            Scheme::Legacy => DeviceClassTable::legacy(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Bare values only
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    screenshot_namer::init_tracing(if cli.verbose { "debug" } else { "warn" });

    match cli.command {
        Commands::Name {
            name,
            device,
            language,
            layout,
            settings,
        } => run_name(name, device, language, layout, settings),
        Commands::Classify { device, settings } => run_classify(device, settings),
        Commands::Table { settings } => run_table(settings),
    }
}

fn build_namer(settings: &SettingsArgs, layout: Option<Layout>) -> Result<ScreenshotNamer> {
    let mut config = load_config_or_default(settings.config.as_deref())?;

    if let Some(scheme) = settings.scheme {
        config.table = scheme.into();
    }
    if let Some(layout) = layout {
        config.layout = layout.into();
    }

    debug!(?config, "Resolved namer configuration");
    Ok(ScreenshotNamer::builder().config(config).build()?)
}

fn run_name(
    name: String,
    device: DeviceArgs,
    language: Option<String>,
    layout: Option<Layout>,
    settings: SettingsArgs,
) -> Result<()> {
    let namer = build_namer(&settings, layout)?;

    let target = RecordingTarget::new(device.model, ScreenRect::new(device.width, device.height))
        .with_languages(language);
    let filename = namer.capture_localized_screenshot(&target, &name)?;

    match settings.output {
        OutputFormat::Pretty => {
            let term = Term::stdout();
            term.write_line(&format!(
                "{} {}",
                style("✓").green().bold(),
                style(&filename).cyan()
            ))
            .ok();
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": name,
                "filename": filename,
                "layout": namer.layout(),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        }
        OutputFormat::Minimal => println!("{}", filename),
    }

    Ok(())
}

fn run_classify(device: DeviceArgs, settings: SettingsArgs) -> Result<()> {
    let namer = build_namer(&settings, None)?;
    let rect = ScreenRect::new(device.width, device.height);
    let classification = namer.classify(&device.model, rect);

    match settings.output {
        OutputFormat::Pretty => print_pretty_classification(&classification),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "model": device.model,
                "rect": rect,
                "device": classification.device.label(),
                "orientation": classification.orientation,
                "recognized": classification.device.is_recognized(),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        }
        OutputFormat::Minimal => println!(
            "{} {}",
            classification.device.label(),
            classification.orientation
        ),
    }

    Ok(())
}

fn print_pretty_classification(classification: &Classification) {
    let term = Term::stdout();

    term.write_line(&format!(
        "  {} {}",
        style("Device:").bold(),
        style(classification.device.label()).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "  {} {}",
        style("Orientation:").bold(),
        style(classification.orientation).cyan()
    ))
    .ok();

    if !classification.device.is_recognized() {
        term.write_line(&format!(
            "  {}",
            style("Screen size not in table, using fallback label").yellow()
        ))
        .ok();
    }
}

fn run_table(settings: SettingsArgs) -> Result<()> {
    let namer = build_namer(&settings, None)?;
    let table = namer.table();

    match settings.output {
        OutputFormat::Pretty => {
            let term = Term::stdout();
            let rule = match table.match_policy {
                MatchPolicy::ExactLongSide => "long side ==",
                MatchPolicy::HeightAbove => "height >",
            };

            for entry in &table.entries {
                term.write_line(&format!(
                    "  {} {:<8} {}",
                    style(rule).dim(),
                    entry.max_dimension,
                    style(&entry.label).cyan()
                ))
                .ok();
            }
            term.write_line(&format!(
                "  {} {}",
                style("otherwise").dim(),
                style(&table.phone_fallback).cyan()
            ))
            .ok();
            term.write_line(&format!(
                "  {} {}",
                style("tablets").dim(),
                style(&table.tablet_label).cyan()
            ))
            .ok();
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(table).unwrap_or_default());
        }
        OutputFormat::Minimal => {
            for entry in &table.entries {
                println!("{} {}", entry.max_dimension, entry.label);
            }
            println!("* {}", table.phone_fallback);
        }
    }

    Ok(())
}
