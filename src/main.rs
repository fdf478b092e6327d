//! Mission Control CLI - revenue progress and pacing reports
//!
//! Usage: mission-control [OPTIONS] <COMMAND>
//!
//! Commands:
//!   team     Team dashboard (both revenue streams, contributions)
//!   founder  One founder's dashboard
//!   summary  Team figures for the progress notification
//!   month    Current sprint month
//!   feed     Wins and blockers

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use tracing::{debug, warn};

use mission_control::application::{DashboardOptions, ReportUseCase};
use mission_control::config::{ColorMode, Config, OutputFormat};
use mission_control::domain::value_objects::MissionSelector;
use mission_control::infrastructure::JsonSnapshotFile;
use mission_control::logging;
use mission_control::presentation::{create_renderer, ReportRenderer};

/// Mission Control - revenue progress and pacing reports
#[derive(Parser, Debug)]
#[command(name = "mission-control")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot export to read (JSON)
    #[arg(short, long, global = true, default_value = "snapshot.json")]
    snapshot: PathBuf,

    /// Config file (defaults to ./mission-control.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference date for the current sprint month (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Secondary mission to follow: numeric id or name keyword
    #[arg(long, global = true)]
    mission: Option<String>,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Team dashboard: primary revenue, secondary mission, contributions
    Team,

    /// One founder's dashboard
    Founder {
        /// Founder id or name
        founder: String,
    },

    /// Team figures handed to the progress notification
    Summary,

    /// Current sprint month and the calendar month it maps to
    Month,

    /// Wins and blockers, newest first
    Feed,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for warning in &warnings {
                warn!("{}", warning);
            }
            Ok(config.with_env_overrides())
        }
        None => {
            let cwd = std::env::current_dir().ok();
            Ok(Config::load_or_default(cwd.as_deref()))
        }
    }
}

fn use_color(mode: ColorMode, no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    let mission = match cli.mission.as_deref() {
        Some(value) => MissionSelector::parse(value),
        None => config.mission_selector(),
    };
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    debug!(%today, %mission, "report options");

    let source = JsonSnapshotFile::new(&cli.snapshot).with_overrides(config.sprint);
    let use_case = ReportUseCase::new(
        source,
        DashboardOptions::new(today).with_mission(mission),
    );

    let renderer: Box<dyn ReportRenderer> = create_renderer(
        config.output.format,
        use_color(config.output.color, cli.no_color),
        config.output.unicode,
    );

    let snapshot_context = || format!("failed to build report from {}", cli.snapshot.display());
    let output = match &cli.command {
        Commands::Team => renderer.render_team(&use_case.team().with_context(snapshot_context)?),
        Commands::Founder { founder } => {
            renderer.render_founder(&use_case.founder(founder).with_context(snapshot_context)?)
        }
        Commands::Summary => {
            renderer.render_summary(&use_case.summary().with_context(snapshot_context)?)
        }
        Commands::Month => {
            renderer.render_position(&use_case.position().with_context(snapshot_context)?)
        }
        Commands::Feed => renderer.render_feed(&use_case.feed().with_context(snapshot_context)?),
    };

    println!("{}", output.context("failed to render report")?);
    Ok(())
}
