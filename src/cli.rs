use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scorecard",
    version,
    about = "Human vs AI safety-framework scorecard: heatmaps, scatterplots and correlation"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full dashboard: scores, correlations and both heatmaps
    Report(ReportCommand),
    /// Weighted human and AI scores per entity
    Scores(ScoresCommand),
    /// Score grid colored by band
    Heatmap(HeatmapCommand),
    /// Scatter points with the correlation coefficient
    Scatter(ScatterCommand),
    /// Render the view addressed by a route (/, /article/<id>, /scorecard)
    View(ViewCommand),
    /// Load and validate configuration and data
    Validate(ValidateCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HeatmapSource {
    Human,
    Ai,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScatterKind {
    Fine,
    Aggregate,
}

#[derive(Args)]
pub struct ReportCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ScoresCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct HeatmapCommand {
    pub path: PathBuf,
    #[arg(long, value_enum, default_value = "human")]
    pub source: HeatmapSource,
}

#[derive(Args)]
pub struct ScatterCommand {
    pub path: PathBuf,
    #[arg(long, value_enum, default_value = "fine")]
    pub kind: ScatterKind,
}

#[derive(Args)]
pub struct ViewCommand {
    pub path: PathBuf,
    pub route: String,
    /// Model key to select; defaults to the configured default model
    #[arg(long, conflicts_with = "slider")]
    pub model: Option<String>,
    /// Model slider position (0-based, clamped to the configured models)
    #[arg(long)]
    pub slider: Option<usize>,
    /// Hovered element on the scorecard view: cell:<human|ai>:<row>:<entity> or point:<fine|aggregate>:<index>
    #[arg(long)]
    pub hover: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub path: PathBuf,
}
