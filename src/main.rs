mod analyze;
mod cli;
mod config;
mod error;
mod load;
mod logging;
mod project;
mod report;
mod types;
mod view;

use crate::error::ScorecardError;
use crate::load::DataSet;
use crate::types::config::ScorecardConfig;
use crate::types::report::Dashboard;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn load_data(path: &Path) -> Result<(ScorecardConfig, DataSet), ScorecardError> {
    if !path.exists() {
        return Err(ScorecardError::PathNotFound(path.display().to_string()));
    }
    let cfg = config::require_config(path)?;
    let data = load::discover(path, &cfg)?;
    Ok((cfg, data))
}

/// Stderr notice; `-q` leaves only errors.
fn notice(quiet: bool, message: impl std::fmt::Display) {
    if !quiet {
        eprintln!("{message}");
    }
}

fn warnings_exit(dashboard: &Dashboard, quiet: bool) -> i32 {
    let warnings = dashboard.warnings();
    for warning in &warnings {
        notice(quiet, format_args!("warning: {warning}"));
    }
    if warnings.is_empty() {
        exit_code::SUCCESS
    } else {
        exit_code::WARNINGS
    }
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run(cli: cli::Cli) -> Result<i32, ScorecardError> {
    let quiet = cli.quiet;
    match cli.command {
        cli::Commands::Report(cmd) => {
            let (cfg, data) = load_data(&cmd.path)?;
            let dashboard = analyze::analyze(&data, &cfg);
            let rendered = report::render(&dashboard, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(warnings_exit(&dashboard, quiet))
        }
        cli::Commands::Scores(cmd) => {
            let (cfg, data) = load_data(&cmd.path)?;
            let dashboard = analyze::analyze(&data, &cfg);
            print!("{}", report::md::scores_to_markdown(&dashboard.summaries));
            println!(
                "\nfine-grained correlation: {}\naggregate correlation: {}",
                dashboard.fine_scatter.correlation, dashboard.aggregate_scatter.correlation
            );
            Ok(warnings_exit(&dashboard, quiet))
        }
        cli::Commands::Heatmap(cmd) => {
            let (cfg, data) = load_data(&cmd.path)?;
            let dashboard = analyze::analyze(&data, &cfg);
            let heatmap = match cmd.source {
                cli::HeatmapSource::Human => &dashboard.human_heatmap,
                cli::HeatmapSource::Ai => &dashboard.ai_heatmap,
            };
            print!("{}", report::md::heatmap_to_markdown(heatmap));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Scatter(cmd) => {
            let (cfg, data) = load_data(&cmd.path)?;
            let dashboard = analyze::analyze(&data, &cfg);
            let (label, scatter) = match cmd.kind {
                cli::ScatterKind::Fine => ("Fine-grained", &dashboard.fine_scatter),
                cli::ScatterKind::Aggregate => ("Aggregate", &dashboard.aggregate_scatter),
            };
            print!("{}", report::md::scatter_to_markdown(label, scatter));
            if scatter.correlation.coefficient().is_none() {
                notice(
                    quiet,
                    format_args!("warning: {} correlation is undefined", label.to_lowercase()),
                );
                return Ok(exit_code::WARNINGS);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::View(cmd) => {
            let (cfg, data) = load_data(&cmd.path)?;
            let selector =
                view::selector::ModelSelector::new(&cfg.articles.models, cfg.initial_model());
            let mut state =
                view::state::ViewState::new(view::route::Route::parse(&cmd.route), selector);
            if let Some(model) = &cmd.model {
                if !state.selector.select(model) {
                    notice(
                        quiet,
                        format_args!(
                            "warning: unknown model '{}'; showing {}",
                            model,
                            state.selector.selected().unwrap_or("all models")
                        ),
                    );
                }
            }
            if let Some(index) = cmd.slider {
                state.selector.set_index(index);
            }
            if let Some(spec) = &cmd.hover {
                let hover = spec
                    .parse::<view::state::Hover>()
                    .map_err(ScorecardError::InvalidArgument)?;
                state.hover(hover);
            }

            let rendered_view = view::render_view(&state.route, state.active_model(), &data, &cfg);
            println!("{}", report::render_view(&rendered_view, output_format(cmd.format))?);

            if let Some(model) = state.active_model() {
                notice(
                    quiet,
                    format_args!(
                        "model: {} ({}/{})",
                        model,
                        state.selector.index() + 1,
                        state.selector.models().len()
                    ),
                );
            }
            match &rendered_view {
                view::View::NotFound { .. } => Ok(exit_code::WARNINGS),
                view::View::Scorecard(dashboard) => {
                    if let Some(tooltip) = state.tooltip(dashboard) {
                        println!("> {}", tooltip.replace('\n', "\n> "));
                    } else if cmd.hover.is_some() {
                        notice(quiet, "warning: hover target not found");
                    }
                    Ok(exit_code::SUCCESS)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Validate(cmd) => {
            let (cfg, data) = load_data(&cmd.path)?;
            println!(
                "validate: ok ({} categories, {} subcategories, {} entities, {} sources, {} articles)",
                data.reference.categories.len(),
                data.reference.cell_count(),
                data.entities.len(),
                cfg.sources.len(),
                data.articles.len()
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
