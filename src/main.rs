//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ffl_history::{
    cli::{Commands, FflHistory},
    commands::{
        analyze::{handle_analyze, AnalyzeParams},
        crown::handle_crown,
        fetch_espn::handle_fetch_espn,
        fetch_sleeper::handle_fetch_sleeper,
    },
    config::{load_env_files, resolve_data_dir, resolve_year_map},
};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "ffl_history=info,warn";

/// Log to stderr so report output on stdout stays clean.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    load_env_files();
    init_tracing();
    let app = FflHistory::parse();

    match app.command {
        Commands::Analyze {
            data_dir,
            seasons,
            names,
            output,
            json,
        } => {
            handle_analyze(AnalyzeParams {
                data_dir: resolve_data_dir(data_dir),
                seasons: seasons.range()?,
                names_path: names,
                output,
                as_json: json,
            })?;
        }

        Commands::FetchEspn {
            league_id,
            seasons,
            data_dir,
            verbose,
        } => {
            handle_fetch_espn(
                league_id,
                seasons.range()?,
                &resolve_data_dir(data_dir),
                verbose,
            )
            .await?
        }

        Commands::FetchSleeper {
            year_map,
            data_dir,
            skip_users,
            verbose,
        } => {
            let year_map = resolve_year_map(year_map)?;
            handle_fetch_sleeper(&year_map, &skip_users, &resolve_data_dir(data_dir), verbose)
                .await?
        }

        Commands::Crown {
            season,
            data_dir,
            verbose,
        } => {
            handle_crown(&resolve_data_dir(data_dir), season, verbose)?;
        }
    }

    Ok(())
}
