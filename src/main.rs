use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::info;

use classmix::engine::AssignmentError;
use classmix::engine::partition::partition;
use classmix::engine::score::score_roster;
use classmix::engine::seating::{grouped_chart, random_chart};
use classmix::input::{InputError, load_names_roster, load_roster};
use classmix::model::student::StudentRecord;
use classmix::report::csv::render_students_csv;
use classmix::report::text::render_chart_text;
use classmix::report::{class_profile, student_profiles};

#[derive(Debug, Parser)]
#[command(
    name = "classmix",
    version,
    about = "Score personality quizzes and build balanced classroom groups"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct RosterArgs {
    /// Roster file: a JSON array of student records
    #[arg(long, required_unless_present = "names", conflicts_with = "names")]
    roster: Option<PathBuf>,

    /// Plain-text name list (one per line); answers are randomized
    #[arg(long)]
    names: Option<PathBuf>,

    /// Seed for reproducible runs; system entropy when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score the roster and export trait profiles and class analytics
    Score {
        #[command(flatten)]
        roster: RosterArgs,
    },
    /// Partition the roster into balanced groups
    Groups {
        #[command(flatten)]
        roster: RosterArgs,

        /// Number of groups
        #[arg(long, default_value_t = 6)]
        groups: usize,

        /// Students per group
        #[arg(long, default_value_t = 4)]
        size: usize,
    },
    /// Build a seating chart, group-projected or fully random
    Seating {
        #[command(flatten)]
        roster: RosterArgs,

        /// Project groups onto the grid instead of a random layout
        #[arg(long)]
        grouped: bool,

        /// Number of groups (grouped layout)
        #[arg(long, default_value_t = 6)]
        groups: usize,

        /// Students per group (grouped layout)
        #[arg(long, default_value_t = 4)]
        size: usize,

        /// Grid rows (random layout)
        #[arg(long, default_value_t = 5)]
        rows: usize,

        /// Grid columns (random layout)
        #[arg(long, default_value_t = 6)]
        cols: usize,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Score { roster } => {
            let (records, _) = load_records(&roster)?;
            let scored = score_roster(&records);
            info!(students = scored.len(), "scored roster");

            write_file(&roster.out, "scores.csv", &render_students_csv(&records))?;
            write_json(&roster.out, "profiles.json", &student_profiles(&scored))?;
            write_json(&roster.out, "class_profile.json", &class_profile(&scored))?;
        }
        Command::Groups { roster, groups, size } => {
            let (records, mut rng) = load_records(&roster)?;
            let scored = score_roster(&records);
            let result = partition(&scored, groups, size, &mut rng)?;
            info!(groups = result.len(), students = scored.len(), "built groups");

            write_json(&roster.out, "groups.json", &result)?;
        }
        Command::Seating {
            roster,
            grouped,
            groups,
            size,
            rows,
            cols,
        } => {
            let (records, mut rng) = load_records(&roster)?;
            let scored = score_roster(&records);
            let chart = if grouped {
                grouped_chart(&scored, groups, size, &mut rng)?
            } else {
                random_chart(&scored, rows, cols, &mut rng)?
            };
            info!(
                seats = chart.seated_students().len(),
                grouped, "built seating chart"
            );

            write_json(&roster.out, "seating_chart.json", &chart)?;
            write_file(&roster.out, "seating_chart.txt", &render_chart_text(&chart))?;
        }
    }
    Ok(())
}

fn load_records(args: &RosterArgs) -> Result<(Vec<StudentRecord>, StdRng), CliError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let records = match (&args.roster, &args.names) {
        (Some(path), _) => load_roster(path)?,
        (None, Some(path)) => load_names_roster(path, &mut rng)?,
        // clap guarantees one of the two is present
        (None, None) => Vec::new(),
    };
    info!(students = records.len(), "loaded roster");
    Ok((records, rng))
}

fn write_file(out_dir: &Path, file_name: &str, content: &str) -> Result<(), CliError> {
    let path = out_dir.join(file_name);
    std::fs::create_dir_all(out_dir).map_err(|source| CliError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;
    std::fs::write(&path, content).map_err(|source| CliError::Write { path: path.clone(), source })?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}

fn write_json<T: serde::Serialize>(
    out_dir: &Path,
    file_name: &str,
    value: &T,
) -> Result<(), CliError> {
    let path = out_dir.join(file_name);
    let raw = serde_json::to_string_pretty(value)
        .map_err(|source| CliError::Encode { path: path.clone(), source })?;
    write_file(out_dir, file_name, &raw)
}
