use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

use humanage::config::Config;
use humanage::dataset::{InMemoryRepository, PatientRepository};
use humanage::engine::{self, ReportRequest};
use humanage::error::Error;
use humanage::reporter::cli::CliReporter;
use humanage::reporter::json::JsonReporter;
use humanage::reporter::svg::SvgReporter;
use humanage::reporter::{patient_list, Reporter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Cli,
    Json,
    Svg,
}

#[derive(Parser)]
#[command(
    name = "humanage",
    version,
    about = "Category score rings and biological-age projections for example patients"
)]
struct Cli {
    /// Patient name (exact match)
    patient: Option<String>,

    /// List patients whose name contains this text
    #[arg(long, conflicts_with_all = ["patient", "all"])]
    search: Option<String>,

    /// Report on every patient in the dataset
    #[arg(long, conflicts_with = "patient")]
    all: bool,

    /// Improvement intensity (0-100), defaults to the configured value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    intensity: Option<u8>,

    /// Select a habit tool slot (0-17); repeat for several
    #[arg(long = "habit")]
    habits: Vec<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Cli)]
    format: Format,

    /// Directory containing humanage.toml
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Patient dataset (JSON array), overrides the configured one
    #[arg(long)]
    data: Option<PathBuf>,

    /// Show ring geometry and the full life-path table
    #[arg(long, short)]
    verbose: bool,
}

fn reporter(format: Format) -> Box<dyn Reporter> {
    match format {
        Format::Cli => Box::new(CliReporter),
        Format::Json => Box::new(JsonReporter),
        Format::Svg => Box::new(SvgReporter),
    }
}

fn execute(cli: &Cli) -> Result<String, Error> {
    let config = Config::load(&cli.config_dir)?;
    let repo = match cli.data.as_ref().or(config.data.as_ref()) {
        Some(path) => InMemoryRepository::from_json_file(path)?,
        None => InMemoryRepository::example(),
    };

    if let Some(query) = &cli.search {
        return Ok(patient_list(&repo.search(query), Some(query.as_str())));
    }

    if cli.all {
        let reports = engine::run_all(&repo, &config, cli.intensity, &cli.habits)?;
        return Ok(reporter(cli.format).format_all(&reports, cli.verbose));
    }

    match &cli.patient {
        Some(name) => {
            let request = ReportRequest {
                patient: name.clone(),
                intensity: cli.intensity,
                habits: cli.habits.clone(),
            };
            let report = engine::run(&repo, &config, &request)?;
            Ok(reporter(cli.format).format(&report, cli.verbose))
        }
        None => {
            let all: Vec<_> = repo.patients().iter().collect();
            Ok(patient_list(&all, None))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    humanage::logging::init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(output) => {
            print!("{output}");
        }
        Err(e @ Error::PatientNotFound(_)) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
