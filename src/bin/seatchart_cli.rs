//! CLI tool for seatchart - seats a roster and writes the chart
//!
//! Usage:
//!   seatchart_cli roster.csv --rows 7 --cols 8 --seed 42
//!   seatchart_cli roster.csv --config exam.json -o chart.html
//!   seatchart_cli roster.csv --json              # JSON snapshot instead of HTML

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use seatchart::{generate, ChartConfig, OutputFormat};

#[derive(Debug, Parser)]
#[command(version, about = "Shuffle a roster into a front-loaded exam seating chart")]
struct Args {
    /// Roster file with name and ID columns (CSV, or TSV by extension)
    input: Option<PathBuf>,
    /// JSON configuration file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Rows in the room
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    rows: Option<usize>,
    /// Seats per row
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    cols: Option<usize>,
    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,
    /// Label language: zh or en
    #[arg(long)]
    locale: Option<String>,
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    room: Option<String>,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    time: Option<String>,
    /// Output file (default: seating_chart_frontloaded_<locale>_rs<seed>.html)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Column holding the student name
    #[arg(long)]
    name_field: Option<String>,
    /// Column holding the student ID
    #[arg(long)]
    id_field: Option<String>,
    /// Write a JSON snapshot instead of HTML
    #[arg(long)]
    json: bool,
    /// Log debug detail
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Start from the config file (if any) and apply flags on top.
    fn into_config(self) -> seatchart::Result<ChartConfig> {
        let mut config = match &self.config {
            Some(path) => ChartConfig::from_json_file(path)?,
            None => ChartConfig::default(),
        };
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(subject) = self.subject {
            config.subject = subject;
        }
        if let Some(room) = self.room {
            config.room = room;
        }
        if let Some(date) = self.date {
            config.date = date;
        }
        if let Some(time) = self.time {
            config.time = time;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        if let Some(name) = self.name_field {
            config.fields.name = name;
        }
        if let Some(id) = self.id_field {
            config.fields.id = id;
        }
        if self.json {
            config.format = OutputFormat::Json;
        }
        if config.input.as_os_str().is_empty() {
            return Err(seatchart::SeatchartError::Config(
                "no roster file given (pass INPUT or set \"input\" in the config file)"
                    .to_string(),
            ));
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match args.into_config().and_then(|config| generate(&config)) {
        Ok(report) => {
            let output = std::fs::canonicalize(&report.output).unwrap_or(report.output);
            tracing::info!(
                seated = report.seated,
                seats = report.capacity,
                locale = report.locale.code(),
                "Finished; open {} in a browser",
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "{e}");
            ExitCode::FAILURE
        }
    }
}
