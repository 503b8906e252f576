//! roster-diagram CLI entry point.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use roster_diagram::config::{AppConfig, OutputFormat};
use roster_diagram::dataset::{ScheduleDataset, Selection, export};
use roster_diagram::error::RosterError;
use roster_diagram::render_selection;

/// Train roster-line schedule to horizontal diagrams.
#[derive(Parser, Debug)]
#[command(
    name = "roster-diagram",
    version = env!("ROSTER_DIAGRAM_VERSION"),
    about = "Train roster-line schedule to horizontal diagrams"
)]
struct Cli {
    /// Schedule CSV file (reads from stdin if not provided)
    input: Option<String>,

    /// Service day to include (repeatable)
    #[arg(short = 'd', long = "day")]
    days: Vec<String>,

    /// Roster line to include (repeatable)
    #[arg(short = 'l', long = "line")]
    lines: Vec<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Train box padding (spaces inside border)
    #[arg(short = 'p', long = "padding")]
    padding: Option<usize>,

    /// TOML or JSON configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Also write the filtered table as CSV into this directory
    #[arg(long = "export-csv")]
    export_csv: Option<String>,

    /// List the days present in the table and exit
    #[arg(long = "list-days")]
    list_days: bool,

    /// List the lines available for the selected days and exit
    #[arg(long = "list-lines")]
    list_lines: bool,
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", e);
    process::exit(1);
}

fn load_config(cli: &Cli) -> Result<AppConfig, RosterError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(format) = cli.format {
        config.render.format = format;
    }
    if cli.use_ascii {
        config.render.unicode = false;
    }
    if let Some(padding) = cli.padding {
        config.render.padding = padding;
    }
    Ok(config)
}

fn load_dataset(cli: &Cli, config: &AppConfig) -> Result<ScheduleDataset, RosterError> {
    match &cli.input {
        Some(path) => ScheduleDataset::from_path(path, &config.dataset),
        None => ScheduleDataset::from_reader(io::stdin().lock(), &config.dataset),
    }
}

fn export_csv(
    dir: &str,
    dataset: &ScheduleDataset,
    selection: &Selection,
) -> Result<PathBuf, RosterError> {
    let path = Path::new(dir).join(export::file_name(selection.days(), "csv"));
    let file = fs::File::create(&path).map_err(|e| RosterError::io(&path, e))?;
    export::write_csv(&dataset.filter(selection), io::BufWriter::new(file))?;
    Ok(path)
}

fn print_list(items: &[&str]) {
    let mut stdout = io::stdout().lock();
    for item in items {
        if let Err(e) = writeln!(stdout, "{}", item) {
            fail(format!("cannot write stdout: {}", e));
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| fail(e));
    let dataset = load_dataset(&cli, &config).unwrap_or_else(|e| fail(e));

    if cli.list_days {
        print_list(&dataset.days());
        return;
    }

    let selection = Selection::new(cli.days.iter().cloned(), cli.lines.iter().cloned());

    if cli.list_lines {
        print_list(&dataset.lines_for_days(selection.days()));
        return;
    }

    let rendered = match render_selection(&dataset, &selection, &config.render) {
        Ok(s) => s,
        Err(advisory) => {
            log::warn!("incomplete selection: {}", advisory);
            eprintln!("warning: {}", advisory);
            return;
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, &rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }

    if let Some(ref dir) = cli.export_csv {
        if dataset.filter(&selection).is_empty() {
            log::warn!("selection matches no rows, skipping export");
            return;
        }
        match export_csv(dir, &dataset, &selection) {
            Ok(path) => log::info!("exported filtered table to {}", path.display()),
            Err(e) => fail(e),
        }
    }
}
