use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use voxobj_io::{ConvertConfig, convert};

mod paths;
mod report;

use paths::{Location, json_path, obj_path};
use report::ReportKind;

/// Convert a JSON block scene into a face-culled OBJ mesh.
#[derive(Parser, Debug)]
#[command(name = "voxobj", version, about)]
struct Cli {
    /// Input scene (`<name>.json`)
    #[arg(short, long, value_parser = json_path)]
    input: PathBuf,
    /// Output mesh (`<name>.obj`); defaults to the input path with `.obj`
    #[arg(short, long, value_parser = obj_path)]
    output: Option<PathBuf>,
    /// Where the output file goes: the current directory or next to the input
    #[arg(short, long, value_enum)]
    location: Option<Location>,
    /// Print a report of the parsed blocks
    #[arg(short, long, value_enum)]
    report: Option<ReportKind>,
    /// TOML file with conversion settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => match ConvertConfig::from_path(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ConvertConfig::default(),
    };

    let output = paths::resolve_output(&cli.input, cli.output.as_deref(), cli.location);
    log::debug!("{} -> {}", cli.input.display(), output.display());

    let result = convert(&cli.input, &output, &cfg);
    println!("{}", result.message);
    if !result.is_success() {
        return ExitCode::FAILURE;
    }

    if let Some(kind) = cli.report {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = report::write_report(&mut lock, kind, &result.blocks).and_then(|_| lock.flush()) {
            log::error!("failed to print report: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
