//codeview/src/main.rs
use std::io::{self, Write};
use std::path::PathBuf;

use codeview::app::{build_demo, render_demo, AppError};
use codeview::services::Settings;
use codeview::ui::backend::ansi::write_buffer;

mod logging;

const USAGE: &str = "usage: codeview [--config=PATH] [--out=PATH] [--log-dir=DIR] SOURCE.go";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    source: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut parsed = Args::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--config=") {
            parsed.config = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--out=") {
            parsed.out = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--log-dir=") {
            parsed.log_dir = Some(PathBuf::from(value));
        } else {
            parsed.source = Some(PathBuf::from(arg));
        }
    }
    parsed
}

fn main() -> Result<(), AppError> {
    let args = parse_args(std::env::args().skip(1));
    let _logging = logging::init(args.log_dir.as_deref());

    let Some(source_path) = args.source else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let source = std::fs::read_to_string(&source_path)
        .map_err(|e| AppError::Read(source_path.clone(), e))?;
    tracing::info!(path = %source_path.display(), bytes = source.len(), "rendering source");

    let mut root = build_demo(&source, &settings)?;
    let buf = render_demo(&mut root, &settings);

    match &args.out {
        Some(path) => {
            let mut file = io::BufWriter::new(std::fs::File::create(path)?);
            write_buffer(&mut file, &buf)?;
            tracing::info!(out = %path.display(), cols = buf.cols(), rows = buf.rows(), "saved");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_buffer(&mut lock, &buf)?;
            lock.flush()?;
        }
    }
    Ok(())
}
