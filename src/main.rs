//! fontpie - Insert fallback @font-face rules into a stylesheet

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use fontpie::{FontTypes, Fontpie, MetricsTable, Options};

#[derive(Parser)]
#[command(name = "fontpie")]
#[command(version, about = "Insert metric-matched fallback @font-face rules", long_about = None)]
#[command(after_help = "EXAMPLES:
    fontpie fonts.css --font-types types.json --metrics metrics.json
    fontpie fonts.css -o dist.css --font-types types.json --metrics metrics.json --src-root ./static

FILES:
    types.json      {\"Noto Serif\": \"serif\", \"Roboto\": \"sans-serif\"}
    metrics.json    {\"fonts/Roboto.ttf\": {\"fallbackFont\": \"Arial\", \"ascentOverride\": \"92.77%\",
                     \"descentOverride\": \"24.41%\", \"lineGapOverride\": \"0%\", \"sizeAdjust\": \"100.3%\"}}")]
struct Cli {
    /// Input stylesheet
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output stylesheet (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON object mapping font-family names to sans-serif, serif or mono
    #[arg(long, value_name = "FILE")]
    font_types: PathBuf,

    /// JSON object mapping font file paths to precomputed fallback metrics
    #[arg(long, value_name = "FILE")]
    metrics: PathBuf,

    /// Directory that src URLs are resolved against
    #[arg(long, value_name = "DIR")]
    src_root: Option<PathBuf>,

    /// Suppress warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let font_types: FontTypes = read_json(&cli.font_types)?;
    let metrics: MetricsTable = read_json(&cli.metrics)?;
    log::debug!(
        "loaded {} font types and {} metrics entries",
        font_types.len(),
        metrics.len()
    );

    let mut options = Options::new().with_font_types(font_types);
    if let Some(root) = cli.src_root.clone() {
        options = options
            .with_src_url_to_filename(move |url| root.join(url.trim_start_matches('/')));
    }

    let fontpie = Fontpie::new(options, metrics).map_err(|e| e.to_string())?;
    let output = fontpie
        .process_file(&cli.input)
        .map_err(|e| format!("{}: {e}", cli.input.display()))?;

    if !cli.quiet {
        for warning in &output.warnings {
            eprintln!("{}: {warning}", cli.input.display());
        }
    }

    match &cli.output {
        Some(path) => fs::write(path, output.css)
            .map_err(|e| format!("{}: {e}", path.display()))?,
        None => print!("{}", output.css),
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("{}: {e}", path.display()))
}
