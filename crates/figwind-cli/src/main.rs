use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use figwind_codegen::{generate, parse_options, serialize, MarkupFormat, Snapshot};
use figwind_core::{CodegenOptions, Size};
use figwind_resolver::{ClassResolver, Theme};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "figwind")]
#[command(about = "Generate utility-class markup from a design document snapshot")]
#[command(version)]
struct Cli {
    /// Snapshot JSON with the selected nodes and their host data
    snapshot: PathBuf,

    /// Output dialect (html or jsx)
    #[arg(long, default_value_t = MarkupFormat::Html)]
    format: MarkupFormat,

    /// Generation options JSON
    #[arg(long)]
    options: Option<PathBuf>,

    /// Theme JSON replacing the built-in scales
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Print the markup together with the selection sizes as JSON
    #[arg(long)]
    sizes: bool,
}

/// `--sizes` output.
#[derive(Serialize)]
struct SizedMarkup<'a> {
    markup: &'a str,
    sizes: &'a [Size],
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> figwind_codegen::Result<String> {
    let snapshot = Snapshot::load(&cli.snapshot)?;
    let options = match &cli.options {
        Some(path) => parse_options(&read(path)?)?,
        None => CodegenOptions::default(),
    };
    let theme = match &cli.theme {
        Some(path) => Theme::from_json(&read(path)?)?,
        None => Theme::tailwind()?,
    };
    let resolver = ClassResolver::new(&theme)?;

    info!(
        snapshot = %cli.snapshot.display(),
        nodes = snapshot.selection.len(),
        format = %cli.format,
        "generating markup"
    );
    let generated = generate(&snapshot, &resolver, &options, &snapshot.selection).await;
    let markup = serialize(&generated.root, cli.format);

    if !cli.sizes {
        return Ok(markup);
    }
    let output = SizedMarkup {
        markup: &markup,
        sizes: &generated.sizes,
    };
    Ok(serde_json::to_string_pretty(&output).map_err(std::io::Error::from)?)
}

fn read(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}
