use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use checklist::Config;

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Convert checklist files to HTML tables")]
struct Cli {
    /// Input checklist file
    input: PathBuf,

    /// Number of columns to format lists in to
    #[arg(short, long)]
    columns: Option<u32>,

    /// Title to display at the top
    #[arg(short, long)]
    title: Option<String>,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with page and layout settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw a horizontal rule after every checklist
    #[arg(long)]
    trailing_rule: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::compiled_default(),
    };

    // Command line flags win over the config file
    if let Some(columns) = cli.columns {
        config.page.columns = columns;
    }
    if cli.title.is_some() {
        config.page.title = cli.title;
    }
    if cli.trailing_rule {
        config.layout.trailing_rule = true;
    }

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("html"));

    if let Err(e) = checklist::convert_file(&cli.input, &output, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}
