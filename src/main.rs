use anyhow::Result;
use clap::Parser;
use cognito::config::{self, Config};
use cognito::display::Renderer;
use cognito::{Assistant, OutputFormat};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Cognito - CLI Error Assistant
#[derive(Parser, Debug)]
#[command(name = "cognito", version, about, long_about = None)]
struct Cli {
    /// Error message to analyze
    error: Option<String>,

    /// Interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Message to analyze once; an empty message means the interactive session.
    fn one_shot_error(&self) -> Option<&str> {
        match self.error.as_deref() {
            Some(error) if !error.is_empty() && !self.interactive => Some(error),
            _ => None,
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::get_config_path()?,
    };

    if cli.init_config {
        Config::create_default(&config_path)?;
        println!("Created default config file at {:?}", config_path);
        return Ok(());
    }

    let config = Config::load_or_default(&config_path)?;
    let renderer = Renderer::new(&config).with_color(!cli.no_color);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut assistant = Assistant::new(renderer).with_format(format);

    let mut stdout = io::stdout();
    match cli.one_shot_error() {
        Some(error) => {
            if let Err(e) = assistant.process_error(error, &mut stdout) {
                eprintln!("Error: {}", e);
            }
        }
        None => {
            let stdin = io::stdin();
            assistant.run_session(stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}
