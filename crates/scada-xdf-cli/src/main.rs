// crates/scada-xdf-cli/src/main.rs

use clap::{Parser, Subcommand};
use log::{error, info, warn};
use scada_xdf::{AppConfig, DasipConfig, Generator, TemplateRegistry, XdfError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "scada-xdf")]
#[command(about = "Generates IFS and IMM XDF documents from signal lists", long_about = None)]
struct Cli {
    /// Application configuration file.
    #[arg(short, long, global = true, default_value = "configs/config.yaml")]
    config: PathBuf,

    /// Log at debug level regardless of `logging.level`.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a CSV signal list into `{B3}_IFS.xml` and `{B3}_IMM.xml`.
    CsvXml {
        #[arg(long)]
        path: PathBuf,
    },
    /// Print template statistics and validation warnings.
    Templates,
    /// Print version information.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The configured level is only known after loading; fall back to info.
    let config = AppConfig::load(&cli.config);
    let level = match (&config, cli.verbose) {
        (_, true) => "debug".to_string(),
        (Ok(cfg), false) => cfg.logging.level.clone(),
        (Err(_), false) => "info".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = config.and_then(|cfg| run(&cli, &cfg));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<(), XdfError> {
    info!(
        "Loaded configuration '{}' from '{}'",
        config.app.name,
        cli.config.display()
    );

    if let Commands::Version = cli.command {
        println!(
            "{} {} (scada-xdf {})",
            config.app.name,
            config.app.version,
            env!("CARGO_PKG_VERSION")
        );
        if !config.app.description.is_empty() {
            println!("{}", config.app.description);
        }
        return Ok(());
    }

    let dasip = DasipConfig::load(&config.files.dasip_mapping).unwrap_or_else(|e| {
        warn!("Could not load DASIP mapping ({}), using defaults", e);
        DasipConfig::default()
    });
    let registry = TemplateRegistry::from_path(&config.files.templates)?;

    match &cli.command {
        Commands::CsvXml { path } => {
            let generator = Generator::new(config, &dasip, &registry);
            let report = generator.generate_from_path(path)?;
            for written in &report.written {
                println!("Generated {}", written.display());
            }
            for kind in &report.skipped {
                println!("Skipped {:?} document: no elements", kind);
            }
            if !report.warnings.is_empty() {
                println!("{} row warnings (details in log)", report.warnings.len());
            }
        }
        Commands::Templates => {
            let stats = registry.stats();
            println!("Templates: {}", stats.total);
            println!("  Analog:   {}", stats.analog);
            println!("  Discrete: {}", stats.discrete);
            println!("  Breaker:  {}", stats.breaker);
            println!("  IfsPoint: {}", stats.ifs_point);
            for message in registry.validate() {
                warn!("{}", message);
            }
        }
        Commands::Version => {}
    }

    Ok(())
}
