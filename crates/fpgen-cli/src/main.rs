//! fpgen command-line interface.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fpgen::{Generator, GeneratorConfig, GeneratorError, CONFIG_FILE};

mod ui;

#[derive(Parser)]
#[command(name = "fpgen")]
#[command(version)]
#[command(about = "fpgen - generates PHP value objects, enums and messages from type definitions")]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate PHP classes from definition files
    Generate {
        /// Definition directory
        #[arg(short, long)]
        definitions: Option<PathBuf>,

        /// Map a namespace prefix to a PSR-4 directory (PREFIX=DIR, repeatable)
        #[arg(long = "psr4", value_parser = parse_prefix)]
        psr4: Vec<(String, PathBuf)>,

        /// Map a namespace prefix to a PSR-0 directory (PREFIX=DIR, repeatable)
        #[arg(long = "psr0", value_parser = parse_prefix)]
        psr0: Vec<(String, PathBuf)>,

        /// Directory with template overrides
        #[arg(short, long)]
        templates: Option<PathBuf>,

        /// Generate without writing any files
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate definitions without generating code
    Check {
        /// Definition directory
        #[arg(short, long)]
        definitions: Option<PathBuf>,
    },
}

/// Overrides collected from command-line flags.
#[derive(Debug, Default)]
struct Overrides {
    definitions: Option<PathBuf>,
    psr4: Vec<(String, PathBuf)>,
    psr0: Vec<(String, PathBuf)>,
    templates: Option<PathBuf>,
    dry_run: bool,
}

impl Overrides {
    fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(definitions) = self.definitions {
            config.definitions_dir = definitions;
        }
        config.psr4.extend(self.psr4);
        config.psr0.extend(self.psr0);
        if let Some(templates) = self.templates {
            config.template_dir = Some(templates);
        }
        config.dry_run |= self.dry_run;
        config
    }
}

fn parse_prefix(value: &str) -> Result<(String, PathBuf), String> {
    match value.split_once('=') {
        Some((prefix, dir)) if !prefix.is_empty() && !dir.is_empty() => {
            Ok((prefix.to_string(), PathBuf::from(dir)))
        }
        _ => Err(format!("expected PREFIX=DIR, got '{}'", value)),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "fpgen=debug" } else { "fpgen=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GeneratorConfig::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Generate {
            definitions,
            psr4,
            psr0,
            templates,
            dry_run,
        } => {
            let overrides = Overrides {
                definitions,
                psr4,
                psr0,
                templates,
                dry_run,
            };
            generate(overrides.apply(config))?;
        }

        Commands::Check { definitions } => {
            let overrides = Overrides {
                definitions,
                ..Overrides::default()
            };
            check(overrides.apply(config))?;
        }
    }

    Ok(())
}

/// Generate every definition and print the written files.
fn generate(config: GeneratorConfig) -> miette::Result<()> {
    let start = Instant::now();
    ui::print_compact_header(env!("CARGO_PKG_VERSION"));

    let spinner = ui::spinner("Generating classes...");
    let generator = Generator::new(config);

    let result = match generator.generate() {
        Ok(result) => result,
        Err(e) => {
            spinner.finish_and_clear();
            ui::error_header();
            report_related(&e);
            return Err(e.into());
        }
    };
    spinner.finish_and_clear();

    if result.written {
        ui::success(&format!(
            "{} definitions, {} files written",
            result.definitions,
            result.files.len()
        ));
    } else {
        ui::info(&format!(
            "{} definitions, {} files (dry run, nothing written)",
            result.definitions,
            result.files.len()
        ));
    }

    if !result.files.is_empty() {
        ui::divider();
        ui::file_tree(&result.files, result.written);
        println!();
    }

    ui::timing("Done", start.elapsed().as_millis());
    Ok(())
}

/// Validate definitions and report the outcome.
fn check(config: GeneratorConfig) -> miette::Result<()> {
    let start = Instant::now();
    let spinner = ui::spinner("Checking definitions...");
    let generator = Generator::new(config);

    match generator.check() {
        Ok(count) => {
            spinner.finish_and_clear();
            ui::looking_good();
            ui::dim(&format!(
                "{} definitions in {}",
                count,
                generator.config().definitions_dir.display()
            ));
            ui::timing("Checked", start.elapsed().as_millis());
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            ui::nope_header();
            report_related(&e);
            Err(e.into())
        }
    }
}

/// One summary line per collected definition error.
fn report_related(error: &GeneratorError) {
    if let GeneratorError::InvalidDefinitions { errors } = error {
        for related in errors {
            ui::error(&related.to_string());
        }
        println!();
    }
}
