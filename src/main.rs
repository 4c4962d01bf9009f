//! pathgen CLI entrypoint
//! Parses command-line arguments, loads the config and schema, and runs the generator.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pathgen::codegen::{Renderer, TeraRenderer};
use pathgen::core::Config;
use pathgen::generate::{GenerationReport, Generator};
use pathgen::openapi::{OpenApiDocument, load_document};
use pathgen::output::FileSystemOutput;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pathgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render code and documentation for every registered endpoint
    Generate {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(long)]
        schema_path: PathBuf,
        /// Config file (.toml, .yml or .yaml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Root directory for the generated files
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Directory of templates replacing the built-in ones
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// Skip documentation files
        #[arg(long)]
        no_docs: bool,
    },
    /// Validate every registered endpoint without writing anything
    Check {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(long)]
        schema_path: PathBuf,
        /// Config file (.toml, .yml or .yaml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match cli.command {
        Commands::Generate {
            schema_path,
            config,
            output_dir,
            template_dir,
            no_docs,
        } => {
            let mut config = load_config(config.as_deref()).await?;
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir;
            }
            if template_dir.is_some() {
                config.template_dir = template_dir;
            }
            if no_docs {
                config.generate_docs = false;
            }
            generate(&schema_path, config).await
        }
        Commands::Check {
            schema_path,
            config,
        } => {
            let config = load_config(config.as_deref()).await?;
            check(&schema_path, config).await
        }
    }
}

/// Config from `path` (or the defaults), with the template directory
/// environment variable applied underneath it.
async fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)
            .await
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let config = config.with_env_template_dir();
    debug!(?config, "Resolved configuration");
    Ok(config)
}

async fn load_schema(schema_path: &Path) -> anyhow::Result<OpenApiDocument> {
    load_document(schema_path)
        .await
        .with_context(|| format!("Failed to load OpenAPI schema {}", schema_path.display()))
}

fn build_generator(config: &Config) -> anyhow::Result<Generator> {
    let renderer: Arc<dyn Renderer> = match &config.template_dir {
        Some(dir) => Arc::new(
            TeraRenderer::from_dir(dir)
                .with_context(|| format!("Failed to load templates from {}", dir.display()))?,
        ),
        None => Arc::new(TeraRenderer::embedded().context("Failed to load built-in templates")?),
    };

    Ok(Generator::new(
        config.registry(),
        renderer,
        Arc::new(FileSystemOutput::new()),
        config.output_dir.clone(),
    )
    .with_docs(config.generate_docs))
}

async fn generate(schema_path: &Path, config: Config) -> anyhow::Result<()> {
    info!(
        schema = %schema_path.display(),
        output_dir = %config.output_dir.display(),
        "Generating provider files"
    );
    let document = load_schema(schema_path).await?;
    let generator = build_generator(&config)?;

    let report = generator.run(&document).await;
    for generated in &report.generated {
        for file in &generated.files {
            println!("{}", file.display());
        }
    }
    finish(&report)
}

async fn check(schema_path: &Path, config: Config) -> anyhow::Result<()> {
    let document = load_schema(schema_path).await?;
    let generator = build_generator(&config)?;

    let report = generator.check(&document);
    for checked in &report.generated {
        println!("ok      {} ({})", checked.endpoint, checked.kind);
    }
    for failure in &report.failures {
        println!("invalid {}: {}", failure.endpoint, failure.error);
    }
    for endpoint in &report.missing {
        println!("missing {endpoint}");
    }
    finish(&report)
}

fn finish(report: &GenerationReport) -> anyhow::Result<()> {
    if report.is_success() {
        return Ok(());
    }
    anyhow::bail!(
        "{} endpoint(s) failed and {} endpoint(s) were missing from the schema",
        report.failures.len(),
        report.missing.len()
    )
}
