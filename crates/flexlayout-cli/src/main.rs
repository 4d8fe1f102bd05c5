//! Flexlayout CLI - render and check block manifests.

#![allow(clippy::needless_pass_by_value, clippy::print_stdout)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use flexlayout::blocks::{count_blocks, schemas, Rendered};
use flexlayout::yaml::Manifest;
use flexlayout::{render_manifest, MessageCatalog, RenderConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flexlayout")]
#[command(about = "Render and check flex-layout block manifests")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a manifest to HTML or JSON
    Render {
        /// Path to manifest file (.yaml or .json)
        manifest: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check that a manifest resolves and renders
    Check {
        /// Path to manifest file (.yaml or .json)
        manifest: PathBuf,

        /// Render config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fail when any warning is raised
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Print editor schemas of the layout blocks
    Schema {
        /// Locale to resolve messages for
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Directory of `<locale>.json` message files
        #[arg(short, long)]
        messages: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            manifest,
            format,
            output,
            config,
        } => {
            let rendered = render_file(&manifest, config.as_deref())?;
            let text = format_rendered(&rendered, format)?;
            match output {
                Some(path) => fs::write(&path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{text}"),
            }
        }
        Commands::Check {
            manifest,
            config,
            deny_warnings,
        } => {
            let report = check_file(&manifest, config.as_deref())?;
            println!("{report}");
            if deny_warnings && report.warnings > 0 {
                bail!("{} warning(s) raised", report.warnings);
            }
        }
        Commands::Schema { locale, messages } => {
            println!("{}", schema_json(&locale, messages.as_deref())?);
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    path.map_or_else(
        || Ok(RenderConfig::default()),
        |path| {
            RenderConfig::load(path)
                .with_context(|| format!("invalid render config {}", path.display()))
        },
    )
}

fn render_file(manifest: &Path, config: Option<&Path>) -> Result<Rendered> {
    let config = load_config(config)?;
    let manifest = Manifest::load(manifest)
        .with_context(|| format!("failed to load manifest {}", manifest.display()))?;
    Ok(render_manifest(&manifest, &config)?)
}

fn format_rendered(rendered: &Rendered, format: Format) -> Result<String> {
    match format {
        Format::Html => Ok(rendered.to_html()),
        Format::Json => Ok(serde_json::to_string_pretty(rendered)?),
    }
}

/// Summary printed by `check`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CheckReport {
    path: PathBuf,
    blocks: usize,
    unreferenced: Vec<String>,
    warnings: usize,
    messages: Vec<String>,
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Manifest valid: {}", self.path.display())?;
        writeln!(f, "  Blocks: {}", self.blocks)?;
        for id in &self.unreferenced {
            writeln!(f, "  Unreferenced: {id}")?;
        }
        write!(f, "  Warnings: {}", self.warnings)?;
        for message in &self.messages {
            write!(f, "\n    {message}")?;
        }
        Ok(())
    }
}

fn check_file(path: &Path, config: Option<&Path>) -> Result<CheckReport> {
    let config = load_config(config)?;
    let manifest = Manifest::load(path)
        .with_context(|| format!("failed to load manifest {}", path.display()))?;
    let page = manifest.to_page().context("manifest does not resolve")?;
    let rendered = page.render(&config).context("manifest does not render")?;

    Ok(CheckReport {
        path: path.to_path_buf(),
        blocks: page.blocks().iter().map(|b| count_blocks(b.as_ref())).sum(),
        unreferenced: manifest.unreferenced().into_iter().map(str::to_string).collect(),
        warnings: rendered.diagnostics.len(),
        messages: rendered.diagnostics.iter().map(ToString::to_string).collect(),
    })
}

fn schema_json(locale: &str, messages: Option<&Path>) -> Result<String> {
    let catalog = match messages {
        Some(dir) => MessageCatalog::load_dir(dir)
            .with_context(|| format!("failed to load messages from {}", dir.display()))?,
        None => MessageCatalog::new(),
    };
    let schemas = schemas();
    let localized = catalog.localize_all(locale, schemas.iter().map(|(name, s)| (*name, s)));
    Ok(serde_json::to_string_pretty(&localized)?)
}
