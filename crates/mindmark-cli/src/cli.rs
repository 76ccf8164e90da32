//! Command-line interface for the mindmark utility
//!
//! Provides a CLI to turn Markdown-style outlines into radial mindmap SVGs,
//! plus a couple of inspection commands for checking how an outline nests.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use mindmark::core::logging::init_logging;
use mindmark::plugins::mindmap::MindmapDatabase;
use mindmark::plugins::Orchestrator;
use mindmark::{Database, NodeId, Palette, RenderConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Mindmark - Turn Markdown-style outlines into radial mindmaps
#[derive(Parser)]
#[command(name = "mindmark")]
#[command(about = "Turn Markdown-style outlines into radial mindmap SVG documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an outline to an SVG mindmap
    Convert {
        /// Outline file to read (use - for stdin)
        input: PathBuf,

        /// SVG file to write (use - for stdout)
        output: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,

        /// Comma-separated branch colors, e.g. "#ef4444,#3b82f6"
        #[arg(long)]
        palette: Option<Palette>,
    },

    /// Print the tree inferred from an outline
    Outline {
        /// Outline file to read (use - for stdin)
        input: PathBuf,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print node, edge and depth counts for an outline
    Stats {
        /// Outline file to read (use - for stdin)
        input: PathBuf,
    },
}

/// JSON shape of one outline node
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OutlineEntry {
    pub label: String,
    pub children: Vec<OutlineEntry>,
}

impl OutlineEntry {
    fn from_database(database: &MindmapDatabase, id: NodeId) -> Self {
        Self {
            label: database.label(id).to_string(),
            children: database
                .children(id)
                .iter()
                .map(|&child| Self::from_database(database, child))
                .collect(),
        }
    }
}

/// Main CLI application
pub struct MindmarkApp {
    orchestrator: Orchestrator,
}

impl MindmarkApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self {
            orchestrator: Orchestrator::new(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("MINDMARK_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("MINDMARK_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Mindmark v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Convert {
                input,
                output,
                width,
                height,
                palette,
            } => self.convert_command(&input, &output, width, height, palette, cli.verbose),
            Commands::Outline { input, json } => {
                let content = self.read_input(&input)?;
                let database = self.orchestrator.parse(&content)?;
                let text = if json {
                    outline_json(&database)?
                } else {
                    outline_text(&database)
                };
                self.write_output(Path::new("-"), &text)
            }
            Commands::Stats { input } => {
                let content = self.read_input(&input)?;
                let database = self.orchestrator.parse(&content)?;
                self.write_output(Path::new("-"), &stats_text(&database))
            }
        }
    }

    /// Handle the convert command
    fn convert_command(
        &self,
        input: &Path,
        output: &Path,
        width: u32,
        height: u32,
        palette: Option<Palette>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let mut config = RenderConfig::new(width, height);
        if let Some(palette) = palette {
            config = config.with_palette(palette);
        }
        config.validate()?;

        let (svg, database) = Orchestrator::with_config(config).process_with_database(&content)?;
        debug!(
            nodes = database.node_count(),
            bytes = svg.len(),
            "Rendered mindmap"
        );

        self.write_output(output, &svg)?;
        eprintln!("Generated {} ({}x{})", output.display(), width, height);
        Ok(())
    }

    /// Read input from a file, or stdin for `-`
    pub fn read_input(&self, input: &Path) -> Result<String> {
        if input.to_string_lossy() == "-" {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read from stdin")?;
            Ok(content)
        } else {
            fs::read_to_string(input)
                .with_context(|| format!("Failed to read input file '{}'", input.display()))
        }
    }

    /// Write output to a file, or stdout for `-`
    pub fn write_output(&self, output: &Path, content: &str) -> Result<()> {
        if output.to_string_lossy() == "-" {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.is_empty() && !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        } else {
            fs::write(output, content)
                .with_context(|| format!("Failed to write output file '{}'", output.display()))?;
        }
        Ok(())
    }
}

impl Default for MindmarkApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Indented text view of the parsed tree, two spaces per depth
pub fn outline_text(database: &MindmapDatabase) -> String {
    let mut lines = Vec::new();
    let mut stack = vec![(database.root(), 0usize)];
    while let Some((id, depth)) = stack.pop() {
        let label = database.label(id);
        let label = if label.is_empty() { "(root)" } else { label };
        lines.push(format!("{}{}", "  ".repeat(depth), label));
        for &child in database.children(id).iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    lines.join("\n")
}

/// Pretty-printed JSON view of the parsed tree
pub fn outline_json(database: &MindmapDatabase) -> Result<String> {
    let entry = OutlineEntry::from_database(database, database.root());
    Ok(serde_json::to_string_pretty(&entry)?)
}

/// Summary counts for the parsed tree
pub fn stats_text(database: &MindmapDatabase) -> String {
    format!(
        "nodes: {}\nedges: {}\nmain branches: {}\nmax depth: {}",
        database.node_count(),
        database.edge_count(),
        database.main_branches().len(),
        database.max_depth()
    )
}
