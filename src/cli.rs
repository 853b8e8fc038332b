// Command-Line Interface

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

use crate::api::{analyze_document, detect_text, generate_disclosure_statement};
use crate::models::{DetectRequest, DetectionResult, DisclosureRequest, FileAnalysisResult};
use crate::services::config_store::{AppConfig, ConfigStore, CONFIG_DIR_ENV};
use crate::services::text_processor::preview;

#[derive(Parser, Debug)]
#[command(
    name = "scholarAI",
    version,
    about = "Audit manuscripts for AI-style prose and draft AI-use disclosures"
)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, global = true, env = CONFIG_DIR_ENV)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score text for AI-style phrasing
    Detect {
        /// Text to analyze; read from stdin when neither TEXT nor --file is given
        text: Option<String>,
        /// Plain-text file to analyze
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Emit JSON instead of a readable report
        #[arg(long)]
        json: bool,
    },
    /// Generate an AI-use disclosure statement
    Disclose {
        /// AI tool used (repeatable); defaults to the configured tools
        #[arg(short, long = "tool")]
        tools: Vec<String>,
        /// What the tools were used for; defaults to the configured purpose
        #[arg(short, long)]
        purpose: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Analyze a .docx, .pdf or .txt manuscript
    Analyze {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file (the old one is backed up)
        #[arg(long)]
        force: bool,
    },
}

fn print_json<T: Serialize>(value: &T, config: &AppConfig) -> anyhow::Result<()> {
    let json = if config.output.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn render_detection(result: &DetectionResult) {
    println!("AI likelihood: {}/100 ({})", result.score, result.level);
    if !result.flagged_sections.is_empty() {
        println!();
        println!("Flagged sections: {}", result.flagged_sections.len());
        for (i, section) in result.flagged_sections.iter().enumerate() {
            println!("  [{}] {}", i + 1, preview(section, 120));
        }
    }
    println!();
    println!("Suggestions:");
    for s in &result.suggestions {
        println!("  - {}", s);
    }
}

fn render_file_analysis(result: &FileAnalysisResult) {
    let s = &result.structure_analysis;
    println!("Format: {}", result.detected_format);
    println!("Words: {}", result.word_count);
    println!(
        "Lines: {}  Paragraphs: {}  Avg sentence: {:.1} words  Abstract: {}",
        s.total_lines,
        s.total_paragraphs,
        s.avg_sentence_length,
        if s.has_abstract { "yes" } else { "no" }
    );
    if !s.estimated_sections.is_empty() {
        println!("Sections: {}", s.estimated_sections.join(" | "));
    }
    println!();
    render_detection(&result.ai_detection);
    println!();
    println!("Improvement suggestions:");
    for s in &result.improvement_suggestions {
        println!("  - {}", s);
    }
}

pub fn execute(command: Command, store: &ConfigStore, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Command::Detect { text, file, json } => {
            let text = read_input(text, file)?;
            let result = detect_text(&DetectRequest { text })?;
            if json {
                print_json(&result, config)?;
            } else {
                render_detection(&result);
            }
        }
        Command::Disclose { tools, purpose, json } => {
            let request = DisclosureRequest {
                ai_tools_used: if tools.is_empty() {
                    config.disclosure.default_tools.clone()
                } else {
                    tools
                },
                purpose: purpose.unwrap_or_else(|| config.disclosure.default_purpose.clone()),
            };
            let response = generate_disclosure_statement(&request)?;
            if json {
                print_json(&response, config)?;
            } else {
                println!("{}", response.disclosure_statement);
            }
        }
        Command::Analyze { path, json } => {
            let bytes = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            let result = analyze_document(&file_name, &bytes, config)?;
            if json {
                print_json(&result, config)?;
            } else {
                render_file_analysis(&result);
            }
        }
        Command::Config { action } => match action {
            ConfigAction::Show => print_json(config, config)?,
            ConfigAction::Path => println!("{}", store.config_file().display()),
            ConfigAction::Init { force } => {
                if store.config_file().exists() && !force {
                    bail!(
                        "{} already exists; pass --force to overwrite",
                        store.config_file().display()
                    );
                }
                store.save(&AppConfig::default())?;
                println!("Wrote {}", store.config_file().display());
            }
        },
    }
    Ok(())
}
