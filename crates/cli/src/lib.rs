//! # Clinic CLI
//!
//! Command-line interface for Clinic Site.
//!
//! Inspects page routing and manages site content files without opening
//! the desktop window.
//!
//! ## Commands
//!
//! - `pages` - List the known page identifiers
//! - `resolve` - Show which view a page identifier renders
//! - `export` - Write a built-in variant as a content file
//! - `validate` - Validate content files
//! - `info` - Summarize a content set
//!

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use walkdir::WalkDir;

use clinic_content::{
    ContentFormat, SiteContent, ValidationResult, Variant, load_content, save_content_to_string,
    validate_content,
};
use clinic_core::{PageIdentifier, View};

// Re-export dependencies for use in main.rs
pub use clinic_content;
pub use clinic_core;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Arguments
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic Site content and routing utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the known page identifiers and their titles
    Pages,

    /// Show which view a page identifier renders
    Resolve {
        /// Page identifier, any string
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Write a built-in variant as a content file
    Export {
        /// Built-in content set
        #[arg(short, long, default_value_t = Variant::Clinic, env = "CLINIC_SITE_VARIANT")]
        variant: Variant,

        /// Output format (defaults to the output file's extension, then TOML)
        #[arg(short, long)]
        format: Option<ContentFormat>,

        /// File to write (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Validate a content file, or every content file under a directory
    Validate {
        /// File or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Summarize a content set
    Info {
        /// Built-in content set
        #[arg(short, long, default_value_t = Variant::Clinic, conflicts_with = "content")]
        variant: Variant,

        /// Content file to load instead of a built-in variant
        #[arg(short, long, value_name = "PATH")]
        content: Option<PathBuf>,
    },
}

// ============================================================================
// Dispatch
// ============================================================================

/// Run a parsed command line
pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Pages => {
            print_pages();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve { id } => {
            println!("{}", resolve_line(&id));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Export {
            variant,
            format,
            output,
        } => {
            export(variant, format, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { path } => validate(&path),
        Commands::Info { variant, content } => {
            let site = match content {
                Some(path) => load_content(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => variant.content(),
            };
            print_info(&site);
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ============================================================================
// pages / resolve
// ============================================================================

fn print_pages() {
    println!("{}", "Pages".bold());
    for view in View::ALL {
        println!("  {:<14} {}", view.slug().cyan(), view.display_name());
    }
}

/// One line describing where a page identifier leads
pub fn resolve_line(id: &str) -> String {
    let page = PageIdentifier::new(id);
    let view = clinic_core::render(&page);
    if page.is_known() {
        format!("{:?} -> {}", id, view.slug())
    } else {
        format!(
            "{:?} -> {} (unknown identifier, falls back to home)",
            id,
            view.slug()
        )
    }
}

// ============================================================================
// export
// ============================================================================

fn export(variant: Variant, format: Option<ContentFormat>, output: Option<&Path>) -> Result<()> {
    let format = match (format, output) {
        (Some(format), _) => format,
        (None, Some(path)) => ContentFormat::from_path(path)?,
        (None, None) => ContentFormat::default(),
    };
    let text = save_content_to_string(&variant.content(), format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), %variant, "content exported");
            println!(
                "{} Wrote {} content to {}",
                "✓".green(),
                variant,
                path.display()
            );
        }
        None => print!("{}", text),
    }
    Ok(())
}

// ============================================================================
// validate
// ============================================================================

/// Content files to validate under `path`, sorted.
///
/// A file path is returned as is; a directory is searched recursively for
/// `.toml` and `.json` files.
pub fn collect_content_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        anyhow::bail!("{} does not exist", path.display());
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.with_context(|| format!("failed to read {}", path.display()))?;
        if entry.file_type().is_file() && ContentFormat::from_path(entry.path()).is_ok() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn validate(path: &Path) -> Result<ExitCode> {
    let files = collect_content_files(path)?;
    if files.is_empty() {
        println!("{} No content files found in {}", "!".yellow(), path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let mut failed = 0;
    for file in &files {
        match load_content(file) {
            Ok(content) => {
                let result = validate_content(&content);
                print_validation(file, &result);
                if result.has_errors() {
                    failed += 1;
                }
            }
            Err(e) => {
                let label = if e.is_io() { "unreadable" } else { "invalid" };
                println!("{} {} ({}): {}", "✗".red(), file.display(), label, e);
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("{} {} file(s) valid", "✓".green(), files.len());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} {} of {} file(s) invalid", "✗".red(), failed, files.len());
        Ok(ExitCode::FAILURE)
    }
}

fn print_validation(file: &Path, result: &ValidationResult) {
    let mark = if result.has_errors() {
        "✗".red()
    } else {
        "✓".green()
    };
    println!("{} {}", mark, file.display());
    for error in &result.errors {
        println!("    {} {}", "error:".red(), error);
    }
    for warning in &result.warnings {
        println!("    {} {}", "warning:".yellow(), warning);
    }
}

// ============================================================================
// info
// ============================================================================

fn print_info(site: &SiteContent) {
    println!("{}", site.brand.name.bold());
    println!("  {}", site.brand.blurb);
    println!();
    println!(
        "  Treatments:   {} ({} featured)",
        site.treatments.services.len(),
        site.featured_services().len()
    );
    println!(
        "  Testimonials: {} ({} featured)",
        site.testimonials.items.len(),
        site.featured_testimonials().len()
    );
    println!("  Phone:        {}", site.contact.phone);
    println!("  Email:        {}", site.contact.email);
    println!("  Address:      {}", site.contact.address);
    println!("  Primary:      {}", site.theme.primary);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_content::save_content;

    #[test]
    fn test_name() {
        assert_eq!(NAME, "clinic_cli");
    }

    #[test]
    fn test_resolve_line_known() {
        assert_eq!(resolve_line("treatments"), "\"treatments\" -> treatments");
    }

    #[test]
    fn test_resolve_line_falls_back() {
        let line = resolve_line("bogus-page");
        assert!(line.starts_with("\"bogus-page\" -> home"));
        assert!(line.contains("falls back"));
    }

    #[test]
    fn test_collect_content_files() {
        let dir = tempfile::tempdir().unwrap();
        let content = Variant::Clinic.content();
        save_content(&content, dir.path().join("b.toml")).unwrap();
        save_content(&content, dir.path().join("nested/a.json")).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = collect_content_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().is_some_and(|e| e != "txt")));
    }

    #[test]
    fn test_collect_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_content_files(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_cli_parses_export() {
        let cli = Cli::try_parse_from(["clinic", "export", "--variant", "aesthetics", "-f", "json"])
            .unwrap();
        match cli.command {
            Commands::Export {
                variant, format, ..
            } => {
                assert_eq!(variant, Variant::Aesthetics);
                assert_eq!(format, Some(ContentFormat::Json));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_info_rejects_variant_with_content() {
        let result = Cli::try_parse_from([
            "clinic",
            "info",
            "--variant",
            "clinic",
            "--content",
            "site.toml",
        ]);
        assert!(result.is_err());
    }
}
