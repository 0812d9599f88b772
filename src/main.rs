//! CLI entry point for source-doc-builder
//!
//! Provides command-line interface for checking dates, listing a variant's
//! module palette, rendering previews, headless export, and launching the
//! GUI.

use clap::{Parser, Subcommand};
use colored::*;
use source_doc_builder::core::store::DocumentFile;
use source_doc_builder::core::variant::VariantConfig;
use source_doc_builder::core::{catalog, dates};
use source_doc_builder::render::preview::render_preview;
use source_doc_builder::{export, ui};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "source-doc-builder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GUI
    Gui {
        /// Built-in variant to use
        #[arg(short, long, default_value = "standard")]
        variant: String,

        /// Custom variant JSON file (overrides --variant)
        #[arg(long)]
        variant_file: Option<PathBuf>,
    },

    /// List a variant's module palette
    Modules {
        /// Built-in variant to list
        #[arg(short, long, default_value = "standard")]
        variant: String,
    },

    /// Validate and normalize a date string
    Check {
        /// The date to check (e.g. "2025-08-28" or "28-AUG-2025")
        date: String,
    },

    /// Print the plain-text preview of a document JSON file
    Preview {
        /// Path to the document JSON file
        #[arg(short, long)]
        document: PathBuf,

        /// Custom variant JSON file (overrides the document's variant)
        #[arg(long)]
        variant_file: Option<PathBuf>,
    },

    /// Export a document JSON file to a print-ready document
    Export {
        /// Path to the document JSON file
        #[arg(short, long)]
        document: PathBuf,

        /// Output directory for the export
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Custom variant JSON file (overrides the document's variant)
        #[arg(long)]
        variant_file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gui {
            variant,
            variant_file,
        } => {
            let variant = load_variant(&variant, variant_file.as_deref())?;
            ui::App::new(variant).run();
        }
        Commands::Modules { variant } => list_modules(&variant)?,
        Commands::Check { date } => check_date(&date),
        Commands::Preview {
            document,
            variant_file,
        } => preview_document(&document, variant_file.as_deref())?,
        Commands::Export {
            document,
            out,
            variant_file,
        } => export_document(&document, &out, variant_file.as_deref())?,
    }

    Ok(())
}

/// Expands a tilde in a user-supplied path
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Resolves the active variant from a built-in name or a custom file
fn load_variant(name: &str, variant_file: Option<&Path>) -> anyhow::Result<VariantConfig> {
    match variant_file {
        Some(path) => Ok(VariantConfig::load(&expand_path(path)?)?),
        None => Ok(VariantConfig::resolve(name)?),
    }
}

/// Lists the module palette of a built-in variant
fn list_modules(name: &str) -> anyhow::Result<()> {
    let variant = VariantConfig::resolve(name)?;

    println!(
        "{} Variant '{}': {} modules\n",
        "→".cyan(),
        variant.name,
        variant.modules.len()
    );

    for kind in &variant.modules {
        let template = catalog::template(*kind);
        if let Some(unit) = template.repeat_unit {
            println!(
                "  {}  {} {}",
                kind.tag().bold(),
                template.label,
                format!("(repeatable: {})", unit.to_lowercase()).dimmed()
            );
        } else {
            println!("  {}  {}", kind.tag().bold(), template.label);
        }
    }

    Ok(())
}

/// Validates and normalizes a single date string
fn check_date(date: &str) {
    match dates::normalize_str(date) {
        Some(canonical) => {
            println!("{} {}", "✓".green().bold(), canonical.bold());
        }
        None => {
            println!(
                "{} '{}' is not a valid date (expected DD-MON-YYYY, e.g. 28-AUG-2025)",
                "✗".red().bold(),
                date
            );
            std::process::exit(1);
        }
    }
}

/// Loads a document file and the variant it names
fn load_document(
    document: &Path,
    variant_file: Option<&Path>,
) -> anyhow::Result<(VariantConfig, source_doc_builder::core::store::DocumentStore)> {
    let file = DocumentFile::load(&expand_path(document)?)?;
    let name = file.variant.clone().unwrap_or_else(|| "standard".to_string());
    let variant = load_variant(&name, variant_file)?;
    let store = file.build_store(&variant);
    Ok((variant, store))
}

/// Prints the plain-text preview of a document file
fn preview_document(document: &Path, variant_file: Option<&Path>) -> anyhow::Result<()> {
    let (variant, store) = load_document(document, variant_file)?;
    print!("{}", render_preview(&variant, &store));
    Ok(())
}

/// Headless export of a document file
fn export_document(
    document: &Path,
    out: &Path,
    variant_file: Option<&Path>,
) -> anyhow::Result<()> {
    let (variant, store) = load_document(document, variant_file)?;

    println!("{} Exporting document ({} sections)", "→".cyan(), store.len());

    let path = export::export_to_dir(&variant, &store, &expand_path(out)?)?;

    println!("{} Wrote {}", "✓".green().bold(), path.display());
    Ok(())
}
