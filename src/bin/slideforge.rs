//! SlideForge command-line exporter
//!
//! # Usage
//!
//! ```bash
//! # Export a deck with the Corporate template
//! slideforge export deck.json --template Corporate --author "Jane Doe" \
//!     --institution "Acme University" --date 2024-05-01 --out-dir decks
//!
//! # List available templates
//! slideforge templates
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slideforge::deck::{
    self, AuthorDetails, ExportOptions, PresentationDocument, Template, list_templates,
};

/// SlideForge - export slide decks to PowerPoint
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a deck JSON file to .pptx
    Export {
        /// Deck JSON (titleSlide / bodySlides)
        #[arg(value_name = "DECK")]
        deck: PathBuf,

        /// Template name; unknown names use the default template
        #[arg(short, long, default_value = "Professional")]
        template: String,

        /// Author name for the byline and document properties
        #[arg(long)]
        author: String,

        #[arg(long)]
        institution: String,

        /// Presentation date as printed on the title slide
        #[arg(long)]
        date: String,

        /// Output directory
        #[arg(short, long, env = "SLIDEFORGE_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Replace an existing file
        #[arg(long)]
        overwrite: bool,
    },

    /// List available templates
    Templates,
}

fn select_template(name: &str) -> &'static Template {
    deck::find_template(name).unwrap_or_else(|| {
        let fallback = deck::default_template();
        warn!(requested = name, using = fallback.name(), "unknown template");
        fallback
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Export {
            deck: deck_path,
            template,
            author,
            institution,
            date,
            out_dir,
            overwrite,
        } => {
            let json = std::fs::read_to_string(&deck_path)
                .with_context(|| format!("Failed to read deck: {}", deck_path.display()))?;
            let document = PresentationDocument::from_json(&json)
                .with_context(|| format!("Invalid deck JSON: {}", deck_path.display()))?;

            let author = AuthorDetails::new(author, institution, date);
            let options = ExportOptions { out_dir, overwrite };
            let path = deck::export_to_dir(&document, select_template(&template), &author, &options)
                .context("Failed to export presentation")?;

            println!("{}", path.display());
        },
        Command::Templates => {
            for template in list_templates() {
                let colors = template.colors();
                println!(
                    "{:<14} bg #{} text #{} primary #{}  ({})",
                    template.name(),
                    colors.bg,
                    colors.text,
                    colors.primary,
                    template.ai_hint()
                );
            }
        },
    }

    Ok(())
}
