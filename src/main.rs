use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use capmap::catalog::Catalog;
use capmap::filter;
use capmap::models::{ArtifactBundle, UNASSIGNED_DOMAIN_ID};
use capmap::render;

#[derive(Parser)]
#[command(name = "capmap")]
#[command(about = "Artifact-visibility filtering for capability-mapping catalogues")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply domain and creator filters to a catalogue snapshot
    Filter {
        /// Path to the catalogue JSON file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Business-domain id to keep visible (repeatable)
        #[arg(short, long = "domain")]
        domains: Vec<String>,

        /// Also keep artifacts assigned to no domain at all
        #[arg(short, long)]
        unassigned: bool,

        /// Creator id to keep visible (repeatable)
        #[arg(long = "creator")]
        creators: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "json")]
        output: OutputFormat,
    },
    /// Render the full capability hierarchy as an ASCII tree
    Tree {
        /// Path to the catalogue JSON file
        #[arg(short, long)]
        catalog: PathBuf,
    },
    /// Validate a catalogue snapshot's structure
    Check {
        /// Path to the catalogue JSON file
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The filtered bundle as pretty-printed JSON
    Json,
    /// The filtered capability hierarchy as an ASCII tree
    Tree,
    /// One surviving artifact id per line
    Ids,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "capmap=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_catalog(path: &PathBuf) -> anyhow::Result<Catalog> {
    let catalog = Catalog::from_json_file(path)?;
    catalog.validate()?;
    Ok(catalog)
}

fn print_ids(bundle: &ArtifactBundle) {
    let mut ids: Vec<&str> = bundle
        .components
        .iter()
        .map(|c| c.id.as_str())
        .chain(bundle.capabilities.iter().map(|c| c.id.as_str()))
        .chain(bundle.acquired_entities.iter().map(|e| e.id.as_str()))
        .chain(bundle.vendors.iter().map(|v| v.id.as_str()))
        .chain(bundle.internal_teams.iter().map(|t| t.id.as_str()))
        .collect();
    ids.sort_unstable();
    for id in ids {
        println!("{id}");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            catalog,
            mut domains,
            unassigned,
            creators,
            output,
        } => {
            let catalog = load_catalog(&catalog)?;
            if unassigned {
                domains.push(UNASSIGNED_DOMAIN_ID.to_string());
            }

            let domain_ids = catalog.domain_ids();
            let ctx = catalog.context(&domain_ids);

            let bundle = catalog.artifacts.clone();
            let bundle = filter::filter_by_creator(bundle, &creators, &catalog.creators);
            let mut bundle = filter::filter_by_domain(bundle, &domains, &ctx);
            bundle.capabilities = filter::preserve_capability_hierarchy(
                &bundle.capabilities,
                &catalog.artifacts.capabilities,
            );

            tracing::info!(
                visible = bundle.len(),
                total = catalog.artifacts.len(),
                "filter applied"
            );

            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bundle)?),
                OutputFormat::Tree => {
                    print!("{}", render::render_tree(&render::build_tree(&bundle.capabilities)));
                }
                OutputFormat::Ids => print_ids(&bundle),
            }
        }
        Commands::Tree { catalog } => {
            let catalog = load_catalog(&catalog)?;
            print!(
                "{}",
                render::render_tree(&render::build_tree(&catalog.artifacts.capabilities))
            );
        }
        Commands::Check { catalog } => {
            let loaded = Catalog::from_json_file(&catalog)?;
            loaded.validate()?;
            println!(
                "{}: {} domains, {} artifacts, ok",
                catalog.display(),
                loaded.domains.len(),
                loaded.artifacts.len()
            );
        }
    }

    Ok(())
}
