//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use rating_review::config::Config;
use rating_review::model::ReviewModel;
use rating_review::output::OutputMode;
use rating_review::schema::{Registry, Schema};
use rating_review::storage::{self, Backend, DocumentStore};

/// ratings - Store and query rating and review records
#[derive(Parser, Debug)]
#[command(
    name = "ratings",
    version,
    about = "Store and query rating and review records",
    long_about = "Create, list and aggregate rating and review records.\n\n\
                  Every record carries a numeric rating and review text, and may\n\
                  reference the user who wrote it. Candidates missing a rating or\n\
                  review are rejected before anything is stored."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Data directory (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage backend: file, memory (overrides config)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a project config and create the data directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Create a rating and review
    Create {
        /// Id of the user leaving the review
        #[arg(short, long)]
        user: Option<String>,

        /// Numeric rating
        #[arg(short, long, allow_hyphen_values = true)]
        rating: Option<String>,

        /// Review text
        #[arg(short = 't', long)]
        review: Option<String>,
    },

    /// Show a review by id
    Show {
        /// Review id
        id: String,
    },

    /// List reviews, highest rating first
    List {
        /// Only reviews by this user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show the average rating
    Average {
        /// Only ratings by this user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Delete a review by id
    Delete {
        /// Review id
        id: String,
    },

    /// Describe the record schema
    Schema,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (mut config, skipped) = Config::discover();

    let default_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log.level.clone().unwrap_or_else(|| "info".to_string())
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    for (path, err) in &skipped {
        log::warn!("ignoring config {}: {err}", path.display());
    }

    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }
    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(&config, force, output_mode),
        Some(Command::Create {
            user,
            rating,
            review,
        }) => {
            let model = open_model(&config)?;
            commands::create(&model, user, rating, review, output_mode)
        },
        Some(Command::Show { id }) => commands::show(&open_model(&config)?, &id, output_mode),
        Some(Command::List { user }) => {
            commands::list(&open_model(&config)?, user.as_deref(), output_mode)
        },
        Some(Command::Average { user }) => {
            commands::average(&open_model(&config)?, user.as_deref(), output_mode)
        },
        Some(Command::Delete { id }) => commands::delete(&open_model(&config)?, &id, output_mode),
        Some(Command::Schema) => commands::schema(&open_model(&config)?, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("ratings v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("ratings v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'ratings --help' for usage");
                println!("Run 'ratings init' to get started");
            }
            Ok(())
        },
    }
}

/// Build the model for the configured backend
fn open_model(config: &Config) -> anyhow::Result<ReviewModel<Box<dyn DocumentStore>>> {
    let backend: Backend = config.backend()?;
    log::debug!("using {backend} storage at {}", config.storage.data_dir.display());
    let store = storage::open(backend, &config.storage.data_dir);

    let mut registry = Registry::new();
    registry.register(Schema::rating_and_review())?;
    Ok(ReviewModel::from_registry(&registry, store)?)
}
