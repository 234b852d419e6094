//! # Curriculum Admin
//!
//! Command-line entry point for running lesson generation and publishing
//! against the configured PostgreSQL database.

use anyhow::Context;
use clap::{Parser, Subcommand};
use curriculum_core::config::ConfigLoader;
use curriculum_core::constants::UserRole;
use curriculum_core::logging::init_structured_logging;
use curriculum_core::orchestration::{
    GenerationRequest, LessonGenerator, LessonPublisher, PublishRequest, QuestionGenerator,
};
use curriculum_core::store::{CurriculumStore, PgCurriculumStore};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "curriculum-admin")]
#[command(about = "Generate and publish curriculum lessons")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file (default: config/curriculum.toml plus environment overlay)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip applying database migrations on startup
    #[arg(long)]
    skip_migrations: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate draft lessons for the active subject × grade universe
    Generate {
        /// Limit to these subject ids (repeatable)
        #[arg(long = "subject")]
        subject_ids: Vec<i64>,

        /// Limit to these grade ids (repeatable)
        #[arg(long = "grade")]
        grade_ids: Vec<i64>,

        /// Report what would be created without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Id of the user the lessons are attributed to
        #[arg(long)]
        created_by: i64,

        /// Role of the creating user
        #[arg(long, default_value = "admin")]
        role: UserRole,
    },

    /// Publish lessons into owner libraries
    Publish {
        /// Lesson ids to publish (repeatable)
        #[arg(long = "lesson", required = true)]
        lesson_ids: Vec<i64>,

        /// Library the lessons are published into
        #[arg(long)]
        library: UserRole,

        /// Owner ids receiving a library item (repeatable)
        #[arg(long = "owner")]
        owner_ids: Vec<i64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("curriculum-admin: {e:#}");
            process::exit(2);
        }
    }
}

/// Returns `Ok(false)` when the pipeline reported errors
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_file(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load().context("failed to load configuration")?;
    init_structured_logging(&config.logging);

    let pg_store = PgCurriculumStore::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    if !cli.skip_migrations {
        pg_store
            .run_migrations()
            .await
            .context("failed to run migrations")?;
    }
    let store: Arc<dyn CurriculumStore> = Arc::new(pg_store);

    let (output, ok) = match cli.command {
        Commands::Generate {
            subject_ids,
            grade_ids,
            dry_run,
            created_by,
            role,
        } => {
            let request = GenerationRequest {
                subject_ids: Some(subject_ids),
                grade_ids: Some(grade_ids),
                dry_run,
                created_by_id: created_by,
                created_by_role: role,
            };
            let generator =
                LessonGenerator::with_config(store, QuestionGenerator::default(), &config.generation);
            let result = generator.generate_lessons(request).await;
            info!(lessons_created = result.lessons_created, dry_run, "Generate command complete");
            (serde_json::to_string_pretty(&result)?, !result.has_errors())
        }
        Commands::Publish {
            lesson_ids,
            library,
            owner_ids,
        } => {
            let publisher = LessonPublisher::new(store);
            let result = publisher
                .publish_lessons(PublishRequest::new(lesson_ids, library, owner_ids))
                .await;
            info!(lessons_published = result.lessons_published, "Publish command complete");
            (serde_json::to_string_pretty(&result)?, !result.has_errors())
        }
    };

    println!("{output}");
    Ok(ok)
}
