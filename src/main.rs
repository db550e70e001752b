//! forum-locale administration tool
//!
//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use forum_locale::{
    config::Settings,
    database::{create_pool, run_migrations, DatabaseService},
    i18n::{CultureCatalog, CsvReport, Translator},
    models::{CreateLanguageRequest, Language, UpdateResourceKeyRequest},
    services::{LocalizationService, ServiceFactory},
    utils::logging,
};

#[derive(Parser)]
#[command(name = "forum-locale")]
#[command(about = "Manage forum languages and resource strings")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the configured default language if it is missing
    Init,

    /// Report whether the localization store is usable
    Health,

    /// List installed languages
    Languages,

    /// List known cultures that are not installed yet
    Cultures,

    /// Install a language
    AddLanguage {
        /// Culture code, e.g. fr-FR
        culture: String,

        /// Display name (defaults to the culture's English name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Delete a language and all of its values
    DeleteLanguage {
        culture: String,
    },

    /// Add a resource key to every language
    AddKey {
        name: String,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Rename a resource key
    RenameKey {
        name: String,
        new_name: String,
    },

    /// Delete a resource key in every language
    DeleteKey {
        name: String,
    },

    /// Print a resource string (the key itself when untranslated)
    Get {
        culture: String,
        key: String,
    },

    /// Set a resource value
    Set {
        culture: String,
        key: String,
        value: String,
    },

    /// Search a language's values by key name or text
    Search {
        culture: String,
        term: String,

        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Export a language as key,value lines
    Export {
        culture: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a language from a key,value file
    Import {
        culture: String,

        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translation coverage per language
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    }
    .context("Failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&settings.database).await?;
    run_migrations(&db_pool).await?;

    let database_service = DatabaseService::new(db_pool);
    let services = ServiceFactory::new(
        &settings,
        Arc::new(database_service.languages.clone()),
        Arc::new(database_service.resources.clone()),
    );

    run(cli.command, &services).await
}

async fn run(command: Commands, services: &ServiceFactory) -> Result<()> {
    let service = &services.localization_service;

    match command {
        Commands::Init => {
            let language = service.ensure_default_language().await?;
            println!("Default language: {} ({})", language.name, language.language_culture);
        }
        Commands::Health => {
            let status = services.health_check().await;
            println!("Languages: {}", status.language_count);
            println!("Resource keys: {}", status.resource_key_count);
            for issue in status.get_issues() {
                println!("Issue: {}", issue);
            }
            if !status.is_healthy() {
                bail!("Localization store is not healthy");
            }
        }
        Commands::Languages => {
            let default_culture = &service.config().default_language;
            for language in service.all_languages().await? {
                let marker = if language.language_culture.eq_ignore_ascii_case(default_culture) { " (default)" } else { "" };
                println!("{}\t{}{}", language.language_culture, language.name, marker);
            }
        }
        Commands::Cultures => {
            for culture in service.available_cultures().await? {
                println!("{}\t{}\t{}", culture.code, culture.english_name, culture.native_name);
            }
        }
        Commands::AddLanguage { culture, name } => {
            let language = match name {
                Some(name) => {
                    service
                        .add_language(CreateLanguageRequest { name, language_culture: culture })
                        .await?
                }
                None => {
                    let info = CultureCatalog::get()
                        .resolve(&culture)
                        .ok_or_else(|| anyhow!("Unknown culture '{}', pass --name to install it anyway", culture))?;
                    service.add_language_for_culture(info).await?
                }
            };
            println!("Added {} ({})", language.name, language.language_culture);
        }
        Commands::DeleteLanguage { culture } => {
            let language = require_language(service, &culture).await?;
            service.delete_language(&language).await?;
            println!("Deleted {}", language.language_culture);
        }
        Commands::AddKey { name, notes } => {
            let key = service.add_resource_key(&name, notes).await?;
            println!("Added {}", key.name);
        }
        Commands::RenameKey { name, new_name } => {
            let key = service
                .resource_key_by_name(&name)
                .await?
                .ok_or_else(|| anyhow!("Resource key '{}' not found", name))?;
            let key = service
                .update_resource_key(key.id, UpdateResourceKeyRequest { name: Some(new_name), notes: None })
                .await?;
            println!("Renamed to {}", key.name);
        }
        Commands::DeleteKey { name } => {
            let key = service
                .resource_key_by_name(&name)
                .await?
                .ok_or_else(|| anyhow!("Resource key '{}' not found", name))?;
            service.delete_resource_key(&key).await?;
            println!("Deleted {}", key.name);
        }
        Commands::Get { culture, key } => {
            let language = require_language(service, &culture).await?;
            println!("{}", service.resource_string(language.id, &key).await);
        }
        Commands::Set { culture, key, value } => {
            let language = require_language(service, &culture).await?;
            service.update_resource_value(language.id, &key, &value).await?;
            println!("Updated {} in {}", key, language.language_culture);
        }
        Commands::Search { culture, term, page } => {
            let language = require_language(service, &culture).await?;
            let results = service.search_values(language.id, &term, service.page(page)).await?;
            for resource in &results.items {
                println!("{}\t{}", resource.key_name, resource.resource_value);
            }
            println!("Page {} of {} ({} matches)", results.page_index, results.total_pages().max(1), results.total_count);
        }
        Commands::Export { culture, output } => {
            let language = require_language(service, &culture).await?;
            let csv = service.export_to_csv(&language).await?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, csv)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Exported {} to {}", language.language_culture, path.display());
                }
                None => print!("{}", csv),
            }
        }
        Commands::Import { culture, file, json } => {
            let text = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let report = service.import_from_csv_str(&culture, &text).await;
            print_report(&report, json)?;
            if report.has_errors() {
                bail!("Import finished with {} error(s)", report.errors.len());
            }
        }
        Commands::Stats => {
            let mut translator = Translator::new(&service.config().default_language);
            translator.load_all(service).await?;
            let stats = translator.stats();
            println!("Resource keys: {}", stats.total_keys);
            for language in stats.languages {
                println!(
                    "{}\t{} keys\t{} untranslated",
                    language.culture, language.key_count, language.untranslated_count
                );
            }
        }
    }

    Ok(())
}

async fn require_language(service: &LocalizationService, culture: &str) -> Result<Language> {
    service
        .language_by_culture(culture)
        .await?
        .ok_or_else(|| anyhow!("Language '{}' is not installed", culture))
}

fn print_report(report: &CsvReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for item in &report.errors {
        println!("error [{:?}] {}", item.kind, item.message);
    }
    for item in &report.warnings {
        println!("warning [{:?}] {}", item.kind, item.message);
    }
    println!("{} error(s), {} warning(s)", report.errors.len(), report.warnings.len());
    Ok(())
}
