//! Transcache
//!
//! Command line entry point: load one language and print a couple of
//! translated messages.

use clap::Parser;
use tracing::{info, warn};

use transcache::{
    config::Settings,
    i18n::{TranslationManager, TranslationParams},
    utils::logging,
};

#[derive(Parser)]
#[command(name = "transcache", version, about = "Fetch and print translated messages")]
struct Cli {
    /// Path to config file.
    #[arg(short, long)]
    config: Option<String>,

    /// Language code to load.
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Value substituted for `{name}` in the greeting.
    #[arg(short, long, default_value = "John")]
    name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new()?,
    };
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", transcache::info());

    let manager = TranslationManager::new(&settings.loader)?;

    let Some(translations) = manager.load_translation(&cli.language).await else {
        warn!(language = %cli.language, "No translations available, nothing to display");
        return Ok(());
    };

    let welcome = manager.translate(Some(&*translations), "welcome", None);

    let mut params = TranslationParams::new();
    params.insert("name".to_string(), cli.name.clone());
    let greeting = manager.translate(Some(&*translations), "greeting", Some(&params));

    println!("{}", welcome);
    println!("{}", greeting);

    Ok(())
}
