//! Command-line interface for scout.
//!
//! Provides commands for searching content and driving the mock auth
//! store (login, register, logout, profile updates). This is the driver
//! surface; the library underneath has no knowledge of it.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::GeminiBackend;
use crate::auth::AuthStore;
use crate::config;
use crate::discovery::DiscoveryService;
use crate::domain::{ContentCategory, ContentItem, SearchOutcome, User};
use crate::store::JsonFileStore;

/// scout - AI-powered content discovery engine
#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for content
    Search {
        /// Content category to search
        #[arg(value_enum)]
        category: CategoryArg,

        /// Search query
        query: String,
    },

    /// Log in with an email address
    Login {
        /// Account email (matched case-insensitively)
        email: String,
    },

    /// Register a new account and log it in
    Register {
        /// Display name
        name: String,

        /// Unique handle
        username: String,

        /// Email address
        email: String,
    },

    /// Log out of the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Update the logged-in user's profile
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New bio line
        #[arg(long)]
        bio: Option<String>,

        /// New profile description
        #[arg(long)]
        description: Option<String>,

        /// New profile picture URL
        #[arg(long)]
        picture: Option<String>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Content category for CLI (maps to ContentCategory)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    /// Applications
    Apps,

    /// Videos
    Videos,

    /// Courses and tutorials
    Courses,

    /// Web summary with sources
    Web,
}

impl From<CategoryArg> for ContentCategory {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Apps => ContentCategory::Apps,
            CategoryArg::Videos => ContentCategory::Videos,
            CategoryArg::Courses => ContentCategory::Courses,
            CategoryArg::Web => ContentCategory::Web,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Search { category, query } => run_search(category.into(), &query).await,
            Commands::Login { email } => login(&email).await,
            Commands::Register {
                name,
                username,
                email,
            } => register(&name, &username, &email).await,
            Commands::Logout => logout().await,
            Commands::Whoami => whoami().await,
            Commands::Update {
                name,
                bio,
                description,
                picture,
            } => update_profile(name, bio, description, picture).await,
            Commands::Config => show_config(),
        }
    }
}

/// Run one search and print the outcome
async fn run_search(category: ContentCategory, query: &str) -> Result<()> {
    let config = config::config()?;
    let backend = GeminiBackend::from_env()?.with_model(&config.gemini_model);
    let service = DiscoveryService::new(Box::new(backend));

    let outcome = service.search(query, category).await?;
    print_outcome(&outcome);

    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    if let Some(summary) = &outcome.summary {
        println!("{}\n", summary.trim());
    }

    if outcome.results.is_empty() && outcome.summary.is_none() {
        println!("No results");
        return;
    }

    for item in &outcome.results {
        match item {
            ContentItem::Web {
                title,
                uri,
                description,
            } => {
                println!("{} ({})", title, description);
                println!("  {}", uri);
            }
            other => {
                let rating = other.rating().unwrap_or_default();
                let attribution = other.attribution().unwrap_or("-");
                println!("{} by {} [{:.1}/5]", other.title(), attribution, rating);
                println!("  {}", other.description());
            }
        }
    }

    if !outcome.sources.is_empty() {
        println!("\nSources:");
        for source in &outcome.sources {
            println!("  {} ({})", source.title, source.uri);
        }
    }
}

/// Open the auth store over the configured file store
async fn open_auth() -> Result<AuthStore> {
    let config = config::config()?;
    let store = Arc::new(JsonFileStore::new(config.store_dir()));
    Ok(AuthStore::open(store, config.login_delay).await)
}

async fn login(email: &str) -> Result<()> {
    let mut auth = open_auth().await?;
    let user = auth.login(email).await?;

    println!("Logged in as {} (@{})", user.name, user.username);
    Ok(())
}

async fn register(name: &str, username: &str, email: &str) -> Result<()> {
    let mut auth = open_auth().await?;
    let user = auth.register(name, username, email).await?;

    println!("Registered {} (@{}) with id {}", user.name, user.username, user.id);
    Ok(())
}

async fn logout() -> Result<()> {
    let mut auth = open_auth().await?;
    auth.logout().await;

    println!("Logged out");
    Ok(())
}

async fn whoami() -> Result<()> {
    let auth = open_auth().await?;

    match auth.current_user() {
        Some(user) => {
            println!("{} (@{})", user.name, user.username);
            println!("  email: {}", user.email);
            println!("  bio:   {}", user.bio);
        }
        None => println!("Not logged in"),
    }

    Ok(())
}

async fn update_profile(
    name: Option<String>,
    bio: Option<String>,
    description: Option<String>,
    picture: Option<String>,
) -> Result<()> {
    let mut auth = open_auth().await?;

    let Some(current) = auth.current_user() else {
        anyhow::bail!("Not logged in");
    };

    let mut updated: User = current.clone();
    if let Some(name) = name {
        updated.name = name;
    }
    if let Some(bio) = bio {
        updated.bio = bio;
    }
    if let Some(description) = description {
        updated.description = description;
    }
    if let Some(picture) = picture {
        updated.profile_picture_url = picture;
    }

    auth.update_user(updated).await;
    println!("Profile updated");
    Ok(())
}

fn show_config() -> Result<()> {
    let config = config::config()?;

    println!("Home:        {}", config.home.display());
    println!("Store:       {}", config.store_dir().display());
    println!("Model:       {}", config.gemini_model);
    println!("Login delay: {:?}", config.login_delay);
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none found)"),
    }

    Ok(())
}
