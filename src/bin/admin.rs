//! CLI administration tool for clinic-api.
//!
//! Provides commands for managing user accounts, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a superuser account
//! cargo run --bin admin -- user create-superuser
//!
//! # List all accounts
//! cargo run --bin admin -- user list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Account Management**: Create superusers and list accounts
//! - **Statistics**: View user, patient, doctor and mapping counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use clinic_api::domain::entities::NewUser;
use clinic_api::domain::repositories::UserRepository;
use clinic_api::infrastructure::persistence::PgUserRepository;
use clinic_api::utils::password::hash_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing clinic-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a superuser account
    CreateSuperuser {
        /// Display name (e.g., "Admin")
        #[arg(short, long)]
        name: Option<String>,

        /// Login email
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::CreateSuperuser { name, email, yes } => {
            create_superuser(repo, name, email, yes).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
    }

    Ok(())
}

/// Creates a superuser account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for name and email (or use provided)
/// 2. Prompt for password with confirmation
/// 3. Display account details
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Hash password with Argon2id
/// 6. Store in database
/// 7. Display login instructions
///
/// # Security
///
/// - The password is always read interactively, never from the command line
/// - Only the Argon2id PHC hash is stored in the database
async fn create_superuser(
    repo: Arc<PgUserRepository>,
    name: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Superuser".bright_blue().bold());
    println!();

    // Get account details
    let account_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Name")
            .with_initial_text("Admin")
            .interact_text()?,
    };

    let account_email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password: String = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    // Show account details
    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Name:  {}", account_name.cyan());
    println!("  Email: {}", account_email.cyan());
    println!("  Role:  {}", "SUPERUSER".bright_yellow().bold());
    println!();

    // Confirm
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    // Refuse duplicates up front with a readable message
    let exists = repo
        .email_exists(&account_email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if exists {
        println!();
        println!(
            "{}",
            "❌ An account with this email already exists".red().bold()
        );
        return Ok(());
    }

    // Hash password
    let password_hash =
        hash_password(&password).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    // Save to database
    let user = repo
        .create(NewUser::superuser(account_name, account_email, password_hash))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!("{}", "✅ Superuser created successfully!".green().bold());
    println!();
    println!("{}", "Log in to obtain tokens:".bright_white());
    println!(
        "  curl -X POST http://localhost:3000/auth/login \\\n    -H \"Content-Type: application/json\" \\\n    -d '{{\"email\": \"{}\", \"password\": \"<password>\"}}'",
        user.email.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all user accounts with role indicators.
///
/// # Output Format
///
/// ```text
/// 📋 User Accounts
///
///   ID  Name                           Email                               Role
///   ─────────────────────────────────────────────────────────────────────────────
///   1   Admin                          admin@clinic.test                   SUPERUSER
///   2   Alice                          alice@clinic.test                   USER
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 User Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create-superuser",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<35} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Role".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for user in &users {
        let role = if user.is_superuser {
            "SUPERUSER".green()
        } else if user.is_staff {
            "STAFF".cyan()
        } else {
            "USER".normal()
        };

        println!(
            "  {:<3} {:<30} {:<35} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email.bright_black(),
            role
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of user accounts
/// - Total number of patients and doctors
/// - Number of patient-doctor mappings
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let patients_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients")
        .fetch_one(pool)
        .await?;

    let doctors_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM doctors")
        .fetch_one(pool)
        .await?;

    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patient_doctor_mappings")
        .fetch_one(pool)
        .await?;

    println!(
        "  Users:    {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Patients: {}",
        patients_count.to_string().bright_green().bold()
    );
    println!(
        "  Doctors:  {}",
        doctors_count.to_string().bright_green().bold()
    );
    println!(
        "  Mappings: {}",
        mappings_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
