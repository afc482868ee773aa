//! Campus CLI - command-line admin console for schools and school administrators.

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Campus CLI - authenticate against the Campus backend and navigate the console.
#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Campus console for school administration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Login with email, password, and an emailed one-time code
    Login,

    /// Login with a Google ID token
    LoginGoogle {
        /// ID token obtained from the Google sign-in flow
        #[arg(long)]
        id_token: String,
    },

    /// Logout and clear the stored session
    Logout,

    /// Show authentication status
    Status,

    /// Resolve a console path through the route guard
    Open {
        /// Path to open, e.g. /schools or /schools/42/edit
        path: String,
    },

    /// List the console's routes
    Routes,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    console_core::init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Login => commands::login(&cli.format).await,
        Commands::LoginGoogle { id_token } => commands::login_google(&id_token, &cli.format).await,
        Commands::Logout => commands::logout(&cli.format),
        Commands::Status => commands::status(&cli.format),
        Commands::Open { path } => commands::open(&path, &cli.format),
        Commands::Routes => commands::routes(&cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
