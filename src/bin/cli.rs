use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use satchel::cli::{check_access, print_summary};
use satchel_core::AccessError;

#[derive(Parser)]
#[command(name = "satchel-cli")]
#[command(about = "Satchel CLI - Administrative tools for Satchel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the school dashboard summary as JSON
    Summary,
    /// Evaluate one authorization decision and report it via the exit code
    CheckAccess {
        /// Permission held by the acting principal (repeatable)
        #[arg(short = 'p', long = "permission")]
        permissions: Vec<String>,

        /// Resource class, e.g. "schools"
        #[arg(short = 'c', long)]
        class: String,

        /// Action name, e.g. "delete"
        #[arg(short = 'a', long)]
        action: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    satchel::logging::init_console_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary => {
            let db = satchel_db::init_db_pool().await;
            if let Err(err) = print_summary(&db).await {
                eprintln!("Failed to compute summary: {}", err);
                std::process::exit(1);
            }
        }
        Commands::CheckAccess {
            permissions,
            class,
            action,
        } => match check_access(&permissions, &class, &action) {
            Ok(()) => println!("allowed"),
            Err(err) => {
                eprintln!("denied: {}", err);
                let code = match err {
                    AccessError::Unauthenticated(_) => 2,
                    AccessError::Forbidden(_) => 3,
                    AccessError::NotFound(_) => 4,
                    AccessError::Limit(_) => 5,
                };
                std::process::exit(code);
            }
        },
    }
}
