mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rolefilter",
    about = "Resolve role-based task filters for the product launch workflow",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project directory file (projects, leads, role memberships)
    #[arg(long, global = true, env = "ROLEFILTER_DIRECTORY")]
    directory: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve filter tokens for a user, given the raw function arguments
    /// (normally a single project key)
    Resolve {
        /// Acting user id
        #[arg(long, short, env = "ROLEFILTER_USER")]
        user: String,

        /// Function arguments as the query engine would pass them
        args: Vec<String>,
    },

    /// Show the roles a user holds on a project, including the synthetic
    /// Project Lead role
    Roles {
        /// Acting user id
        #[arg(long, short, env = "ROLEFILTER_USER")]
        user: String,

        /// Project key
        project_key: String,
    },

    /// Print the role → status → steps mapping table
    Table {
        /// Limit output to one role
        #[arg(long)]
        role: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let directory = cli.directory.as_deref();
    let result = match cli.command {
        Commands::Resolve { user, args } => cmd::resolve::run(directory, &user, &args, cli.json),
        Commands::Roles { user, project_key } => {
            cmd::roles::run(directory, &user, &project_key, cli.json)
        }
        Commands::Table { role } => cmd::table::run(role.as_deref(), cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
