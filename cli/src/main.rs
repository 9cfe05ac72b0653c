use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
mod new;
mod settings;

#[derive(Parser)]
#[command(name = "webseed")]
#[command(about = "webseed - scaffold a small browser app in one command", long_about = None)]
struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project in an empty or missing directory
    New(new::NewArgs),
    /// Show the effective configuration
    Config {
        /// Write the default configuration if none exists yet
        #[arg(long)]
        init: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "webseed=debug,webseed_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::New(args) => new::run_new(args).await,
        Commands::Config { init } => settings::handle_command(init),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_new_with_flags() {
        let cli = Cli::parse_from([
            "webseed",
            "new",
            "my-app",
            "--description",
            "Hello",
            "--no-git",
            "-v",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.dir, std::path::PathBuf::from("my-app"));
                assert_eq!(args.description.as_deref(), Some("Hello"));
                assert!(args.no_git);
                assert!(!args.no_install);
            }
            Commands::Config { .. } => panic!("expected new"),
        }
    }
}
