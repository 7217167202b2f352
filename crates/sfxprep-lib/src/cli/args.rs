use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        config_path: Option<String>,
        output_dir: Option<String>,
        timeout_secs: Option<u64>,
    },
    List {
        config_path: Option<String>,
    },
}

pub struct Args {
    pub command: Command,
}

#[derive(Debug, Parser)]
#[command(
    name = "sfxprep",
    version,
    author = "Nick Guletskii",
    about = "Download the sound effects used by the lottery front-end into public/sfx"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file overriding the built-in asset table and HTTP settings",
        global = true
    )]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Download every configured asset (the default when no subcommand is given)
    Fetch {
        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the output directory (default: public/sfx)"
        )]
        output_dir: Option<String>,

        #[arg(
            long = "timeout",
            value_name = "SECS",
            help = "Overrides the per-request timeout in seconds (default: 10)"
        )]
        timeout_secs: Option<u64>,
    },

    /// Print the configured assets and their candidate URLs without downloading
    List,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy()
                .add_directive("hyper_util=warn".parse().unwrap()),
        )
        .init();

    let command = match cli.command {
        None => Command::Fetch {
            config_path: cli.config,
            output_dir: None,
            timeout_secs: None,
        },
        Some(CliCommand::Fetch {
            output_dir,
            timeout_secs,
        }) => Command::Fetch {
            config_path: cli.config,
            output_dir,
            timeout_secs,
        },
        Some(CliCommand::List) => Command::List {
            config_path: cli.config,
        },
    };

    Args { command }
}
