// gradekit - batch deadline extensions for grading platforms

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use gradekit_cli::exit_codes::EXIT_SUCCESS;
use gradekit_cli::extend::{cmd_extend, ExtendArgs};
use gradekit_cli::prompt::TerminalPrompt;
use gradekit_cli::setup::cmd_configure;
use gradekit_cli::CliError;
use gradekit_config::Settings;
use gradekit_platform::credentials::{grading_credentials, load_dotenv};
use gradekit_platform::fixture;

#[derive(Parser)]
#[command(name = "gradekit")]
#[command(about = "Batch deadline extensions for grading platforms")]
#[command(version)]
struct Cli {
    /// Platform snapshot file (TOML) holding courses, rosters and assignments
    #[arg(long, global = true, env = "GRADEKIT_PLATFORM", value_name = "FILE")]
    platform: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply deadline extensions to every assignment matching a title substring
    #[command(after_help = "\
Examples:
  gradekit extend --string hw4 'jane doe' 'bob smith'
  gradekit extend --string hw4 --days 3 --id cs101 'Doe, Jane'
  gradekit extend --string midterm --json 'jane doe' > report.json")]
    Extend {
        /// Assignment title substring to match
        #[arg(long = "string", short = 's')]
        title: String,

        /// Extension length in days (default from settings)
        #[arg(long, short = 'd')]
        days: Option<i64>,

        /// Course identifier (default from settings)
        #[arg(long)]
        id: Option<String>,

        /// Emit a JSON run report on stdout
        #[arg(long)]
        json: bool,

        /// Student names, free-form ("jane doe" or "Doe, Jane")
        names: Vec<String>,
    },

    /// Interactive course setup: pick a course and build its roster
    Configure,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let platform_path = cli.platform.ok_or_else(|| {
        CliError::usage("no platform snapshot given")
            .with_hint("pass --platform <file> or set GRADEKIT_PLATFORM")
    })?;

    load_dotenv();

    match cli.command {
        Commands::Extend { title, days, id, json, names } => {
            let settings = Settings::load_or_init().map_err(CliError::config)?;
            // Credentials are required even when nothing ends up applied.
            let _credentials = grading_credentials().map_err(CliError::platform)?;
            let (grading, _) = fixture::load(&platform_path).map_err(CliError::platform)?;

            let args = ExtendArgs {
                names: &names,
                title_filter: &title,
                days,
                course: id.as_deref(),
                json,
            };
            let mut prompt = TerminalPrompt::new();
            cmd_extend(&grading, &settings, &args, &mut prompt, &mut io::stdout())
        }
        Commands::Configure => {
            let mut settings = Settings::load_or_init().map_err(CliError::config)?;
            let _credentials = grading_credentials().map_err(CliError::platform)?;
            let (grading, mut forum) = fixture::load(&platform_path).map_err(CliError::platform)?;

            let mut prompt = TerminalPrompt::new();
            cmd_configure(
                &grading,
                &mut forum,
                &mut settings,
                &Settings::config_path(),
                &mut prompt,
            )
        }
    }
}
