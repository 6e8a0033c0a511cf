use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use weightlog_cli::cli::{
    handle_calendar_command, handle_chart_command, handle_export_command, handle_import_command,
    handle_record_command, handle_target_command,
};
use weightlog_cli::config::{Settings, WeightLogPaths};
use weightlog_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "weightlog",
    version,
    about = "Terminal-based personal weight tracking application",
    long_about = "weightlog is a terminal-based personal weight tracker. Record your \
                  weight with keypad-style digit input, browse monthly lists and a \
                  calendar view, and follow your progress toward a target weight on \
                  an ASCII trend chart."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weight record management commands
    #[command(subcommand, alias = "rec")]
    Record(weightlog_cli::cli::RecordCommands),

    /// Show a month calendar with recorded weights
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,
    },

    /// Show the weight trend chart
    Chart {
        /// Highlight the record on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Target weight commands
    #[command(subcommand)]
    Target(weightlog_cli::cli::TargetCommands),

    /// Export records to CSV
    Export {
        /// Output file path (stdout when omitted)
        output: Option<PathBuf>,
    },

    /// Import records from CSV
    Import {
        /// Path to CSV file
        file: String,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WeightLogPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Commands::Record(cmd) => {
            handle_record_command(&storage, &mut settings, &paths, cmd)?;
        }
        Commands::Calendar { month } => {
            handle_calendar_command(&storage, month)?;
        }
        Commands::Chart { date } => {
            handle_chart_command(&storage, &settings, date)?;
        }
        Commands::Target(cmd) => {
            handle_target_command(&mut settings, &paths, cmd)?;
        }
        Commands::Export { output } => {
            handle_export_command(&storage, output)?;
        }
        Commands::Import { file } => {
            handle_import_command(&storage, &file)?;
        }
        Commands::Init => {
            println!("Initializing weightlog at: {}", paths.data_dir().display());
            weightlog_cli::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'weightlog record add <digits>' to record your first weight.");
        }
        Commands::Config => {
            println!("weightlog Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Records file:   {}", paths.records_file().display());
            println!();
            println!("Target weight:  {:.1} kg", settings.target_weight);
            println!("Color scheme:   {}", settings.color_scheme);
            println!("Initialized:    {}", paths.is_initialized());
        }
    }

    Ok(())
}
