mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pickgrid_core::config::PickgridConfig;

#[derive(Parser)]
#[command(name = "pickgrid")]
#[command(about = "Pick dates within limits and browse a sortable, searchable table")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a date, or the dates START through END
    Select {
        /// First selected date (YYYY-MM-DD, in the current year)
        start: String,

        /// Last selected date, inclusive (YYYY-MM-DD), defaults to START
        end: Option<String>,

        /// Pretend the current time is this instant
        #[arg(long)]
        now: Option<String>,

        /// Timezone to display the selection in (e.g. "Asia/Kolkata")
        #[arg(long)]
        tz: Option<String>,

        /// Enable/disable the selected date if it is a special date
        #[arg(long)]
        toggle: bool,
    },
    /// List special dates as the calendar shows them
    Dates {
        /// Toggle a date's disabled flag before listing (repeatable)
        #[arg(long)]
        toggle: Vec<String>,

        /// Print the calendar view as JSON
        #[arg(long)]
        json: bool,

        /// Pretend the current time is this instant
        #[arg(long)]
        now: Option<String>,
    },
    /// Show the data table
    Table {
        /// Click a column header (repeatable; clicking twice reverses)
        #[arg(long)]
        sort: Vec<String>,

        /// Only show rows whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show an instant in every supported timezone
    Zones {
        /// Instant to show (YYYY-MM-DD or RFC3339), defaults to now
        #[arg(long)]
        at: Option<String>,
    },
    /// Show configuration path and settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Select {
            start,
            end,
            now,
            tz,
            toggle,
        } => {
            let config = PickgridConfig::load()?;
            let args = commands::select::SelectArgs {
                start,
                end,
                now,
                tz,
                toggle,
            };
            commands::select::run(&config, args).await
        }
        Commands::Dates { toggle, json, now } => {
            let config = PickgridConfig::load()?;
            commands::dates::run(&config, &toggle, json, now.as_deref())
        }
        Commands::Table { sort, search } => commands::table::run(&sort, search),
        Commands::Zones { at } => commands::zones::run(at.as_deref()),
        Commands::Config => commands::config::run(),
    }
}
