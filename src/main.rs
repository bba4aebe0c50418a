use anyhow::Result;
use clap::{Parser, Subcommand};

use splitbill::audit::AuditLogger;
use splitbill::cli::{handle_calc_command, handle_log_command, handle_sample_command, CalcArgs};
use splitbill::config::{Settings, SplitPaths};
use splitbill::services::{FriendLedger, Session};

#[derive(Parser)]
#[command(
    name = "splitbill",
    author = "Kaylee Beyene",
    version,
    about = "Split bills with friends and keep track of who owes whom",
    long_about = "SplitBill keeps a running balance with each of your friends. \
                  Split a bill, say who paid, and the balance updates; the \
                  last split with a friend can be edited afterwards."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui {
        /// Start with the sample friends
        #[arg(long)]
        sample: bool,
    },

    /// Work out a split without touching any balances
    Calc(CalcArgs),

    /// Show the sample friends
    Sample,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None => run_interactive(&paths, &settings, false)?,
        Some(Commands::Tui { sample }) => run_interactive(&paths, &settings, sample)?,
        Some(Commands::Calc(args)) => handle_calc_command(&settings, args)?,
        Some(Commands::Sample) => handle_sample_command(&settings)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("SplitBill Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Avatar base URL:     {}", settings.avatar_base_url);
            println!("  Audit enabled:       {}", settings.audit_enabled);
            println!("  Load sample friends: {}", settings.load_sample_friends);
        }
        Some(Commands::Log { limit }) => handle_log_command(&paths, limit)?,
    }

    Ok(())
}

fn run_interactive(paths: &SplitPaths, settings: &Settings, sample: bool) -> Result<()> {
    let ledger = if sample || settings.load_sample_friends {
        FriendLedger::with_sample_friends()
    } else {
        FriendLedger::new()
    };

    let mut session = Session::new(ledger);
    if settings.audit_enabled {
        paths.ensure_directories()?;
        session = session.with_audit_log(AuditLogger::new(paths.audit_log()));
    }

    let session = splitbill::tui::run_tui(session, settings)?;

    let changes = session.history().len();
    if changes > 0 {
        println!("{} change(s) this session.", changes);
        if settings.audit_enabled {
            println!("Run 'splitbill log' to review them.");
        }
    }

    Ok(())
}
