pub mod init;
pub mod set;
pub mod show;

use crate::db::db::Db;
use crate::db::slots::Slots;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::timesheet::Timesheet;
use crate::{msg_error_anyhow, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Set one field of one day", arg_required_else_help = true)]
    Set(set::SetArgs),
    #[command(about = "Show the week with day and weekly totals")]
    Show,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Set(args) => set::cmd(args),
            Commands::Show => show::cmd(),
        }
    }
}

/// Opens the persisted week named by the configuration.
///
/// A broken config file is reported and replaced by defaults rather than
/// stopping the command.
pub(crate) fn open_timesheet() -> Result<Timesheet<Slots>> {
    let config = Config::read().unwrap_or_else(|e| {
        msg_warning!(Message::ConfigReadFailed(e.to_string()));
        Config::default()
    });
    let storage = config.storage();
    let slots = Db::new(&config)
        .and_then(Slots::new)
        .map_err(|e| msg_error_anyhow!(Message::StorageOpenFailed(e.to_string())))?;
    Ok(Timesheet::open_with_key(slots, storage.slot_key))
}
