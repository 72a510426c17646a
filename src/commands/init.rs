use crate::db::db::Db;
use crate::db::migrations;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Show database schema status instead of running the wizard
    #[arg(long)]
    status: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    if args.status {
        return show_status();
    }

    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    // Opening the database applies migrations and seeds defaults
    Db::new()?;
    msg_success!(Message::DbInitialized);

    Ok(())
}

fn show_status() -> Result<()> {
    let db = Db::new()?;
    let version = migrations::get_db_version(&db.conn)?;
    msg_info!(Message::DatabaseVersion(version));

    if migrations::needs_migration(&db.conn)? {
        msg_info!(Message::DatabaseNeedsUpdate);
    } else {
        msg_info!(Message::DatabaseUpToDate);
    }

    Ok(())
}
