use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Print statistics as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let stats = Tasks::new()?.stats()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if stats.total_tasks == 0 {
        msg_info!(Message::NoTasksForStats);
        return Ok(());
    }

    msg_print!(Message::StatsHeader, true);
    View::stats(&stats);
    Ok(())
}
