use std::sync::{Arc, RwLock};

use clap::Parser;
use jirabot_config::Config;
use jirabot_core::CoreModule;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = "Turn Jira webhook events into Rocket.Chat messages", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let ctx = CommandContext {
            config,
            core_module: CoreModule::builder().build(),
            reader: Box::new(std::io::stdin()),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        };

        Self::execute_args(args, ctx)
    }

    pub(crate) fn execute_args(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx)
    }
}
