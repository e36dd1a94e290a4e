use std::{
    io::{Cursor, Write},
    sync::{Arc, RwLock},
};

use clap::Parser;
use jirabot_config::Config;
use jirabot_core::CoreModule;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
    Result,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            core_module: CoreModule::builder().build(),
        }
    }

    pub fn into_context(
        self,
        input: &str,
        writer: Arc<RwLock<dyn Write + Send + Sync>>,
    ) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            reader: Box::new(Cursor::new(input.as_bytes().to_vec())),
            writer,
        }
    }
}

pub(crate) fn test_command_with_input(
    ctx: CommandContextTest,
    command_args: &[&str],
    input: &str,
) -> String {
    run_command(ctx, command_args, input).unwrap()
}

pub(crate) fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> Result<String> {
    run_command(ctx, command_args, "")
}

fn run_command(ctx: CommandContextTest, command_args: &[&str], input: &str) -> Result<String> {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["bot"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::execute_args(args, ctx.into_context(input, buf.clone()))?,
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().unwrap().to_vec();
    Ok(std::str::from_utf8(&vec).unwrap().to_string())
}
