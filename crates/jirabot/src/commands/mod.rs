//! Commands.

use std::{
    io::{Read, Write},
    sync::{Arc, RwLock, RwLockWriteGuard},
};

use anyhow::anyhow;
use clap::Subcommand;
use jirabot_config::Config;
use jirabot_core::{CoreContext, CoreModule};

use self::{config::ConfigCommand, render::RenderCommand};
use crate::Result;

mod config;
mod render;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub reader: Box<dyn Read + Send>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
        }
    }

    pub fn writer(&self) -> Result<RwLockWriteGuard<'_, dyn Write + Send + Sync + 'static>> {
        self.writer
            .write()
            .map_err(|_| anyhow!("Output writer lock is poisoned"))
    }
}

pub(crate) trait Command {
    fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Render(RenderCommand),
    Config(ConfigCommand),
}

impl Command for SubCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Render(sub) => sub.execute(ctx),
            Self::Config(sub) => sub.execute(ctx),
        }
    }
}
