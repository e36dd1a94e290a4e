use std::io::Write;

use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

const ICON_PREVIEW_LENGTH: usize = 32;

/// Show the effective configuration
#[derive(Parser)]
pub(crate) struct ConfigCommand;

fn abbreviate(value: &str, max_length: usize) -> String {
    if value.chars().count() > max_length {
        format!("{}...", value.chars().take(max_length).collect::<String>())
    } else {
        value.to_owned()
    }
}

impl Command for ConfigCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let config = &ctx.config;
        let mut writer = ctx.writer()?;

        writeln!(writer, "Version: {}", config.version)?;
        writeln!(writer, "Excluded source user: {}", config.excluded_source_user)?;
        writeln!(
            writer,
            "Description max length: {}",
            config.render.description_max_length
        )?;
        writeln!(
            writer,
            "Fallback icon URL: {}",
            abbreviate(&config.render.fallback_icon_url, ICON_PREVIEW_LENGTH)
        )?;
        if config.render.changelog_fields.is_empty() {
            writeln!(writer, "Changelog fields: (all)")?;
        } else {
            writeln!(
                writer,
                "Changelog fields: {}",
                config.render.changelog_fields.join(", ")
            )?;
        }
        writeln!(
            writer,
            "Log ignored events: {}",
            config.logging.log_ignored_events
        )?;
        writeln!(
            writer,
            "Log ignored payloads: {}",
            config.logging.log_ignored_payloads
        )?;
        writeln!(writer, "Bunyan logging: {}", config.logging.use_bunyan)?;

        Ok(())
    }
}
