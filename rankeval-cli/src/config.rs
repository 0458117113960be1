use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use rankeval_core::eval_config::EvalConfig;

use crate::command::Command;

#[derive(Args)]
pub(crate) struct ConfigCheckArgs {
    config: String,
}

#[derive(Args)]
pub(crate) struct ConfigNewArgs {}

#[derive(Subcommand)]
enum ConfigSubCommand {
    /// Check an evaluation configuration for validity.
    Check(ConfigCheckArgs),
    /// Emit a full configuration with all defaults.
    New(ConfigNewArgs),
}

#[derive(Args)]
pub(crate) struct ConfigArgs {
    #[command(subcommand)]
    subcommand: ConfigSubCommand,
}

pub(crate) struct ConfigCommand;

impl Command for ConfigCommand {
    type Args = ConfigArgs;
    fn execute(args: &ConfigArgs, _quiet: bool) -> Result<()> {
        match &args.subcommand {
            ConfigSubCommand::Check(args) => {
                let contents = std::fs::read_to_string(&args.config).with_context(|| {
                    format!("Failed to read configuration file {}", args.config)
                })?;
                let parsed = if args.config.ends_with(".yaml") || args.config.ends_with(".yml") {
                    EvalConfig::create_from_yaml(&contents)
                } else {
                    EvalConfig::create_from_json(&contents)
                };
                parsed.with_context(|| {
                    format!("Failed to parse configuration file {}", args.config)
                })?;
                println!("ok");
                Ok(())
            }
            ConfigSubCommand::New(_) => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&EvalConfig::default()).unwrap()
                );
                Ok(())
            }
        }
    }
}
