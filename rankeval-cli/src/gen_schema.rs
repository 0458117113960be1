use anyhow::Result;
use clap::Args;

use rankeval_core::eval_config::config_schema;

use crate::command::Command;

#[derive(Args)]
pub(crate) struct GenSchemaArgs {}

pub(crate) struct GenSchemaCommand;

impl Command for GenSchemaCommand {
    type Args = GenSchemaArgs;
    fn execute(_args: &GenSchemaArgs, _quiet: bool) -> Result<()> {
        println!(
            "{}",
            serde_json::to_string_pretty(&config_schema()).unwrap()
        );
        Ok(())
    }
}
