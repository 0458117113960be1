use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{format, row, Table};

use rankeval_core::parsers::TabularParser;
use rankeval_core::top_k::TopKKeeper;

use crate::{command::Command, DataFormat};

#[derive(Args)]
pub(crate) struct TopKArgs {
    /// Scored dataset file
    #[arg(short, long)]
    data: String,

    #[arg(long)]
    #[arg(default_value = "tsv")]
    data_format: DataFormat,

    /// Data file has a header row to skip
    #[arg(long, default_value = "false")]
    has_header: bool,

    /// How many records to keep
    #[arg(short)]
    #[arg(default_value = "10")]
    k: usize,
}

pub(crate) struct TopKCommand;

impl Command for TopKCommand {
    type Args = TopKArgs;
    fn execute(args: &TopKArgs, quiet: bool) -> Result<()> {
        let file = File::open(&args.data)
            .with_context(|| format!("Failed to read data file {}", args.data))?;
        let parser = TabularParser::new(args.data_format.delimiter(), args.has_header);
        let records = parser
            .parse_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse data file {}", args.data))?;

        let mut keeper = TopKKeeper::new(args.k);
        let streamed = records.len();
        for record in records {
            keeper.add(record.name, record.score);
        }

        if !quiet {
            eprintln!("Kept {} of {} records", keeper.len(), streamed);
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(row!["rank", "name", "score"]);
        for (rank, (score, name)) in keeper.high_scores_first().into_iter().enumerate() {
            table.add_row(row![rank + 1, name, score]);
        }
        table.printstd();
        Ok(())
    }
}
