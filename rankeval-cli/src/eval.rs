use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{format, row, Table};

use rankeval_core::eval_config::EvalConfig;
use rankeval_core::metrics::{get_metric, metric_names};
use rankeval_core::parsers::TabularParser;
use rankeval_core::ranking::rank_order_by_score_in_place;
use rankeval_core::types::{MetricValue, Scorable, ScoredLabel};

use crate::{command::Command, DataFormat};

#[derive(Args)]
pub(crate) struct EvalArgs {
    /// Scored dataset file
    #[arg(short, long)]
    data: String,

    #[arg(long)]
    #[arg(default_value = "tsv")]
    data_format: DataFormat,

    /// Data file has a header row to skip
    #[arg(long, default_value = "false")]
    has_header: bool,

    /// Evaluation configuration file (json or yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Metric values to calculate
    #[arg(short, long)]
    #[arg(default_value = "auto")]
    metrics: Vec<String>,

    /// Emit results as json instead of a table
    #[arg(long, default_value = "false")]
    json: bool,
}

pub(crate) struct EvalCommand;

impl Command for EvalCommand {
    type Args = EvalArgs;
    fn execute(args: &EvalArgs, quiet: bool) -> Result<()> {
        let config = load_config(args.config.as_deref())?;

        let file = File::open(&args.data)
            .with_context(|| format!("Failed to read data file {}", args.data))?;
        let parser = TabularParser::new(args.data_format.delimiter(), args.has_header);
        let records = parser
            .parse_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse data file {}", args.data))?;

        let mut ranked: Vec<ScoredLabel> = records
            .iter()
            .map(|r| ScoredLabel::new(r.score(), r.label()))
            .collect();
        rank_order_by_score_in_place(&mut ranked);

        let selected: Vec<String> = if args.metrics == ["auto"] {
            metric_names().map(ToOwned::to_owned).collect()
        } else {
            args.metrics.clone()
        };

        let mut results: Vec<(String, MetricValue)> = Vec::with_capacity(selected.len());
        for name in &selected {
            let metric = get_metric(name).with_context(|| {
                format!(
                    "Metric \"{}\" does not exist. Available metrics are: {}",
                    name,
                    metric_names().collect::<Vec<&str>>().join(", ")
                )
            })?;
            let value = metric(&ranked, &config)
                .with_context(|| format!("Failed to compute metric \"{}\"", name))?;
            results.push((name.clone(), value));
        }

        if !quiet {
            eprintln!("Evaluated {} records", ranked.len());
        }

        if args.json {
            let object: serde_json::Map<String, serde_json::Value> = results
                .iter()
                .map(|(name, value)| (name.clone(), serde_json::to_value(value).unwrap()))
                .collect();
            println!("{}", serde_json::to_string_pretty(&object).unwrap());
        } else {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_CLEAN);
            table.set_titles(row!["metric", "value"]);
            for (name, value) in &results {
                table.add_row(row![name, value]);
            }
            table.printstd();
        }
        Ok(())
    }
}

fn load_config(path: Option<&str>) -> Result<EvalConfig> {
    match path {
        None => Ok(EvalConfig::default()),
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read configuration file {}", path))?;
            let config = if path.ends_with(".yaml") || path.ends_with(".yml") {
                EvalConfig::create_from_yaml(&contents)
            } else {
                EvalConfig::create_from_json(&contents)
            };
            config.with_context(|| format!("Failed to parse configuration file {}", path))
        }
    }
}
