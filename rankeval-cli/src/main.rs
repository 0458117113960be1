use clap::{Parser, Subcommand, ValueEnum};

use crate::command::Command;

mod command;
mod config;
mod eval;
mod gen_completions;
mod gen_schema;
mod top_k;

#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Silence all output
    #[arg(long, global = true, default_value = "false")]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum DataFormat {
    Csv,
    Tsv,
}

impl DataFormat {
    fn delimiter(&self) -> char {
        match self {
            DataFormat::Csv => ',',
            DataFormat::Tsv => '\t',
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate ranking metrics over a scored dataset
    Eval(eval::EvalArgs),
    /// Show the highest scored records of a dataset
    TopK(top_k::TopKArgs),
    /// Check or generate an evaluation config
    Config(config::ConfigArgs),
    /// Generate shell completions
    GenCompletions(gen_completions::GenCompletionsArgs),
    /// Generate JSON schema for configuration
    GenSchema(gen_schema::GenSchemaArgs),
}

fn main() {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Eval(args) => {
            eval::EvalCommand::execute(args, cli.quiet).unwrap();
        }
        Commands::TopK(args) => {
            top_k::TopKCommand::execute(args, cli.quiet).unwrap();
        }
        Commands::Config(args) => {
            config::ConfigCommand::execute(args, cli.quiet).unwrap();
        }
        Commands::GenCompletions(args) => {
            gen_completions::GenCompletionsCommand::execute(args, cli.quiet).unwrap();
        }
        Commands::GenSchema(args) => {
            gen_schema::GenSchemaCommand::execute(args, cli.quiet).unwrap();
        }
    }
}
