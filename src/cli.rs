use crate::roster::Column;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "hostelman")]
#[command(about = "A TUI for managing a hostel student roster", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Load students from a JSON roster file")]
    pub roster: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the roster without entering the TUI")]
    List {
        #[arg(short, long, help = "Sort by this column before printing")]
        sort_by: Option<Column>,
        #[arg(short, long)]
        descending: bool,
        #[arg(short = 'F', long, default_value = "human")]
        format: OutputFormat,
        #[arg(short, long)]
        out: Option<String>,
    },
    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Subcommand)]
pub enum ConfigActions {
    #[command(about = "Show current configuration")]
    Show,
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(short, long)]
        key: String,
        #[arg(short, long)]
        value: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
