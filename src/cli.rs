use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitpulse")]
#[command(about = "Daily and monthly productivity metrics from git history")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(
        long,
        help = "Only count commits after this time (RFC3339, YYYY-MM-DD, or a duration like 30d)"
    )]
    pub since: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    Daily {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    Monthly {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Daily { json, ndjson } => {
                crate::report::exec(self.common, json, ndjson, false)
            }
            Commands::Monthly { json, ndjson } => {
                crate::report::exec(self.common, json, ndjson, true)
            }
        }
    }
}
