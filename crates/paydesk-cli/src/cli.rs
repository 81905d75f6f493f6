use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use paydesk_core::screen::SortColumn;

#[derive(Parser)]
#[command(name = "paydesk")]
#[command(about = "Manage salary records from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the salaries API (overrides PAYDESK_API_URL and config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List salaries
    #[command(alias = "ls")]
    List(ListArgs),
    /// Add a salary
    #[command(alias = "new")]
    Add {
        /// Employee name
        #[arg(long)]
        employee: String,
        /// Amount, digits with at most two decimals
        #[arg(long)]
        amount: String,
        /// Salary date, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD (defaults to now)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
    /// Edit an existing salary
    Edit {
        /// Salary ID
        id: String,
        /// New employee name
        #[arg(long)]
        employee: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New salary date
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
    /// Delete a salary
    #[command(alias = "rm")]
    Delete {
        /// Salary ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Column to sort by (server order when omitted)
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,
    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
    /// Page to show, starting at 1 (past the end shows the last page)
    #[arg(long, default_value_t = 1, value_parser = positive_count())]
    pub page: usize,
    /// Rows per page
    #[arg(long, default_value_t = 10, value_parser = positive_count())]
    pub per_page: usize,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn positive_count() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortKey {
    Employee,
    Amount,
    Date,
}

impl From<SortKey> for SortColumn {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Employee => Self::Employee,
            SortKey::Amount => Self::Amount,
            SortKey::Date => Self::Date,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
