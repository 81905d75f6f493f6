//! Paydesk CLI - Command-line interface for salary records
//!
//! Lists, adds, edits and deletes salaries against the Paydesk REST backend.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use std::io::{self, Write};

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::{connect, FormFields};
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("paydesk=info".parse().unwrap()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List(args) => run_list(connect(cli.api_url)?, &args, &mut out).await?,
        Commands::Add {
            employee,
            amount,
            date,
        } => {
            let fields = FormFields {
                employee: Some(&employee),
                amount: Some(&amount),
                date: date.as_deref(),
            };
            run_add(connect(cli.api_url)?, &fields, &mut out).await?;
        }
        Commands::Edit {
            id,
            employee,
            amount,
            date,
        } => {
            let fields = FormFields {
                employee: employee.as_deref(),
                amount: amount.as_deref(),
                date: date.as_deref(),
            };
            run_edit(connect(cli.api_url)?, &id, &fields, &mut out).await?;
        }
        Commands::Delete { id, yes } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_delete(connect(cli.api_url)?, &id, yes, &mut input, &mut out).await?;
        }
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
