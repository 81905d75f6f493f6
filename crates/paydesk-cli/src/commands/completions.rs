use std::io::Write;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Self::Bash,
            CompletionShell::Zsh => Self::Zsh,
            CompletionShell::Fish => Self::Fish,
        }
    }
}

/// Write the completion script to `output_path`, or to `out` when omitted.
pub fn run_completions(
    shell: CompletionShell,
    output_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let script = render_completions(shell);
    let Some(path) = output_path else {
        out.write_all(&script)?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &script)?;
    tracing::info!("Wrote {shell:?} completions to {}", path.display());
    writeln!(out, "{}", path.display())?;
    Ok(())
}

pub fn render_completions(shell: CompletionShell) -> Vec<u8> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    let mut script = Vec::new();
    generate(Shell::from(shell), &mut command, bin_name, &mut script);
    script
}
