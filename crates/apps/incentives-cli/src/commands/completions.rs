//! Shell completions command.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionShell};
use crate::error::CliResult;

/// Generate the completion script for the requested shell.
///
/// The script is returned like any other command output so `main` owns
/// the single print to stdout; the trailing newline is stripped because
/// the printer adds its own.
pub fn completions(shell: CompletionShell) -> CliResult<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(clap_complete::Shell::from(shell), &mut cmd, "incq", &mut buf);
    Ok(String::from_utf8_lossy(&buf).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_names_binary_and_subcommands() {
        let script = completions(CompletionShell::Bash).unwrap();
        assert!(script.contains("incq"));
        assert!(script.contains("gas-meter"));
        assert!(script.contains("incentives"));
    }

    #[test]
    fn test_every_shell_produces_a_script() {
        for shell in [
            CompletionShell::Bash,
            CompletionShell::Zsh,
            CompletionShell::Fish,
            CompletionShell::PowerShell,
        ] {
            let script = completions(shell).unwrap();
            assert!(!script.is_empty());
            assert!(!script.ends_with('\n'));
        }
    }
}
