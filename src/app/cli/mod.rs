//! CLI Adapter.

use std::io::{self, IsTerminal};

use clap::Parser;

use crate::adapters::{LineConsole, TerminalConsole};
use crate::ports::Console;

#[derive(Parser)]
#[command(name = "bootstrap")]
#[command(version)]
#[command(
    about = "Personalize the React starter template for a new project",
    long_about = "Rewrites package.json, README.md, .env, the workspace setup file and the CI \
                  workflow from flags, package.json and prompts.\n\n\
                  Flags:\n  \
                  --name <words...>            Project name (multi-word, no quoting needed)\n  \
                  --description <words...>     Project description\n  \
                  --packageManager <manager>   npm, pnpm or yarn\n  \
                  --interactive [false|0]      Prompt and confirm (default)\n  \
                  --no-interactive             Apply without prompting"
)]
struct Cli {
    /// Bootstrap flags, passed through verbatim
    #[arg(value_name = "FLAGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    // The console lives only inside this block so it is flushed and released
    // on every path before the process exits.
    let exit_code = {
        if io::stdin().is_terminal() {
            run_with(&cli.args, &mut TerminalConsole::new())
        } else {
            run_with(&cli.args, &mut LineConsole::stdio())
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_with(args: &[String], console: &mut impl Console) -> i32 {
    match crate::bootstrap(args, console) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
