use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "gh-activity")]
#[command(about = "Report a GitHub user's repositories and their commit counts")]
#[command(version)]
pub struct Cli {
    /// GitHub username to report on; prompted for when omitted
    pub username: Option<String>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Ask for a username on the terminal, for runs that gave none on the
/// command line.
pub fn prompt_username() -> Result<String> {
    print!("What's your github username? ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read username from stdin")?;

    Ok(line.trim().to_string())
}
