mod activity;
mod cli;
mod github;
mod report;

use std::io;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use github::GithubClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let username = match args.username {
        Some(name) => name,
        None => cli::prompt_username()?,
    };

    let client = GithubClient::new()?;
    let report = activity::build_report(&client, &username).await?;

    let mut stdout = io::stdout().lock();
    if args.json {
        report::render_json(&mut stdout, &report)?;
    } else {
        report::render(&mut stdout, &report, &username)?;
    }

    Ok(())
}
