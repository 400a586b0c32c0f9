use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::github::{FetchOutcome, GithubClient};

/// One repository and the number of commits in its listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub repo: String,
    pub commits: usize,
}

/// Per-user report, in the order the repository listing returned.
pub type ActivityReport = Vec<ActivityEntry>;

/// Build the activity report for `user`: one listing call, then one
/// commit-count call per usable repository, sequentially, in listing
/// order. A denied listing degrades to an empty report and a denied
/// commit fetch to a zero count; only transport faults and malformed
/// success bodies abort the run.
pub async fn build_report(client: &GithubClient, user: &str) -> Result<ActivityReport> {
    let listing = client.fetch_repositories(user).await?;
    if let FetchOutcome::Denied(status) = &listing {
        eprintln!("Warning: repository listing for {user} returned HTTP {status}");
    }

    let mut report = ActivityReport::new();
    for name in repo_names(&listing) {
        let outcome = client.count_commits(user, &name).await?;
        if let FetchOutcome::Denied(status) = &outcome {
            eprintln!("Warning: commit listing for {user}/{name} returned HTTP {status}");
        }

        report.push(ActivityEntry {
            repo: name,
            commits: commit_total(outcome),
        });
    }

    Ok(report)
}

/// Names of the listed repositories, keeping listing order. A denied
/// listing yields no names; records whose "name" field is missing or not
/// a string are skipped.
fn repo_names(listing: &FetchOutcome<Vec<Value>>) -> Vec<String> {
    match listing {
        FetchOutcome::Denied(_) => Vec::new(),
        FetchOutcome::Payload(records) => records
            .iter()
            .filter_map(|record| record.get("name").and_then(Value::as_str))
            .map(str::to_owned)
            .collect(),
    }
}

/// Commit count for one repository; a denied fetch counts as zero.
fn commit_total(outcome: FetchOutcome<usize>) -> usize {
    match outcome {
        FetchOutcome::Payload(count) => count,
        FetchOutcome::Denied(_) => 0,
    }
}
