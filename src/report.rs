use std::io::{self, Write};

use anyhow::Result;

use crate::activity::ActivityReport;

/// Write the plain-text report: one line per repository, or a single
/// marker line when there is nothing to show.
pub fn render<W: Write>(out: &mut W, report: &ActivityReport, user: &str) -> io::Result<()> {
    if report.is_empty() {
        writeln!(out, "There are no repositories for user: {user}")?;
        return Ok(());
    }

    for entry in report {
        writeln!(
            out,
            "Repo: {} Number of commits: {}",
            entry.repo, entry.commits
        )?;
    }

    Ok(())
}

/// Write the report as a pretty-printed JSON array, for piping into other
/// tools.
pub fn render_json<W: Write>(out: &mut W, report: &ActivityReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::activity::ActivityEntry;

    fn rendered(report: &ActivityReport, user: &str) -> String {
        let mut out = Vec::new();
        render(&mut out, report, user).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_report_renders_the_marker_line() {
        assert_eq!(
            rendered(&ActivityReport::new(), "alice"),
            "There are no repositories for user: alice\n"
        );
    }

    #[test]
    fn single_entry_renders_one_line() {
        let report = vec![ActivityEntry {
            repo: "test_repo".into(),
            commits: 12,
        }];
        assert_eq!(
            rendered(&report, "alice"),
            "Repo: test_repo Number of commits: 12\n"
        );
    }

    #[test]
    fn entries_render_in_report_order() {
        let report = vec![
            ActivityEntry {
                repo: "test_repo".into(),
                commits: 12,
            },
            ActivityEntry {
                repo: "test_repo2".into(),
                commits: 12,
            },
        ];
        assert_eq!(
            rendered(&report, "alice"),
            "Repo: test_repo Number of commits: 12\nRepo: test_repo2 Number of commits: 12\n"
        );
    }

    #[test]
    fn json_output_is_an_array_of_entries() {
        let report = vec![ActivityEntry {
            repo: "test_repo".into(),
            commits: 3,
        }];

        let mut out = Vec::new();
        render_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["repo"], "test_repo");
        assert_eq!(value[0]["commits"], 3);
    }
}
