use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, Utc};
use ringbook_core::{ContactId, ListId};
use ringbook_store::{Commit, LoadIssue};
use tracing::debug;

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn format_timestamp_datetime(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub fn parse_contact_id(raw: &str) -> Result<ContactId> {
    raw.parse().map_err(|_| anyhow!("contact id cannot be empty"))
}

pub fn parse_list_id(raw: &str) -> Result<ListId> {
    raw.parse().map_err(|_| anyhow!("list id cannot be empty"))
}

/// Warns when the write behind a mutation failed. The command itself still
/// succeeds: the change happened, it just may not survive a reload.
pub fn report_commit<T>(commit: &Commit<T>) {
    if let Some(err) = commit.save_error.as_ref() {
        eprintln!(
            "warning: could not save changes ({}); your data may not persist",
            err
        );
    }
}

pub fn report_load_issue(issue: &LoadIssue) {
    match issue {
        LoadIssue::Malformed(reason) | LoadIssue::Unreadable(reason) => {
            eprintln!(
                "warning: could not load saved data ({}); starting fresh",
                reason
            );
        }
        LoadIssue::MigratedLegacy { contacts } => {
            debug!(contacts = *contacts, "loaded contacts from the single-list layout");
        }
    }
}
