use crate::commands::{print_json, Context};
use crate::csv_import::parse_contacts;
use crate::error::invalid_input;
use crate::util::{now_utc, report_commit};
use anyhow::{Context as _, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    pub path: PathBuf,
}

pub fn import_csv(ctx: &mut Context<'_>, args: ImportArgs) -> Result<()> {
    let text = fs::read_to_string(&args.path)
        .with_context(|| format!("read {}", args.path.display()))?;
    let drafts = parse_contacts(&text).map_err(|err| invalid_input(err.to_string()))?;

    let commit = ctx.session.bulk_import(now_utc(), drafts)?;
    report_commit(&commit);

    if ctx.json {
        print_json(&serde_json::json!({ "imported": commit.value }))?;
    } else if commit.value == 0 {
        println!("no active list; nothing imported");
    } else {
        println!("{} contacts uploaded successfully", commit.value);
    }
    Ok(())
}
