use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{format_timestamp_datetime, now_utc, parse_list_id, report_commit};
use anyhow::Result;
use clap::{ArgAction, Args, Subcommand};
use ringbook_core::dto::ListSummaryDto;

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// Show all saved lists
    Ls(ListLsArgs),
    /// Copy the active list's contacts into a new list
    #[command(name = "save-as")]
    SaveAs(SaveAsArgs),
    /// Make a list the active one
    Load(LoadArgs),
    Rm(RemoveListArgs),
    Rename(RenameArgs),
}

#[derive(Debug, Args)]
pub struct ListLsArgs {}

#[derive(Debug, Args)]
pub struct SaveAsArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct RemoveListArgs {
    pub id: String,
    #[arg(long, action = ArgAction::SetTrue)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    pub id: String,
    pub name: String,
}

pub fn list_lists(ctx: &Context<'_>, _args: ListLsArgs) -> Result<()> {
    let summaries = ListSummaryDto::all(ctx.session.state());
    if ctx.json {
        print_json(&summaries)?;
        return Ok(());
    }

    if summaries.is_empty() {
        println!("no lists");
        return Ok(());
    }
    for summary in summaries {
        let marker = if summary.active { "*" } else { " " };
        println!(
            "{} {}  {}  ({} contacts, updated {})",
            marker,
            summary.id,
            summary.name,
            summary.contact_count,
            format_timestamp_datetime(summary.updated_at)
        );
    }
    Ok(())
}

pub fn save_as(ctx: &mut Context<'_>, args: SaveAsArgs) -> Result<()> {
    let commit = ctx.session.create_list(now_utc(), &args.name)?;
    report_commit(&commit);
    let id = commit
        .value
        .ok_or_else(|| not_found("list was not created"))?;
    let state = ctx.session.state();
    let list = state.list(&id).ok_or_else(|| not_found("list not found"))?;

    if ctx.json {
        print_json(&ListSummaryDto::from_list(list, state))?;
    } else {
        println!(
            "List \"{}\" saved with {} contacts ({})",
            list.name,
            list.contacts.len(),
            list.id
        );
    }
    Ok(())
}

pub fn load_list(ctx: &mut Context<'_>, args: LoadArgs) -> Result<()> {
    let id = parse_list_id(&args.id)?;
    let commit = ctx.session.load_list(&id);
    report_commit(&commit);
    if !commit.value {
        return Err(not_found(format!("list {}", id)));
    }

    let state = ctx.session.state();
    let list = state.list(&id).ok_or_else(|| not_found("list not found"))?;
    if ctx.json {
        print_json(&ListSummaryDto::from_list(list, state))?;
    } else {
        println!("List \"{}\" loaded", list.name);
    }
    Ok(())
}

pub fn delete_list(ctx: &mut Context<'_>, args: RemoveListArgs) -> Result<()> {
    if !args.yes {
        return Err(invalid_input(
            "deleting a list removes all of its contacts; pass --yes to confirm",
        ));
    }
    let id = parse_list_id(&args.id)?;
    let name = ctx.session.state().list(&id).map(|list| list.name.clone());

    let commit = ctx.session.delete_list(&id)?;
    report_commit(&commit);

    if ctx.json {
        print_json(&ListSummaryDto::all(ctx.session.state()))?;
        return Ok(());
    }
    match name {
        Some(name) => println!("List \"{}\" deleted", name),
        None => println!("no list {}; nothing changed", id),
    }
    if let Some(active) = ctx.session.state().active_list() {
        println!("active list: {}", active.name);
    }
    Ok(())
}

pub fn rename_list(ctx: &mut Context<'_>, args: RenameArgs) -> Result<()> {
    let id = parse_list_id(&args.id)?;
    let commit = ctx.session.rename_list(now_utc(), &id, &args.name)?;
    report_commit(&commit);

    let state = ctx.session.state();
    let Some(list) = state.list(&id) else {
        println!("no list {}; nothing changed", id);
        return Ok(());
    };
    if ctx.json {
        print_json(&ListSummaryDto::from_list(list, state))?;
    } else {
        println!("List name changed to \"{}\"", list.name);
    }
    Ok(())
}
