use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{format_timestamp_datetime, now_utc, parse_contact_id, report_commit};
use anyhow::Result;
use clap::{ArgAction, Args};
use ringbook_core::dto::{ContactDetailDto, ContactListItemDto};
use ringbook_core::rules::{validate_mobile, validate_name};
use ringbook_core::ContactDraft;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub mobile: String,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub mobile: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteContactArgs {
    pub id: String,
    /// Confirm the deletion; contacts and their history cannot be restored
    #[arg(long, action = ArgAction::SetTrue)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddContactArgs) -> Result<()> {
    let commit = ctx
        .session
        .add_contact(now_utc(), ContactDraft::new(args.name, args.mobile))?;
    report_commit(&commit);

    let Some(id) = commit.value else {
        println!("no active list; create one with `ringbook lists save-as <name>`");
        return Ok(());
    };
    let contact = ctx
        .session
        .state()
        .find_contact(&id)
        .ok_or_else(|| not_found("contact not found"))?;

    if ctx.json {
        print_json(&ContactListItemDto::from(contact))?;
    } else {
        println!("Contact \"{}\" added ({})", contact.name, contact.id);
    }
    Ok(())
}

pub fn edit_contact(ctx: &mut Context<'_>, args: EditContactArgs) -> Result<()> {
    if args.name.is_none() && args.mobile.is_none() {
        return Err(invalid_input("no updates provided"));
    }
    let id = parse_contact_id(&args.id)?;
    if let Some(name) = args.name.as_deref() {
        validate_name(name)?;
    }
    if let Some(mobile) = args.mobile.as_deref() {
        validate_mobile(mobile)?;
    }
    let Some(current) = ctx.session.state().find_contact(&id) else {
        println!("no contact {} in the active list; nothing changed", id);
        return Ok(());
    };
    let draft = ContactDraft::new(
        args.name.unwrap_or_else(|| current.name.clone()),
        args.mobile.unwrap_or_else(|| current.mobile.clone()),
    );

    let commit = ctx.session.edit_contact(now_utc(), &id, draft)?;
    report_commit(&commit);

    let contact = ctx
        .session
        .state()
        .find_contact(&id)
        .ok_or_else(|| not_found("contact not found"))?;
    if ctx.json {
        print_json(&ContactListItemDto::from(contact))?;
    } else {
        println!("Contact \"{}\" updated", contact.name);
    }
    Ok(())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteContactArgs) -> Result<()> {
    if !args.yes {
        return Err(invalid_input(
            "deleting a contact is permanent; pass --yes to confirm",
        ));
    }
    let id = parse_contact_id(&args.id)?;
    let name = ctx
        .session
        .state()
        .find_contact(&id)
        .map(|contact| contact.name.clone());

    let commit = ctx.session.delete_contact(now_utc(), &id);
    report_commit(&commit);

    if ctx.json {
        print_json(&serde_json::json!({ "id": id, "deleted": name.is_some() }))?;
    } else if let Some(name) = name {
        println!("Contact \"{}\" deleted", name);
    } else {
        println!("no contact {} in the active list; nothing changed", id);
    }
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, _args: ListArgs) -> Result<()> {
    let state = ctx.session.state();
    let Some(list) = state.active_list() else {
        if ctx.json {
            print_json(&Vec::<ContactListItemDto>::new())?;
        } else {
            println!("no active list");
        }
        return Ok(());
    };
    let items: Vec<ContactListItemDto> = list.contacts.iter().map(Into::into).collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    println!("{} ({} contacts)", list.name, items.len());
    if items.is_empty() {
        println!("no contacts");
        return Ok(());
    }
    for item in items {
        let last = item
            .last_interaction_at
            .map(format_timestamp_datetime)
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{}  {}  {}  [{} logs, last {}]",
            item.id, item.name, item.mobile, item.log_count, last
        );
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    let contact = ctx
        .session
        .state()
        .find_contact(&id)
        .ok_or_else(|| not_found("contact not found"))?;
    let detail = ContactDetailDto::from(contact);

    if ctx.json {
        print_json(&detail)?;
        return Ok(());
    }

    println!("id: {}", detail.id);
    println!("name: {}", detail.name);
    println!("mobile: {}", detail.mobile);

    if detail.logs.is_empty() {
        println!("history: none");
        return Ok(());
    }
    println!("history:");
    for log in detail.logs {
        let when = format_timestamp_datetime(log.timestamp);
        let comment = log.comment.as_deref().unwrap_or("(no comment)");
        let mut extras = Vec::new();
        if log.audio_base64.is_some() {
            extras.push("audio");
        }
        if log.image_base64.is_some() {
            extras.push("image");
        }
        if extras.is_empty() {
            println!("  {} [{}] {}", when, log.kind, comment);
        } else {
            println!(
                "  {} [{}] {} (+{})",
                when,
                log.kind,
                comment,
                extras.join(", ")
            );
        }
    }
    Ok(())
}
