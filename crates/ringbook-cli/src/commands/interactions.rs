use crate::attachment::encode_file;
use crate::commands::{print_json, Context};
use crate::util::{now_utc, parse_contact_id, report_commit};
use anyhow::Result;
use clap::Args;
use ringbook_core::{InteractionNew, InteractionType};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LogArgs {
    pub id: String,
    /// call, sms or whatsapp
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: String,
    #[arg(long)]
    pub comment: Option<String>,
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
    #[arg(long, value_name = "PATH")]
    pub audio: Option<PathBuf>,
}

pub fn log_interaction(ctx: &mut Context<'_>, args: LogArgs) -> Result<()> {
    let contact_id = parse_contact_id(&args.id)?;
    let kind: InteractionType = args.kind.parse()?;
    let image_base64 = args.image.as_deref().map(encode_file).transpose()?;
    let audio_base64 = args.audio.as_deref().map(encode_file).transpose()?;

    let commit = ctx.session.log_interaction(
        now_utc(),
        &contact_id,
        InteractionNew {
            kind,
            comment: args.comment,
            audio_base64,
            image_base64,
        },
    );
    report_commit(&commit);

    let Some(log_id) = commit.value else {
        println!("no contact {} in the active list; nothing logged", contact_id);
        return Ok(());
    };

    if ctx.json {
        let log = ctx
            .session
            .state()
            .contact_history(&contact_id)
            .and_then(|logs| logs.first());
        print_json(&log)?;
    } else {
        println!("logged {} {} ({})", kind, contact_id, log_id);
    }
    Ok(())
}
