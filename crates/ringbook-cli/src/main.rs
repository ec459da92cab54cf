mod attachment;
mod commands;
mod csv_import;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, contacts, import, interactions, lists, Context};
use crate::error::{exit_code_for, report_error};
use crate::util::{now_utc, report_commit, report_load_issue};
use ringbook_config as config;
use ringbook_store::{paths, Gateway, Session, Store};

#[derive(Debug, Parser)]
#[command(name = "ringbook", version, about = "ringbook CLI")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(name = "add-contact")]
    AddContact(contacts::AddContactArgs),
    #[command(name = "edit-contact")]
    EditContact(contacts::EditContactArgs),
    #[command(name = "delete-contact")]
    DeleteContact(contacts::DeleteContactArgs),
    /// List contacts in the active list
    List(contacts::ListArgs),
    Show(contacts::ShowArgs),
    /// Log a call, SMS or WhatsApp interaction
    Log(interactions::LogArgs),
    /// Import contacts from a `name,mobile` CSV file
    Import(import::ImportArgs),
    #[command(subcommand)]
    Lists(lists::ListCommand),
    /// Print a shell completion script
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    // Completions need neither config nor a database.
    let command = match command {
        Command::Completions(args) => return completions::emit(args),
        command => command,
    };

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
            Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
            Err(err) => debug!(error = %err, "config unavailable"),
        }
    }

    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let store = Store::open(&db_path)
        .with_context(|| format!("open database {}", db_path.display()))?
        .with_quota(Some(app_config.storage.quota_bytes));
    store.migrate().with_context(|| "run migrations")?;

    let gateway = Gateway::new(&store).with_default_list_name(app_config.default_list_name);
    let opened = Session::open(gateway, now_utc());
    if let Some(issue) = opened.value.load_issue() {
        report_load_issue(issue);
    }
    report_commit(&opened);
    let session = opened.value;

    let mut ctx = Context { session, json };

    match command {
        Command::AddContact(args) => contacts::add_contact(&mut ctx, args),
        Command::EditContact(args) => contacts::edit_contact(&mut ctx, args),
        Command::DeleteContact(args) => contacts::delete_contact(&mut ctx, args),
        Command::List(args) => contacts::list_contacts(&ctx, args),
        Command::Show(args) => contacts::show_contact(&ctx, args),
        Command::Log(args) => interactions::log_interaction(&mut ctx, args),
        Command::Import(args) => import::import_csv(&mut ctx, args),
        Command::Lists(cmd) => match cmd {
            lists::ListCommand::Ls(args) => lists::list_lists(&ctx, args),
            lists::ListCommand::SaveAs(args) => lists::save_as(&mut ctx, args),
            lists::ListCommand::Load(args) => lists::load_list(&mut ctx, args),
            lists::ListCommand::Rm(args) => lists::delete_list(&mut ctx, args),
            lists::ListCommand::Rename(args) => lists::rename_list(&mut ctx, args),
        },
        Command::Completions(args) => completions::emit(args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
