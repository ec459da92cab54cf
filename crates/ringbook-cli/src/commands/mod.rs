use anyhow::Result;
use ringbook_store::{Session, Store};
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod contacts;
pub mod import;
pub mod interactions;
pub mod lists;

pub struct Context<'a> {
    pub session: Session<'a, Store>,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
