//! Create-rsp command implementation

use anyhow::Result;
use clap::Args;
use console::style;
use std::io;

use super::utils::report_error;
use crate::rsp::{Prompter, ResponseFile, RESPONSE_FILE_NAME};

#[derive(Args)]
pub struct CreateRspArgs {}

pub fn run(_args: CreateRspArgs) -> Result<()> {
    match execute() {
        Ok(()) => println!(
            "{} {RESPONSE_FILE_NAME}",
            style("Response file created successfully:").green().bold()
        ),
        Err(err) => report_error(&err),
    }
    Ok(())
}

fn execute() -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let response = ResponseFile::prompt(&mut prompter)?;
    // Finish the last prompt line before the status message.
    println!();

    let cwd = std::env::current_dir()?;
    response.write_to(&cwd)?;
    Ok(())
}
