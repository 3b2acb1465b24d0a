//! Corpus inspection command

use super::load_corpus;
use crate::app::{LinksArgs, OutputFormat};
use crate::output::format_links;
use anyhow::Result;
use linkrank_core::error::exit_codes;

pub fn run(args: LinksArgs, format: OutputFormat) -> Result<i32> {
    let corpus = load_corpus(&args.corpus)?;
    print!("{}", format_links(&corpus, format)?);
    Ok(exit_codes::SUCCESS)
}
