//! Forks command - List the canonical fork masks

use anyhow::Result;
use clap::Parser;

use crate::strategy::canonical_forks;

#[derive(Parser, Debug)]
#[command(about = "List the canonical fork masks ('#' mark, '_' open, '.' ignored)")]
pub struct ForksArgs {}

pub fn execute(_args: ForksArgs) -> Result<()> {
    let forks = canonical_forks();
    println!("{} fork masks, one per shape up to rotation\n", forks.len());
    for (i, mask) in forks.iter().enumerate() {
        println!("#{}\n{mask}\n", i + 1);
    }
    Ok(())
}
