//! fragconf: inspect merged JSON configuration fragments

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
