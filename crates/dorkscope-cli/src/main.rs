use anyhow::Result;
use clap::Parser;

use dorkscope_cli::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    let output = run(args)?;
    print!("{output}");
    Ok(())
}
