use anyhow::Result;
use taskdash::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
