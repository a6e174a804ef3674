use anyhow::Context;

use minishell::Shell;

fn main() -> anyhow::Result<()> {
    Shell::new().run().context("session ended abnormally")
}
