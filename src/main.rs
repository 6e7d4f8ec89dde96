use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bst_menu::config::ShellConfig;
use bst_menu::loader;
use bst_menu::shell::Shell;
use bst_menu::tree::Tree;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    // A file named on the command line skips the filename prompt, unless it can't be loaded.
    let mut tree = Tree::new();
    let preloaded = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match loader::load_file(&mut tree, &path) {
            Ok(report) => {
                info!(path = %path.display(), ?report, "loaded from command line");
                true
            }
            Err(err) => {
                warn!(%err, "falling back to the filename prompt");
                false
            }
        },
        None => false,
    };

    let config = ShellConfig::from_env();
    let mut shell = Shell::new(tree, io::stdin().lock(), io::stdout().lock(), config);

    if preloaded {
        shell.report_count().context("writing to stdout")?;
    } else if shell.prompt_and_load().context("reading the filename")?.is_none() {
        return Ok(());
    }

    shell.run().context("running the menu")?;

    let mut tree = shell.into_tree();
    tree.clear();
    Ok(())
}
