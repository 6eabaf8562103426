//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::services::{TraversalService, MAX_SHAPE_HEIGHT};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::ItemFilter;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let dir = resolve_dir(cli.dir.as_deref())?;

    match &cli.command {
        Some(Commands::Chest { filter, file }) => cmd_chest(&dir, *filter, file.as_deref()),
        Some(Commands::Bst { values, tree }) => cmd_bst(&dir, values, *tree),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(&dir),
            ConfigCommands::Path => cmd_config_path(&dir),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `trove --help`".to_string(),
        )),
    }
}

fn resolve_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(d) if !d.is_dir() => Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            d.display()
        ))),
        Some(d) => Ok(d.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|e| CliError::InvalidArgs(format!("cannot read current directory: {}", e))),
    }
}

fn service(dir: &Path) -> CliResult<TraversalService> {
    let settings = Settings::load(Some(dir))?;
    debug!("settings: {:?}", settings);
    Ok(TraversalService::new(settings))
}

#[instrument(level = "debug")]
fn cmd_chest(dir: &Path, filter: Option<ItemFilter>, file: Option<&Path>) -> CliResult<()> {
    let walk = service(dir)?.walk_chest(filter, file)?;

    output::header(&format!("Item iterator for item type {}:", walk.filter));
    if walk.items.is_empty() {
        output::detail(&"(no matching items)");
    }
    for item in &walk.items {
        output::info(item);
    }
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_bst(dir: &Path, values: &[i64], show_tree: bool) -> CliResult<()> {
    let service = service(dir)?;
    let values = if values.is_empty() { None } else { Some(values) };
    let walk = service.walk_bst(values, show_tree)?;

    output::header("BST iterator:");
    match &walk.shape {
        Some(shape) => output::info(shape),
        None if show_tree => output::warning(&format!(
            "tree of height {} is too tall to draw (limit {})",
            walk.height, MAX_SHAPE_HEIGHT
        )),
        None => {}
    }
    output::action("In order", &walk.values.iter().join(" "));
    output::detail(&format!(
        "height {}, peak cursor depth {}",
        walk.height, walk.peak_depth
    ));
    Ok(())
}

fn cmd_config_show(dir: &Path) -> CliResult<()> {
    let settings = Settings::load(Some(dir))?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_path(dir: &Path) -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::action("global", &path.display()),
        None => output::warning("global config directory could not be determined"),
    }
    output::action("local", &local_config_path(dir).display());
    Ok(())
}
