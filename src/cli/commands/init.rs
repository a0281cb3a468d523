use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{CommandKind, CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default config file into `dir`. Fails if one already exists.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)?;

    Ok(finish(
        CommandKind::Init,
        CommandSummary::Init(InitSummary { created: true }),
        Vec::new(),
        0,
    ))
}
