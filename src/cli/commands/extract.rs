use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result};
use tracing::debug;

use super::{
    CommandKind, CommandResult, CommandSummary, ExtractSummary, UnitMessages, helper::finish,
};
use crate::cli::args::ExtractCommand;
use crate::core::context::{CatalogMode, ProjectContext, UnitOutput};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let root_dir = args.common.root_dir();
    let project = ProjectContext::new(&root_dir, &args.overrides(), args.common.verbose)?;
    let run = project.extract_all(CatalogMode::Write)?;

    let mut rewritten_count = 0;
    if let Some(out_dir) = &args.out_dir {
        for unit in &run.units {
            write_rewritten(unit, &project.root_dir, out_dir)?;
            rewritten_count += 1;
        }
    }

    let catalog = run
        .catalog_path
        .clone()
        .filter(|path| path.exists())
        .map(|path| (path, run.table.len()));

    let summary = ExtractSummary {
        message_count: run.message_count(),
        units: run
            .units
            .iter()
            .filter(|unit| !unit.messages.is_empty())
            .map(|unit| UnitMessages {
                file_path: unit.file_path.clone(),
                messages: unit.messages.clone(),
            })
            .collect(),
        catalog,
        rewritten_count,
        json: args.json,
        failed: run.failure.is_some(),
    };

    Ok(finish(
        CommandKind::Extract,
        CommandSummary::Extract(summary),
        run.all_issues(),
        project.files.len(),
    ))
}

fn write_rewritten(unit: &UnitOutput, root_dir: &Path, out_dir: &Path) -> Result<()> {
    let target = out_dir.join(mirrored_path(Path::new(&unit.file_path), root_dir));
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    fs::write(&target, unit.rewritten_source())
        .with_context(|| format!("Failed to write file: {:?}", target))?;
    debug!(path = %target.display(), "wrote rewritten source");
    Ok(())
}

/// `file` relative to `root_dir`, reduced to its normal components so the
/// result always stays under the output directory.
fn mirrored_path(file: &Path, root_dir: &Path) -> PathBuf {
    let relative = file.strip_prefix(root_dir).unwrap_or(file);
    relative
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}
