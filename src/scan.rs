use std::path::{Component, Path, PathBuf};

use anyhow::{anyhow, Context};
use glob::{MatchOptions, Pattern};
use log::{debug, warn};

use crate::config::{GeneratorConfig, ResourceGroup};

/// The served paths found for one resource group, in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupListing {
    pub group: ResourceGroup,
    pub paths: Vec<String>,
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

pub fn group_pattern(dir: &Path) -> anyhow::Result<String> {
    let dir = dir
        .to_str()
        .ok_or_else(|| anyhow!("resource directory {} is not valid UTF-8", dir.display()))?;
    Ok(format!("{}/*", Pattern::escape(dir)))
}

/// Lists the entries directly under the group's directory. A missing directory lists nothing.
pub fn list_group(config: &GeneratorConfig, group: &ResourceGroup) -> anyhow::Result<GroupListing> {
    // glob drops `.` components from the paths it yields, so strip against the same form
    let root = without_cur_dir(&config.public_root);
    let pattern = group_pattern(&without_cur_dir(&config.group_dir(group)))?;
    debug!("scanning {}", pattern);
    let entries = glob::glob_with(&pattern, MATCH_OPTIONS)
        .with_context(|| format!("invalid resource pattern {}", pattern))?;

    let mut matched: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => matched.push((path.to_string_lossy().into_owned(), path)),
            Err(err) => warn!("skipping unreadable entry {}: {}", err.path().display(), err.error()),
        }
    }
    matched.sort_by(|a, b| a.0.cmp(&b.0));

    let paths = matched
        .iter()
        .map(|(_, path)| served_path(&root, path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    for path in &paths {
        debug!("  {}", path);
    }
    Ok(GroupListing { group: group.clone(), paths })
}

pub fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Strips `root` from `path` and joins what remains with `/`, with a leading `/`.
pub fn served_path(root: &Path, path: &Path) -> anyhow::Result<String> {
    let relative = path
        .strip_prefix(root)
        .with_context(|| format!("{} is not under {}", path.display(), root.display()))?;
    let mut served = String::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            continue;
        };
        served.push('/');
        match part.to_str() {
            Some(part) => served.push_str(part),
            None => {
                warn!("file name {:?} is not valid UTF-8, listing it lossily", part);
                served.push_str(&part.to_string_lossy());
            }
        }
    }
    Ok(served)
}
