use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use log::info;
use tempfile::NamedTempFile;

use crate::{config::GeneratorConfig, render::render_module, scan::{list_group, GroupListing}};

pub struct ResourceListGenerator {
    config: GeneratorConfig,
}

impl ResourceListGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.config.validate()
    }

    /// Lists every configured group, in configured order.
    pub fn scan(&self) -> anyhow::Result<Vec<GroupListing>> {
        let mut listings = Vec::with_capacity(self.config.groups.len());
        for group in &self.config.groups {
            let listing = list_group(&self.config, group)?;
            info!("{}: {} entries", group.name, listing.paths.len());
            listings.push(listing);
        }
        Ok(listings)
    }

    pub fn render(&self, listings: &[GroupListing]) -> String {
        render_module(listings, &self.config.export_prefix)
    }

    /// Scans, renders and replaces the output file. Returns the generated text.
    pub fn generate(&self) -> anyhow::Result<String> {
        self.validate()?;
        let listings = self.scan()?;
        let text = self.render(&listings);
        write_atomic(&self.config.output, &text)?;
        info!("wrote {}", self.config.output.display());
        Ok(text)
    }
}

/// Writes `text` to a temporary sibling of `path` and renames it into place.
pub fn write_atomic(path: &Path, text: &str) -> anyhow::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create a temporary file in {}", parent.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("failed to write {}", file.path().display()))?;
    if let Some(permissions) = output_permissions(path) {
        file.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("failed to set permissions on {}", file.path().display()))?;
    }
    file.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

// temp files are created 0600; match the existing output, or 0644 for a new one
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(metadata) = fs::metadata(path) {
        return Some(metadata.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_atomic_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ts");
        fs::write(&path, "stale contents that are much longer than the new ones\n").unwrap();
        write_atomic(&path, "fresh\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_atomic_missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ts");
        assert!(write_atomic(&path, "x").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("resources.ts");
        let config = GeneratorConfig::default()
            .with_public_root(dir.path().join("public"))
            .with_output(&output)
            .with_groups(["bad-name"]);
        assert!(ResourceListGenerator::new(config).generate().is_err());
        assert!(!output.exists());
    }
}
