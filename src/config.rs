use std::path::{Path, PathBuf};

use anyhow::bail;

/// A named category of assets living in its own directory under the resources root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub name: String,
    pub subdir: String,
}

impl ResourceGroup {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { subdir: name.clone(), name }
    }

    pub fn with_subdir(name: impl Into<String>, subdir: impl Into<String>) -> Self {
        Self { name: name.into(), subdir: subdir.into() }
    }

    pub fn export_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.name.to_uppercase())
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory served as the web root; stripped from every listed path.
    pub public_root: PathBuf,
    pub resources_dir: String,
    pub groups: Vec<ResourceGroup>,
    pub output: PathBuf,
    pub export_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            public_root: PathBuf::from("public"),
            resources_dir: "resources".to_string(),
            groups: vec![
                ResourceGroup::new("testImages"),
                ResourceGroup::new("testImageMasks"),
            ],
            output: PathBuf::from("src/resources.ts"),
            export_prefix: "RS_".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_public_root(mut self, public_root: impl AsRef<Path>) -> Self {
        self.public_root = public_root.as_ref().to_path_buf();
        self
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    pub fn with_groups<I, G>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<ResourceGroup>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    pub fn group_dir(&self, group: &ResourceGroup) -> PathBuf {
        self.public_root.join(&self.resources_dir).join(&group.subdir)
    }

    /// Checks that every group renders to a distinct, valid identifier.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !is_identifier(&self.export_prefix) && !self.export_prefix.is_empty() {
            bail!("export prefix {:?} is not a valid identifier", self.export_prefix);
        }
        let mut seen: Vec<String> = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            if !is_identifier(&group.name) {
                bail!("resource group name {:?} is not a valid identifier", group.name);
            }
            if group.subdir.is_empty() {
                bail!("resource group {:?} has an empty directory", group.name);
            }
            let export = group.export_name(&self.export_prefix);
            if export.starts_with(|c: char| c.is_ascii_digit()) {
                bail!("export {} starts with a digit", export);
            }
            if seen.contains(&export) {
                bail!("resource group {:?} duplicates export {}", group.name, export);
            }
            seen.push(export);
        }
        Ok(())
    }
}

impl From<&str> for ResourceGroup {
    fn from(name: &str) -> Self {
        ResourceGroup::new(name)
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
