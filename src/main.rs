use resource_lister::{GeneratorConfig, ResourceListGenerator};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    ResourceListGenerator::new(GeneratorConfig::default()).generate()?;
    Ok(())
}
