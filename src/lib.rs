//! Lists the files of each resource group under `public/resources` and writes them
//! out as TypeScript constants.

pub mod config;
pub mod generator;
pub mod render;
pub mod scan;

pub use config::{GeneratorConfig, ResourceGroup};
pub use generator::ResourceListGenerator;
pub use scan::GroupListing;
