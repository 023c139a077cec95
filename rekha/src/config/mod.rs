//! Export configuration loaded from YAML.

mod defaults;
mod export;

pub use export::ExportConfig;
