mod config_content_provider;
mod config_manager;
mod config_serializer;
mod match_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use match_config::{MatchConfig, get_config_manager};
pub use validate::Validate;
