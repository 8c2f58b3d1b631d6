// Adapters - External system implementations

pub mod exec_mkvmerge;
pub mod probe_mkvmerge;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_mkvmerge::MkvmergeExecAdapter;
pub use probe_mkvmerge::MkvmergeProbeAdapter;
pub use toml_config::{LogFormat, Settings, TomlConfigAdapter};
pub use tracing_log::init_logging;
