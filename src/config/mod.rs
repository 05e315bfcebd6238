mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, validate_config};
pub use model::{CheckerConfig, Config, DEFAULT_CHECKER, DEFAULT_MAX_LINE_LENGTH, ScannerConfig};
