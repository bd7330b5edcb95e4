pub mod bootstrap_config;
pub mod error;
pub mod package_manager;
pub mod patch;
pub mod summary;
pub mod target_files;

pub use bootstrap_config::{CliOverrides, Configuration, Defaults, ManifestValues};
pub use error::AppError;
pub use package_manager::PackageManager;
pub use summary::{Change, Summary, is_rejection};
pub use target_files::{MANIFEST_FILE, TargetFiles};
