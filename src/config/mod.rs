//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FindashPaths;
pub use settings::Settings;
