// trurl - traceable, reproducible data science helpers
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::name::{NameKind, ScaffoldName};
pub use models::project::RequiredDirectories;
pub use services::*;
pub use utils::error::{Result, TrurlError};
