use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::Result;
use crate::utils::validation::validate_scaffold_name;

/// Which kind of scaffold a user-supplied name is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameKind {
    Project,
    Notebook,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Project => write!(f, "Project"),
            NameKind::Notebook => write!(f, "Notebook"),
        }
    }
}

/// A project or notebook name that has passed validation.
///
/// Only ever constructed through [`ScaffoldName::parse`], so holding one means
/// the value is safe to use as a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaffoldName {
    kind: NameKind,
    value: String,
}

impl ScaffoldName {
    pub fn parse(raw: &str, kind: NameKind) -> Result<Self> {
        validate_scaffold_name(raw, kind)?;
        Ok(Self {
            kind,
            value: raw.to_string(),
        })
    }

    pub fn kind(&self) -> NameKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ScaffoldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<std::path::Path> for ScaffoldName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.value)
    }
}
