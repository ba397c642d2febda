//! Manifest validation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Reject manifest properties that the definition does not declare.
    #[serde(default)]
    pub reject_unknown_fields: bool,
}
