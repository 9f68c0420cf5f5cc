//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
///
/// Leaving `color` unset keeps terminal detection (and `NO_COLOR`) in
/// charge; `true` or `false` forces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub color: Option<bool>,
}
