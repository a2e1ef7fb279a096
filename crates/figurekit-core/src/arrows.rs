//! Arrow tools that link two figures so that moving one moves the other.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Link mode applied to a pair of selected figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowTool {
    /// Remove any link between the two figures
    #[serde(rename = "none_arrow")]
    None,
    /// The first figure drives the second
    #[serde(rename = "single_arrow")]
    Single,
    /// Both figures drive each other
    #[serde(rename = "double_arrow")]
    Double,
}

impl ArrowTool {
    /// Tool name as used by toolbars and configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none_arrow",
            Self::Single => "single_arrow",
            Self::Double => "double_arrow",
        }
    }
}

impl std::fmt::Display for ArrowTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ArrowTool {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "none_arrow" => Ok(Self::None),
            "single_arrow" => Ok(Self::Single),
            "double_arrow" => Ok(Self::Double),
            other => Err(format!("unknown arrow tool: {other}")),
        }
    }
}
