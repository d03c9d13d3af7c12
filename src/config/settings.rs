use std::path::Path;

use crate::composite::op::CompositeOp;
use crate::display::materialize::DisplayThreading;
use crate::foundation::error::{PixelError, PixelResult};
use crate::space::strategy::ColorSpaceId;

/// Pipeline-level defaults, usually read from a JSON file.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// { "color_space": "RGBA16", "composite_op": "over", "display": { "parallel": true } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub color_space: ColorSpaceId,
    pub composite_op: CompositeOp,
    pub display: DisplayThreading,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_space: ColorSpaceId::Rgba16,
            composite_op: CompositeOp::Over,
            display: DisplayThreading::default(),
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> PixelResult<Self> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| PixelError::serde(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> PixelResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            PixelError::Other(anyhow::Error::new(e).context(format!(
                "read settings '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> PixelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PixelError::serde(e.to_string()))
    }

    pub fn validate(&self) -> PixelResult<()> {
        self.display.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
