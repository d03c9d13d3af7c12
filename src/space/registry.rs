use std::collections::BTreeMap;
use std::sync::Arc;

use crate::foundation::error::{PixelError, PixelResult};
use crate::space::rgba::{RgbaU8Space, RgbaU16Space};
use crate::space::strategy::{ColorSpace, ColorSpaceId};

/// Explicit lookup table from [`ColorSpaceId`] to a shared strategy instance.
///
/// Pipelines receive a registry by reference; there is no process-wide instance.
#[derive(Debug, Default, Clone)]
pub struct ColorSpaceRegistry {
    spaces: BTreeMap<ColorSpaceId, Arc<dyn ColorSpace>>,
}

impl ColorSpaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in color space.
    #[tracing::instrument(level = "debug")]
    pub fn with_builtin() -> Self {
        let mut reg = Self::new();
        reg.spaces
            .insert(ColorSpaceId::Rgba8, Arc::new(RgbaU8Space::new()));
        reg.spaces
            .insert(ColorSpaceId::Rgba16, Arc::new(RgbaU16Space::new()));
        tracing::debug!(count = reg.spaces.len(), "registered built-in color spaces");
        reg
    }

    /// Add `space` under its own id. Ids are unique.
    pub fn register(&mut self, space: Arc<dyn ColorSpace>) -> PixelResult<()> {
        let id = space.id();
        if self.spaces.contains_key(&id) {
            return Err(PixelError::validation(format!(
                "color space '{id}' is already registered"
            )));
        }
        self.spaces.insert(id, space);
        Ok(())
    }

    pub fn get(&self, id: ColorSpaceId) -> PixelResult<Arc<dyn ColorSpace>> {
        self.spaces
            .get(&id)
            .cloned()
            .ok_or_else(|| PixelError::validation(format!("color space '{id}' is not registered")))
    }

    /// Look up by id string, case-insensitively (`"rgba16"`).
    pub fn get_by_name(&self, name: &str) -> PixelResult<Arc<dyn ColorSpace>> {
        self.get(name.parse()?)
    }

    pub fn ids(&self) -> impl Iterator<Item = ColorSpaceId> + '_ {
        self.spaces.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/space/registry.rs"]
mod tests;
