use crate::core::Dataset;
use crate::error::{SceneError, SceneResult};
use crate::render::RenderFrame;

use super::{SceneKind, SceneStyle, render_grouped_trend, render_scatter, render_trend};

pub type SceneRenderFn = fn(&Dataset, &SceneStyle) -> SceneResult<RenderFrame>;

#[derive(Debug, Clone, Copy)]
pub struct SceneEntry {
    pub kind: SceneKind,
    pub render: SceneRenderFn,
}

/// Ordered, fixed list of scene renderers.
#[derive(Debug, Clone)]
pub struct SceneRegistry {
    entries: Box<[SceneEntry]>,
}

impl SceneRegistry {
    /// Trend, grouped trend and scatter, in that order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: Box::new([
                SceneEntry {
                    kind: SceneKind::Trend,
                    render: render_trend,
                },
                SceneEntry {
                    kind: SceneKind::GroupedTrend,
                    render: render_grouped_trend,
                },
                SceneEntry {
                    kind: SceneKind::Scatter,
                    render: render_scatter,
                },
            ]),
        }
    }

    pub fn new(entries: Vec<SceneEntry>) -> SceneResult<Self> {
        if entries.is_empty() {
            return Err(SceneError::InvalidConfig(
                "scene registry needs at least one scene".to_owned(),
            ));
        }
        Ok(Self {
            entries: entries.into_boxed_slice(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SceneEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn kind(&self, index: usize) -> Option<SceneKind> {
        self.get(index).map(|entry| entry.kind)
    }

    /// Invokes the renderer at `index`.
    pub fn render(
        &self,
        index: usize,
        dataset: &Dataset,
        style: &SceneStyle,
    ) -> SceneResult<RenderFrame> {
        let entry = self.get(index).ok_or_else(|| {
            SceneError::InvalidData(format!(
                "scene index {index} out of range for {} scenes",
                self.len()
            ))
        })?;
        (entry.render)(dataset, style)
    }
}

/// Index of the active scene; wraps modulo the scene count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneCursor {
    index: usize,
    count: usize,
}

impl SceneCursor {
    pub fn new(count: usize) -> SceneResult<Self> {
        if count == 0 {
            return Err(SceneError::InvalidConfig(
                "scene cursor needs at least one scene".to_owned(),
            ));
        }
        Ok(Self { index: 0, count })
    }

    #[must_use]
    pub fn current(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    /// Moves to the next scene and returns its index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.index
    }
}
