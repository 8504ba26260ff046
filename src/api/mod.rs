mod config;

pub use config::PresentationConfig;

use tracing::{debug, info};

use crate::core::Dataset;
use crate::error::{SceneError, SceneResult};
use crate::interaction::{HoverTransition, InteractionState, TooltipOffset, TooltipState};
use crate::render::{RenderFrame, Surface};
use crate::scenes::{SceneCursor, SceneKind, SceneRegistry, SceneStyle, tooltip_overlay};

/// Drives the scene sequence over one shared dataset.
///
/// Owns the cursor, the surface and the tooltip. Every scene switch clears
/// the surface and repaints from scratch.
pub struct Presentation<S: Surface> {
    dataset: Dataset,
    registry: SceneRegistry,
    cursor: SceneCursor,
    style: SceneStyle,
    surface: S,
    tooltip_offset: TooltipOffset,
    interaction: Option<InteractionState>,
}

impl<S: Surface> Presentation<S> {
    pub fn new(dataset: Dataset, surface: S, config: &PresentationConfig) -> SceneResult<Self> {
        config.validate()?;
        let registry = SceneRegistry::standard();
        let cursor = SceneCursor::new(registry.len())?;

        Ok(Self {
            dataset,
            registry,
            cursor,
            style: config.scene_style(),
            surface,
            tooltip_offset: config.tooltip_offset,
            interaction: None,
        })
    }

    /// Replaces the scene list and rewinds the cursor.
    pub fn with_registry(mut self, registry: SceneRegistry) -> SceneResult<Self> {
        self.cursor = SceneCursor::new(registry.len())?;
        self.registry = registry;
        Ok(self)
    }

    /// Renders the scene under the cursor; used once after loading.
    pub fn start(&mut self) -> SceneResult<SceneKind> {
        self.render_current()
    }

    /// Advances the cursor (wrapping), clears the surface and renders the new scene.
    pub fn next_scene(&mut self) -> SceneResult<SceneKind> {
        let index = self.cursor.advance();
        debug!(index, "advance scene cursor");
        self.render_current()
    }

    #[must_use]
    pub fn current_scene(&self) -> SceneKind {
        self.registry
            .kind(self.cursor.current())
            .unwrap_or(SceneKind::Trend)
    }

    #[must_use]
    pub fn cursor(&self) -> SceneCursor {
        self.cursor
    }

    #[must_use]
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Tooltip state, once a hover-capable scene has been rendered.
    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.interaction
            .as_ref()
            .map(|interaction| interaction.tooltip().state())
    }

    /// Pointer moved over the surface. Ignored outside interactive scenes.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> HoverTransition {
        if !self.current_scene().is_interactive() {
            return HoverTransition::None;
        }
        let (Some(interaction), Some(frame)) = (self.interaction.as_mut(), self.surface.charts().last())
        else {
            return HoverTransition::None;
        };
        interaction.on_pointer_move(frame, x, y)
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) -> HoverTransition {
        match self.interaction.as_mut() {
            Some(interaction) => interaction.on_pointer_leave(),
            None => HoverTransition::None,
        }
    }

    /// Current chart with the tooltip overlay applied, if a chart is shown.
    #[must_use]
    pub fn composed_frame(&self) -> Option<RenderFrame> {
        let frame = self.surface.charts().last()?;
        match self.tooltip() {
            Some(tooltip) => Some(tooltip_overlay(frame, tooltip, &self.style)),
            None => Some(frame.clone()),
        }
    }

    fn render_current(&mut self) -> SceneResult<SceneKind> {
        let index = self.cursor.current();
        let entry = *self.registry.get(index).ok_or_else(|| {
            SceneError::InvalidData(format!("no scene registered at index {index}"))
        })?;

        self.surface.clear();
        if let Some(interaction) = self.interaction.as_mut() {
            interaction.reset();
        }

        let frame = (entry.render)(&self.dataset, &self.style)?;
        let elements = frame.element_count();
        self.surface.append_chart(frame)?;

        if entry.kind.is_interactive() && self.interaction.is_none() {
            debug!("creating tooltip overlay");
            self.interaction = Some(InteractionState::new(self.tooltip_offset));
        }

        info!(scene = ?entry.kind, index, elements, "rendered scene");
        Ok(entry.kind)
    }
}
