use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, Viewport};
use crate::error::{SceneError, SceneResult};
use crate::interaction::TooltipOffset;
use crate::loader::LoadOptions;
use crate::scenes::SceneStyle;

/// Presentation bootstrap configuration.
///
/// Serializable so hosts can keep setup in a JSON file; every field has a
/// default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub tooltip_offset: TooltipOffset,
    #[serde(default = "default_scatter_opacity")]
    pub scatter_opacity: f64,
    #[serde(default)]
    pub load: LoadOptions,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
            tooltip_offset: TooltipOffset::default(),
            scatter_opacity: default_scatter_opacity(),
            load: LoadOptions::default(),
        }
    }
}

fn default_scatter_opacity() -> f64 {
    0.7
}

impl PresentationConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset(mut self, offset: TooltipOffset) -> Self {
        self.tooltip_offset = offset;
        self
    }

    #[must_use]
    pub fn with_scatter_opacity(mut self, opacity: f64) -> Self {
        self.scatter_opacity = opacity;
        self
    }

    /// Enables or disables strict numeric validation while loading.
    #[must_use]
    pub fn with_validate_numeric_fields(mut self, validate: bool) -> Self {
        self.load.validate_numeric_fields = validate;
        self
    }

    pub fn validate(&self) -> SceneResult<()> {
        PlotArea::from_viewport(self.viewport, self.margins)?;

        if !self.scatter_opacity.is_finite() || !(0.0..=1.0).contains(&self.scatter_opacity) {
            return Err(SceneError::InvalidConfig(
                "scatter opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.tooltip_offset.dx.is_finite() || !self.tooltip_offset.dy.is_finite() {
            return Err(SceneError::InvalidConfig(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Scene style derived from this config.
    #[must_use]
    pub fn scene_style(&self) -> SceneStyle {
        SceneStyle {
            viewport: self.viewport,
            margins: self.margins,
            scatter_opacity: self.scatter_opacity,
            ..SceneStyle::default()
        }
    }

    pub fn from_json_str(input: &str) -> SceneResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            SceneError::InvalidConfig(format!("failed to parse presentation config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> SceneResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SceneError::InvalidConfig(format!("failed to serialize presentation config: {e}"))
        })
    }
}
