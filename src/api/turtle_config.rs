use serde::{Deserialize, Serialize};

use crate::core::{SymbolSet, Viewport};
use crate::error::{TurtleError, TurtleResult};
use crate::render::StrokeStyle;

use super::RenderParams;
use super::validation::validate_config;

/// Command string drawn by the bundled demonstration.
pub const DEMO_COMMANDS: &str = "FFF-FF-F+F+FF-F-FFF";

/// Interpreter setup.
///
/// This type is serializable so hosts can keep drawing setups in JSON files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    #[serde(default)]
    pub params: RenderParams,
    #[serde(default)]
    pub viewport: Viewport,
    /// Pixels per turtle unit.
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub style: StrokeStyle,
    #[serde(default)]
    pub symbol_set: SymbolSet,
}

impl TurtleConfig {
    #[must_use]
    pub fn new(params: RenderParams) -> Self {
        Self {
            params,
            viewport: Viewport::default(),
            scale: default_scale(),
            style: StrokeStyle::default(),
            symbol_set: SymbolSet::default(),
        }
    }

    /// Config of the bundled demonstration drawing.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(RenderParams::demo())
    }

    #[must_use]
    pub fn with_params(mut self, params: RenderParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_symbol_set(mut self, symbol_set: SymbolSet) -> Self {
        self.symbol_set = symbol_set;
        self
    }

    pub fn validate(&self) -> TurtleResult<()> {
        validate_config(self)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> TurtleResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> TurtleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TurtleError::InvalidData(format!("failed to serialize config json: {e}"))
        })
    }
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self::new(RenderParams::default())
    }
}

fn default_scale() -> f64 {
    1.0
}
