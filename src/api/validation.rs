use crate::error::{TurtleError, TurtleResult};

use super::TurtleConfig;

/// Checks the surface-facing part of a config.
///
/// Render parameters are not checked; any step, delta, start and heading is
/// accepted.
pub(super) fn validate_config(config: &TurtleConfig) -> TurtleResult<()> {
    if !config.viewport.is_valid() {
        return Err(TurtleError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    if !config.scale.is_finite() || config.scale <= 0.0 {
        return Err(TurtleError::InvalidData(
            "canvas scale must be finite and > 0".to_owned(),
        ));
    }
    config.style.validate()
}
