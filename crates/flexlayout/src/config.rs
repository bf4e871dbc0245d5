//! Engine configuration.
//!
//! Controls how committed rectangles are rounded and which flex factors new
//! boxes start with. Configuration can be loaded from environment variables
//! or constructed programmatically.

use core::str::FromStr;
use std::env;

use log::warn;

use crate::error::StyleError;
use crate::geometry::Rect;
use crate::style::BoxStyle;

/// Rounding applied to rectangle edges when a pass commits them.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PixelSnap {
    /// Keep fractional coordinates.
    Exact,
    /// Round half up to whole pixels.
    #[default]
    Pixel,
    /// Quantize to 1/64 px.
    Subpixel,
}

impl PixelSnap {
    const SUBPIXELS_PER_PX: f32 = 64.0;

    /// Round a single coordinate.
    #[inline]
    pub fn snap(self, value: f32) -> f32 {
        match self {
            Self::Exact => value,
            Self::Pixel => (value + 0.5).floor(),
            Self::Subpixel => {
                value.mul_add(Self::SUBPIXELS_PER_PX, 0.5).floor() / Self::SUBPIXELS_PER_PX
            }
        }
    }

    /// Round a rectangle by its edges so neighbours that touch keep touching.
    pub fn snap_rect(self, rect: Rect) -> Rect {
        let left = self.snap(rect.x);
        let top = self.snap(rect.y);
        let right = self.snap(rect.right());
        let bottom = self.snap(rect.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }
}

impl FromStr for PixelSnap {
    type Err = StyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exact" | "none" => Ok(Self::Exact),
            "pixel" | "px" => Ok(Self::Pixel),
            "subpixel" => Ok(Self::Subpixel),
            other => Err(StyleError::UnknownKeyword {
                property: "pixel-snap",
                value: other.to_owned(),
            }),
        }
    }
}

/// Runtime configuration for a [`crate::LayoutTree`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Rounding applied to committed rectangles
    pub pixel_snap: PixelSnap,
    /// Grow factor given to boxes created with default styles
    pub default_grow: f32,
    /// Shrink factor given to boxes created with default styles
    pub default_shrink: f32,
}

impl LayoutConfig {
    /// Construct a new `LayoutConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `pixel_snap` - Rounding applied to committed rectangles
    /// * `default_grow` - Grow factor for [`Self::default_style`]
    /// * `default_shrink` - Shrink factor for [`Self::default_style`]
    ///
    /// # Returns
    ///
    /// A new `LayoutConfig` instance with the specified settings
    #[inline]
    #[must_use]
    pub const fn new(pixel_snap: PixelSnap, default_grow: f32, default_shrink: f32) -> Self {
        Self {
            pixel_snap,
            default_grow,
            default_shrink,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `FLEXLAYOUT_PIXEL_SNAP`: `exact`, `pixel` or `subpixel` (default: `pixel`)
    /// - `FLEXLAYOUT_DEFAULT_GROW`: grow factor for default styles (default: 0)
    /// - `FLEXLAYOUT_DEFAULT_SHRINK`: shrink factor for default styles (default: 0)
    ///
    /// Unparsable values fall back to the default and log a warning.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pixel_snap: env_or("FLEXLAYOUT_PIXEL_SNAP", defaults.pixel_snap),
            default_grow: env_factor("FLEXLAYOUT_DEFAULT_GROW", defaults.default_grow),
            default_shrink: env_factor("FLEXLAYOUT_DEFAULT_SHRINK", defaults.default_shrink),
        }
    }

    /// Default box style with this configuration's flex factors.
    #[inline]
    pub fn default_style(&self) -> BoxStyle {
        BoxStyle {
            grow: self.default_grow,
            shrink: self.default_shrink,
            ..BoxStyle::default()
        }
    }
}

impl Default for LayoutConfig {
    #[inline]
    fn default() -> Self {
        Self::new(PixelSnap::Pixel, 0.0, 0.0)
    }
}

fn env_or<T: FromStr + Copy>(name: &str, fallback: T) -> T {
    let Ok(raw) = env::var(name) else {
        return fallback;
    };
    raw.parse::<T>().unwrap_or_else(|_| {
        warn!(target: "flexlayout::config", "ignoring {name}={raw:?}: unrecognised value");
        fallback
    })
}

fn env_factor(name: &str, fallback: f32) -> f32 {
    let value = env_or(name, fallback);
    if value.is_finite() && value >= 0.0 {
        return value;
    }
    warn!(target: "flexlayout::config", "ignoring {name}={value}: flex factors must be finite and non-negative");
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if pixel snapping does not round half up.
    fn pixel_snap_rounds_half_up() {
        assert!((PixelSnap::Pixel.snap(2.5) - 3.0).abs() < 0.001);
        assert!((PixelSnap::Pixel.snap(2.49) - 2.0).abs() < 0.001);
        assert!((PixelSnap::Pixel.snap(-0.5) - 0.0).abs() < 0.001);
        assert!((PixelSnap::Exact.snap(2.25) - 2.25).abs() < 0.001);
        assert!((PixelSnap::Subpixel.snap(1.0 / 3.0) - 21.0 / 64.0).abs() < 0.0001);
    }

    #[test]
    /// # Panics
    /// Panics if edge snapping leaves a gap between touching rectangles.
    fn snapped_neighbours_still_touch() {
        let left = PixelSnap::Pixel.snap_rect(Rect::new(0.0, 0.0, 33.4, 10.0));
        let right = PixelSnap::Pixel.snap_rect(Rect::new(33.4, 0.0, 33.4, 10.0));
        assert!((left.right() - right.x).abs() < 0.001);
        assert!((right.width - 34.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if the snap keyword parser accepts garbage.
    fn snap_keywords() {
        assert_eq!("Subpixel".parse::<PixelSnap>(), Ok(PixelSnap::Subpixel));
        assert_eq!("exact".parse::<PixelSnap>(), Ok(PixelSnap::Exact));
        assert!(matches!(
            "round".parse::<PixelSnap>(),
            Err(StyleError::UnknownKeyword { .. })
        ));
    }

    #[test]
    /// # Panics
    /// Panics if default styles do not pick up configured factors.
    fn default_style_uses_configured_factors() {
        let config = LayoutConfig::new(PixelSnap::Exact, 1.0, 2.0);
        let style = config.default_style();
        assert!((style.grow - 1.0).abs() < 0.001);
        assert!((style.shrink - 2.0).abs() < 0.001);
    }
}
