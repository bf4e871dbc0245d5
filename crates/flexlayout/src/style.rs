//! Box style model.
//!
//! Every keyword enum converts from its CSS-like keyword (`FromStr`) and from
//! its declaration-order discriminant (`TryFrom<u8>`). Both conversions reject
//! unknown values with a [`StyleError`].

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::geometry::Edges;

/// Declare a keyword enum with its keyword and discriminant conversions.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($property:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => [$($keyword:literal),+ $(,)?]
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Variants in declaration order; the index is the discriminant.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        impl FromStr for $name {
            type Err = StyleError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim() {
                    $($($keyword)|+ => Ok(Self::$variant),)+
                    other => Err(StyleError::UnknownKeyword {
                        property: $property,
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = StyleError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::ALL
                    .get(usize::from(value))
                    .copied()
                    .ok_or(StyleError::UnknownDiscriminant {
                        property: $property,
                        value,
                    })
            }
        }
    };
}

keyword_enum! {
    /// Main axis of a container.
    pub enum FlexDirection ("direction") {
        #[default]
        Row => ["row"],
        Column => ["column"],
    }
}

keyword_enum! {
    /// Distribution of free space along the main axis.
    pub enum JustifyContent ("justify") {
        #[default]
        Start => ["flex-start", "start"],
        End => ["flex-end", "end"],
        Center => ["center"],
        SpaceBetween => ["space-between"],
        SpaceAround => ["space-around"],
    }
}

keyword_enum! {
    /// Placement of items within their line along the cross axis.
    pub enum AlignItems ("align-items") {
        #[default]
        Stretch => ["stretch"],
        Start => ["flex-start", "start"],
        End => ["flex-end", "end"],
        Center => ["center"],
    }
}

keyword_enum! {
    /// Distribution of lines along the cross axis.
    pub enum AlignContent ("align-content") {
        #[default]
        Start => ["flex-start", "start"],
        End => ["flex-end", "end"],
        Center => ["center"],
        Stretch => ["stretch"],
        SpaceBetween => ["space-between"],
        SpaceAround => ["space-around"],
    }
}

keyword_enum! {
    /// Whether a box takes part in flex layout or is placed from its insets.
    pub enum Position ("position") {
        #[default]
        Flow => ["static", "relative"],
        Absolute => ["absolute"],
    }
}

keyword_enum! {
    /// `None` removes the box and its subtree from layout.
    pub enum Display ("display") {
        #[default]
        Flow => ["flex", "flow", "block"],
        None => ["none"],
    }
}

/// Parse a `flex-wrap` keyword.
///
/// # Errors
/// Returns [`StyleError::UnknownKeyword`] for anything but `wrap` and `nowrap`.
pub fn parse_wrap(value: &str) -> Result<bool, StyleError> {
    match value.trim() {
        "wrap" => Ok(true),
        "nowrap" => Ok(false),
        other => Err(StyleError::UnknownKeyword {
            property: "wrap",
            value: other.to_owned(),
        }),
    }
}

/// A length along one physical axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    /// Sized by content or by the container.
    #[default]
    Auto,
    Px(f32),
    /// Percentage of the parent's content box on the same axis (`50.0` is half).
    Percent(f32),
}

impl Dimension {
    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// A px length is the only one measuring never derives from content.
    #[inline]
    pub const fn is_px(self) -> bool {
        matches!(self, Self::Px(_))
    }

    /// Resolve against the parent's content extent, if it is known.
    #[inline]
    pub fn resolve(self, parent_extent: Option<f32>) -> Option<f32> {
        match self {
            Self::Auto => None,
            Self::Px(px) => Some(px),
            Self::Percent(pct) => parent_extent.map(|extent| extent * pct / 100.0),
        }
    }

    /// The number carried by a px or percent length.
    #[inline]
    pub const fn value(self) -> Option<f32> {
        match self {
            Self::Auto => None,
            Self::Px(value) | Self::Percent(value) => Some(value),
        }
    }
}

/// Offsets of an absolutely positioned box from its parent's content edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

/// Layout inputs of a single box.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    pub width: Dimension,
    pub height: Dimension,
    pub margin: Edges,
    pub position: Position,
    /// Only read for `Position::Absolute` boxes, except on a layout root
    /// where `left`/`top` give its origin.
    pub insets: Insets,
    pub direction: FlexDirection,
    pub wrap: bool,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub grow: f32,
    pub shrink: f32,
    pub display: Display,
}

impl Default for BoxStyle {
    #[inline]
    fn default() -> Self {
        Self {
            width: Dimension::Auto,
            height: Dimension::Auto,
            margin: Edges::default(),
            position: Position::Flow,
            insets: Insets::default(),
            direction: FlexDirection::Row,
            wrap: false,
            justify_content: JustifyContent::Start,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Start,
            grow: 0.0,
            shrink: 0.0,
            display: Display::Flow,
        }
    }
}

impl BoxStyle {
    /// Default style with fixed px width and height.
    #[inline]
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width: Dimension::Px(width),
            height: Dimension::Px(height),
            ..Self::default()
        }
    }

    #[inline]
    pub const fn is_absolute(&self) -> bool {
        matches!(self.position, Position::Absolute)
    }

    #[inline]
    pub const fn is_displayed(&self) -> bool {
        !matches!(self.display, Display::None)
    }
}
