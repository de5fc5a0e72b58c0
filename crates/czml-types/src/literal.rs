// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CZML string enumerations.
//!
//! Each enumeration round-trips through its exact upstream spelling
//! (`FILL_AND_OUTLINE`, not `FillAndOutline`).

use crate::ValidationError;

macro_rules! czml_literal {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The CZML literal for this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $lit),+
                }
            }
        }

        impl core::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($lit => Ok(Self::$variant),)+
                    other => Err(ValidationError::UnknownLiteral {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

czml_literal! {
    /// Horizontal anchor of a billboard or label relative to its position.
    HorizontalOrigin as "horizontalOrigin" {
        /// No horizontal adjustment.
        Unspecified => "NONE",
        /// Anchor at the left edge.
        Left => "LEFT",
        /// Anchor at the horizontal center.
        Center => "CENTER",
        /// Anchor at the right edge.
        Right => "RIGHT",
    }
}

czml_literal! {
    /// Vertical anchor of a billboard or label relative to its position.
    VerticalOrigin as "verticalOrigin" {
        /// Anchor at the text baseline.
        Baseline => "BASELINE",
        /// Anchor at the bottom edge.
        Bottom => "BOTTOM",
        /// Anchor at the vertical center.
        Center => "CENTER",
        /// Anchor at the top edge.
        Top => "TOP",
    }
}

czml_literal! {
    /// How label text is drawn.
    LabelStyle as "style" {
        /// Fill only.
        Fill => "FILL",
        /// Outline only.
        Outline => "OUTLINE",
        /// Fill and outline.
        FillAndOutline => "FILL_AND_OUTLINE",
    }
}

czml_literal! {
    /// Frame in which cartesian positions are expressed.
    ReferenceFrame as "referenceFrame" {
        /// Earth-fixed frame.
        Fixed => "FIXED",
        /// Inertial frame.
        Inertial => "INERTIAL",
    }
}

czml_literal! {
    /// Algorithm used to interpolate between samples.
    InterpolationAlgorithm as "interpolationAlgorithm" {
        /// Linear interpolation.
        Linear => "LINEAR",
        /// Lagrange polynomial interpolation.
        Lagrange => "LAGRANGE",
        /// Hermite polynomial interpolation.
        Hermite => "HERMITE",
    }
}

czml_literal! {
    /// Direction of the stripes in a stripe material.
    StripeOrientation as "orientation" {
        /// Horizontal stripes.
        Horizontal => "HORIZONTAL",
        /// Vertical stripes.
        Vertical => "VERTICAL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_roundtrip() {
        for origin in HorizontalOrigin::ALL {
            assert_eq!(origin.as_str().parse::<HorizontalOrigin>(), Ok(*origin));
        }
        for style in LabelStyle::ALL {
            assert_eq!(style.to_string().parse::<LabelStyle>(), Ok(*style));
        }
    }

    #[test]
    fn test_exact_spelling() {
        assert_eq!(HorizontalOrigin::Unspecified.as_str(), "NONE");
        assert_eq!(LabelStyle::FillAndOutline.as_str(), "FILL_AND_OUTLINE");
        assert!("center".parse::<VerticalOrigin>().is_err());
    }

    #[test]
    fn test_unknown_literal_names_kind() {
        let err = "DIAGONAL".parse::<StripeOrientation>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownLiteral {
                kind: "orientation",
                value: "DIAGONAL".to_owned(),
            }
        );
    }
}
