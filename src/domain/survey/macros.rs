//! Macro for the closed string vocabularies used by survey answers.
//!
//! **`survey_enum!`** generates a `Copy` enum whose variants serialize to
//! fixed wire strings, plus `ALL`, `as_str()`, `Display`, and a `FromStr`
//! that reports unknown strings as a [`ValidationError::UnknownVariant`]
//! for the named field.
//!
//! ```ignore
//! survey_enum! {
//!     /// Home unit of measure.
//!     HomeUnit, field = "homeUnit" {
//!         SquareFeet => "sqft",
//!         SquareMeters => "sqm",
//!     }
//! }
//! ```
//!
//! [`ValidationError::UnknownVariant`]: crate::domain::foundation::ValidationError::UnknownVariant

macro_rules! survey_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire-format field name used in validation errors.
            pub const FIELD: &'static str = $field;

            /// Wire-format string for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::foundation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| {
                        let expected: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        $crate::domain::foundation::ValidationError::unknown_variant(
                            $field, needle, &expected,
                        )
                    })
            }
        }
    };
}

pub(crate) use survey_enum;
