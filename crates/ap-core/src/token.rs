//! Macro for enums that travel as fixed string tokens.
//!
//! Placement tables, key strings and collaborator data all spell enum values
//! as short lowercase tokens (`"cw"`, `"ne"`, `"float"`…).  Every such enum
//! gets the same surface: `ALL`, `as_str`, `Display`, and a `FromStr` that
//! rejects anything outside the token set with [`ApError::Parse`][crate::ApError].

/// Generate a `Copy` enum whose variants map 1:1 onto string tokens.
macro_rules! token_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident ($what:literal) {
            $( $(#[$vattr:meta])* $variant:ident => $tok:literal, )+
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$vattr])*
                #[cfg_attr(feature = "serde", serde(rename = $tok))]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// The canonical token for this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $tok, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ApError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $tok => Ok($name::$variant), )+
                    other => Err($crate::ApError::parse($what, other)),
                }
            }
        }
    };
}
