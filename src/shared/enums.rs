//! Integer-coded enumerations.
//!
//! Every enumerated column (star levels, shop types, currencies, ...) is stored as
//! `SMALLINT` and exchanged as a plain integer in JSON. [`coded_enum!`] generates the
//! Rust enum together with its sqlx encoding, serde conversion and code validation.

/// Declare an enum whose variants map to fixed `i16` codes.
///
/// The generated type:
/// - encodes/decodes as `SMALLINT` through sqlx,
/// - (de)serializes as an integer, rejecting unknown codes,
/// - converts with `TryFrom<i16>` / `From<Self> for i16`.
#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, sqlx::Type,
        )]
        #[serde(try_from = "i16", into = "i16")]
        #[repr(i16)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $code ),+
        }

        impl $name {
            /// Every declared variant, in declaration order
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(self) -> i16 {
                self as i16
            }
        }

        impl TryFrom<i16> for $name {
            type Error = String;

            fn try_from(code: i16) -> ::std::result::Result<Self, Self::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    other => Err(format!("{} is not a valid {}", other, stringify!($name))),
                }
            }
        }

        impl From<$name> for i16 {
            fn from(value: $name) -> Self {
                value as i16
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $( $name::$variant => write!(f, "{}", stringify!($variant)), )+
                }
            }
        }
    };
}

coded_enum! {
    /// Settlement currency of bank accounts and fees
    pub enum Currency {
        Usd = 1,
        Cny = 2,
        Lkr = 3,
    }
}

coded_enum! {
    /// Generic 1..5 rating (hotel stars, restaurant levels)
    pub enum Level {
        One = 1,
        Two = 2,
        Three = 3,
        Four = 4,
        Five = 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for currency in Currency::ALL {
            let code: i16 = (*currency).into();
            assert_eq!(Currency::try_from(code), Ok(*currency));
        }
        assert_eq!(Level::ALL.len(), 5);
        assert_eq!(Level::Five.code(), 5);
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = Currency::try_from(9).unwrap_err();
        assert_eq!(err, "9 is not a valid Currency");
        assert!(Level::try_from(0).is_err());
    }

    #[test]
    fn test_serde_uses_integers() {
        assert_eq!(serde_json::to_string(&Currency::Lkr).unwrap(), "3");
        let level: Level = serde_json::from_str("4").unwrap();
        assert_eq!(level, Level::Four);
        assert!(serde_json::from_str::<Level>("6").is_err());
        assert!(serde_json::from_str::<Level>("\"FOUR\"").is_err());
    }

    #[test]
    fn test_display_uses_variant_name() {
        assert_eq!(Currency::Usd.to_string(), "Usd");
    }
}
