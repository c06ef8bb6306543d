use crate::{GraphError, GraphResult};

/// A closed set of named string constants.
///
/// Parsing is strict and case-sensitive: a name outside [`MEMBERS`] is an
/// error, never a silent default. Going from an ordinal back to a name is
/// bounds-checked.
///
/// [`MEMBERS`]: GraphEnum::MEMBERS
pub trait GraphEnum: Copy + Sized + 'static {
    /// Schema name of the enumeration, used in error messages.
    const TYPE_NAME: &'static str;

    /// All members, in ordinal order.
    const MEMBERS: &'static [Self];

    /// The canonical wire name of this member.
    fn as_str(self) -> &'static str;

    /// Position of this member in [`GraphEnum::MEMBERS`].
    fn ordinal(self) -> usize;

    fn parse(value: &str) -> GraphResult<Self> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.as_str() == value)
            .ok_or_else(|| GraphError::UnknownEnumValue {
                enum_name: Self::TYPE_NAME,
                value: value.to_string(),
            })
    }

    fn from_ordinal(ordinal: usize) -> GraphResult<Self> {
        Self::MEMBERS
            .get(ordinal)
            .copied()
            .ok_or(GraphError::EnumOrdinalOutOfRange {
                enum_name: Self::TYPE_NAME,
                ordinal,
            })
    }

    fn name_of_ordinal(ordinal: usize) -> GraphResult<&'static str> {
        Self::from_ordinal(ordinal).map(Self::as_str)
    }
}

/// Declares a fieldless enum together with its [`GraphEnum`], `Display` and
/// `FromStr` implementations.
///
/// ```ignore
/// graph_enum! {
///     pub enum WiFiProxySetting {
///         None => "none",
///         Manual => "manual",
///         Automatic => "automatic",
///     }
/// }
/// ```
macro_rules! graph_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::serialization::GraphEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::serialization::GraphEnum::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::GraphError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::serialization::GraphEnum>::parse(s)
            }
        }
    };
}

pub(crate) use graph_enum;

#[cfg(test)]
mod tests {
    use super::*;

    graph_enum! {
        enum Color {
            Red => "red",
            DarkBlue => "darkBlue",
        }
    }

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!(Color::parse("darkBlue").unwrap(), Color::DarkBlue);
        assert!(matches!(
            Color::parse("DarkBlue"),
            Err(GraphError::UnknownEnumValue { enum_name: "Color", .. })
        ));
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn ordinals_are_bounds_checked() {
        assert_eq!(Color::Red.ordinal(), 0);
        assert_eq!(Color::name_of_ordinal(1).unwrap(), "darkBlue");
        match Color::name_of_ordinal(2) {
            Err(GraphError::EnumOrdinalOutOfRange { enum_name, ordinal }) => {
                assert_eq!(enum_name, "Color");
                assert_eq!(ordinal, 2);
            }
            other => panic!("expected EnumOrdinalOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn display_and_from_str_use_wire_names() {
        assert_eq!(Color::DarkBlue.to_string(), "darkBlue");
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
    }
}
