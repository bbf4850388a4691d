//! Macros for ergonomic state construction.

/// Define a symbolic state enum and its `State` implementation.
///
/// Each variant's name is its `State::name`, and `Display` prints the same
/// text in lowercase.
///
/// # Example
///
/// ```
/// use stepwise::core::State;
/// use stepwise::state_enum;
///
/// state_enum! {
///     pub enum Traffic {
///         Red,
///         Amber,
///         Green,
///     }
/// }
///
/// assert_eq!(Traffic::Amber.name(), "Amber");
/// assert_eq!(Traffic::Amber.to_string(), "amber");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                match self {
                    $(Self::$variant => ::std::borrow::Cow::Borrowed(stringify!($variant))),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let name = $crate::core::State::name(self);
                f.write_str(&name.to_lowercase())
            }
        }
    };
}
