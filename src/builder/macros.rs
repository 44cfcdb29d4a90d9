//! Macros for declaring state enums.

/// Generate a `State` implementation for a plain enum.
///
/// Extra attributes (including `#[derive(...)]`) are passed through to the
/// generated enum.
///
/// # Example
///
/// ```
/// use simon::state_enum;
/// use simon::core::State;
///
/// state_enum! {
///     pub enum Lobby {
///         Waiting,
///         Countdown,
///         Closed,
///         Crashed,
///     }
///     final: [Closed, Crashed]
///     error: [Crashed]
/// }
///
/// assert_eq!(Lobby::Countdown.name(), "Countdown");
/// assert!(Lobby::Crashed.is_error());
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

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
