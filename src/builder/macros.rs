//! Macros for ergonomic state declaration.

/// Declare a state enumeration.
///
/// The generated enum derives everything a state needs (`Clone`, `Copy`,
/// `PartialEq`, `Eq`, `Hash`, `Debug`) and gains a `name()` method, an `ALL`
/// constant listing every variant in declaration order, and a `Display` impl
/// that prints the name.
///
/// # Example
///
/// ```
/// use autonex::state_enum;
///
/// state_enum! {
///     pub enum Vitals {
///         Alive,
///         Injured,
///         Dead,
///     }
/// }
///
/// assert_eq!(Vitals::Injured.name(), "Injured");
/// assert_eq!(Vitals::ALL.len(), 3);
/// assert_eq!(format!("<{}>", Vitals::Dead), "<Dead>");
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The variant's name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
