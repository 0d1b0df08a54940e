//! Macros for declaring kind enumerations.

/// Generate a closed kind enumeration with a [`Kind`](crate::core::Kind) impl.
///
/// Variants may carry explicit small integer discriminants; those become the
/// kind's `id()`. The generated type also gets an `ALL` constant listing every
/// variant in declaration order, and serializes by variant name so kinds can
/// be embedded in state payloads.
///
/// # Example
///
/// ```
/// use switchyard::core::Kind;
/// use switchyard::kind_enum;
///
/// kind_enum! {
///     pub enum LightKind {
///         Red = 0,
///         Yellow = 1,
///         Green = 2,
///     }
/// }
///
/// assert_eq!(LightKind::Green.id(), 2);
/// assert_eq!(LightKind::Yellow.name(), "Yellow");
/// assert_eq!(LightKind::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! kind_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $disc:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(= $disc)?
            ),*
        }

        impl $name {
            /// Every kind, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Kind for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn id(&self) -> u8 {
                *self as u8
            }
        }
    };
}
