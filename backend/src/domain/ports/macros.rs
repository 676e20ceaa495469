//! Helper macro for generating port error enums.

/// Generate a `thiserror` enum for a port boundary plus snake_case
/// constructors that accept anything convertible into the field types.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    /// Construct this variant from convertible field values.
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ExamplePortError {
            Broken { message: String } => "broken: {message}",
            Mixed { message: String, count: u32 } => "mixed: {message} ({count})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::broken("hello");
        assert_eq!(err.to_string(), "broken: hello");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::mixed("hello", 42_u32);
        assert_eq!(err.to_string(), "mixed: hello (42)");
    }
}
