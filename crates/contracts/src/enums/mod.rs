//! Закрытые перечисления для категориальных полей.

/// Объявляет перечисление с фиксированными строковыми метками.
///
/// Генерирует `ALL`, `as_str()`, `parse()` и `Display`; метка же служит
/// значением сериализации и значением `<option>` в фильтрах.
#[macro_export]
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    labelled_enum! {
        /// Test enum
        pub enum Shade {
            Light => "light",
            Dark => "Dark",
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for shade in Shade::ALL {
            assert_eq!(Shade::parse(shade.as_str()), Some(*shade));
        }
        assert_eq!(Shade::parse("all"), None);
        assert_eq!(serde_json::to_string(&Shade::Dark).unwrap(), "\"Dark\"");
    }
}
