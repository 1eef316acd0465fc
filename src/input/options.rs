//! Categorical input fields.
//!
//! Each enum carries its display labels in UI order. Labels are the canonical
//! form everywhere: the form cycles through them, CLI flags and config
//! defaults parse them (case-insensitively), and the scoring tables key on
//! them.

/// Defines a categorical field enum with ordered variants and display labels.
macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants in UI order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Next variant in UI order, wrapping at the end.
            pub fn next(&self) -> $name {
                let idx = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
                Self::ALL[(idx + 1) % Self::ALL.len()]
            }

            /// Previous variant in UI order, wrapping at the start.
            pub fn prev(&self) -> $name {
                let idx = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
                Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| {
                        let options = Self::ALL
                            .iter()
                            .map(|v| v.label())
                            .collect::<Vec<_>>()
                            .join(", ");
                        format!("unknown value '{}' (expected one of: {})", s, options)
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

choice_enum! {
    /// General activity level.
    Lifestyle {
        Active => "Active",
        Good => "Good",
        Moderate => "Moderate",
        Sedentary => "Sedentary",
    }
}

choice_enum! {
    /// Menstruation pattern.
    Menstruation {
        Regular => "Regular",
        RegularlyIrregular => "Regularly/irregular",
        Irregular => "Irregular",
        IrregularlyIrregular => "Irregularly/irregular",
    }
}

choice_enum! {
    /// Frequency of intercourse.
    SexFrequency {
        Regular => "Regular",
        Irregular => "Irregular",
        OnceAWeek => "Once a week",
        OnceAMonth => "Once a month",
    }
}

choice_enum! {
    /// Number of diagnosed contributing factors.
    Diagnosis {
        NoFactor => "No factor",
        OneFactor => "One factor",
        TwoFactors => "Two factors",
        MultipleFactors => "Multiple factors",
    }
}

choice_enum! {
    /// Ovulation pattern.
    Ovulation {
        Always => "Always",
        Mostly => "Mostly",
        Rare => "Rare",
        None => "None",
    }
}

choice_enum! {
    /// Stress level.
    Stress {
        Low => "Low",
        Moderate => "Moderate",
        High => "High",
        Severe => "Severe",
    }
}

choice_enum! {
    /// Sleep quality.
    Sleep {
        Good => "Good",
        Fair => "Fair",
        Poor => "Poor",
        Insomnia => "Insomnia",
    }
}

choice_enum! {
    /// Diet quality.
    Diet {
        Balanced => "Balanced",
        MostlyBalanced => "Mostly balanced",
        Junk => "Junk",
        Poor => "Poor",
    }
}

choice_enum! {
    /// Tobacco/alcohol use.
    Substance {
        None => "None",
        Occasional => "Occasional",
        Frequent => "Frequent",
        Daily => "Daily",
    }
}

choice_enum! {
    /// Family history of fertility problems.
    FamilyHistory {
        NoHistory => "No history",
        Remote => "Remote",
        Close => "Close",
        Multiple => "Multiple",
    }
}
