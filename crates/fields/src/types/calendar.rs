//! Calendar components: day of month, month, year.
//!
//! Each component is validated on its own. A `Day` of 30 and a `Month` of 2
//! are both accepted, since no component knows about its siblings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldKind};
use crate::foundation::Validate;
use crate::macros::field_decoder;
use crate::validators::InRange;

macro_rules! calendar_component {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) in $min:literal..=$max:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name($repr);

        impl $name {
            pub const MIN: $repr = $min;
            pub const MAX: $repr = $max;

            const RULE: InRange<i64> = InRange::new(FieldKind::$name, $min, $max);

            /// Creates the component, rejecting values outside its bounds.
            pub fn new(value: i64) -> Result<Self, FieldError> {
                Self::RULE.validate(&value)?;
                <$repr>::try_from(value)
                    .map(Self)
                    .map_err(|e| FieldError::malformed(FieldKind::$name, e.to_string()))
            }

            #[inline]
            #[must_use]
            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = FieldError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                i64::from(value.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        field_decoder!($name as $name via decode_i64);
    };
}

calendar_component! {
    /// A day of the month, `1..=31`.
    Day(u8) in 1..=31
}

calendar_component! {
    /// A month of the year, `1..=12`.
    Month(u8) in 1..=12
}

calendar_component! {
    /// A four-digit calendar year, `0..=9999`.
    Year(u16) in 0..=9999
}

impl Month {
    /// The equivalent `chrono` month.
    #[must_use]
    pub fn to_chrono(self) -> chrono::Month {
        // `self.0` is in 1..=12, so the lookup cannot miss.
        chrono::Month::try_from(self.0).unwrap_or(chrono::Month::January)
    }
}
