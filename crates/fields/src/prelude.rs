//! Prelude module for convenient imports.
//!
//! Provides a single `use gbfs_fields::prelude::*;` import that brings in the
//! decoding entry points, every field type, and the rule traits.

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::error::{FieldError, FieldKind, FieldResult};
pub use crate::foundation::{Field, Validate, ValidateExt, decode};
pub use crate::raw::JsonKind;

// ============================================================================
// TYPES: All field types
// ============================================================================

pub use crate::types::{
    AlertType, Currency, Date, Day, DayOfWeek, Email, Id, Language, Latitude, Longitude, Mobile,
    Month, NonNegativeFloat, NonNegativeInt, PhoneNumber, Price, RentalMethod, Time, Timestamp,
    Timezone, Uri, Url, UserType, Year,
};
