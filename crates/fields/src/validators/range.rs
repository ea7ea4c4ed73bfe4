//! Numeric range validators

use std::fmt::Debug;

use crate::error::{FieldError, FieldKind};

crate::validator! {
    /// Validates that a value is at least a minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use gbfs_fields::validators::at_least;
    /// use gbfs_fields::foundation::Validate;
    /// use gbfs_fields::FieldKind;
    ///
    /// let rule = at_least(FieldKind::NonNegativeInt, 0_i64);
    /// assert!(rule.validate(&0).is_ok());
    /// assert!(rule.validate(&-1).is_err());
    /// ```
    #[derive(Copy, PartialEq)]
    pub AtLeast<T: PartialOrd + Debug + Copy> { field: FieldKind, min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) { FieldError::below_minimum(self.field, *input, self.min) }
    fn at_least(field: FieldKind, min: T);
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    ///
    /// `NaN` is never in range.
    #[derive(Copy, PartialEq)]
    pub InRange<T: PartialOrd + Debug + Copy> { field: FieldKind, min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) { FieldError::out_of_range(self.field, *input, self.min, self.max) }
    fn in_range(field: FieldKind, min: T, max: T);
}

crate::validator! {
    /// Validates that a float is neither infinite nor `NaN`.
    #[derive(Copy, PartialEq, Eq)]
    pub Finite { field: FieldKind } for f64;
    rule(self, input) { input.is_finite() }
    error(self, input) { FieldError::malformed(self.field, format!("{input} is not a finite number")) }
    fn finite(field: FieldKind);
}

// ============================================================================
// TESTS
// ============================================================================
