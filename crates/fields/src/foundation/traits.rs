//! Core traits for the validation system
//!
//! This module defines the rule trait every constraint in the crate implements,
//! and the extension trait that composes rules.

use crate::error::FieldError;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A stateless predicate over a decoded primitive.
///
/// Rules never transform their input; they either accept it or report the
/// [`FieldError`] describing the first violated constraint. Rules carry the
/// [`FieldKind`](crate::FieldKind) they guard so the error can name it.
///
/// # Type Parameters
///
/// * `Input` - The type being checked (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```
/// use gbfs_fields::foundation::Validate;
/// use gbfs_fields::{FieldError, FieldKind};
///
/// struct NotEmpty;
///
/// impl Validate for NotEmpty {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), FieldError> {
///         if input.is_empty() {
///             Err(FieldError::malformed(FieldKind::Id, "empty"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotEmpty.validate("station-1").is_ok());
/// assert!(NotEmpty.validate("").is_err());
/// ```
pub trait Validate {
    /// The type of input being checked.
    type Input: ?Sized;

    /// Checks the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every constraint holds
    /// * `Err(FieldError)` naming the first violated constraint
    fn validate(&self, input: &Self::Input) -> Result<(), FieldError>;
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use gbfs_fields::foundation::{Validate, ValidateExt};
/// use gbfs_fields::validators::{at_least, finite};
/// use gbfs_fields::FieldKind;
///
/// let amount = finite(FieldKind::Price).and(at_least(FieldKind::Price, 0.0));
/// assert!(amount.validate(&2.5).is_ok());
/// assert!(amount.validate(&f64::NAN).is_err());
/// assert!(amount.validate(&-1.0).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two rules with logical AND.
    ///
    /// Both rules must pass. Short-circuits on the first failure, so the
    /// reported error always belongs to the leftmost failing rule.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;

// ============================================================================
// TESTS
// ============================================================================
