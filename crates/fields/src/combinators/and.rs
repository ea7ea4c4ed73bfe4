//! AND combinator - logical conjunction of rules
//!
//! This module provides the [`And`] combinator which combines two rules with
//! logical AND semantics - both rules must pass for the combined rule to
//! succeed.

use crate::error::FieldError;
use crate::foundation::Validate;

/// Combines two rules with logical AND.
///
/// Errors are returned from the first failing rule; the right rule is never
/// consulted once the left one has failed.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
///
/// # Examples
///
/// ```
/// use gbfs_fields::combinators::And;
/// use gbfs_fields::foundation::Validate;
/// use gbfs_fields::validators::{at_least, finite};
/// use gbfs_fields::FieldKind;
///
/// let rule = And::new(finite(FieldKind::Price), at_least(FieldKind::Price, 0.0));
/// assert!(rule.validate(&1.25).is_ok());
/// assert!(rule.validate(&f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), FieldError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two rules.
pub const fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================
