//! Macros for declaring rules and field types with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: a complete rule (struct + `Validate` impl + factory fn)
//! - `closed_set!`: a closed-set enumeration field type (crate-internal)
//! - `field_decoder!`: a `Field` impl routed through a raw adapter and the
//!   type's `TryFrom` smart constructor (crate-internal)

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// Unit rules always derive `Debug, Clone, Copy, PartialEq, Eq, Hash`. Struct
/// and generic rules always derive `Debug, Clone`; add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NoWhitespace for str;
///     rule(input) { !input.chars().any(char::is_whitespace) }
///     error(input) { FieldError::WhitespaceInId { id: input.to_owned() } }
///     fn no_whitespace();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq)]
///     pub DigitCount { min: usize, max: usize } for str;
///     rule(self, input) { (self.min..=self.max).contains(&input.len()) }
///     error(self, input) { FieldError::malformed(FieldKind::PhoneNumber, "digit count") }
///     fn digit_count(min: usize, max: usize);
/// }
/// ```
///
/// **Generic rule**:
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub AtLeast<T: PartialOrd + Debug + Copy> { field: FieldKind, min: T } for T;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { FieldError::below_minimum(self.field, *input, self.min) }
///     fn at_least(field: FieldKind, min: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::FieldError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::FieldError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 3a: Generic struct + auto new + factory fn ───────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis const fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Generic struct + auto new, no factory ────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::FieldError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// CLOSED SET MACRO
// ============================================================================

/// Declares a closed-set enumeration field type.
///
/// Generates the enum, its `ALL` member list, `as_str`, an exhaustive
/// `FromStr`, `Display`, serde impls that read and write the literal, and a
/// `Field` impl decoding a JSON string.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $kind:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $literal:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The member's literal as it appears in feeds.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $literal, )+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $literal => Ok(Self::$variant), )+
                    other => Err($crate::FieldError::unknown_member(
                        $crate::FieldKind::$kind,
                        other,
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let literal = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                literal.parse().map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::foundation::Field for $name {
            const KIND: $crate::FieldKind = $crate::FieldKind::$kind;

            fn decode(raw: &[u8]) -> Result<Self, $crate::FieldError> {
                $crate::raw::decode_string(raw, Self::KIND)?.parse()
            }
        }
    };
}

pub(crate) use closed_set;

// ============================================================================
// FIELD DECODER MACRO
// ============================================================================

/// Implements `Field` for a type whose smart constructor is a `TryFrom` over
/// one of the raw scalar adapters' outputs.
macro_rules! field_decoder {
    ($ty:ty as $kind:ident via $adapter:ident) => {
        impl $crate::foundation::Field for $ty {
            const KIND: $crate::FieldKind = $crate::FieldKind::$kind;

            fn decode(raw: &[u8]) -> Result<Self, $crate::FieldError> {
                Self::try_from($crate::raw::$adapter(raw, Self::KIND)?)
            }
        }
    };
}

pub(crate) use field_decoder;
