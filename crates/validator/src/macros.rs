//! Macros for building rule chains with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rules!`]: builds a [`RuleBuilder`](crate::foundation::RuleBuilder)
//!   from `predicate => message` pairs

/// Builds a [`RuleBuilder`](crate::foundation::RuleBuilder) from
/// `predicate => message` pairs, in order.
///
/// # Examples
///
/// ```
/// use field_validator::prelude::*;
///
/// struct Person {
///     age: Option<u32>,
/// }
///
/// let validator = Validator::<Person>::new().constraint(
///     |p: &Person| &p.age,
///     "age",
///     rules![
///         not_null() => "field.not.empty",
///         in_range(20, 30) => "field.not-in.range-20-30",
///     ],
/// );
///
/// assert_eq!(validator.len(), 2);
/// assert!(validator.is_valid(&Person { age: Some(25) }));
/// ```
#[macro_export]
macro_rules! rules {
    ($($predicate:expr => $message:expr),+ $(,)?) => {
        $crate::foundation::RuleBuilder::builder()
            $(.rule($predicate, $message))+
    };
}
