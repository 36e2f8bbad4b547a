//! End-to-end tests for building and evaluating validators.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use field_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const EMAIL_PATTERN: &str = r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,6}$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Genre {
    Male,
    Female,
}

#[derive(Debug, Clone, Default)]
struct Person {
    name: Option<String>,
    email: Option<String>,
    age: Option<u32>,
    genre: Option<Genre>,
}

#[derive(Debug, Clone, Default)]
struct Address {
    street: Option<String>,
    city: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct Customer {
    person: Person,
    address: Address,
}

#[derive(Debug, Clone, Default)]
struct Order {
    id: Option<u64>,
    customer: Customer,
}

fn pairs(violations: &Violations) -> Vec<String> {
    violations.iter().map(ToString::to_string).collect()
}

fn person_validator() -> Validator<Person> {
    Validator::new()
        .constraint(
            |p: &Person| &p.email,
            "email",
            rule(not_null(), "field.not.empty"),
        )
        .constraint(
            |p: &Person| &p.name,
            "name",
            rule(not_blank(), "field.not.blank"),
        )
        .constraint(
            |p: &Person| &p.age,
            "age",
            RuleBuilder::builder()
                .rule(not_null(), "field.not.empty")
                .rule(in_range(20, 30), "field.not-in.range-20-30"),
        )
        .constraint(
            |p: &Person| &p.genre,
            "genre",
            RuleBuilder::builder()
                .rule(not_null(), "field.not.empty")
                .rule(one_of([Genre::Male, Genre::Female]), "field.not.valid"),
        )
}

fn address_validator() -> Validator<Address> {
    Validator::new()
        .constraint(
            |a: &Address| &a.street,
            "street",
            rule(not_blank(), "field.not.blank"),
        )
        .constraint(
            |a: &Address| &a.city,
            "city",
            rule(not_null(), "field.not.empty").rule(not_blank(), "field.not.blank"),
        )
}

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn reports_first_failing_rule_per_field() {
    let person = Person {
        name: Some(" ".into()),
        email: None,
        age: Some(19),
        genre: Some(Genre::Male),
    };

    let violations = person_validator().validate(&person);

    assert_eq!(
        pairs(&violations),
        [
            "email: field.not.empty",
            "name: field.not.blank",
            "age: field.not-in.range-20-30",
        ]
    );
    assert!(violations.get("genre").is_none());
}

fn break_first_validator() -> Validator<Person> {
    Validator::new()
        .constraint(
            |p: &Person| &p.email,
            "email",
            RuleBuilder::builder()
                .rule(not_null(), "field.not.empty")
                .rule(pattern(EMAIL_PATTERN).unwrap(), "field.not.valid"),
        )
        .constraint(
            |p: &Person| &p.age,
            "age",
            RuleBuilder::builder()
                .rule(not_null(), "field.not.empty")
                .rule(ne(20), "field.not-equal.20")
                .rule(less_than(30), "field.not-lt.30"),
        )
        .break_first(true)
}

#[test]
fn break_first_stops_after_first_failure() {
    let person = Person {
        email: Some("Test email".into()),
        age: Some(19),
        ..Person::default()
    };

    let violations = break_first_validator().validate(&person);

    assert_eq!(pairs(&violations), ["email: field.not.valid"]);
}

#[test]
fn reject_carries_the_same_violations() {
    let person = Person {
        email: Some("Test email".into()),
        age: Some(19),
        ..Person::default()
    };
    let validator = break_first_validator();

    let expected = validator.validate(&person);
    let rejection = validator.reject(&person).unwrap_err();

    assert_eq!(rejection.violations(), &expected);
    assert_eq!(pairs(rejection.violations()), ["email: field.not.valid"]);
    assert_eq!(rejection.to_string(), "Validation failed for object Person");
}

#[test]
fn break_first_skips_constraints_of_other_fields() {
    // age would fail too, but is never evaluated
    let person = Person {
        email: None,
        age: Some(20),
        ..Person::default()
    };

    let violations = break_first_validator().validate(&person);

    assert_eq!(pairs(&violations), ["email: field.not.empty"]);
}

#[test]
fn break_first_reaches_later_fields_when_earlier_pass() {
    let person = Person {
        email: Some("ANN@EXAMPLE.COM".into()),
        age: Some(20),
        ..Person::default()
    };

    let violations = break_first_validator().validate(&person);

    assert_eq!(pairs(&violations), ["age: field.not-equal.20"]);
}

#[test]
fn break_first_on_last_constraint_records_it() {
    let person = Person {
        email: Some("ANN@EXAMPLE.COM".into()),
        age: Some(31),
        ..Person::default()
    };

    let violations = break_first_validator().validate(&person);

    assert_eq!(pairs(&violations), ["age: field.not-lt.30"]);
}

#[test]
fn later_rules_of_a_failed_field_still_run() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let counting = Predicate::new(move |_: &Option<u32>| {
        counter.fetch_add(1, Ordering::SeqCst);
        false
    });

    let validator = Validator::<Person>::new().constraint(
        |p: &Person| &p.age,
        "age",
        rule(not_null(), "field.not.empty").rule(counting, "field.not.counted"),
    );

    let violations = validator.validate(&Person::default());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(pairs(&violations), ["age: field.not.empty"]);
}

// ============================================================================
// REUSE
// ============================================================================

#[test]
fn results_never_leak_between_runs() {
    let validator = person_validator();
    let invalid = Person::default();
    let valid = Person {
        name: Some("Ann".into()),
        email: Some("ann@example.com".into()),
        age: Some(25),
        genre: Some(Genre::Female),
    };

    assert_eq!(validator.validate(&invalid).len(), 4);
    assert!(validator.validate(&valid).is_empty());
    assert_eq!(validator.validate(&invalid).len(), 4);
}

#[test]
fn reject_passes_valid_instance() {
    let valid = Person {
        name: Some("Ann".into()),
        email: Some("ann@example.com".into()),
        age: Some(25),
        genre: Some(Genre::Female),
    };
    assert!(person_validator().reject(&valid).is_ok());
}

#[test]
fn shared_validator_across_threads() {
    let validator = Arc::new(person_validator());

    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let validator = Arc::clone(&validator);
            std::thread::spawn(move || {
                let person = Person {
                    name: Some("Ann".into()),
                    email: Some("ann@example.com".into()),
                    age: Some(18 + i * 5),
                    genre: Some(Genre::Male),
                };
                validator.validate(&person).len()
            })
        })
        .collect();

    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, [1, 0, 0, 1]);
}

// ============================================================================
// CONDITIONAL CONSTRAINTS
// ============================================================================

#[rstest]
#[case(true, 1)]
#[case(false, 0)]
fn constraint_when_is_decided_at_build_time(#[case] condition: bool, #[case] expected: usize) {
    let validator = Validator::<Person>::new().constraint_when(
        condition,
        |p: &Person| &p.email,
        "email",
        rule(not_null(), "field.not.empty"),
    );

    assert_eq!(validator.len(), expected);
    assert_eq!(validator.validate(&Person::default()).len(), expected);
}

#[test]
fn constraint_when_false_is_indistinguishable() {
    let with = person_validator().constraint_when(
        false,
        |p: &Person| &p.age,
        "age",
        rule(eq(99), "never"),
    );
    let without = person_validator();

    assert_eq!(
        with.field_names().collect::<Vec<_>>(),
        without.field_names().collect::<Vec<_>>()
    );
    let person = Person::default();
    assert_eq!(with.validate(&person), without.validate(&person));
}

#[test]
fn constraint_on_target_sees_whole_object() {
    let validator = Validator::<Person>::new().constraint_on_target(
        Predicate::new(|p: &Person| p.email.is_some() || p.name.is_some()),
        "contact",
        "contact.required",
    );

    assert_eq!(
        pairs(&validator.validate(&Person::default())),
        ["contact: contact.required"]
    );
}

#[test]
fn derived_values_are_checked_on_the_target() {
    let validator = Validator::<Person>::new().constraint_on_target(
        Predicate::new(|p: &Person| p.name.as_deref().map_or(0, str::len) <= 8),
        "name",
        "field.too.long",
    );

    let long = Person {
        name: Some("Bartholomew".into()),
        ..Person::default()
    };

    assert_eq!(pairs(&validator.validate(&long)), ["name: field.too.long"]);
    assert!(validator.is_valid(&Person::default()));
}

// ============================================================================
// NESTING
// ============================================================================

#[test]
fn nested_fields_are_qualified() {
    let validator = Validator::<Customer>::new()
        .nest(|c: &Customer| &c.person, "person", &person_validator())
        .nest(|c: &Customer| &c.address, "address", &address_validator());

    let customer = Customer {
        person: Person {
            name: Some("Ann".into()),
            email: Some("ann@example.com".into()),
            age: Some(40),
            genre: Some(Genre::Female),
        },
        address: Address {
            street: Some("Main St".into()),
            city: None,
        },
    };

    assert_eq!(
        pairs(&validator.validate(&customer)),
        [
            "person.age: field.not-in.range-20-30",
            "address.city: field.not.empty",
        ]
    );
}

#[test]
fn nesting_composes_over_multiple_levels() {
    let customer = Validator::<Customer>::new()
        .nest(|c: &Customer| &c.address, "address", &address_validator());
    let order = Validator::<Order>::new()
        .constraint(|o: &Order| &o.id, "id", rule(not_null(), "field.not.empty"))
        .nest(|o: &Order| &o.customer, "customer", &customer);

    assert_eq!(
        order.field_names().collect::<Vec<_>>(),
        [
            "id",
            "customer.address.street",
            "customer.address.city",
            "customer.address.city",
        ]
    );
    assert_eq!(
        pairs(&order.validate(&Order::default())),
        [
            "id: field.not.empty",
            "customer.address.street: field.not.blank",
            "customer.address.city: field.not.empty",
        ]
    );
}

#[test]
fn nest_takes_a_snapshot_of_the_child() {
    let child = Validator::<Address>::new().constraint(
        |a: &Address| &a.city,
        "city",
        rule(not_null(), "field.not.empty"),
    );
    let parent =
        Validator::<Customer>::new().nest(|c: &Customer| &c.address, "address", &child);

    let child = child.constraint(
        |a: &Address| &a.street,
        "street",
        rule(not_null(), "field.not.empty"),
    );

    assert_eq!(child.len(), 2);
    assert_eq!(parent.len(), 1);
    assert_eq!(
        pairs(&parent.validate(&Customer::default())),
        ["address.city: field.not.empty"]
    );
}

#[test]
fn break_first_of_child_is_not_inherited() {
    let child = address_validator().break_first(true);
    let parent =
        Validator::<Customer>::new().nest(|c: &Customer| &c.address, "address", &child);

    assert!(!parent.is_break_first());
    assert_eq!(parent.validate(&Customer::default()).len(), 2);
}

#[test]
fn literal_field_name_collisions_dedup_together() {
    let validator = Validator::<Person>::new()
        .constraint(|p: &Person| &p.email, "contact", rule(not_null(), "email.missing"))
        .constraint(|p: &Person| &p.name, "contact", rule(not_null(), "name.missing"));

    assert_eq!(
        pairs(&validator.validate(&Person::default())),
        ["contact: email.missing"]
    );
}

// ============================================================================
// MISSING TARGET
// ============================================================================

#[test]
fn missing_target_is_an_error() {
    let validator = person_validator();

    let err = validator.validate_present(None).unwrap_err();
    assert!(matches!(err, ValidatorError::MissingTarget { .. }));
    assert!(err.to_string().contains("Person"));

    let person = Person::default();
    assert_eq!(
        validator.validate_present(Some(&person)).unwrap(),
        validator.validate(&person)
    );
}

// ============================================================================
// MACRO
// ============================================================================

#[test]
fn rules_macro_matches_builder() {
    let via_macro = Validator::<Person>::new().constraint(
        |p: &Person| &p.age,
        "age",
        rules![
            not_null() => "field.not.empty",
            in_range(20, 30) => "field.not-in.range-20-30",
        ],
    );

    let person = Person {
        age: Some(31),
        ..Person::default()
    };
    assert_eq!(
        pairs(&via_macro.validate(&person)),
        ["age: field.not-in.range-20-30"]
    );
}
