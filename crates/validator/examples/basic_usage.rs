//! Basic usage example for field-validator

use field_validator::prelude::*;

#[derive(Debug)]
struct Address {
    street: Option<String>,
    city: Option<String>,
}

#[derive(Debug)]
struct Person {
    name: Option<String>,
    email: Option<String>,
    age: Option<u32>,
    address: Address,
}

fn main() -> Result<(), regex::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let address = Validator::<Address>::new()
        .constraint(
            |a: &Address| &a.street,
            "street",
            rule(not_blank(), "field.not.blank"),
        )
        .constraint(
            |a: &Address| &a.city,
            "city",
            rules![
                not_null() => "field.not.empty",
                not_blank() => "field.not.blank",
            ],
        );

    let person = Validator::<Person>::new()
        .constraint(
            |p: &Person| &p.name,
            "name",
            rule(not_blank(), "field.not.blank"),
        )
        .constraint(
            |p: &Person| &p.email,
            "email",
            rule(not_null(), "field.not.empty")
                .rule(pattern(r"[^@\s]+@[^@\s]+\.[a-z]{2,}")?, "field.not.valid"),
        )
        .constraint(
            |p: &Person| &p.age,
            "age",
            rule(not_null(), "field.not.empty").rule(in_range(20, 30), "field.not-in.range-20-30"),
        )
        .nest(|p: &Person| &p.address, "address", &address);

    let ann = Person {
        name: Some(" ".into()),
        email: Some("ann at example".into()),
        age: Some(19),
        address: Address {
            street: Some("Main St".into()),
            city: None,
        },
    };

    // Collect every violation
    let violations = person.validate(&ann);
    println!("{violations}");

    // Or fail fast
    match person.clone().break_first(true).reject(&ann) {
        Ok(()) => println!("✓ valid"),
        Err(rejection) => println!("✗ {rejection}: {}", rejection.violations()),
    }

    Ok(())
}
