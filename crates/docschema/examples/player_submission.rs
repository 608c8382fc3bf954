//! Player Submission Example
//!
//! Validates a few player-profile submissions against the built-in schemas
//! and prints the introspection catalog.
//!
//! Run with:
//! ```bash
//! cargo run -p docschema --example player_submission
//! ```

use docschema::{builtin_registry, Document, ExtraFields, ValidationConfig, Value};

fn report(label: &str, result: docschema::ValidationResult<Document>) {
    match result {
        Ok(doc) => println!("  {}: valid -> {}", label, doc),
        Err(errors) => {
            println!("  {}: {}", label, errors);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = builtin_registry()?;
    let lenient = ValidationConfig::default();
    let strict = ValidationConfig::new().extra(ExtraFields::Forbid).strict(true);

    println!("1. Player submissions");
    println!("---------------------");

    let minimal = Document::new().with("full_name", "Kwame Mensah");
    report("minimal", registry.validate("player", &minimal, &lenient)?);

    let too_old = Document::new().with("full_name", "A").with("age", 150i64);
    report("age 150", registry.validate("player", &too_old, &lenient)?);

    let with_links = Document::new().with("full_name", "A").with(
        "extra_links",
        Value::List(vec![
            Value::Object(Document::new().with("label", "Transfermarkt")),
            Value::Object(Document::new().with("url", "https://instagram.com/a")),
        ]),
    );
    report("links", registry.validate("player", &with_links, &lenient)?);

    let extra = Document::new().with("full_name", "A").with("agent", "B");
    report("extra (lenient)", registry.validate("player", &extra, &lenient)?);
    report("extra (forbid)", registry.validate("player", &extra, &strict)?);
    println!();

    println!("2. Schema catalog");
    println!("-----------------");
    println!("{}", serde_json::to_string_pretty(&registry.catalog())?);

    Ok(())
}
