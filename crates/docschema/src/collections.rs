//! Built-in collection schemas
//!
//! Each schema's collection name is the lowercase form of its declared name:
//! `User` -> `user`, `Product` -> `product`, `Player` -> `player`.

use std::sync::Arc;

use docschema_validation::{FieldConstraint, FieldKind, NumericRange, Schema, SchemaError, Value};

use crate::error::Result;
use crate::registry::SchemaRegistry;

/// Users collection
pub fn user() -> std::result::Result<Schema, SchemaError> {
    Schema::builder("User")
        .field(FieldConstraint::new("name", FieldKind::String).description("Full name"))
        .field(FieldConstraint::new("email", FieldKind::String).description("Email address"))
        .field(FieldConstraint::new("address", FieldKind::String).description("Address"))
        .field(
            FieldConstraint::new("age", FieldKind::Integer)
                .nullable()
                .range(NumericRange::new(0.0, 120.0))
                .description("Age in years"),
        )
        .field(
            FieldConstraint::new("is_active", FieldKind::Boolean)
                .default_value(true)
                .description("Whether user is active"),
        )
        .build()
}

/// Products collection
pub fn product() -> std::result::Result<Schema, SchemaError> {
    Schema::builder("Product")
        .field(FieldConstraint::new("title", FieldKind::String).description("Product title"))
        .field(
            FieldConstraint::new("description", FieldKind::String)
                .nullable()
                .description("Product description"),
        )
        .field(
            FieldConstraint::new("price", FieldKind::Float)
                .range(NumericRange::at_least(0.0))
                .description("Price in dollars"),
        )
        .field(FieldConstraint::new("category", FieldKind::String).description("Product category"))
        .field(
            FieldConstraint::new("in_stock", FieldKind::Boolean)
                .default_value(true)
                .description("Whether product is in stock"),
        )
        .build()
}

/// Labelled link attached to a player profile
pub fn extra_link() -> std::result::Result<Schema, SchemaError> {
    Schema::builder("ExtraLink")
        .field(
            FieldConstraint::new("label", FieldKind::String)
                .description("Type of link, e.g., Transfermarkt"),
        )
        .field(
            FieldConstraint::new("url", FieldKind::String)
                .nullable()
                .description("URL to the resource"),
        )
        .build()
}

/// Player submission form
pub fn player(extra_link: Arc<Schema>) -> std::result::Result<Schema, SchemaError> {
    let text = |name: &str, description: &str| {
        FieldConstraint::new(name, FieldKind::String)
            .nullable()
            .description(description)
    };

    Schema::builder("Player")
        .field(FieldConstraint::new("full_name", FieldKind::String).description("Player's full name"))
        .field(
            FieldConstraint::new("age", FieldKind::Integer)
                .nullable()
                .range(NumericRange::new(0.0, 100.0))
                .description("Age in years"),
        )
        .field(text("country", "Country of origin"))
        .field(text("position", "Playing position"))
        .field(text("height", "Height (e.g., 180 cm)"))
        .field(text("weight", "Weight (e.g., 75 kg)"))
        .field(text("dominant_foot", "Left or Right"))
        .field(text("current_club", "Current club name"))
        .field(text("past_clubs", "Past clubs (comma-separated)"))
        .field(text("bio", "Short bio/about me"))
        // Media
        .field(text("profile_photo_base64", "Base64-encoded profile image"))
        .field(text("highlight_video_base64", "Base64-encoded highlight video (optional)"))
        .field(text("highlight_video_link", "Link to highlight video (YouTube/Drive)"))
        // Links
        .field(
            FieldConstraint::new("extra_links", FieldKind::list(FieldKind::Object(extra_link)))
                .default_value(Value::List(Vec::new()))
                .description("Additional links like Transfermarkt, Instagram, etc."),
        )
        .build()
}

/// Register every built-in collection into `registry`
pub fn register_builtin(registry: &SchemaRegistry) -> Result<()> {
    registry.register(user()?)?;
    registry.register(product()?)?;
    let link = registry.register(extra_link()?)?;
    registry.register(player(link)?)?;
    Ok(())
}

/// A registry holding the built-in collections
pub fn builtin_registry() -> Result<SchemaRegistry> {
    let registry = SchemaRegistry::new();
    register_builtin(&registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_identifiers() {
        let registry = builtin_registry().unwrap();
        let ids: Vec<_> = registry.list_all().identifiers().map(str::to_string).collect();
        assert_eq!(ids, vec!["user", "product", "extralink", "player"]);
    }

    #[test]
    fn test_player_field_count() {
        let link = Arc::new(extra_link().unwrap());
        let player = player(link).unwrap();
        assert_eq!(player.fields().len(), 14);
        assert!(player.fields().iter().filter(|f| f.required).count() == 1);
    }

    #[test]
    fn test_registering_twice_fails() {
        let registry = builtin_registry().unwrap();
        assert!(register_builtin(&registry).is_err());
    }
}
