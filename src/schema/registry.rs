//! Built-in resource schemas
//!
//! Every resource kind the API serves has a fixed schema declared here.
//! Schemas are immutable for the life of the process; there is no
//! runtime registration surface.

use serde_json::json;

use crate::schema::types::{FieldSpec, FieldType, NumericRange, ResourceKind, ResourceSchema};

/// Registry holding one immutable schema per resource kind.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    product: ResourceSchema,
    article: ResourceSchema,
    impact_entry: ResourceSchema,
    user: ResourceSchema,
}

impl SchemaRegistry {
    /// Build the registry with all built-in schemas.
    pub fn new() -> Self {
        Self {
            product: product_schema(),
            article: article_schema(),
            impact_entry: impact_entry_schema(),
            user: user_schema(),
        }
    }

    /// The schema governing `kind`. Total over all kinds.
    pub fn schema(&self, kind: ResourceKind) -> &ResourceSchema {
        match kind {
            ResourceKind::Product => &self.product,
            ResourceKind::Article => &self.article,
            ResourceKind::ImpactEntry => &self.impact_entry,
            ResourceKind::User => &self.user,
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog entries for reusable menstrual products.
fn product_schema() -> ResourceSchema {
    ResourceSchema::new(
        ResourceKind::Product,
        vec![
            FieldSpec::required("name", FieldType::String),
            // cup | pad | underwear | disc | washer, not enforced as an enum
            FieldSpec::required("type", FieldType::String),
            FieldSpec::optional("description", FieldType::String),
            FieldSpec::required("price", FieldType::Float).with_range(NumericRange::at_least(0.0)),
            FieldSpec::defaulted("materials", FieldType::StringArray, json!([])),
            FieldSpec::defaulted("sizes", FieldType::StringArray, json!([])),
            FieldSpec::optional("absorbency", FieldType::String),
            FieldSpec::optional("image", FieldType::String),
            FieldSpec::optional("rating", FieldType::Float).with_range(NumericRange::between(0.0, 5.0)),
            FieldSpec::optional("sustainability_score", FieldType::Int)
                .with_range(NumericRange::between(0.0, 100.0)),
            FieldSpec::defaulted("in_stock", FieldType::Bool, json!(true)),
        ],
    )
}

/// Educational content.
fn article_schema() -> ResourceSchema {
    ResourceSchema::new(
        ResourceKind::Article,
        vec![
            FieldSpec::required("title", FieldType::String),
            FieldSpec::optional("excerpt", FieldType::String),
            FieldSpec::required("content", FieldType::String),
            FieldSpec::optional("cover_image", FieldType::String),
            FieldSpec::defaulted("tags", FieldType::StringArray, json!([])),
        ],
    )
}

/// Per-user impact tracking entries.
fn impact_entry_schema() -> ResourceSchema {
    ResourceSchema::new(
        ResourceKind::ImpactEntry,
        vec![
            FieldSpec::optional("user_id", FieldType::String),
            FieldSpec::required("date", FieldType::Date),
            FieldSpec::defaulted("products_used", FieldType::StringArray, json!([])),
            FieldSpec::defaulted("cycles_tracked", FieldType::Int, json!(1))
                .with_range(NumericRange::at_least(1.0)),
            FieldSpec::optional("pads_diverted", FieldType::Int)
                .with_range(NumericRange::at_least(0.0)),
            FieldSpec::optional("plastic_avoided_grams", FieldType::Float)
                .with_range(NumericRange::at_least(0.0)),
            FieldSpec::optional("money_saved_usd", FieldType::Float)
                .with_range(NumericRange::at_least(0.0)),
        ],
    )
}

/// Account records. Declared for storage completeness; no endpoint serves them.
fn user_schema() -> ResourceSchema {
    ResourceSchema::new(
        ResourceKind::User,
        vec![
            FieldSpec::required("name", FieldType::String),
            FieldSpec::required("email", FieldType::String),
            FieldSpec::optional("city", FieldType::String),
            FieldSpec::defaulted("is_active", FieldType::Bool, json!(true)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_kind() {
        let registry = SchemaRegistry::new();
        for kind in ResourceKind::ALL {
            assert_eq!(registry.schema(kind).kind, kind);
        }
    }

    #[test]
    fn test_product_field_order_is_declaration_order() {
        let registry = SchemaRegistry::new();
        let names: Vec<&str> = registry
            .schema(ResourceKind::Product)
            .fields
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "name",
                "type",
                "description",
                "price",
                "materials",
                "sizes",
                "absorbency",
                "image",
                "rating",
                "sustainability_score",
                "in_stock",
            ]
        );
    }

    #[test]
    fn test_product_numeric_bounds() {
        let registry = SchemaRegistry::new();
        let schema = registry.schema(ResourceKind::Product);

        let price = schema.field("price").unwrap();
        assert_eq!(price.range, Some(NumericRange::at_least(0.0)));

        let rating = schema.field("rating").unwrap();
        assert_eq!(rating.range, Some(NumericRange::between(0.0, 5.0)));

        let score = schema.field("sustainability_score").unwrap();
        assert_eq!(score.field_type, FieldType::Int);
        assert_eq!(score.range, Some(NumericRange::between(0.0, 100.0)));
    }

    #[test]
    fn test_product_defaults() {
        let registry = SchemaRegistry::new();
        let schema = registry.schema(ResourceKind::Product);
        assert_eq!(schema.field("materials").unwrap().default, Some(json!([])));
        assert_eq!(schema.field("sizes").unwrap().default, Some(json!([])));
        assert_eq!(schema.field("in_stock").unwrap().default, Some(json!(true)));
    }

    #[test]
    fn test_impact_entry_cycles_tracked() {
        let registry = SchemaRegistry::new();
        let schema = registry.schema(ResourceKind::ImpactEntry);
        let cycles = schema.field("cycles_tracked").unwrap();
        assert_eq!(cycles.field_type, FieldType::Int);
        assert_eq!(cycles.default, Some(json!(1)));
        assert_eq!(cycles.range, Some(NumericRange::at_least(1.0)));
        assert!(!cycles.nullable);
    }

    #[test]
    fn test_impact_entry_date_is_required_date() {
        let registry = SchemaRegistry::new();
        let schema = registry.schema(ResourceKind::ImpactEntry);
        let date = schema.field("date").unwrap();
        assert!(date.required);
        assert_eq!(date.field_type, FieldType::Date);
    }

    #[test]
    fn test_article_content_required() {
        let registry = SchemaRegistry::new();
        let schema = registry.schema(ResourceKind::Article);
        assert!(schema.field("title").unwrap().required);
        assert!(schema.field("content").unwrap().required);
        assert!(!schema.field("excerpt").unwrap().required);
    }

    #[test]
    fn test_user_is_active_defaults_true() {
        let registry = SchemaRegistry::new();
        let schema = registry.schema(ResourceKind::User);
        assert_eq!(
            schema.field("is_active").unwrap().default,
            Some(json!(true))
        );
    }
}
