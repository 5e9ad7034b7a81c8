//! Record shapes for the aggregation pass.
//!
//! A drone record is authored upstream as one JSON object per file. Only the
//! five essential fields are validated here; everything else rides along on
//! the accepted record and surfaces (or not) through the summary projection.
//! Category descriptors are pure functions of the category key, so two drones
//! sharing a key always derive the same descriptor.

use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::{Map, Value};

/// Fields a record must carry (truthy, not merely key-present) to be accepted.
pub const ESSENTIAL_FIELDS: [&str; 5] =
    ["id", "name", "brand_id", "category", "estimated_price_usd"];

/// One accepted drone record: the full parsed object plus the validated
/// key fields pulled out so later stages never re-check presence. Only
/// `brand_id` and `category` are required to be strings (the category key
/// feeds string-typed derivations); `id` and `name` pass through verbatim.
#[derive(Debug, Clone)]
pub struct DroneRecord {
    id: Value,
    name: Value,
    brand_id: String,
    category: String,
    estimated_price_usd: Value,
    fields: Map<String, Value>,
}

impl DroneRecord {
    /// Accept or reject a parsed JSON value as a drone record.
    ///
    /// Rejection reasons become per-file warnings upstream, never fatal
    /// errors. Presence is truthiness, matching the authoring convention:
    /// null, `""`, `false`, and numeric zero all count as absent.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            bail!("record is not a JSON object");
        };

        let missing: Vec<&str> = ESSENTIAL_FIELDS
            .iter()
            .copied()
            .filter(|field| !field_present(fields.get(*field)))
            .collect();
        if !missing.is_empty() {
            bail!("missing essential fields ({})", missing.join(", "));
        }

        let id = fields["id"].clone();
        let name = fields["name"].clone();
        let brand_id = require_string(&fields, "brand_id")?;
        let category = require_string(&fields, "category")?;
        let estimated_price_usd = fields["estimated_price_usd"].clone();

        Ok(Self {
            id,
            name,
            brand_id,
            category,
            estimated_price_usd,
            fields,
        })
    }

    pub fn id(&self) -> &Value {
        &self.id
    }

    /// The raw category key, as authored.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Project the record down to its listing summary.
    pub fn summary(&self) -> DroneSummary {
        DroneSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            brand_id: self.brand_id.clone(),
            // An explicit null model is preserved; an absent key stays absent.
            model: self.fields.get("model").cloned(),
            category: self.category.clone(),
            image_thumbnail_url: truthy_or(&self.fields, "image_thumbnail_url", Value::Null),
            estimated_price_usd: self.estimated_price_usd.clone(),
            short_description: truthy_or(
                &self.fields,
                "short_description",
                Value::String(String::new()),
            ),
        }
    }
}

/// Lightweight projection of a drone record, one element of the
/// `all_drones_summary.json` array. Field order matches the published
/// artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroneSummary {
    pub id: Value,
    pub name: Value,
    pub brand_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,
    pub category: String,
    pub image_thumbnail_url: Value,
    pub estimated_price_usd: Value,
    pub short_description: Value,
}

/// Display metadata derived for one category key, one element of the
/// `categories.json` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon_name: String,
}

impl CategoryDescriptor {
    /// Derive the descriptor for a category key. Every field is a pure
    /// function of the key, so discovery order never affects content.
    pub fn for_key(key: &str) -> Self {
        Self {
            id: key.to_string(),
            name: category_display_name(key),
            description: format!("Drones primarily for {key} use."),
            icon_name: format!("{key}-icon"),
        }
    }
}

/// Upper-case the first character and replace hyphens in the remainder with
/// spaces: `fixed-wing` becomes `Fixed wing`.
pub fn category_display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => {
            let mut name: String = first.to_uppercase().collect();
            name.push_str(&chars.as_str().replace('-', " "));
            name
        }
        None => String::new(),
    }
}

fn field_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(_) => true,
    }
}

/// The field's value verbatim when truthy, otherwise the given default.
/// Mirrors the authored `value || default` convention the artifacts were
/// published with.
fn truthy_or(fields: &Map<String, Value>, field: &str, default: Value) -> Value {
    match fields.get(field) {
        Some(value) if field_present(Some(value)) => value.clone(),
        _ => default,
    }
}

fn require_string(fields: &Map<String, Value>, field: &str) -> Result<String> {
    match fields.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        _ => bail!("field '{field}' must be a string"),
    }
}
