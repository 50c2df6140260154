//! Field rules for create and update bodies.
//!
//! Every field is held as a raw JSON value so that a wrong type for one field
//! still lets every other field be checked; all violations are reported
//! together, in field order.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ItemError, ItemResult};
use crate::models::NewItem;

pub const MAX_NAME_LEN: usize = 200;

pub const NAME_REQUIRED: &str = "name is required and must be a non-empty string";
pub const NAME_TOO_LONG: &str = "name must be at most 200 characters";
pub const CATEGORY_REQUIRED: &str = "category is required and must be a non-empty string";
pub const PRICE_REQUIRED: &str = "price is required and must be a positive number";
pub const DESCRIPTION_NOT_STRING: &str = "description must be a string";

/// Order in which violations are reported.
const FIELD_ORDER: [&str; 4] = ["name", "category", "price", "description"];

/// Create/update body before normalization. JSON `null` is treated as absent.
#[derive(Debug, Default, Deserialize, Validate)]
struct ItemBody {
    #[validate(
        required(message = "name is required and must be a non-empty string"),
        custom(function = "check_name")
    )]
    name: Option<Value>,
    #[validate(
        required(message = "category is required and must be a non-empty string"),
        custom(function = "check_category")
    )]
    category: Option<Value>,
    #[validate(
        required(message = "price is required and must be a positive number"),
        custom(function = "check_price")
    )]
    price: Option<Value>,
    #[validate(custom(function = "check_description"))]
    description: Option<Value>,
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn trimmed(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

fn check_name(value: &Value) -> Result<(), ValidationError> {
    match trimmed(value) {
        None => Err(violation("required", NAME_REQUIRED)),
        Some(name) if name.chars().count() > MAX_NAME_LEN => Err(violation("length", NAME_TOO_LONG)),
        Some(_) => Ok(()),
    }
}

fn check_category(value: &Value) -> Result<(), ValidationError> {
    trimmed(value)
        .map(|_| ())
        .ok_or_else(|| violation("required", CATEGORY_REQUIRED))
}

fn positive_price(value: &Value) -> Option<f64> {
    value.as_f64().filter(|p| p.is_finite() && *p > 0.0)
}

fn check_price(value: &Value) -> Result<(), ValidationError> {
    positive_price(value)
        .map(|_| ())
        .ok_or_else(|| violation("range", PRICE_REQUIRED))
}

fn check_description(value: &Value) -> Result<(), ValidationError> {
    if value.is_string() {
        Ok(())
    } else {
        Err(violation("type", DESCRIPTION_NOT_STRING))
    }
}

/// Flatten validator output into messages, ordered by [`FIELD_ORDER`].
fn messages(errors: &ValidationErrors) -> Vec<String> {
    let by_field = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|field| by_field.get(*field))
        .flat_map(|errs| errs.iter())
        .map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string())
        })
        .collect()
}

impl ItemBody {
    /// Anything other than a JSON object has no fields at all.
    fn from_payload(payload: &Value) -> Self {
        match payload {
            Value::Object(_) => ItemBody::deserialize(payload).unwrap_or_default(),
            _ => ItemBody::default(),
        }
    }

    /// Normalized item; `None` when a required field is unusable.
    fn normalize(&self) -> Option<NewItem> {
        Some(NewItem {
            name: trimmed(self.name.as_ref()?)?.to_string(),
            category: trimmed(self.category.as_ref()?)?.to_string(),
            price: positive_price(self.price.as_ref()?)?,
            description: self
                .description
                .as_ref()
                .and_then(trimmed)
                .map(str::to_string),
        })
    }
}

/// Check a full item payload and return its normalized form.
///
/// Used for both create and update; every field is required except
/// `description`. Names and categories are trimmed, and an empty or
/// whitespace-only description becomes `None`.
pub fn validate_item(payload: &Value) -> ItemResult<NewItem> {
    let body = ItemBody::from_payload(payload);
    body.validate()
        .map_err(|errors| ItemError::Validation(messages(&errors)))?;

    body.normalize()
        .ok_or_else(|| ItemError::Validation(vec![NAME_REQUIRED.to_string()]))
}
