//! Swagger UI parameter defaults and merging.

use serde_json::{Map, Value};

/// An insertion-ordered set of Swagger UI configuration options.
pub type SwaggerUiParameters = Map<String, Value>;

/// Options applied to every themed docs page unless overridden.
pub fn default_parameters() -> SwaggerUiParameters {
    let mut params = Map::new();
    params.insert("docExpansion".to_string(), Value::from("none"));
    params.insert("defaultModelsExpandDepth".to_string(), Value::from(-1));
    params.insert("persistAuthorization".to_string(), Value::from(true));
    params.insert("displayRequestDuration".to_string(), Value::from(true));
    params
}

/// Merge caller overrides over the themed defaults.
///
/// An override replaces a default in place; unknown keys are appended in the
/// order they were supplied.
pub fn merge_parameters(overrides: Option<&SwaggerUiParameters>) -> SwaggerUiParameters {
    let mut merged = default_parameters();
    if let Some(overrides) = overrides {
        extend_parameters(&mut merged, overrides);
    }
    merged
}

pub(crate) fn extend_parameters(base: &mut SwaggerUiParameters, overrides: &SwaggerUiParameters) {
    for (key, value) in overrides {
        base.insert(key.clone(), value.clone());
    }
}
