//! Attribute lookup by name

use serde::{Deserialize, Serialize};

use crate::ast::{JsxAttribute, JsxAttributeItem};

/// Options controlling how attribute names are compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupOptions {
    /// Compare names ASCII case-insensitively (`onclick` finds `onClick`)
    pub ignore_case: bool,
}

impl LookupOptions {
    /// Options for case-insensitive lookups.
    pub fn ignore_case() -> Self {
        Self { ignore_case: true }
    }
}

/// Find the first attribute named exactly `name`.
///
/// Spread attributes are skipped.
pub fn find<'a>(attributes: &'a [JsxAttributeItem], name: &str) -> Option<&'a JsxAttribute> {
    find_with(attributes, name, &LookupOptions::default())
}

/// Find the first attribute matching `name` under `options`.
pub fn find_with<'a>(
    attributes: &'a [JsxAttributeItem],
    name: &str,
    options: &LookupOptions,
) -> Option<&'a JsxAttribute> {
    attributes
        .iter()
        .filter_map(JsxAttributeItem::as_attribute)
        .find(|attr| attr.name.matches(name, options.ignore_case))
}

/// Whether an attribute matching `name` is present.
pub fn has_prop(attributes: &[JsxAttributeItem], name: &str, options: &LookupOptions) -> bool {
    find_with(attributes, name, options).is_some()
}

/// The attribute's name as written, `namespace:name` for namespaced names.
pub fn prop_name(attribute: &JsxAttribute) -> String {
    attribute.name.to_string()
}
