//! Kotlin naming rules for accessors and plugin ids.

use buildscript_core::{capitalize, is_lower_alpha};

/// Kotlin exposes Java boolean getters `isX()` as a property named `isX`.
///
/// Assumes every configurable boolean property follows the `is` convention.
pub fn boolean_property_name(name: &str) -> String {
    format!("is{}", capitalize(name))
}

/// Kotlin spelling of a core plugin id inside `plugins { }`.
///
/// Simple lowercase ids have a generated accessor; anything else needs backticks.
pub fn plugin_accessor(plugin_id: &str) -> String {
    if is_lower_alpha(plugin_id) {
        plugin_id.to_string()
    } else {
        format!("`{}`", plugin_id)
    }
}
