// Copyright 2025 The entity_registry Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Component values and plain-data helpers.
//!
//! Components are data-only values identified at the registry boundary purely
//! by a string type name. The registry performs no shape validation.

use serde_json::Value;

/// A component payload: arbitrary string-keyed data.
pub type ComponentValue = Value;

/// Truthiness of a component value.
///
/// `Registry::has_component` treats a stored-but-falsy value as absent:
/// `null`, `false`, numeric zero and the empty string read as missing, while
/// empty arrays and objects count as present. Presence-based decisions
/// (add vs. change notifications) ignore truthiness and look only at map
/// membership.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Shallow default-fill: inserts every key of `defaults` that is missing from
/// `value`. Existing keys are left untouched. Non-object inputs are a no-op.
pub fn fill_defaults(value: &mut Value, defaults: &Value) {
    if let (Value::Object(target), Value::Object(defaults)) = (value, defaults) {
        for (key, default) in defaults {
            target
                .entry(key.clone())
                .or_insert_with(|| default.clone());
        }
    }
}

/// Shallow merge: copies every key of `patch` onto `value`, overwriting
/// existing keys. Non-object inputs are a no-op.
pub fn merge(value: &mut Value, patch: &Value) {
    if let (Value::Object(target), Value::Object(patch)) = (value, patch) {
        for (key, patched) in patch {
            target.insert(key.clone(), patched.clone());
        }
    }
}
