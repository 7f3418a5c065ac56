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

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::registry::Registry;

/// Registry inspector for debugging
pub struct RegistryInspector;

/// Summary of one membership index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetInfo {
    pub component: String,
    pub members: usize,
    pub pending_added: usize,
    pub pending_changed: usize,
    pub pending_removed: usize,
}

impl RegistryInspector {
    /// Get total active entity count
    pub fn entity_count(registry: &Registry) -> usize {
        registry.entity_count()
    }

    /// Get per-component-type index summary, sorted by component name
    pub fn set_summary(registry: &Registry) -> Vec<SetInfo> {
        let mut infos: Vec<SetInfo> = registry
            .entity_sets()
            .map(|(name, set)| SetInfo {
                component: name.to_owned(),
                members: set.len(),
                pending_added: set.added().len(),
                pending_changed: set.changed().len(),
                pending_removed: set.removed().len(),
            })
            .collect();
        infos.sort_by(|a, b| a.component.cmp(&b.component));
        infos
    }

    /// Print registry summary to console
    pub fn print_summary(registry: &Registry) {
        let stats = registry.stats();
        println!("=== Registry Summary ===");
        println!("Entities: {}", stats.entities);
        println!("Indexed component types: {}", stats.indexed_component_types);
        println!("Staged removals: {}", stats.staged_removals);

        println!("\n=== Entity Sets ===");
        for info in Self::set_summary(registry) {
            println!(
                "{}: {} members (+{} ~{} -{} pending)",
                info.component,
                info.members,
                info.pending_added,
                info.pending_changed,
                info.pending_removed
            );
        }
    }

    /// Print entity details
    pub fn print_entity(registry: &Registry, entity: &Entity) {
        if !registry.has_entity(entity) {
            println!("Entity {} not active", entity.id());
            return;
        }
        println!("=== Entity {} ===", entity.id());
        if let Some(name) = entity.name() {
            println!("Name: {name}");
        }
        if let Some(components) = registry.components_of(entity) {
            let mut names: Vec<&str> = components.keys().map(String::as_str).collect();
            names.sort_unstable();
            println!("Components: {}", names.join(", "));
        }
    }
}
