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

//! Registry: central entity and component bookkeeping.
//!
//! The registry owns entity identity allocation, the active and
//! pending-removal component maps, and one membership index per component
//! type. A surrounding simulation tick mutates it synchronously;
//! [`Registry::flush_changes`] is the commit boundary that folds pending
//! index transitions and discards stale removed-component snapshots.
//!
//! The surface is permissive by design: invalid input (unknown entity,
//! unknown component name, an entity already removed) is a silent no-op or a
//! `None`/`false` result. No operation here can fail. Callers are expected to
//! check `has_entity`/`has_component` before assuming success.

use ahash::AHashMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "profiling")]
use tracing::info_span;

use crate::component::{is_truthy, ComponentValue};
use crate::entity::{Entity, EntityId};
use crate::entity_set::{EntityIndex, EntitySet};

/// Registry configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Create membership indexes only on first query instead of on first
    /// attach. Under lazy mode a component can be active from
    /// `get_component`'s perspective with zero index visibility until
    /// something queries its type.
    pub lazy_sets: bool,
}

/// Component-type name to value, for one entity.
pub type ComponentMap = AHashMap<String, ComponentValue>;

/// Counters for diagnostics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Currently active entities.
    pub entities: usize,
    /// Component types with an instantiated membership index.
    pub indexed_component_types: usize,
    /// Entities with removed-component snapshots staged until the next flush.
    pub staged_removals: usize,
}

/// Central entity/component registry.
///
/// Generic over the membership index implementation; [`EntitySet`] is the
/// default. Each registry instance owns its own id counter and maps, so
/// independent registries can coexist.
pub struct Registry<S: EntityIndex = EntitySet> {
    /// Active entities keyed by id. Source of truth for "is this id active".
    entities: AHashMap<EntityId, Entity>,

    /// Active components per entity id. Every key here is an active entity.
    components: AHashMap<EntityId, ComponentMap>,

    /// Last known values of removed components, readable until the next
    /// flush. Written on removals, wiped wholesale by `flush_changes`, never
    /// individually pruned.
    removed_components: AHashMap<EntityId, ComponentMap>,

    /// Membership indexes keyed by component-type name.
    sets: FxHashMap<String, S>,

    /// Next id to allocate. Strictly increasing, never reused.
    next_id: u64,

    config: RegistryConfig,
}

impl Registry<EntitySet> {
    /// Create a registry with the default configuration (eager sets).
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }
}

impl Default for Registry<EntitySet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntityIndex> Registry<S> {
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entities: AHashMap::new(),
            components: AHashMap::new(),
            removed_components: AHashMap::new(),
            sets: FxHashMap::default(),
            next_id: 0,
            config,
        }
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    // ---- entity lifecycle ----

    /// Allocate the next id and register a fresh identity carrier for it.
    /// Always succeeds.
    pub fn create_entity(&mut self) -> Entity {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let entity = Entity::new(id);
        self.entities.insert(id, entity.clone());
        self.components.insert(id, ComponentMap::new());
        entity
    }

    /// True iff `entity`'s id is active *and* the stored carrier is the very
    /// same handle. A stale handle from a prior registry generation sharing
    /// an id scheme reads as absent.
    pub fn has_entity(&self, entity: &Entity) -> bool {
        self.entities
            .get(&entity.id())
            .is_some_and(|stored| Entity::same_carrier(stored, entity))
    }

    /// Active carrier for `id`. Does not search removed entities.
    pub fn entity_by_id(&self, id: EntityId) -> Option<Entity> {
        self.entities.get(&id).cloned()
    }

    /// Linear scan of active entities for a name match. Names are not
    /// unique; among matches the lowest id (creation order) wins.
    pub fn entity_by_name(&self, name: &str) -> Option<Entity> {
        self.entities
            .values()
            .filter(|e| e.is_named(name))
            .min_by_key(|e| e.id())
            .cloned()
    }

    /// Remove an entity, staging its whole component map for same-tick
    /// reads. No-op when the id is not active.
    ///
    /// Every existing index hears a `remove` for the entity, whether or not
    /// its component type was ever attached; indexes ignore non-members.
    /// After this call `has_entity` is false but `get_component` still
    /// returns the former components' last values until the next flush.
    pub fn remove_entity(&mut self, entity: &Entity) {
        let id = entity.id();
        if !self.entities.contains_key(&id) {
            return;
        }
        let map = self.components.remove(&id).unwrap_or_default();
        self.removed_components.insert(id, map);
        for set in self.sets.values_mut() {
            set.remove(entity);
        }
        self.entities.remove(&id);
    }

    /// Remove every active entity through the per-entity path, in ascending
    /// id order, so the same notifications and staging occur for each.
    pub fn remove_all_entities(&mut self) {
        #[cfg(feature = "profiling")]
        let span = info_span!("registry.remove_all", entities = self.entities.len());
        #[cfg(feature = "profiling")]
        let _span_guard = span.enter();

        let mut handles: Vec<Entity> = self.entities.values().cloned().collect();
        handles.sort_by_key(|e| e.id());
        for entity in &handles {
            self.remove_entity(entity);
        }
    }

    // ---- component attach/detach ----

    /// Current value of `name` on `entity`, falling back to the last known
    /// value of a component removed since the previous flush. The fallback
    /// is what lets a same-tick consumer read a component immediately after
    /// removal, including after the owning entity was removed outright.
    pub fn get_component(&self, entity: &Entity, name: &str) -> Option<&ComponentValue> {
        let id = entity.id();
        if let Some(value) = self.components.get(&id).and_then(|map| map.get(name)) {
            return Some(value);
        }
        self.removed_components.get(&id).and_then(|map| map.get(name))
    }

    /// In-place mutable access to an active component. Removed-component
    /// snapshots are read-only and not reachable here. Structural changes
    /// (attach/detach) must go through `set_component`/`remove_component` to
    /// keep the indexes consistent.
    pub fn get_component_mut(
        &mut self,
        entity: &Entity,
        name: &str,
    ) -> Option<&mut ComponentValue> {
        self.components.get_mut(&entity.id())?.get_mut(name)
    }

    /// Attach or overwrite a component. No-op when the id is not active.
    ///
    /// The index for `name` sees `change` when the name was already present
    /// for this entity and `add` otherwise; the two are mutually exclusive
    /// per call and decided by map presence, never by value equality. Under
    /// lazy mode a missing index is not created here.
    pub fn set_component(&mut self, entity: &Entity, name: &str, value: ComponentValue) {
        let id = entity.id();
        let Some(map) = self.components.get_mut(&id) else {
            return;
        };
        let overwrite = map.contains_key(name);
        map.insert(name.to_owned(), value);

        if !self.sets.contains_key(name) {
            if self.config.lazy_sets {
                return;
            }
            self.sets.insert(name.to_owned(), S::default());
        }
        if let Some(set) = self.sets.get_mut(name) {
            if overwrite {
                set.change(entity);
            } else {
                set.add(entity);
            }
        }
    }

    /// Truthy membership test on the active map. A deliberately falsy value
    /// (`null`, `false`, `0`, `""`) reads as absent even though it is stored;
    /// see [`crate::component::is_truthy`].
    pub fn has_component(&self, entity: &Entity, name: &str) -> bool {
        self.components
            .get(&entity.id())
            .and_then(|map| map.get(name))
            .is_some_and(is_truthy)
    }

    /// Detach a component, keeping its last value readable until the next
    /// flush. No-op when the entity has no active map or the name is absent.
    pub fn remove_component(&mut self, entity: &Entity, name: &str) {
        let id = entity.id();
        let Some(map) = self.components.get_mut(&id) else {
            return;
        };
        let Some(value) = map.remove(name) else {
            return;
        };
        // Other already-removed names for this id stay untouched.
        self.removed_components
            .entry(id)
            .or_default()
            .insert(name.to_owned(), value);
        if let Some(set) = self.sets.get_mut(name) {
            set.remove(entity);
        }
    }

    /// Active component map of an entity, if the entity is active.
    pub fn components_of(&self, entity: &Entity) -> Option<&ComponentMap> {
        self.components.get(&entity.id())
    }

    // ---- query & commit ----

    /// Membership index for `name`, constructing and back-filling it on
    /// first use.
    ///
    /// The back-fill is a one-time synchronous catch-up over currently
    /// active entities: it cannot reconstruct removals that predate the
    /// index (a lazily created index assumes no outstanding pending removals
    /// exist for its type). Back-filled members go through the index's `add`
    /// path, so to a delta consumer every pre-existing member of a
    /// just-created index counts as added this tick until the next flush.
    pub fn entities_with(&mut self, name: &str) -> &S {
        if self.sets.contains_key(name) {
            return &self.sets[name];
        }
        let mut set = S::default();
        for entity in self.entities.values() {
            if self.has_component(entity, name) {
                set.add(entity);
            }
        }
        self.sets.entry(name.to_owned()).or_insert(set)
    }

    /// Index for `name` if one already exists. Never constructs; useful for
    /// observing lazy-mode visibility without triggering a back-fill.
    pub fn entity_set(&self, name: &str) -> Option<&S> {
        self.sets.get(name)
    }

    /// Existing indexes and their component-type names.
    pub fn entity_sets(&self) -> impl Iterator<Item = (&str, &S)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Live view of the active-entities table, not a defensive copy.
    pub fn all_entities(&self) -> &AHashMap<EntityId, Entity> {
        &self.entities
    }

    /// Commit the tick: flush every index's pending transitions, then
    /// discard all removed-component snapshots. The single global
    /// synchronization point between "visible this tick" and "committed and
    /// forgotten".
    pub fn flush_changes(&mut self) {
        #[cfg(feature = "profiling")]
        let span = info_span!(
            "registry.flush",
            sets = self.sets.len(),
            staged_removals = self.removed_components.len()
        );
        #[cfg(feature = "profiling")]
        let _span_guard = span.enter();

        for set in self.sets.values_mut() {
            set.flush();
        }
        self.removed_components.clear();
    }

    // ---- diagnostics ----

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            entities: self.entities.len(),
            indexed_component_types: self.sets.len(),
            staged_removals: self.removed_components.len(),
        }
    }
}
