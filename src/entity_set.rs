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

//! Per-component-type membership indexes.
//!
//! The registry pushes incremental `add`/`change`/`remove` notifications into
//! one index per component type and commits all of them at the tick boundary
//! via `flush`. [`EntitySet`] is the default index; the [`EntityIndex`] trait
//! is the seam for substituting alternative implementations (sparse-set,
//! bitset) without touching the registry.

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::entity::{Entity, EntityId};

/// Notification capability consumed by the registry.
///
/// `remove` must tolerate entities that were never members (no-op). `flush`
/// commits the tick's pending transitions.
pub trait EntityIndex: Default {
    fn add(&mut self, entity: &Entity);
    fn change(&mut self, entity: &Entity);
    fn remove(&mut self, entity: &Entity);
    fn flush(&mut self);
}

type Bucket = SmallVec<[Entity; 8]>;

/// Default membership index for one component type.
///
/// Membership reflects notifications as they arrive: an added entity is
/// enumerable immediately and a removed one disappears immediately. The three
/// transition buckets record this tick's deltas for consumers that process
/// additions, changes and removals incrementally; `flush` commits the tick by
/// clearing them.
#[derive(Debug, Default)]
pub struct EntitySet {
    members: AHashMap<EntityId, Entity>,
    added: Bucket,
    changed: Bucket,
    removed: Bucket,
}

impl EntitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, entity: &Entity) -> bool {
        self.members.contains_key(&entity.id())
    }

    pub fn contains_id(&self, id: EntityId) -> bool {
        self.members.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.members.get(&id)
    }

    /// Iterate current members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Entities that became members this tick.
    pub fn added(&self) -> &[Entity] {
        &self.added
    }

    /// Members whose component was overwritten this tick.
    pub fn changed(&self) -> &[Entity] {
        &self.changed
    }

    /// Entities that stopped being members this tick.
    pub fn removed(&self) -> &[Entity] {
        &self.removed
    }
}

impl EntityIndex for EntitySet {
    fn add(&mut self, entity: &Entity) {
        let id = entity.id();
        if self.members.contains_key(&id) {
            return;
        }
        self.members.insert(id, entity.clone());
        self.added.push(entity.clone());
    }

    fn change(&mut self, entity: &Entity) {
        let id = entity.id();
        if !self.members.contains_key(&id) {
            return;
        }
        // One change record per entity per tick.
        if !self.changed.iter().any(|e| e.id() == id) {
            self.changed.push(entity.clone());
        }
    }

    fn remove(&mut self, entity: &Entity) {
        let id = entity.id();
        if self.members.remove(&id).is_none() {
            return;
        }
        // An entity added and removed within the same tick leaves no trace in
        // the pending buckets except the removal itself.
        self.added.retain(|e| e.id() != id);
        self.changed.retain(|e| e.id() != id);
        self.removed.push(entity.clone());
    }

    fn flush(&mut self) {
        self.added.clear();
        self.changed.clear();
        self.removed.clear();
    }
}
