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

//! Entity identifiers and identity carriers.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Unique entity identifier.
///
/// Ids are allocated from a per-registry counter and are never reused within
/// a registry instance, even after the entity is removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct EntityData {
    id: EntityId,
    name: RefCell<Option<String>>,
}

/// Shared identity carrier handed out by the registry.
///
/// Cloning an `Entity` clones the handle, not the identity: clones refer to
/// the same carrier and compare equal. Equality is handle identity
/// (`Rc::ptr_eq`), so a handle kept from a previous registry generation never
/// compares equal to a new carrier that happens to share its id.
///
/// Carriers are deliberately `!Send`: the registry is a single-actor
/// structure and hands them out by shared view.
#[derive(Clone)]
pub struct Entity {
    data: Rc<EntityData>,
}

impl Entity {
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            data: Rc::new(EntityData {
                id,
                name: RefCell::new(None),
            }),
        }
    }

    pub fn id(&self) -> EntityId {
        self.data.id
    }

    /// Current name, if any. Names are optional and not unique.
    pub fn name(&self) -> Option<String> {
        self.data.name.borrow().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.data.name.borrow_mut() = Some(name.into());
    }

    pub fn clear_name(&self) {
        *self.data.name.borrow_mut() = None;
    }

    /// True iff the carrier's current name is `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.data.name.borrow().as_deref() == Some(name)
    }

    /// Handle identity: true iff both handles point at the same carrier.
    pub fn same_carrier(a: &Entity, b: &Entity) -> bool {
        Rc::ptr_eq(&a.data, &b.data)
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Entity {}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.data.id)
            .field("name", &*self.data.name.borrow())
            .finish()
    }
}
