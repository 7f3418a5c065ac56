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

//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use entity_registry::prelude::*;
//! ```

pub use crate::component::ComponentValue;
pub use crate::debug::RegistryInspector;
pub use crate::entity::{Entity, EntityId};
pub use crate::entity_set::{EntityIndex, EntitySet};
pub use crate::registry::{Registry, RegistryConfig};
