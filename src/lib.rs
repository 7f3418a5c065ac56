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

//! Entity/component registry with tick-synchronized membership indexes.
//!
//! Entities are identity handles; components are data-only values attached
//! under a string type name. Per-type entity sets track membership
//! incrementally, and a flush boundary separates "changes visible this tick"
//! from "changes committed and forgotten": removed components stay readable
//! through [`Registry::get_component`] until [`Registry::flush_changes`]
//! discards them.

pub mod component;
pub mod debug;
pub mod entity;
pub mod entity_set;
pub mod prelude;
pub mod registry;

pub use component::*;
pub use debug::*;
pub use entity::*;
pub use entity_set::*;
pub use registry::*;
