// Worklint
// Copyright (C) 2025 Worklint Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Thread-safe accumulation of discovered function definitions

use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

/// How a classified declaration participates in dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// Invoked by name with one optional input, out-of-band from the caller
    WorkItem,
    /// Issues by-name calls to work items and awaits their results
    Coordinator,
}

/// One classified declaration. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    /// Externally visible name, unique per compilation (case-sensitive)
    pub name: String,
    /// Work item or coordinator
    pub kind: FunctionKind,
    /// Source text of the single accepted input type, if any
    pub parameter_type: Option<String>,
    /// Source text of the declared output type; `None` is fire-and-forget
    pub return_type: Option<String>,
}

/// Definitions discovered during the collection phase of one compilation.
///
/// Insertion may happen concurrently across source units; the mutex guards
/// the map, and duplicate names overwrite (last write wins; duplicates are
/// a user error this engine does not diagnose further).
#[derive(Debug, Default)]
pub struct DefinitionRegistry {
    definitions: Mutex<HashMap<String, FunctionDefinition>>,
}

impl DefinitionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition discovered at a declaration node
    pub fn insert(&self, definition: FunctionDefinition) {
        debug!(name = %definition.name, kind = ?definition.kind, "registered function definition");
        self.definitions.lock().insert(definition.name.clone(), definition);
    }

    /// Number of definitions collected so far
    pub fn len(&self) -> usize {
        self.definitions.lock().len()
    }

    /// Whether nothing has been collected yet
    pub fn is_empty(&self) -> bool {
        self.definitions.lock().is_empty()
    }

    /// Freeze into the final lookup table.
    ///
    /// Consumes the registry; runs once at the finalize barrier, after every
    /// collection callback has completed.
    pub fn freeze(self) -> HashMap<String, FunctionDefinition> {
        self.definitions.into_inner()
    }
}
