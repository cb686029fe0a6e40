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

//! Per-compilation analysis session

use crate::checks;
use crate::classifier;
use crate::collector::{self, CallSiteCollector};
use crate::diagnostics::Diagnostic;
use crate::registry::DefinitionRegistry;
use tracing::{debug, info};
use worklint_syntax::{AstNode, NodeKind};

/// Shared state for exactly one compilation analysis.
///
/// The session is created at compilation start, passed by reference into
/// every per-node callback (which may run concurrently across source units),
/// and consumed at compilation end. Consuming [`finalize`](Self::finalize)
/// is what enforces the two-phase protocol: no insertion can happen once the
/// matching pass owns the containers.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    registry: DefinitionRegistry,
    calls: CallSiteCollector,
}

impl AnalysisSession {
    /// Start a session for a new compilation
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-node collection callback.
    ///
    /// Declaration nodes feed the definition registry, call nodes feed the
    /// call-site collector, everything else is ignored. Safe to invoke from
    /// multiple threads.
    pub fn visit_node<N: AstNode>(&self, unit: &str, node: &N) {
        match node.kind() {
            NodeKind::Declaration => {
                if let Some(definition) = classifier::classify(node) {
                    self.registry.insert(definition);
                }
            }
            NodeKind::Call => {
                if let Some(call) = collector::extract_call(unit, node) {
                    debug!(name = %call.name, unit, "collected work item call");
                    self.calls.record(call);
                }
            }
            _ => {}
        }
    }

    /// Definitions collected so far
    pub fn definition_count(&self) -> usize {
        self.registry.len()
    }

    /// Call sites collected so far
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Freeze both containers and run the match engine once.
    ///
    /// The host must guarantee every [`visit_node`](Self::visit_node) call
    /// has completed first; matching against a partially populated registry
    /// would produce false "not found" diagnostics.
    pub fn finalize(self) -> Vec<Diagnostic> {
        let definitions = self.registry.freeze();
        let calls = self.calls.freeze();
        info!(definitions = definitions.len(), calls = calls.len(), "matching collected calls");
        checks::run_checks(&definitions, &calls)
    }
}
