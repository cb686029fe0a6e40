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

//! Reference host driver: parallel collection, single finalization

use crate::diagnostics::Diagnostic;
use crate::session::AnalysisSession;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;
use worklint_syntax::{AstNode, walk};

/// Errors the driver can report. Diagnostics are values, not errors; a bad
/// node never aborts the pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The compilation contained no source units
    #[error("empty compilation: no source units to analyze")]
    EmptyCompilation,
}

/// One source unit: a path (used for diagnostic anchoring and deterministic
/// call ordering) and the root of its lowered syntax tree.
#[derive(Debug, Clone)]
pub struct CompilationUnit<N> {
    /// Unit path, unique within the compilation
    pub path: String,
    /// Root node of the unit's tree
    pub root: N,
}

impl<N> CompilationUnit<N> {
    /// Create a unit from a path and a tree root
    pub fn new(path: impl Into<String>, root: N) -> Self {
        Self { path: path.into(), root }
    }
}

/// Analyze one compilation.
///
/// Every unit's tree is walked in full (units in parallel) before any
/// matching runs; the join of the parallel pass is the finalize barrier.
pub fn analyze<N: AstNode>(units: &[CompilationUnit<N>]) -> Result<Vec<Diagnostic>, AnalyzerError> {
    if units.is_empty() {
        return Err(AnalyzerError::EmptyCompilation);
    }

    let session = AnalysisSession::new();
    units.par_iter().for_each(|unit| {
        debug!(unit = %unit.path, "collecting");
        walk(&unit.root, &mut |node| session.visit_node(&unit.path, node));
    });

    Ok(session.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use worklint_syntax::{Node, NodeKind};

    #[test]
    fn test_empty_compilation_is_an_error() {
        let units: Vec<CompilationUnit<Node>> = Vec::new();
        assert_eq!(analyze(&units), Err(AnalyzerError::EmptyCompilation));
    }

    #[test]
    fn test_unit_without_dispatch_yields_nothing() {
        let units = [CompilationUnit::new("lib.src", Node::new(NodeKind::Block, ""))];
        assert!(analyze(&units).unwrap().is_empty());
    }
}
