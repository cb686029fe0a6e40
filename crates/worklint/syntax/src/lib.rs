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

//! Syntax tree contract consumed by the worklint analyzer
//!
//! The analyzer never sees a host's own AST. Hosts lower their trees into
//! the [`AstNode`] contract (or implement it directly); [`Node`] is the
//! concrete tree used by the reference driver and the test suite.

pub mod node;
pub mod position;

pub use node::{AstNode, Node, NodeKind, walk};
pub use position::{Position, Span};
