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

//! Static analysis of named work-item dispatch
//!
//! Within one compilation, worklint verifies that every by-name call to a
//! work-item function matches a declared definition: by name, by argument
//! shape, and by declared return type. Near-miss names get a "did you mean"
//! suggestion ranked by edit distance.
//!
//! The engine runs in two phases. During collection, per-node callbacks
//! (which the host may run concurrently across source units) feed the
//! [`DefinitionRegistry`] and [`CallSiteCollector`]. After the host's
//! traversal barrier, a single finalization pass matches every collected
//! call against the frozen registry and emits [`Diagnostic`]s.
//!
//! # Example
//!
//! ```
//! use worklint_analyzer::{CompilationUnit, analyze};
//! use worklint_syntax::{Node, NodeKind};
//!
//! let definition = Node::new(NodeKind::Declaration, "")
//!     .with_child(Node::new(NodeKind::Identifier, "resize_image"))
//!     .with_child(
//!         Node::new(NodeKind::Parameter, "input")
//!             .with_child(Node::new(NodeKind::Annotation, "WorkTrigger"))
//!             .with_child(Node::new(NodeKind::TypeName, "String")),
//!     );
//! let call = Node::new(NodeKind::Call, "call_work_item").with_child(
//!     Node::new(NodeKind::Argument, "")
//!         .with_child(Node::new(NodeKind::StringLiteral, "resize_imag")),
//! );
//! let unit = CompilationUnit::new(
//!     "app.src",
//!     Node::new(NodeKind::Block, "").with_child(definition).with_child(call),
//! );
//!
//! let diagnostics = analyze(&[unit]).unwrap();
//! assert_eq!(diagnostics.len(), 1);
//! assert!(diagnostics[0].message.contains("did you mean 'resize_image'"));
//! ```

pub mod checks;
pub mod classifier;
pub mod collector;
pub mod diagnostics;
pub mod distance;
pub mod driver;
pub mod registry;
pub mod reporting;
pub mod session;
pub mod typetext;

pub use collector::{CallSiteCollector, FunctionCall};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use driver::{AnalyzerError, CompilationUnit, analyze};
pub use registry::{DefinitionRegistry, FunctionDefinition, FunctionKind};
pub use reporting::{JsonFormatter, ReportFormat, ReportFormatter, TextFormatter};
pub use session::AnalysisSession;
