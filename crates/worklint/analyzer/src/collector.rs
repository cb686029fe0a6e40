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

//! Thread-safe accumulation of by-name work-item call sites

use parking_lot::Mutex;
use std::collections::BTreeMap;
use worklint_syntax::{AstNode, NodeKind, Span};

/// Callee prefix recognizing by-name dispatch, including the retry variant.
pub const CALL_PREFIX: &str = "call_work_item";

/// Attribute key under which hosts attach an argument's resolved type.
pub const TYPE_ATTRIBUTE: &str = "type";

/// One collected call site. Immutable; consumed once at finalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// The literal name used at the call site
    pub name: String,
    /// Path of the source unit containing the call
    pub unit: String,
    /// Location of the name literal, for diagnostic anchoring
    pub name_span: Span,
    /// Location of the input argument, if one was supplied
    pub argument_span: Option<Span>,
    /// Resolved type of the input argument; `None` when unresolved or absent
    pub argument_type: Option<String>,
    /// Explicit expected return type, if the generic call form was used
    pub expected_return_type: Option<String>,
    /// Location of the explicit type argument
    pub expected_return_span: Option<Span>,
}

/// Extract a [`FunctionCall`] from a call-expression node, if it has the
/// by-name dispatch shape.
///
/// Calls using a computed (non-literal) name are skipped: dynamic names are
/// un-analyzable, and undecidable cases must never be false-flagged.
pub fn extract_call<N: AstNode>(unit: &str, node: &N) -> Option<FunctionCall> {
    if node.kind() != NodeKind::Call || !node.text().starts_with(CALL_PREFIX) {
        return None;
    }

    let mut arguments = node.children_of_kind(NodeKind::Argument);
    let name_argument = arguments.next()?;
    let literal = name_argument.child_of_kind(NodeKind::StringLiteral)?;
    let input = arguments.next();
    let type_argument = node.child_of_kind(NodeKind::TypeArgument);

    Some(FunctionCall {
        name: literal.text().to_string(),
        unit: unit.to_string(),
        name_span: literal.span(),
        argument_span: input.map(AstNode::span),
        argument_type: input.and_then(|n| n.attribute(TYPE_ATTRIBUTE)).map(str::to_string),
        expected_return_type: type_argument.map(|n| n.text().to_string()),
        expected_return_span: type_argument.map(AstNode::span),
    })
}

/// Call sites discovered during the collection phase of one compilation.
///
/// Calls are sharded per source unit: appends preserve visit order within a
/// unit, and freezing concatenates shards in lexicographic unit-path order.
/// Diagnostic order is therefore stable no matter how the host schedules the
/// per-unit callbacks.
#[derive(Debug, Default)]
pub struct CallSiteCollector {
    shards: Mutex<BTreeMap<String, Vec<FunctionCall>>>,
}

impl CallSiteCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call discovered in its source unit
    pub fn record(&self, call: FunctionCall) {
        self.shards.lock().entry(call.unit.clone()).or_default().push(call);
    }

    /// Number of calls collected so far
    pub fn len(&self) -> usize {
        self.shards.lock().values().map(Vec::len).sum()
    }

    /// Whether nothing has been collected yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freeze into the final, deterministically ordered call list.
    ///
    /// Consumes the collector; runs once at the finalize barrier.
    pub fn freeze(self) -> Vec<FunctionCall> {
        self.shards.into_inner().into_values().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worklint_syntax::{Node, Position};

    fn call(unit: &str, name: &str) -> FunctionCall {
        FunctionCall {
            name: name.to_string(),
            unit: unit.to_string(),
            name_span: Span::single(Position::new(1, 1)),
            argument_span: None,
            argument_type: None,
            expected_return_type: None,
            expected_return_span: None,
        }
    }

    #[test]
    fn test_freeze_orders_units_by_path() {
        let collector = CallSiteCollector::new();
        collector.record(call("src/zeta.src", "late"));
        collector.record(call("src/alpha.src", "first"));
        collector.record(call("src/alpha.src", "second"));

        let names: Vec<String> = collector.freeze().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["first", "second", "late"]);
    }

    #[test]
    fn test_extract_call_with_literal_name() {
        let node = Node::new(NodeKind::Call, "call_work_item")
            .with_child(
                Node::new(NodeKind::Argument, "")
                    .with_child(Node::new(NodeKind::StringLiteral, "resize_image").with_span(Span::single(Position::new(7, 31)))),
            )
            .with_child(
                Node::new(NodeKind::Argument, "photo")
                    .with_span(Span::single(Position::new(7, 47)))
                    .with_attribute(TYPE_ATTRIBUTE, "Image"),
            )
            .with_child(Node::new(NodeKind::TypeArgument, "Thumbnail"));

        let extracted = extract_call("app.src", &node).unwrap();
        assert_eq!(extracted.name, "resize_image");
        assert_eq!(extracted.name_span.start.line, 7);
        assert_eq!(extracted.argument_type.as_deref(), Some("Image"));
        assert_eq!(extracted.expected_return_type.as_deref(), Some("Thumbnail"));
    }

    #[test]
    fn test_extract_call_covers_retry_variant() {
        let node = Node::new(NodeKind::Call, "call_work_item_with_retry").with_child(
            Node::new(NodeKind::Argument, "").with_child(Node::new(NodeKind::StringLiteral, "send_receipt")),
        );
        assert!(extract_call("app.src", &node).is_some());
    }

    #[test]
    fn test_computed_name_is_skipped() {
        // First argument is an identifier, not a string literal.
        let node = Node::new(NodeKind::Call, "call_work_item").with_child(
            Node::new(NodeKind::Argument, "").with_child(Node::new(NodeKind::Identifier, "task_name")),
        );
        assert!(extract_call("app.src", &node).is_none());
    }

    #[test]
    fn test_unrelated_call_is_skipped() {
        let node = Node::new(NodeKind::Call, "println").with_child(
            Node::new(NodeKind::Argument, "").with_child(Node::new(NodeKind::StringLiteral, "hello")),
        );
        assert!(extract_call("app.src", &node).is_none());
    }

    #[test]
    fn test_unresolved_argument_type_recorded_as_none() {
        let node = Node::new(NodeKind::Call, "call_work_item")
            .with_child(
                Node::new(NodeKind::Argument, "").with_child(Node::new(NodeKind::StringLiteral, "resize_image")),
            )
            .with_child(Node::new(NodeKind::Argument, "mystery").with_span(Span::single(Position::new(2, 9))));

        let extracted = extract_call("app.src", &node).unwrap();
        assert!(extracted.argument_span.is_some());
        assert!(extracted.argument_type.is_none());
    }
}
