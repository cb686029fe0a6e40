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

//! Syntax node abstraction and the concrete reference tree
//!
//! Tree conventions the analyzer relies on:
//! - A `Declaration` has `Annotation` children (declaration-level
//!   annotations), an `Identifier`, `Parameter` children, an optional
//!   `ReturnType`, and a `Block` body.
//! - A `Parameter` has `Annotation` children and a `TypeName`.
//! - A `Call` carries the callee name as its text and has `Argument`
//!   children in call order plus an optional `TypeArgument`.
//! - An `Argument` wraps its expression nodes; hosts attach the expression's
//!   best-effort resolved type as the `"type"` attribute.

use crate::position::Span;
use std::collections::BTreeMap;

/// Kinds of syntax nodes visible to the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A function declaration
    Declaration,
    /// A declared name
    Identifier,
    /// A declaration parameter
    Parameter,
    /// An annotation attached to a declaration or parameter
    Annotation,
    /// A declaration's return type
    ReturnType,
    /// A type reference
    TypeName,
    /// A call expression; the node text is the callee name
    Call,
    /// A call argument
    Argument,
    /// A string literal; the node text is the unquoted content
    StringLiteral,
    /// An explicit generic type argument on a call
    TypeArgument,
    /// A statement block
    Block,
    /// Anything the analyzer does not inspect
    Other,
}

/// Contract a host syntax tree exposes to the analyzer.
///
/// The analyzer only needs node kind, textual location, child enumeration,
/// and attribute lookup; everything else about the host representation stays
/// on the host's side of this trait.
pub trait AstNode: Sized + Sync {
    /// The node's kind
    fn kind(&self) -> NodeKind;

    /// Where the node sits in its source unit
    fn span(&self) -> Span;

    /// The node's own source text (callee name, identifier, type text, ...)
    fn text(&self) -> &str;

    /// Child nodes in source order
    fn children(&self) -> &[Self];

    /// Look up a host-attached attribute, such as a resolved type
    fn attribute(&self, key: &str) -> Option<&str>;

    /// First child of the given kind
    fn child_of_kind(&self, kind: NodeKind) -> Option<&Self> {
        self.children().iter().find(|child| child.kind() == kind)
    }

    /// All children of the given kind, in source order
    fn children_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Self> {
        self.children().iter().filter(move |child| child.kind() == kind)
    }
}

/// Walk a tree in pre-order, invoking the visitor on every node.
pub fn walk<N: AstNode, F: FnMut(&N)>(node: &N, visit: &mut F) {
    visit(node);
    for child in node.children() {
        walk(child, &mut *visit);
    }
}

/// Concrete syntax tree used by the reference driver and tests.
///
/// Hosts with their own AST lower into this shape, or implement [`AstNode`]
/// directly on their nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    text: String,
    span: Span,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Node {
    /// Create a node with the given kind and source text
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            span: Span::unknown(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the node's source span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach a host attribute, such as a resolved expression type
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl AstNode for Node {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn span(&self) -> Span {
        self.span
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
