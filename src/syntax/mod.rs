//! Language-neutral syntax tree consumed by the rollback checks.
//!
//! Parsers adapt their concrete trees into [`SyntaxNode`]s tagged with a
//! [`NodeKind`], so locating methods and classifying statements never depends
//! on a particular grammar.

mod php;

pub use php::PhpParser;

use std::fmt;
use std::path::Path;

/// Kind tag of a syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Class, interface, trait or enum declaration (named or anonymous).
    ClassDeclaration,
    /// Method declared inside a class-like body.
    MethodDeclaration,
    /// Free function declaration.
    FunctionDeclaration,
    /// Statement that does nothing but throw.
    Throw,
    /// Anything else, carrying the parser's own kind name.
    Other(String),
}

/// A node of the syntax tree.
///
/// For [`NodeKind::MethodDeclaration`] the children are exactly the body
/// statements, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: NodeKind,
    name: Option<String>,
    line: usize,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    #[must_use]
    pub const fn new(kind: NodeKind, line: usize) -> Self {
        Self {
            kind,
            name: None,
            line,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 1-indexed source line where the node starts.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    #[must_use]
    pub fn is_throw(&self) -> bool {
        self.kind == NodeKind::Throw
    }

    /// Pre-order traversal starting at this node.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
}

/// Parsed file: the ordered top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    #[must_use]
    pub const fn new(nodes: Vec<SyntaxNode>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    #[must_use]
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order traversal over every node, in source order.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: self.nodes.iter().rev().collect(),
        }
    }
}

/// Pre-order iterator over syntax nodes.
pub struct Preorder<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A syntax error reported by a [`SourceParser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// 1-indexed line, when the parser knows it.
    pub line: Option<usize>,
    /// 1-indexed column, when the parser knows it.
    pub column: Option<usize>,
}

impl ParseError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    #[must_use]
    pub const fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} on line {line}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Turns source text into a [`SyntaxTree`].
///
/// Implementations must be shareable across worker threads; per-call parser
/// state belongs inside `parse`.
pub trait SourceParser: Sync {
    /// Parse `source`, read from `path` (used for diagnostics only).
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the source is not syntactically valid.
    fn parse(&self, source: &str, path: &Path) -> Result<SyntaxTree, ParseError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
