use std::path::Path;

use tree_sitter::{Node, Parser};

use super::{NodeKind, ParseError, SourceParser, SyntaxNode, SyntaxTree};

const COMMENT: &str = "comment";
const EMPTY_STATEMENT: &str = "empty_statement";
const BLOCK: &str = "compound_statement";

const CLASS_LIKE: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "trait_declaration",
    "enum_declaration",
    "anonymous_class",
];

/// Longest token quoted back in an "unexpected ..." message.
const MAX_TOKEN_LEN: usize = 32;

/// PHP parser backed by the tree-sitter PHP grammar.
///
/// A fresh tree-sitter parser is created per call, so one `PhpParser` can be
/// shared by every worker thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhpParser;

impl PhpParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SourceParser for PhpParser {
    fn parse(&self, source: &str, path: &Path) -> Result<SyntaxTree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_php::LANGUAGE_PHP.into())
            .map_err(|e| ParseError::new(format!("PHP grammar unavailable: {e}")))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new("Parser produced no syntax tree"))?;
        let root = tree.root_node();

        if root.has_error() {
            let error = first_error(root).map_or_else(
                || ParseError::new("Syntax error"),
                |node| describe_error(node, source),
            );
            tracing::debug!(path = %path.display(), %error, "syntax error");
            return Err(error);
        }

        Ok(SyntaxTree::new(convert_children(root, source.as_bytes())))
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

fn describe_error(node: Node<'_>, source: &str) -> ParseError {
    let position = node.start_position();

    let message = if node.is_missing() {
        format!("Syntax error, missing `{}`", node.kind())
    } else {
        let text = node.utf8_text(source.as_bytes()).unwrap_or_default();
        let token: String = text
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .chars()
            .take(MAX_TOKEN_LEN)
            .collect();
        if token.is_empty() {
            "Syntax error, unexpected end of file".to_string()
        } else {
            format!("Syntax error, unexpected `{token}`")
        }
    };

    ParseError::new(message).at(position.row + 1, position.column + 1)
}

/// Comments and bare `;` are dropped; a nested `{ ... }` block contributes its
/// statements in place.
fn convert_children(node: Node<'_>, source: &[u8]) -> Vec<SyntaxNode> {
    let mut converted = Vec::new();
    push_children(node, source, &mut converted);
    converted
}

fn push_children(node: Node<'_>, source: &[u8], out: &mut Vec<SyntaxNode>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            COMMENT | EMPTY_STATEMENT => {}
            BLOCK => push_children(child, source, out),
            _ => out.push(convert(child, source)),
        }
    }
}

fn convert(node: Node<'_>, source: &[u8]) -> SyntaxNode {
    let line = node.start_position().row + 1;

    match node.kind() {
        "method_declaration" => declaration(node, NodeKind::MethodDeclaration, source),
        "function_definition" => declaration(node, NodeKind::FunctionDeclaration, source),
        "throw_statement" => {
            SyntaxNode::new(NodeKind::Throw, line).with_children(convert_children(node, source))
        }
        "expression_statement" if is_bare_throw(node) => {
            SyntaxNode::new(NodeKind::Throw, line).with_children(convert_children(node, source))
        }
        kind if CLASS_LIKE.contains(&kind) => {
            let class = SyntaxNode::new(NodeKind::ClassDeclaration, line)
                .with_children(convert_children(node, source));
            match field_text(node, "name", source) {
                Some(name) => class.with_name(name),
                None => class,
            }
        }
        kind => SyntaxNode::new(NodeKind::Other(kind.to_string()), line)
            .with_children(convert_children(node, source)),
    }
}

/// Methods and functions keep only their body statements as children; a
/// declaration without a body (abstract or interface method) has none.
fn declaration(node: Node<'_>, kind: NodeKind, source: &[u8]) -> SyntaxNode {
    let line = node.start_position().row + 1;
    let body = node
        .child_by_field_name("body")
        .map(|body| convert_children(body, source))
        .unwrap_or_default();

    let declaration = SyntaxNode::new(kind, line).with_children(body);
    match field_text(node, "name", source) {
        Some(name) => declaration.with_name(name),
        None => declaration,
    }
}

/// `throw ...;` written as an expression statement.
fn is_bare_throw(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let mut expressions = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != COMMENT);

    let is_throw = expressions
        .next()
        .is_some_and(|first| first.kind() == "throw_expression");
    is_throw && expressions.next().is_none()
}

fn field_text<'s>(node: Node<'_>, field: &str, source: &'s [u8]) -> Option<&'s str> {
    node.child_by_field_name(field)?.utf8_text(source).ok()
}

#[cfg(test)]
#[path = "php_tests.rs"]
mod tests;
