use crate::syntax::{NodeKind, SyntaxNode, SyntaxTree};

/// A method declaration found in a syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDeclaration<'a> {
    node: &'a SyntaxNode,
}

impl<'a> MethodDeclaration<'a> {
    /// Wraps a node tagged [`NodeKind::MethodDeclaration`].
    #[must_use]
    pub fn from_node(node: &'a SyntaxNode) -> Option<Self> {
        (*node.kind() == NodeKind::MethodDeclaration).then_some(Self { node })
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        self.node.name().unwrap_or_default()
    }

    #[must_use]
    pub fn body_statements(&self) -> &'a [SyntaxNode] {
        self.node.children()
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.node.line()
    }
}

/// Finds method declarations by name.
#[derive(Debug, Clone)]
pub struct MethodLocator {
    method_name: String,
}

impl MethodLocator {
    #[must_use]
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
        }
    }

    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Every method declaration in the tree, in pre-order (source order).
    pub fn methods<'a>(tree: &'a SyntaxTree) -> impl Iterator<Item = MethodDeclaration<'a>> {
        tree.preorder().filter_map(MethodDeclaration::from_node)
    }

    /// The first method whose name matches exactly, if any.
    #[must_use]
    pub fn locate<'a>(&self, tree: &'a SyntaxTree) -> Option<MethodDeclaration<'a>> {
        Self::methods(tree).find(|method| method.name() == self.method_name)
    }
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
