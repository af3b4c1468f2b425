//! Specification node types

/// A node in the scaffolding specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A directory with named children
    Group(Group),
    /// A single file to be created with templated content
    Leaf,
}

impl TreeNode {
    /// Whether this node is a group (directory).
    pub fn is_group(&self) -> bool {
        matches!(self, TreeNode::Group(_))
    }

    /// Whether this node is a leaf (file).
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf)
    }
}

/// A directory node: an ordered collection of uniquely named children.
///
/// Child names are stored alongside the child node, so a `Leaf` carries no
/// state of its own. Iteration order is insertion order, which keeps logs and
/// summaries deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    children: Vec<(String, TreeNode)>,
}

impl Group {
    /// Assemble a group from already-validated parts. Uniqueness and name
    /// validity are enforced by `GroupBuilder::build` and manifest parsing.
    pub(crate) fn from_parts(children: Vec<(String, TreeNode)>) -> Self {
        Self { children }
    }

    /// Ordered enumeration of (name, child) pairs.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Look up a direct child by name.
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total (groups, leaves) in this subtree, excluding the group itself.
    pub fn node_counts(&self) -> (u64, u64) {
        let mut groups = 0;
        let mut leaves = 0;
        for (_, node) in self.children() {
            match node {
                TreeNode::Group(child) => {
                    let (g, l) = child.node_counts();
                    groups += 1 + g;
                    leaves += l;
                }
                TreeNode::Leaf => leaves += 1,
            }
        }
        (groups, leaves)
    }
}
