/// What a node holds: a final class label, or a split with its subtrees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Decision {
        label: String,
    },
    Internal {
        attribute: String,
        /// Majority class of the records the split was built from.
        majority: String,
        /// Children in first-seen order of the attribute values.
        children: Vec<TreeNode>,
    },
}

/// Decision tree node
///
/// `value` is the attribute value on the edge from the parent; it is `None` for the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    value: Option<String>,
    kind: NodeKind,
}

/// A root-to-leaf path: the (attribute, value) tests taken and the label reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf<'a> {
    pub path: Vec<(&'a str, &'a str)>,
    pub label: &'a str,
}

impl TreeNode {
    pub fn decision(label: String) -> Self {
        Self {
            value: None,
            kind: NodeKind::Decision { label },
        }
    }

    pub fn internal(attribute: String, majority: String, children: Vec<TreeNode>) -> Self {
        Self {
            value: None,
            kind: NodeKind::Internal {
                attribute,
                majority,
                children,
            },
        }
    }

    /// Tags the node with the value of the edge leading to it.
    pub fn with_value(mut self, value: String) -> Self {
        self.value = Some(value);
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_decision(&self) -> bool {
        matches!(self.kind, NodeKind::Decision { .. })
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.kind, NodeKind::Internal { .. })
    }

    /// The class label of a decision node.
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Decision { label } => Some(label.as_str()),
            NodeKind::Internal { .. } => None,
        }
    }

    /// The split attribute of an internal node.
    pub fn split_attribute(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Internal { attribute, .. } => Some(attribute.as_str()),
            NodeKind::Decision { .. } => None,
        }
    }

    pub fn majority(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Internal { majority, .. } => Some(majority.as_str()),
            NodeKind::Decision { .. } => None,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Internal { children, .. } => children.as_slice(),
            NodeKind::Decision { .. } => &[],
        }
    }

    pub fn child(&self, value: &str) -> Option<&TreeNode> {
        self.children()
            .iter()
            .find(|child| child.value() == Some(value))
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn n_leaves(&self) -> usize {
        match &self.kind {
            NodeKind::Decision { .. } => 1,
            NodeKind::Internal { children, .. } => children.iter().map(TreeNode::n_leaves).sum(),
        }
    }

    /// All decision leaves, left to right, with the path that reaches them.
    pub fn leaves(&self) -> Vec<Leaf<'_>> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut Vec::new(), &mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, path: &mut Vec<(&'a str, &'a str)>, out: &mut Vec<Leaf<'a>>) {
        match &self.kind {
            NodeKind::Decision { label } => out.push(Leaf {
                path: path.clone(),
                label: label.as_str(),
            }),
            NodeKind::Internal {
                attribute,
                children,
                ..
            } => {
                for child in children {
                    path.push((attribute.as_str(), child.value().unwrap_or_default()));
                    child.collect_leaves(path, out);
                    path.pop();
                }
            }
        }
    }
}
