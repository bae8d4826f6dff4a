//! Text rendering of a built tree, one node per line.
//!
//! ```text
//! |---Math
//! |   |--- A Decision: Yes
//! |   |--- B Statistics
//! |   |   |--- A Decision: Yes
//! |   |   |--- C Decision: No
//! ```
use crate::trees::node::{NodeKind, TreeNode};
use std::fmt::{self, Display, Formatter};

const BRANCH: &str = "|---";
const INDENT: &str = "|   ";

impl Display for TreeNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_node(f: &mut Formatter<'_>, node: &TreeNode, depth: usize) -> fmt::Result {
    write!(f, "{}{}", INDENT.repeat(depth), BRANCH)?;
    if let Some(value) = node.value() {
        write!(f, "{:>2} ", value)?;
    }

    match node.kind() {
        NodeKind::Decision { label } => writeln!(f, "Decision: {}", label),
        NodeKind::Internal {
            attribute,
            children,
            ..
        } => {
            writeln!(f, "{}", attribute)?;
            children
                .iter()
                .try_for_each(|child| write_node(f, child, depth + 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single_decision() {
        let node = TreeNode::decision("Yes".to_string());
        assert_eq!(node.to_string(), "|---Decision: Yes\n");
    }

    #[test]
    fn test_display_nested() {
        let tree = TreeNode::internal(
            "Math".to_string(),
            "Yes".to_string(),
            vec![
                TreeNode::decision("Yes".to_string()).with_value("A".to_string()),
                TreeNode::internal(
                    "Statistics".to_string(),
                    "Yes".to_string(),
                    vec![
                        TreeNode::decision("Yes".to_string()).with_value("A".to_string()),
                        TreeNode::decision("No".to_string()).with_value("C".to_string()),
                    ],
                )
                .with_value("B".to_string()),
            ],
        );

        let expected = "\
|---Math
|   |--- A Decision: Yes
|   |--- B Statistics
|   |   |--- A Decision: Yes
|   |   |--- C Decision: No
";
        assert_eq!(tree.to_string(), expected);
    }
}
