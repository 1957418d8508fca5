/// Payload carried by a tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Operator(char),
    /// Stands in for a payload kind the evaluator has not learned about yet
    #[cfg(test)]
    Opaque,
}

/// A node in a binary expression tree
///
/// Operator nodes own exactly two children. Number nodes are leaves.
/// A node without a payload, or an operator missing a child, is rejected
/// at evaluation time rather than at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub val: Option<Token>,
    pub lchild: Option<Box<TreeNode>>,
    pub rchild: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn number(value: i64) -> Self {
        Self {
            val: Some(Token::Number(value)),
            lchild: None,
            rchild: None,
        }
    }

    pub fn operator(symbol: char, left: TreeNode, right: TreeNode) -> Self {
        Self {
            val: Some(Token::Operator(symbol)),
            lchild: Some(Box::new(left)),
            rchild: Some(Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.lchild.is_none() && self.rchild.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let left = self.lchild.as_ref().map_or(0, |child| child.height());
        let right = self.rchild.as_ref().map_or(0, |child| child.height());
        1 + left.max(right)
    }
}
