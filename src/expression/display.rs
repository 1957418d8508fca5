use std::fmt;

use crate::expression::ast::{Token, TreeNode};

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(node: &TreeNode) -> u8 {
            match &node.val {
                Some(Token::Operator('+' | '-')) => 1,
                Some(Token::Operator(_)) => 2,
                _ => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            node: &TreeNode,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_node(f, node)?;
                write!(f, ")")
            } else {
                fmt_node(f, node)
            }
        }

        fn fmt_child(
            f: &mut fmt::Formatter,
            child: Option<&TreeNode>,
            need_parens: impl Fn(&TreeNode) -> bool,
        ) -> fmt::Result {
            match child {
                Some(node) => write_with_parens(f, node, need_parens(node)),
                None => write!(f, "<invalid>"),
            }
        }

        fn fmt_node(f: &mut fmt::Formatter, node: &TreeNode) -> fmt::Result {
            match &node.val {
                None => write!(f, "<invalid>"),
                Some(Token::Number(n)) => write!(f, "{}", n),
                Some(Token::Operator(symbol)) => {
                    let own = precedence(node);
                    // Operators are left-associative, so an equal-precedence
                    // right child keeps its parentheses.
                    fmt_child(f, node.lchild.as_deref(), |l| precedence(l) < own)?;
                    write!(f, " {} ", symbol)?;
                    fmt_child(f, node.rchild.as_deref(), |r| precedence(r) <= own)
                }
                #[allow(unreachable_patterns)]
                Some(_) => write!(f, "<unknown>"),
            }
        }

        fmt_node(f, self)
    }
}
