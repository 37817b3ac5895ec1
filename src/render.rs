use std::fmt;

use crate::node::Node;

/// Draws a tree sideways with branch connectors: the left subtree above its parent and
/// the right subtree below it. Returned by [`Tree::pretty`][crate::Tree::pretty].
///
/// ```
/// use rebuild_bst::Tree;
///
/// let tree = Tree::from_sorted(vec![1, 2, 3]);
/// let drawn = tree.pretty().to_string();
///
/// assert_eq!(drawn, "│   ┌── 1\n└── 2\n    └── 3\n");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Pretty<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<'a, T> Pretty<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self { root }
    }
}

impl<T> fmt::Display for Pretty<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => draw(f, root, &mut String::new(), false),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. `prefix` holds the connectors of every ancestor and is
/// restored before returning.
fn draw<T>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &mut String,
    is_above: bool,
) -> fmt::Result
where
    T: fmt::Display,
{
    let len = prefix.len();

    if let Some(left) = node.left() {
        prefix.push_str(if is_above { "    " } else { "│   " });
        draw(f, left, prefix, true)?;
        prefix.truncate(len);
    }

    writeln!(f, "{}{}{}", prefix, if is_above { "┌── " } else { "└── " }, node.value())?;

    if let Some(right) = node.right() {
        prefix.push_str(if is_above { "│   " } else { "    " });
        draw(f, right, prefix, false)?;
        prefix.truncate(len);
    }

    Ok(())
}
