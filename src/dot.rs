use std::fmt::{self, Display};

use crate::node::Node;

/// A [Graphviz] DOT rendering of the shape of a [`Tree`](crate::Tree),
/// returned by [`Tree::dot()`](crate::Tree::dot).
///
/// Nodes are numbered in pre-order and labelled with the [`Display`] output of
/// their value. Absent children are drawn as invisible points so the layout
/// keeps every node on the correct side of its parent.
///
/// ```
/// use ordtree::Tree;
///
/// let t: Tree<_> = [2, 1].into_iter().collect();
/// let dot = t.dot().to_string();
///
/// assert!(dot.starts_with("digraph {"));
/// assert!(dot.contains("n0 -> n1;"));
/// ```
///
/// [Graphviz]: https://graphviz.org/
#[derive(Debug)]
pub struct Dot<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<'a, T> Dot<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self { root }
    }
}

impl<T> Display for Dot<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, r#"bgcolor = "transparent";"#)?;
        writeln!(
            f,
            r#"node [shape = circle; style = filled; fontcolor = orange4; fillcolor = white;];"#
        )?;

        if let Some(root) = self.root {
            let mut next_id = 0;
            recurse(root, &mut next_id, f)?;
        }

        writeln!(f, "}}")
    }
}

/// Write the subtree at `n`, numbering nodes from `next_id`.
fn recurse<T>(n: &Node<T>, next_id: &mut usize, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Display,
{
    let id = *next_id;
    *next_id += 1;

    writeln!(f, "n{id} [label={:?}];", n.value().to_string())?;

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                let child = *next_id;
                writeln!(f, "n{id} -> n{child};")?;
                recurse(v, next_id, f)?;
            }
            None => {
                let null = *next_id;
                *next_id += 1;
                writeln!(f, "null_{null} [shape=point,style=invis];")?;
                writeln!(f, "n{id} -> null_{null} [style=invis];")?;
            }
        };
    }

    Ok(())
}
