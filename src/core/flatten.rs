use crate::models::ResultTree;

/// Flatten a result tree into its leaf values, left to right.
///
/// Depth-first: each subtree's leaves land contiguously, in the order
/// the subtrees appear under their node. Nodes contribute no values of
/// their own. Iterative with an explicit stack, so tree depth never
/// becomes native stack depth.
pub fn flatten<T: Clone>(tree: &ResultTree<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut stack = vec![tree];

    while let Some(current) = stack.pop() {
        match current {
            ResultTree::Leaf(value) => values.push(value.clone()),
            // Reversed so the first child is popped first.
            ResultTree::Node(children) => stack.extend(children.iter().rev()),
        }
    }

    values
}
