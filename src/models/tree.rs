/// Result of walking one path.
///
/// A file becomes `Leaf` carrying the processor's output for it; a
/// directory becomes `Node` carrying one subtree per child, in listing
/// order. An empty directory is `Node(vec![])`: a real node that
/// contributes nothing once flattened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResultTree<T> {
    Leaf(T),
    Node(Vec<ResultTree<T>>),
}
