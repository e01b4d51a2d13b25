/// Build a [`Tree`](crate::Tree) literal.
///
/// Braced values nest as branches, any other single-token value is a
/// leaf (parenthesize compound leaf expressions):
///
/// ```
/// use trellis_core::{tree, Node};
///
/// let t = tree! {
///     "a" => 1,
///     "b" => { "x" => 2, "y" => 3 },
/// };
/// assert_eq!(t.get(&"a"), Some(&Node::Leaf(1)));
/// assert!(t.get(&"b").is_some_and(Node::is_branch));
/// ```
#[macro_export]
macro_rules! tree {
    () => {
        $crate::Tree::new()
    };
    ($($key:expr => $value:tt),+ $(,)?) => {{
        let mut tree = $crate::Tree::new();
        $(
            tree.insert($key, $crate::tree_node!($value));
        )+
        tree
    }};
}

/// Convert one `tree!` value token into a [`Node`](crate::Node).
#[doc(hidden)]
#[macro_export]
macro_rules! tree_node {
    ({ $($branch:tt)* }) => {
        $crate::Node::Branch($crate::tree!($($branch)*))
    };
    ($leaf:expr) => {
        $crate::Node::Leaf($leaf)
    };
}
