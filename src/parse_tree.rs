//! Navigation and traversal over parse trees.
//!
//! The helpers work on any tree exposing its nodes as cheap, clonable handles through
//! [`ParseTree`], such as reference-counted nodes or indices into an arena.

use std::collections::VecDeque;

/// A handle to a node of a parse tree.
pub trait ParseTree: Clone {
    /// The parent of the node, or [`None`] for the root.
    fn parent(&self) -> Option<Self>;

    /// The number of children of the node.
    fn child_count(&self) -> usize;

    /// The child at `index`, or [`None`] if `index` is out of bounds.
    fn child(&self, index: usize) -> Option<Self>;

    /// Whether the node is a terminal, i.e., a token rather than a rule.
    fn is_terminal(&self) -> bool;
}

/// The children of `node`, in order.
#[must_use]
pub fn children<T: ParseTree>(node: &T) -> Vec<T> {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .collect()
}

/// The ancestors of a node, from its direct parent up to the root.
#[derive(Debug, Clone)]
pub struct Ancestors<T> {
    next: Option<T>,
}

impl<T: ParseTree> Iterator for Ancestors<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

/// Iterates over the ancestors of `node`, direct parent first.
#[must_use]
pub fn ancestors<T: ParseTree>(node: &T) -> Ancestors<T> {
    Ancestors {
        next: node.parent(),
    }
}

/// The root of the tree containing `node`, which is `node` itself if it has no parent.
#[must_use]
pub fn root<T: ParseTree>(node: &T) -> T {
    ancestors(node).last().unwrap_or_else(|| node.clone())
}

/// The order in which [`ParseTreeIter`] visits the nodes.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TraversalOrder {
    /// Pre-order depth-first traversal.
    #[default]
    DepthFirst,
    /// Level-by-level traversal.
    BreadthFirst,
}

/// An iterator over a node and all of its descendants.
#[derive(Debug, Clone)]
pub struct ParseTreeIter<T> {
    order: TraversalOrder,
    pending: VecDeque<T>,
}

impl<T: ParseTree> ParseTreeIter<T> {
    /// Creates an iterator starting from `root`.
    #[must_use]
    pub fn new(root: T, order: TraversalOrder) -> Self {
        Self {
            order,
            pending: VecDeque::from([root]),
        }
    }

    /// The traversal order of the iterator.
    #[must_use]
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }
}

impl<T: ParseTree> Iterator for ParseTreeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::DepthFirst => {
                let node = self.pending.pop_back()?;
                self.pending.extend(children(&node).into_iter().rev());
                Some(node)
            }
            TraversalOrder::BreadthFirst => {
                let node = self.pending.pop_front()?;
                self.pending.extend(children(&node));
                Some(node)
            }
        }
    }
}

/// Callbacks invoked by [`walk`].
pub trait ParseTreeListener<T> {
    /// Invoked before the children of a rule node are walked.
    fn enter_rule(&mut self, _node: &T) {}

    /// Invoked after the children of a rule node are walked.
    fn exit_rule(&mut self, _node: &T) {}

    /// Invoked on a terminal node.
    fn visit_terminal(&mut self, _node: &T) {}
}

/// Walks the subtree rooted at `node` depth-first, notifying `listener` of every node.
pub fn walk<T, L>(node: &T, listener: &mut L)
where
    T: ParseTree,
    L: ParseTreeListener<T> + ?Sized,
{
    enum Step<T> {
        Enter(T),
        Exit(T),
    }

    let mut stack = vec![Step::Enter(node.clone())];
    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node) if node.is_terminal() => listener.visit_terminal(&node),
            Step::Enter(node) => {
                listener.enter_rule(&node);
                let children = children(&node);
                stack.push(Step::Exit(node));
                stack.extend(children.into_iter().rev().map(Step::Enter));
            }
            Step::Exit(node) => listener.exit_rule(&node),
        }
    }
}
