//! A breadth-first search tree with duplicate-state pruning.

use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::trace;

use crate::queue::Queue;

/// Handle to a node of a [`Tree`].
pub type NodeId = NodeIndex;

/// What a child-population callback gets to work with while expanding one node.
///
/// Children attached here become nodes of the tree, in attachment order, and are queued for expansion.
pub struct Offspring<'o, T> {
    processed: &'o mut HashSet<T>,
    children: &'o mut Vec<T>,
}

impl<T> Offspring<'_, T>
where
    T: Clone + Eq + Hash,
{
    /// Attach `value` as a child unconditionally.
    pub fn attach(&mut self, value: T) {
        self.children.push(value);
    }

    /// Attach `value` as a child only if no equal value was attached this way before anywhere in the tree.
    ///
    /// Returns whether it was attached. Values are recorded as seen when attached, not when expanded.
    pub fn attach_unseen(&mut self, value: T) -> bool {
        if self.processed.contains(&value) {
            return false;
        }

        self.processed.insert(value.clone());
        self.children.push(value);
        true
    }
}

/// A breadth-first search tree over states of type `T`, grown by the callback `F`.
///
/// Nodes live in an arena; a node's children are edges out of it, its parent the single edge in.
/// Every state ever generated is kept until the tree is dropped.
pub struct Tree<T, F> {
    graph: DiGraph<T, ()>,
    root: NodeIndex,
    queue: Queue<NodeIndex>,
    processed: HashSet<T>,
    populate_children: F,
    expanded: usize,
}

impl<T, F> Tree<T, F>
where
    T: Clone + Eq + Hash,
    F: FnMut(&T, &mut Offspring<'_, T>),
{
    /// A tree holding only a root wrapping `starting`.
    pub fn new(starting: T, populate_children: F) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(starting);

        Self {
            graph,
            root,
            queue: Queue::new(),
            processed: HashSet::new(),
            populate_children,
            expanded: 0,
        }
    }

    fn populate(&mut self, index: NodeIndex) {
        let mut children = Vec::new();
        (self.populate_children)(&self.graph[index], &mut Offspring {
            processed: &mut self.processed,
            children: &mut children,
        });
        self.expanded += 1;
        trace!(node = index.index(), children = children.len(), pending = self.queue.len(), "expanded");

        for child in children {
            let child_index = self.graph.add_node(child);
            self.graph.add_edge(index, child_index, ());
            self.queue.enqueue(child_index);
        }
    }

    /// Search level by level for the first node whose state satisfies `is_goal`, starting with the root.
    ///
    /// Returns [`None`] once every reachable node has been tested.
    pub fn populate_tree_check(&mut self, mut is_goal: impl FnMut(&T) -> bool) -> Option<Node<'_, T>> {
        let found = self.search_check(&mut is_goal);
        found.map(|index| self.node(index))
    }

    fn search_check(&mut self, is_goal: &mut impl FnMut(&T) -> bool) -> Option<NodeIndex> {
        if is_goal(&self.graph[self.root]) {
            return Some(self.root);
        }

        self.populate(self.root);

        while let Some(index) = self.queue.dequeue() {
            if is_goal(&self.graph[index]) {
                return Some(index);
            }

            self.populate(index);
        }

        None
    }

    /// Expand the whole tree, collecting every node whose state satisfies `is_solution`.
    ///
    /// The root is expanded without being tested. Collected nodes are leaves: they are never expanded.
    pub fn populate_tree_add(&mut self, mut is_solution: impl FnMut(&T) -> bool) -> Vec<Node<'_, T>> {
        let mut solutions = Vec::new();

        self.populate(self.root);

        while let Some(index) = self.queue.dequeue() {
            if is_solution(&self.graph[index]) {
                solutions.push(index);
            } else {
                self.populate(index);
            }
        }

        solutions.into_iter().map(|index| self.node(index)).collect_vec()
    }
}

impl<T, F> Tree<T, F> {
    /// View of the node `index`.
    ///
    /// # Panics
    /// If `index` does not belong to this tree.
    pub fn node(&self, index: NodeId) -> Node<'_, T> {
        assert!(index.index() < self.graph.node_count(), "node {} is not in this tree", index.index());
        Node { graph: &self.graph, index }
    }

    /// The root node.
    pub fn root(&self) -> Node<'_, T> {
        self.node(self.root)
    }

    /// Number of nodes generated so far, the root included.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Whether the tree has only its root. A tree is never truly empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() <= 1
    }

    /// Number of nodes the population callback has been run on.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of distinct states recorded through [`Offspring::attach_unseen`].
    pub fn processed(&self) -> usize {
        self.processed.len()
    }

    /// Number of nodes waiting to be tested or expanded.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// A borrowed view of one node in a [`Tree`].
pub struct Node<'t, T> {
    graph: &'t DiGraph<T, ()>,
    index: NodeIndex,
}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<'t, T> Node<'t, T> {
    /// Handle of this node within its tree.
    pub fn id(&self) -> NodeId {
        self.index
    }

    /// The state this node wraps.
    pub fn value(&self) -> &'t T {
        &self.graph[self.index]
    }

    /// The node this one was generated from, [`None`] for the root.
    pub fn parent(&self) -> Option<Node<'t, T>> {
        self.graph
            .neighbors_directed(self.index, Direction::Incoming)
            .next()
            .map(|index| Node { graph: self.graph, index })
    }

    /// Children in the order they were attached.
    pub fn children(&self) -> Vec<Node<'t, T>> {
        self.graph
            .neighbors_directed(self.index, Direction::Outgoing)
            .sorted()
            .map(|index| Node { graph: self.graph, index })
            .collect_vec()
    }

    /// Number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent(), Node::parent).count()
    }
}
