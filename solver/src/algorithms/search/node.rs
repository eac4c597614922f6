use std::ops::Index;

use super::traits::{SearchStats, Solution};

/// A state paired with the link back to the node that produced it.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    pub state: S,
    pub parent: Option<usize>,
    /// None only for the root.
    pub action: Option<A>,
    pub path_cost: f64,
    pub heuristic: f64,
}

impl<S, A> Node<S, A> {
    pub fn total_cost(&self) -> f64 {
        self.path_cost + self.heuristic
    }
}

/// Arena of search nodes; parents are referenced by index so a path is a
/// backward index walk.
#[derive(Debug)]
pub struct SearchTree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S: Copy, A: Copy> SearchTree<S, A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push_root(&mut self, state: S, heuristic: f64) -> usize {
        self.push(Node {
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
            heuristic,
        })
    }

    pub fn push_child(
        &mut self,
        parent: usize,
        state: S,
        action: A,
        path_cost: f64,
        heuristic: f64,
    ) -> usize {
        self.push(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
            heuristic,
        })
    }

    fn push(&mut self, node: Node<S, A>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// States from the root to `terminal`, and the actions between them.
    pub fn reconstruct(&self, terminal: usize) -> (Vec<S>, Vec<A>) {
        let mut path = Vec::new();
        let mut actions = Vec::new();
        let mut current = Some(terminal);

        while let Some(idx) = current {
            let node = &self.nodes[idx];
            path.push(node.state);
            if let Some(action) = node.action {
                actions.push(action);
            }
            current = node.parent;
        }

        path.reverse();
        actions.reverse();
        (path, actions)
    }

    /// Consumes the tree; only the terminal's ancestor chain survives.
    pub fn into_solution(self, terminal: usize, stats: SearchStats) -> Solution<S, A> {
        let (path, actions) = self.reconstruct(terminal);
        Solution {
            path,
            actions,
            cost: self.nodes[terminal].path_cost,
            stats,
        }
    }
}

impl<S: Copy, A: Copy> Default for SearchTree<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Index<usize> for SearchTree<S, A> {
    type Output = Node<S, A>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.nodes[idx]
    }
}
