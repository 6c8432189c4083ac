//! Selectable, keyboard-navigable tree of rows shared by every view.
//!
//! Nodes live in a single arena owned by the [`ListEngine`]; children are
//! referenced by arena index. The tree is always replaced wholesale through
//! [`ListEngine::set`], never patched.
//!
//! # Behaviour
//! - At most one node is selected.
//! - Group nodes start collapsed; [`ListEngine::expand_all`] opens every one
//!   of them and individual nodes can never be toggled afterwards.
//! - [`ListEngine::move_selection`] walks the visible rows depth-first and
//!   wraps around at both ends.

use crate::core::entry::Entry;
use std::collections::{HashMap, HashSet};

/// Input shape for [`ListEngine::set`]: a node with its nested children.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeItem {
    pub id: i64,
    pub label: String,
    pub payload: Option<Entry>,
    pub children: Vec<TreeItem>,
}

impl TreeItem {
    pub fn leaf(id: i64, label: impl Into<String>, payload: Entry) -> Self {
        Self {
            id,
            label: label.into(),
            payload: Some(payload),
            children: Vec::new(),
        }
    }

    pub fn group(id: i64, label: impl Into<String>, children: Vec<TreeItem>) -> Self {
        Self {
            id,
            label: label.into(),
            payload: None,
            children,
        }
    }
}

/// A node stored in the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: i64,
    pub depth: usize,
    pub label: String,
    /// Arena indices of the children, in display order.
    pub children: Vec<usize>,
    pub payload: Option<Entry>,
}

impl Node {
    pub fn is_group(&self) -> bool {
        self.payload.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Default)]
pub struct ListEngine {
    nodes: Vec<Node>,
    roots: Vec<usize>,
    by_id: HashMap<i64, usize>,
    expanded: HashSet<i64>,
    selected: Option<i64>,
}

impl ListEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tree and clear the selection.
    pub fn set(&mut self, items: Vec<TreeItem>) {
        self.clear();
        for item in items {
            let index = self.insert(item, 0);
            self.roots.push(index);
        }
    }

    fn insert(&mut self, item: TreeItem, depth: usize) -> usize {
        let index = self.nodes.len();
        if self.by_id.insert(item.id, index).is_some() {
            log::warn!("Duplicate list node id {}", item.id);
        }
        self.nodes.push(Node {
            id: item.id,
            depth,
            label: item.label,
            children: Vec::with_capacity(item.children.len()),
            payload: item.payload,
        });

        for child in item.children {
            let child_index = self.insert(child, depth + 1);
            self.nodes[index].children.push(child_index);
        }
        index
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.by_id.clear();
        self.expanded.clear();
        self.selected = None;
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: i64) -> Option<&Node> {
        self.by_id.get(&id).map(|&index| &self.nodes[index])
    }

    pub fn children<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.children.iter().map(move |&index| &self.nodes[index])
    }

    pub fn expand_all(&mut self) {
        self.expanded = self
            .nodes
            .iter()
            .filter(|node| !node.children.is_empty())
            .map(|node| node.id)
            .collect();
    }

    /// Visible nodes in display order.
    pub fn rows(&self) -> Vec<&Node> {
        let mut rows = Vec::with_capacity(self.nodes.len());
        for &root in &self.roots {
            self.collect_rows(root, &mut rows);
        }
        rows
    }

    fn collect_rows<'a>(&'a self, index: usize, rows: &mut Vec<&'a Node>) {
        let node = &self.nodes[index];
        rows.push(node);
        if self.expanded.contains(&node.id) {
            for &child in &node.children {
                self.collect_rows(child, rows);
            }
        }
    }

    /// Select a visible node by id. Unknown or hidden ids clear the selection.
    pub fn select(&mut self, id: i64) {
        let visible = self.rows().iter().any(|node| node.id == id);
        self.selected = visible.then_some(id);
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.and_then(|id| self.node(id))
    }

    /// Position of the selected node within [`ListEngine::rows`].
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.rows().iter().position(|node| node.id == id)
    }

    /// Select the row at `index`, clamped into the visible range.
    pub fn select_index(&mut self, index: usize) {
        let target = {
            let rows = self.rows();
            if rows.is_empty() {
                None
            } else {
                Some(rows[index.min(rows.len() - 1)].id)
            }
        };
        self.selected = target;
    }

    pub fn move_selection(&mut self, direction: Direction) {
        let target = {
            let rows = self.rows();
            if rows.is_empty() {
                return;
            }

            let current = self
                .selected
                .and_then(|id| rows.iter().position(|node| node.id == id));
            let index = match (current, direction) {
                (None, _) => 0,
                (Some(index), Direction::Next) if index + 1 >= rows.len() => 0,
                (Some(index), Direction::Next) => index + 1,
                (Some(0), Direction::Prev) => rows.len() - 1,
                (Some(index), Direction::Prev) => index - 1,
            };
            rows[index].id
        };
        self.selected = Some(target);
    }
}
