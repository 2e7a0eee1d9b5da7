//! In-memory backend
//!
//! Records every style, attribute, child and listener so tests can assert on
//! what a browser would have rendered.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Backend, Listener, SurfaceNode};
use crate::error::{BrickError, BrickResult};
use crate::types::Pixels;

/// Event delivered by [`MemoryNode::dispatch`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryEvent {
    /// Event type, e.g. `"click"`
    pub kind: String,
}

#[derive(Default)]
struct NodeData {
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    children: Vec<usize>,
    parent: Option<usize>,
    in_body: bool,
    listeners: Vec<(String, Listener<MemoryEvent>)>,
}

struct Tree {
    nodes: Vec<NodeData>,
    body: Vec<usize>,
    viewport: (Pixels, Pixels),
}

impl Tree {
    fn detach(&mut self, id: usize) {
        if let Some(parent) = self.nodes[id].parent.take() {
            self.nodes[parent].children.retain(|&c| c != id);
        }
        if self.nodes[id].in_body {
            self.nodes[id].in_body = false;
            self.body.retain(|&c| c != id);
        }
    }

    fn is_ancestor(&self, ancestor: usize, mut id: usize) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.nodes[id].parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }
}

/// Backend holding a simulated document
#[derive(Clone)]
pub struct MemoryBackend {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryBackend {
    /// Empty document with a 1280x720 viewport
    pub fn new() -> Self {
        Self::with_viewport(1280.0, 720.0)
    }

    /// Empty document with the given viewport size
    pub fn with_viewport(width: Pixels, height: Pixels) -> Self {
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: Vec::new(),
                body: Vec::new(),
                viewport: (width, height),
            })),
        }
    }

    /// Simulate a window resize
    pub fn set_viewport(&self, width: Pixels, height: Pixels) {
        self.tree.borrow_mut().viewport = (width, height);
    }

    /// Nodes appended directly to the body, in order
    pub fn body_children(&self) -> Vec<MemoryNode> {
        let ids = self.tree.borrow().body.clone();
        ids.into_iter().map(|id| self.node(id)).collect()
    }

    /// Total number of nodes ever created
    pub fn node_count(&self) -> usize {
        self.tree.borrow().nodes.len()
    }

    fn node(&self, id: usize) -> MemoryNode {
        MemoryNode {
            id,
            tree: Rc::clone(&self.tree),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tree = self.tree.borrow();
        f.debug_struct("MemoryBackend")
            .field("nodes", &tree.nodes.len())
            .field("viewport", &tree.viewport)
            .finish()
    }
}

impl Backend for MemoryBackend {
    type Node = MemoryNode;

    fn create_node(&self) -> BrickResult<MemoryNode> {
        let id = {
            let mut tree = self.tree.borrow_mut();
            tree.nodes.push(NodeData::default());
            tree.nodes.len() - 1
        };
        Ok(self.node(id))
    }

    fn attach_to_body(&self, node: &MemoryNode) -> BrickResult<()> {
        if !Rc::ptr_eq(&self.tree, &node.tree) {
            return Err(BrickError::SurfaceError(
                "node belongs to another document".to_string(),
            ));
        }
        let mut tree = self.tree.borrow_mut();
        tree.detach(node.id);
        tree.nodes[node.id].in_body = true;
        tree.body.push(node.id);
        Ok(())
    }

    fn viewport_size(&self) -> BrickResult<(Pixels, Pixels)> {
        Ok(self.tree.borrow().viewport)
    }
}

/// Handle to one node in a [`MemoryBackend`] document
#[derive(Clone)]
pub struct MemoryNode {
    id: usize,
    tree: Rc<RefCell<Tree>>,
}

impl MemoryNode {
    /// Position of this node in creation order
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current value of an inline style property
    pub fn style(&self, property: &str) -> Option<String> {
        self.tree.borrow().nodes[self.id].styles.get(property).cloned()
    }

    /// Current value of an attribute
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.tree.borrow().nodes[self.id]
            .attributes
            .get(name)
            .cloned()
    }

    pub fn children(&self) -> Vec<MemoryNode> {
        let ids = self.tree.borrow().nodes[self.id].children.clone();
        ids.into_iter()
            .map(|id| MemoryNode {
                id,
                tree: Rc::clone(&self.tree),
            })
            .collect()
    }

    pub fn parent(&self) -> Option<MemoryNode> {
        let parent = self.tree.borrow().nodes[self.id].parent;
        parent.map(|id| MemoryNode {
            id,
            tree: Rc::clone(&self.tree),
        })
    }

    /// Whether this node hangs directly off the body
    pub fn is_in_body(&self) -> bool {
        self.tree.borrow().nodes[self.id].in_body
    }

    /// Number of listeners registered for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.tree.borrow().nodes[self.id]
            .listeners
            .iter()
            .filter(|(kind, _)| kind == event)
            .count()
    }

    /// Fire `event` at this node, returning how many listeners ran
    ///
    /// Listeners may touch the document (including this node) while running.
    pub fn dispatch(&self, event: &str) -> usize {
        let mut listeners = std::mem::take(&mut self.tree.borrow_mut().nodes[self.id].listeners);
        let mut fired = 0;
        for (kind, callback) in listeners.iter_mut() {
            if *kind == event {
                callback(MemoryEvent {
                    kind: event.to_string(),
                });
                fired += 1;
            }
        }
        // Keep any listeners added during dispatch after the original ones
        let mut tree = self.tree.borrow_mut();
        let added = std::mem::take(&mut tree.nodes[self.id].listeners);
        listeners.extend(added);
        tree.nodes[self.id].listeners = listeners;
        fired
    }
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.tree, &other.tree)
    }
}

impl std::fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryNode").field("id", &self.id).finish()
    }
}

impl SurfaceNode for MemoryNode {
    type Event = MemoryEvent;

    fn set_style(&self, property: &str, value: &str) -> BrickResult<()> {
        self.tree.borrow_mut().nodes[self.id]
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn set_attribute(&self, name: &str, value: &str) -> BrickResult<()> {
        self.tree.borrow_mut().nodes[self.id]
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn append_child(&self, child: &MemoryNode) -> BrickResult<()> {
        if !Rc::ptr_eq(&self.tree, &child.tree) {
            return Err(BrickError::SurfaceError(
                "child belongs to another document".to_string(),
            ));
        }
        let mut tree = self.tree.borrow_mut();
        if tree.is_ancestor(child.id, self.id) {
            return Err(BrickError::SurfaceError(
                "cannot append a node to itself or its descendant".to_string(),
            ));
        }
        tree.detach(child.id);
        tree.nodes[child.id].parent = Some(self.id);
        tree.nodes[self.id].children.push(child.id);
        Ok(())
    }

    fn add_listener(&self, event: &str, callback: Listener<MemoryEvent>) -> BrickResult<()> {
        self.tree.borrow_mut().nodes[self.id]
            .listeners
            .push((event.to_string(), callback));
        Ok(())
    }
}
