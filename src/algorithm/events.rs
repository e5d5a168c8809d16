//! Traversal events and the named callback slots that observe them.
//!
//! A traversal emits a [`TraversalEvent`] at each step. Callbacks are connected
//! per [`EventKind`] under a name and run synchronously, in the order they were
//! connected. A callback only observes: it returns nothing and cannot steer the
//! traversal.

use std::collections::HashMap;
use std::fmt;
use std::ops::Add;

use num_traits::One;

use crate::algorithm::traits::check_storage;
use crate::graph::{EdgeDescriptor, VertexId};
use crate::Result;

/// The points in a traversal at which callbacks can be notified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A vertex is reached for the first time
    DiscoverVertex,
    /// A vertex is taken off the frontier
    ExamineVertex,
    /// An edge of the examined vertex is about to be inspected
    ExamineEdge,
    /// An edge led to an undiscovered vertex
    TreeEdge,
    /// An edge led to a vertex that was already discovered
    NonTreeEdge,
    /// An edge shortened the tentative distance of its target
    EdgeRelaxed,
    /// An edge did not improve the tentative distance of its target
    EdgeNotRelaxed,
    /// All edges of a vertex have been inspected
    FinishVertex,
}

/// Data handed to every callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalEvent<D> {
    pub kind: EventKind,
    /// The vertex the event is about; for edge events, the edge's target
    pub vertex: VertexId,
    /// For edge events, the vertex the edge was followed from
    pub predecessor: Option<VertexId>,
    pub edge: Option<EdgeDescriptor>,
    /// Distance (or tentative distance) of `vertex` at the time of the event
    pub distance: Option<D>,
}

impl<D> TraversalEvent<D> {
    pub(crate) fn for_vertex(kind: EventKind, vertex: VertexId, distance: Option<D>) -> Self {
        TraversalEvent {
            kind,
            vertex,
            predecessor: None,
            edge: None,
            distance,
        }
    }

    pub(crate) fn for_edge(kind: EventKind, edge: EdgeDescriptor, distance: Option<D>) -> Self {
        TraversalEvent {
            kind,
            vertex: edge.target,
            predecessor: Some(edge.source),
            edge: Some(edge),
            distance,
        }
    }
}

type Callback<'a, D> = Box<dyn FnMut(&TraversalEvent<D>) + 'a>;

struct Slot<'a, D> {
    name: String,
    callback: Callback<'a, D>,
}

/// Named callback slots, grouped by event kind
pub struct TraversalSignals<'a, D> {
    slots: HashMap<EventKind, Vec<Slot<'a, D>>>,
    /// Length of the shortest caller-provided storage attached by a recorder
    min_storage: Option<usize>,
}

impl<'a, D> TraversalSignals<'a, D> {
    pub fn new() -> Self {
        TraversalSignals {
            slots: HashMap::new(),
            min_storage: None,
        }
    }

    /// Connects a callback to one event kind under the given name
    pub fn connect<F>(&mut self, kind: EventKind, name: impl Into<String>, callback: F)
    where
        F: FnMut(&TraversalEvent<D>) + 'a,
    {
        self.slots.entry(kind).or_default().push(Slot {
            name: name.into(),
            callback: Box::new(callback),
        });
    }

    /// Removes every slot connected under `name` and returns how many were removed
    pub fn disconnect(&mut self, name: &str) -> usize {
        let mut removed = 0;
        for slots in self.slots.values_mut() {
            let before = slots.len();
            slots.retain(|slot| slot.name != name);
            removed += before - slots.len();
        }
        removed
    }

    /// Number of slots connected to an event kind
    pub fn slot_count(&self, kind: EventKind) -> usize {
        self.slots.get(&kind).map_or(0, Vec::len)
    }

    /// Returns true if no slot is connected to any event kind
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Vec::is_empty)
    }

    /// Invokes the slots connected to the event's kind, in connection order
    pub fn emit(&mut self, event: &TraversalEvent<D>) {
        if let Some(slots) = self.slots.get_mut(&event.kind) {
            for slot in slots.iter_mut() {
                (slot.callback)(event);
            }
        }
    }

    /// Records hop distances on tree edges: `storage[v] = storage[u] + 1`.
    ///
    /// The storage must be pre-initialized; vertices never discovered keep
    /// their initial value.
    pub fn record_distances<S>(&mut self, storage: &'a mut [S])
    where
        S: Copy + Add<Output = S> + One + 'a,
    {
        self.record_distances_on(EventKind::TreeEdge, storage);
    }

    /// Records hop distances on the given edge event
    pub fn record_distances_on<S>(&mut self, kind: EventKind, storage: &'a mut [S])
    where
        S: Copy + Add<Output = S> + One + 'a,
    {
        self.track_storage(storage.len());
        self.connect(kind, "record_distances", move |event| {
            if let Some(edge) = event.edge {
                storage[edge.target] = storage[edge.source] + S::one();
            }
        });
    }

    /// Records predecessors on tree edges: `storage[v] = u`.
    ///
    /// The source's own entry is never written.
    pub fn record_predecessors(&mut self, storage: &'a mut [VertexId]) {
        self.record_predecessors_on(EventKind::TreeEdge, storage);
    }

    /// Records predecessors on the given edge event
    pub fn record_predecessors_on(&mut self, kind: EventKind, storage: &'a mut [VertexId]) {
        self.track_storage(storage.len());
        self.connect(kind, "record_predecessors", move |event| {
            if let Some(edge) = event.edge {
                storage[edge.target] = edge.source;
            }
        });
    }

    /// Fails if an attached recorder cannot hold every vertex of the graph
    pub(crate) fn check_storage(&self, vertex_count: usize) -> Result<()> {
        match self.min_storage {
            Some(len) => check_storage(len, vertex_count),
            None => Ok(()),
        }
    }

    fn track_storage(&mut self, len: usize) {
        self.min_storage = Some(self.min_storage.map_or(len, |current| current.min(len)));
    }
}

impl<D> Default for TraversalSignals<'_, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for TraversalSignals<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, slots) in &self.slots {
            let names: Vec<&str> = slots.iter().map(|slot| slot.name.as_str()).collect();
            map.entry(kind, &names);
        }
        map.finish()
    }
}
