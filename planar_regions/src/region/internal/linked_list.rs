//! Index based doubly linked list used for the sweep event queue and sweep status.
//!
//! Nodes live in an arena (`Vec`) and are referenced by [NodeId], links are stored as indexes so
//! nodes can refer to each other (events to their partner event, status nodes to events) without
//! cyclic ownership. Unlinked nodes stay in the arena until the list is dropped, a list only lives
//! for a single sweep so nothing is reclaimed early.

/// Index of a node in a [NodeList] arena.
pub type NodeId = usize;

/// Boundary around the first node that satisfied a predicate, see [NodeList::find_transition].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Last node that did not satisfy the predicate (`None` if the transition is at the head).
    pub before: Option<NodeId>,
    /// First node that satisfied the predicate (`None` if no node satisfied it).
    pub after: Option<NodeId>,
}

#[derive(Debug, Clone)]
struct ListNode<D> {
    data: D,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    linked: bool,
}

#[derive(Debug, Clone)]
pub struct NodeList<D> {
    nodes: Vec<ListNode<D>>,
    head: Option<NodeId>,
}

impl<D> Default for NodeList<D> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<D> NodeList<D> {
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
        }
    }

    /// Allocate a new unlinked node holding `data`.
    #[inline]
    pub fn alloc(&mut self, data: D) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(ListNode {
            data,
            prev: None,
            next: None,
            linked: false,
        });
        id
    }

    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &D {
        &self.nodes[id].data
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut D {
        &mut self.nodes[id].data
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].prev
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].next
    }

    #[inline]
    pub fn is_linked(&self, id: NodeId) -> bool {
        self.nodes[id].linked
    }

    /// Iterate the linked nodes from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.head, move |&id| self.nodes[id].next)
    }

    /// Scan from the head and return the boundary around the first node for which `pred` returns
    /// true.
    pub fn find_transition<F>(&self, mut pred: F) -> Transition
    where
        F: FnMut(&D) -> bool,
    {
        let mut before = None;
        let mut here = self.head;
        while let Some(id) = here {
            if pred(&self.nodes[id].data) {
                break;
            }
            before = here;
            here = self.nodes[id].next;
        }

        Transition {
            before,
            after: here,
        }
    }

    /// Link the unlinked node `id` exactly at `transition` (between `before` and `after`).
    pub fn insert_at(&mut self, id: NodeId, transition: Transition) {
        debug_assert!(!self.nodes[id].linked, "node is already linked");
        let Transition { before, after } = transition;
        {
            let node = &mut self.nodes[id];
            node.prev = before;
            node.next = after;
            node.linked = true;
        }

        match before {
            Some(b) => self.nodes[b].next = Some(id),
            None => self.head = Some(id),
        }

        if let Some(a) = after {
            self.nodes[a].prev = Some(id);
        }
    }

    /// Link the unlinked node `id` before the first node for which `pred` returns true, or at the
    /// tail if no node satisfies `pred`.
    #[inline]
    pub fn insert_before<F>(&mut self, id: NodeId, pred: F)
    where
        F: FnMut(&D) -> bool,
    {
        let transition = self.find_transition(pred);
        self.insert_at(id, transition);
    }

    /// Unlink node `id` from the list in constant time, nothing happens if it is not linked.
    pub fn remove(&mut self, id: NodeId) {
        if !self.nodes[id].linked {
            return;
        }

        let (prev, next) = {
            let node = &mut self.nodes[id];
            node.linked = false;
            (node.prev.take(), node.next.take())
        };

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }

        if let Some(n) = next {
            self.nodes[n].prev = prev;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_insert(list: &mut NodeList<i32>, value: i32) -> NodeId {
        let id = list.alloc(value);
        list.insert_before(id, |&here| value < here);
        id
    }

    fn values(list: &NodeList<i32>) -> Vec<i32> {
        list.iter().map(|id| *list.get(id)).collect()
    }

    #[test]
    fn insert_before_keeps_order() {
        let mut list = NodeList::new();
        for v in [5, 1, 3, 9, 3, 0] {
            sorted_insert(&mut list, v);
        }
        assert_eq!(values(&list), vec![0, 1, 3, 3, 5, 9]);
    }

    #[test]
    fn remove_head_middle_tail() {
        let mut list = NodeList::new();
        let ids: Vec<_> = [1, 2, 3, 4].iter().map(|&v| sorted_insert(&mut list, v)).collect();

        list.remove(ids[0]);
        assert_eq!(list.head(), Some(ids[1]));
        list.remove(ids[2]);
        assert_eq!(list.next(ids[1]), Some(ids[3]));
        assert_eq!(list.prev(ids[3]), Some(ids[1]));
        list.remove(ids[3]);
        assert_eq!(values(&list), vec![2]);

        // removing twice does nothing
        list.remove(ids[3]);
        assert_eq!(values(&list), vec![2]);
        assert!(!list.is_linked(ids[0]));

        list.remove(ids[1]);
        assert!(list.is_empty());
    }

    #[test]
    fn find_transition_boundaries() {
        let mut list = NodeList::new();
        let ids: Vec<_> = [10, 20, 30].iter().map(|&v| sorted_insert(&mut list, v)).collect();

        let t = list.find_transition(|&v| v > 15);
        assert_eq!(t, Transition { before: Some(ids[0]), after: Some(ids[1]) });

        let t = list.find_transition(|&v| v > 0);
        assert_eq!(t, Transition { before: None, after: Some(ids[0]) });

        let t = list.find_transition(|&v| v > 100);
        assert_eq!(t, Transition { before: Some(ids[2]), after: None });

        let id = list.alloc(25);
        let t = list.find_transition(|&v| v > 25);
        list.insert_at(id, t);
        assert_eq!(values(&list), vec![10, 20, 25, 30]);
    }
}
