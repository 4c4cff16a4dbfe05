//! A fully safe prototype of the symmetric-link scheme, built on
//! `GhostCell` and `StaticRc` instead of raw pointers.
//!
//! Nodes keep an unordered pair of neighbor links and the list keeps an
//! unordered pair of end links, so the two ends are interchangeable:
//! reversing is swapping the end slots, and a traversal recovers its
//! direction at every node by asking which link does not lead back to
//! where it came from. No public surface; this module exists to check
//! the scheme against the borrow checker.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct List<'id, T> {
    ends: [Option<NodePtr<'id, T>>; 2],
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    elem: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(elem: T) -> Self {
        let links = [None, None];
        Self { elem, links }
    }

    /// The slot currently holding no neighbor. Meaningful for end nodes
    /// only, which have at most one occupied slot towards the inside.
    fn vacant_slot(&self) -> usize {
        self.links[0].is_some() as usize
    }
}

impl<'id, T> Default for List<'id, T> {
    fn default() -> Self {
        let ends = [None, None];
        Self { ends }
    }
}

impl<'id, T> List<'id, T> {
    const FRONT: usize = 0;
    const BACK: usize = 1;

    /// Each node is owned by two half-references: one per neighbor, with
    /// the list's end slots standing in for the missing neighbors of the
    /// two end nodes. Pushing therefore splits a fresh node in two
    /// halves, one into the old end node's vacant slot and one into the
    /// end slot of the list.
    fn push_at(&mut self, side: usize, elem: T, token: &mut GhostToken<'id>) {
        debug_assert!(side < 2);
        let (inner, outer) = Full::split(Full::new(GhostCell::new(Node::new(elem))));
        match self.ends[side].take() {
            Some(old_end) => {
                // Hand the old end node the new node's first half, then
                // store the old end's half in the new node; afterwards
                // they hold each other.
                let vacant = old_end.deref().borrow(token).vacant_slot();
                old_end.deref().borrow_mut(token).links[vacant] = Some(inner);
                outer.deref().borrow_mut(token).links[0] = Some(old_end);
            }
            None => {
                self.ends[1 - side] = Some(inner);
            }
        }
        self.ends[side] = Some(outer);
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let outer = self.ends[side].take()?;
        let neighbor = {
            let links = &mut outer.deref().borrow_mut(token).links;
            match links[0].take() {
                Some(neighbor) => Some(neighbor),
                None => links[1].take(),
            }
        };
        let inner = match neighbor {
            Some(neighbor) => {
                // The neighbor holds the popped node's second half; vacate
                // it and promote the neighbor to be the new end node.
                let half = {
                    let links = &mut neighbor.deref().borrow_mut(token).links;
                    let which = match &links[0] {
                        Some(half) if std::ptr::eq(half.deref(), outer.deref()) => 0,
                        _ => 1,
                    };
                    links[which]
                        .take()
                        .expect("the popped node's second half must be with its neighbor")
                };
                self.ends[side] = Some(neighbor);
                half
            }
            // A single node is held by both end slots.
            None => self.ends[1 - side]
                .take()
                .expect("a single node is held by both ends"),
        };
        Some(Full::into_box(Full::join(outer, inner)).into_inner().elem)
    }
}

impl<'id, T> List<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn is_empty(&self) -> bool {
        self.ends[Self::FRONT].is_none()
    }
    /// Swap the two end slots; the list now reads the other way around.
    pub fn reverse(&mut self) {
        self.ends.swap(Self::FRONT, Self::BACK);
    }
    pub fn push_back(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::BACK, elem, token);
    }
    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::BACK, token)
    }
    pub fn push_front(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::FRONT, elem, token);
    }
    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::FRONT, token)
    }

    /// Walk from the front end, resolving the next link at every node as
    /// "the occupied link that does not lead back".
    pub fn to_vec(&self, token: &GhostToken<'id>) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        let mut prev: Option<&GhostCell<'id, Node<'id, T>>> = None;
        let mut current = self.ends[Self::FRONT].as_ref().map(Deref::deref);
        while let Some(cell) = current {
            let node = cell.borrow(token);
            out.push(node.elem.clone());
            let next = node
                .links
                .iter()
                .filter_map(|link| link.as_ref().map(Deref::deref))
                .find(|candidate| prev.map_or(true, |prev| !std::ptr::eq(prev, *candidate)));
            prev = Some(cell);
            current = next;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::List;
    use ghost_cell::GhostToken;

    #[test]
    fn list_push_pop() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            assert!(list.is_empty());
            list.push_back(2, &mut token);
            list.push_front(1, &mut token);
            list.push_back(3, &mut token);
            assert!(!list.is_empty());
            assert_eq!(list.to_vec(&token), vec![1, 2, 3]);
            assert_eq!(list.pop_back(&mut token), Some(3));
            assert_eq!(list.pop_front(&mut token), Some(1));
            assert_eq!(list.pop_front(&mut token), Some(2));
            assert_eq!(list.pop_front(&mut token), None);
            assert!(list.is_empty());
        })
    }

    #[test]
    fn list_reverse_is_an_end_swap() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            for elem in 1..=4 {
                list.push_back(elem, &mut token);
            }
            assert_eq!(list.to_vec(&token), vec![1, 2, 3, 4]);

            list.reverse();
            assert_eq!(list.to_vec(&token), vec![4, 3, 2, 1]);
            assert_eq!(list.pop_front(&mut token), Some(4));
            assert_eq!(list.pop_back(&mut token), Some(1));

            list.reverse();
            assert_eq!(list.to_vec(&token), vec![2, 3]);
        })
    }
}
