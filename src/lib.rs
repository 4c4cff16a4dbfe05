//! This crate provides a doubly-linked list with owned nodes whose links
//! carry no built-in direction, implemented over an unordered pair of
//! neighbor slots per node.
//!
//! The [`List`] allows inserting, removing elements at any given position
//! in constant time. Since no node ever records which neighbor is "next",
//! reversing the whole list and splicing one list into another are
//! constant time as well. In compromise, accessing or mutating
//! elements at any position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use symmetric_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([4, 9, 15]);
//!
//! list.push_back(1);
//! list.push_front(2);
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 4, 9, 15, 1]);
//!
//! list.reverse(); // O(1), no node is touched
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 15, 9, 4, 2]);
//!
//! assert_eq!(list.pop_front(), 1);
//! assert_eq!(Vec::from_iter(list), vec![15, 9, 4, 2]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!   ╔═══════════╗      ╔═══════════╗      ╔═══════════╗      ╔═══════════╗
//!   ║  slot 0   ║ ←──→ ║  slot 0   ║ ←─┐  ║  slot 1   ║ ←──→ ║  slot 0   ║
//!   ╟───────────╢      ╟───────────╢   └→ ╟───────────╢      ╟───────────╢
//!   ║  slot 1   ║ = ∅  ║  slot 1   ║ ←──→ ║  slot 0   ║  ┌─→ ║  slot 1   ║ = ∅
//!   ╟───────────╢      ╟───────────╢      ╟───────────╢  │   ╟───────────╢
//!   ┊no payload ┊      ║ payload T ║      ║ payload T ║  │   ┊no payload ┊
//!   └╌╌╌╌╌╌╌╌╌╌╌┘      ╚═══════════╝      ╚═══════════╝  │   └╌╌╌╌╌╌╌╌╌╌╌┘
//!   before-first           Node 0             Node 1     │    past-last
//!        ↑                                               │        ↑
//!   ╔═══════════╗                                        │        │
//!   ║ head ─────║────────────────────────────────────────┘        │
//!   ╟───────────╢  (head = before-first, forward bit)             │
//!   ║ tail ─────║─────────────────────────────────────────────────┘
//!   ╟───────────╢  (tail = past-last, forward bit)
//!   ║    len    ║
//!   ╚═══════════╝
//!       List
//! ```
//! (The slot numbers above are one possible arrangement; no arrangement
//! is privileged.)
//!
//! The `List` contains:
//! - two sentinel positions `head` and `tail`: the permanent valueless
//!   nodes `before-first` and `past-last`, each paired with a direction
//!   bit;
//! - a length field `len` indicating the length of the list.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - two neighbor slots with *no fixed meaning*: which slot leads towards
//!   the back of the list differs from node to node and is resolved
//!   during traversal (a node's neighbor knows which of its own slots
//!   points back, and the other one continues the walk);
//! - the actual payload `T` that depends on the element type of the
//!   list, except the two sentinels.
//!
//! Note that the sentinels have *NO* payload to save memory. Their
//! outward slots (`∅` above) stay permanently empty; every other slot in
//! the list is occupied.
//!
//! In an empty list, the two sentinels are linked directly to each other.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0,
//! 1, ..., *n* - 1, and the past-last sentinel is always indexed by *n*.
//!
//! # O(1) Reversal
//!
//! Because nodes do not know which neighbor is "next", the traversal
//! order of the list is a property of the two sentinel positions alone.
//! [`List::reverse`] swaps them and flips their direction bits, and
//! nothing else. Cursors and iterators minted afterwards observe the
//! reversed order, while positions obtained earlier keep moving in their
//! original sense. The same symmetry gives *O*(1) splicing of a whole
//! list into another, whichever orientation each one currently has.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended iterators and iterate the list like an array
//! (fused and non-cyclic). [`IterMut`] provides mutability of the
//! elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use symmetric_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide
//! more flexible ways of viewing a list.
//!
//! As the names suggest, they are like cursors and can move forward or
//! backward over the list. A cursor is exactly a (node, direction bit)
//! pair: the bit says which neighbor slot of the current node the cursor
//! treats as "next", and it is re-resolved on every move. In a list with
//! length *n*, there are *n* + 1 valid locations for the cursor, indexed
//! by 0, 1, ..., *n*, where *n* is the past-last sentinel of the list.
//!
//! ## Examples
//!
//! ```
//! use symmetric_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//!
//! let mut cursor = list.cursor_start();
//! assert_eq!(cursor.current(), Some(&1));
//! assert!(cursor.move_next().is_ok());
//! assert_eq!(cursor.current(), Some(&2));
//!
//! // Moving past either sentinel is reported, not absorbed.
//! assert!(cursor.seek_forward(2).is_ok());
//! assert!(cursor.move_next().is_err());
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides many useful ways to mutate the list in any
//! position.
//! - [`insert`]: insert a new item at the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//! - [`split`]: split the list into a new one, from the cursor position
//!   to the end;
//! - [`splice`]: splice another list before the cursor position, leaving
//!   it empty but reusable;
//!
//! ## Examples
//!
//! ```
//! use symmetric_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! # Directional Probe
//!
//! Two positions in one list do not reveal which one comes first; after
//! a few reversals, not even the parity of their direction bits does.
//! [`Cursor::direct`] answers the question at the cost of the distance
//! between them: two probes walk away from the cursor in lock-step, one
//! per neighbor slot, and whichever stands on the target first names the
//! direction. A probe that falls off an open end of the list is
//! abandoned. This is the building block for cutting an arbitrary
//! contiguous run out of a list without knowing its orientation; see the
//! [`office`] module for a client doing exactly that.
//!
//! ## Examples
//!
//! ```
//! use symmetric_list::{Direction, List};
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3, 4, 5]);
//! let it = list.cursor(3);
//! let dst = list.cursor(1);
//! assert_eq!(it.direct(&dst), Some((Direction::Backward, 2)));
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`Cursor::direct`]: crate::list::cursor::Cursor::direct
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`splice`]: crate::list::cursor::CursorMut::splice
//! [`office`]: crate::office

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{Direction, List};

pub mod list;
pub mod office;

mod experiments;
