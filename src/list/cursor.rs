use crate::list::{List, Raw};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth.
///
/// A cursor is a position plus a direction bit: the bit records which of
/// the two neighbor slots of the current node the cursor treats as
/// "next". Moving the cursor re-resolves the bit at every step, so the
/// cursor keeps going the same logical way no matter how the slots of the
/// nodes it passes happen to be ordered.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the past-last sentinel
/// of the list.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The past-last
/// sentinel of the list is denoted by `#`).
/// ```
/// use symmetric_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Create a cursor in the end and move forward: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// // Move cursor forward, cyclically: [|A B C D #] (index = 0)
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) raw: Raw<T>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            raw: self.raw,
            list: self.list,
        }
    }
}

/// Compare cursors by their position.
///
/// Only cursors that belong to the same list and sit at the same position
/// are considered equal. The direction bits do not participate: two
/// cursors at the same node are the same position even if they were
/// minted on opposite sides of a reversal.
///
/// # Examples
/// ```
/// use symmetric_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next_cyclic();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different list, different positions.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.raw.node == other.raw.node
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// Compare cursors by their position.
///
/// Only cursors belonging to the same list can compare, so it is
/// `PartialOrd` but not `Ord`.
///
/// # Examples
/// ```
/// use symmetric_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// cursor2.move_next_cyclic();
/// // They belong to the same list, can compare.
/// assert!(cursor1 < cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_end();
/// // They belong to different lists, cannot compare.
/// assert_eq!(cursor1.partial_cmp(&cursor3), None);
/// ```
impl<'a, T: 'a> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index().cmp(&other.index()))
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek
/// back-and-forth, and can safely mutate the list during iteration. This
/// is because the lifetime of its yielded references is tied to its own
/// lifetime, instead of just the underlying list. This means cursors
/// cannot yield multiple elements at once.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily
/// borrow the list and returns an immutable reference whose lifetime is
/// shorter than the cursor. See the documents for details.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the past-last sentinel
/// of the list.
///
/// # Examples
///
/// ```compile_fail
/// use symmetric_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    pub(crate) raw: Raw<T>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_past_last(&self) -> bool {
                self.raw.node == self.list.raw_end().node
            }
            pub(crate) fn is_first(&self) -> bool {
                // SAFETY: every cursor position keeps its inward slot
                // occupied, so reading the previous node is fine.
                unsafe { self.raw.prev_node() } == Some(self.list.raw_head().node)
            }

            /// Move forward the cursor by given steps, without checking
            /// whether it will pass through the past-last sentinel.
            ///
            /// It is unsafe because if the moving passes through the
            /// sentinel, the index will be invalid (and the walk falls off
            /// the open end of the list).
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                self.index = self.index.saturating_add(steps);
                (0..steps).for_each(|_| self.raw = self.raw.advance());
            }

            /// Move backward the cursor by given steps, without checking
            /// whether it will pass through the before-first sentinel.
            ///
            /// It is unsafe because if the moving passes through the
            /// sentinel, the index will be invalid (and the walk falls off
            /// the open end of the list).
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                self.index = self.index.saturating_sub(steps);
                (0..steps).for_each(|_| self.raw = self.raw.retreat());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, where passing through
            /// the past-last sentinel is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use symmetric_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the past-last sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            /// cursor.move_next_cyclic();
            ///
            /// // The cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_next_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                if self.is_past_last() {
                    self.index = 0;
                    self.raw = self.list.raw_begin();
                } else {
                    self.index += 1;
                    // SAFETY: the cursor is not at the past-last sentinel,
                    // so the next position exists.
                    self.raw = unsafe { self.raw.advance() };
                }
            }

            /// Move the cursor to the previous position, where passing
            /// through the past-last sentinel is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use symmetric_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// cursor.move_prev_cyclic();
            ///
            /// // The cursor is now at the past-last sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn move_prev_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                if self.is_first() {
                    self.index = self.list.len();
                    self.raw = self.list.raw_end();
                } else {
                    self.index -= 1;
                    // SAFETY: the cursor is not at the first position, so
                    // the previous position exists.
                    self.raw = unsafe { self.raw.retreat() };
                }
            }

            /// Move the cursor to the next position, or return an error
            /// when it would pass the past-last sentinel.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use symmetric_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the past-last sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            ///
            /// // Forbid to move past the boundary
            /// assert!(cursor.move_next().is_err());
            ///
            /// // The cursor is still at the past-last sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if !self.is_empty() && !self.is_past_last() {
                    self.move_next_cyclic();
                    return Ok(());
                }
                Err("`move_next` across the past-last boundary")
            }

            /// Move the cursor to the previous position, or return an
            /// error when it would pass the before-first sentinel.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use symmetric_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Forbid to move past the boundary
            /// assert!(cursor.move_prev().is_err());
            ///
            /// // The cursor is still at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_prev(&mut self) -> Result<(), &'static str> {
                if !self.is_empty() && !self.is_first() {
                    self.move_prev_cyclic();
                    return Ok(());
                }
                Err("`move_prev` across the before-first boundary")
            }

            /// Move forward the cursor by given steps, or return an error
            /// when it would pass the past-last sentinel.
            ///
            /// If an error occurs, the cursor will stay at the past-last
            /// sentinel.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use symmetric_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Forbid to move past the boundary
            /// assert!(cursor.seek_forward(5).is_err());
            ///
            /// // The cursor is now at the past-last sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }

            /// Move backward the cursor by given steps, or return an error
            /// when it would pass the before-first sentinel.
            ///
            /// If an error occurs, the cursor will stay at the first node.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use symmetric_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the past-last sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            ///
            /// // Forbid to move past the boundary
            /// assert!(cursor.seek_backward(5).is_err());
            ///
            /// // The cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_prev().map_err(|_| i))
            }

            /// Move the cursor to the given position `target`, or return
            /// an error when `target > len`.
            ///
            /// If an error occurs, the cursor will stay put.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use symmetric_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Move cursor to a valid place (at the third node)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Forbid to move to an invalid place
            /// assert!(cursor.seek_to(5).is_err());
            ///
            /// // The cursor is still at the third node
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                if target == self.index {
                    return Ok(());
                }
                let len = self.list.len();
                match target {
                    target if target > len => return Err(target - len),
                    0 => self.move_to_start(),
                    target if target == len => self.move_to_end(),
                    _ => unsafe {
                        // current=c, target=t, past-last=#
                        if target > self.index {
                            // target is at the right side of current: [   c----->t   #]
                            if target - self.index <= len - target {
                                // target is near the right side of current: [    c-->t     #]
                                self.seek_forward_fast(target - self.index);
                            } else {
                                // target is far from the right side of current: [ c     t<--#]
                                self.move_to_end();
                                self.seek_backward_fast(len - target);
                            }
                        } else {
                            // target is at the left side of current: [   t<-----c   #]
                            if self.index - target <= target {
                                // target is near the left side of current: [    t<--c     #]
                                self.seek_backward_fast(self.index - target);
                            } else {
                                // target is far from the left side of current: [-->t      c #]
                                self.move_to_start();
                                self.seek_forward_fast(target);
                            }
                        }
                    },
                }
                Ok(())
            }

            /// Set the cursor to the start of the list (i.e. the first
            /// node).
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use symmetric_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the past-last sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            /// cursor.move_to_start();
            ///
            /// // The cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.raw = self.list.raw_begin();
            }

            /// Set the cursor to the end of the list (i.e. the past-last
            /// sentinel).
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use symmetric_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// cursor.move_to_end();
            ///
            /// // The cursor is now at the past-last sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.raw = self.list.raw_end();
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, raw: Raw<T>, index: usize) -> Self {
        Self { index, raw, list }
    }

    pub(crate) fn same_list_with(&self, other: &Self) -> bool {
        self.list as *const _ == other.list as *const _
    }

    /// Return an immutable reference to the element at the cursor, or
    /// return `None` if it is located at the past-last sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(0).current(), Some(&1));
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(2).current(), Some(&3));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_past_last() {
            return None;
        }
        // SAFETY: a non-sentinel position always holds a valid element.
        Some(unsafe { self.raw.element() })
    }

    /// Return an immutable reference to the element before the cursor, or
    /// return `None` if it is located at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(0).previous(), None);
    /// assert_eq!(list.cursor(1).previous(), Some(&1));
    /// assert_eq!(list.cursor(2).previous(), Some(&2));
    /// assert_eq!(list.cursor(3).previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_first() {
            return None;
        }
        // SAFETY: the previous position of a non-first position is never
        // a sentinel, and non-sentinel positions hold valid elements.
        Some(unsafe { self.raw.retreat().element() })
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, raw: Raw<T>, index: usize) -> Self {
        Self { index, raw, list }
    }

    /// Return an immutable reference to the element at the cursor, or
    /// return `None` if it is located at the past-last sentinel.
    pub fn current(&self) -> Option<&T> {
        if self.is_past_last() {
            return None;
        }
        // SAFETY: a non-sentinel position always holds a valid element.
        Some(unsafe { self.raw.element() })
    }

    /// Return an immutable reference to the element before the cursor, or
    /// return `None` if it is located at the first node.
    pub fn previous(&self) -> Option<&T> {
        if self.is_first() {
            return None;
        }
        // SAFETY: the previous position of a non-first position is never
        // a sentinel, and non-sentinel positions hold valid elements.
        Some(unsafe { self.raw.retreat().element() })
    }

    /// Return a mutable reference to the element at the cursor, or return
    /// `None` if it is located at the past-last sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// // Create a cursor and mutate the element in the current node.
    /// let mut cursor = list.cursor_mut(0);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the past-last sentinel.
    /// assert!(list.cursor_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_past_last() {
            return None;
        }
        // SAFETY: a non-sentinel position always holds a valid element.
        Some(unsafe { self.raw.element_mut() })
    }

    /// Return a mutable reference to the element before the cursor, or
    /// return `None` if it is located at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// // Create a cursor and mutate the element in the previous node.
    /// let mut cursor = list.cursor_mut(3);
    /// *cursor.previous_mut().unwrap() *= 5;
    /// assert_eq!(cursor.previous(), Some(&15));
    ///
    /// // There is nothing before the first node.
    /// assert!(list.cursor_mut(0).previous_mut().is_none());
    /// ```
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        if self.is_first() {
            return None;
        }
        // SAFETY: the previous position of a non-first position is never
        // a sentinel, and non-sentinel positions hold valid elements.
        Some(unsafe { self.raw.retreat().element_mut() })
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.raw, self.index)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.raw, self.index)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list is not able to read while a mutable
    /// cursor is created and being used. This method provides an ability
    /// of temporarily reading the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Some(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(Vec::from_iter(list), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Add an element before the cursor position.
    ///
    /// After insertion, the cursor stays put but its `index` becomes
    /// `index + 1`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        // SAFETY: `self.raw` is a valid position of the list the cursor
        // borrows.
        unsafe { self.list.insert_raw(self.raw, item) };
        self.index += 1;
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the past-last sentinel. After removal, the
    /// cursor is moved to the next node unless no removing happened.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.remove(), Some(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.remove(), Some(0)); // becomes [1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 0);
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(cursor.index(), 8);
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 6, 7, 8, 9]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_past_last() {
            return None;
        }
        // SAFETY: `self.raw` is a valid non-sentinel position of the list
        // the cursor borrows.
        let (element, next) = unsafe { self.list.erase_raw(self.raw) };
        self.raw = next;
        Some(element)
    }

    /// Remove the element before the cursor and return it, or return
    /// `None` if the cursor is at the first node. After removal, the
    /// cursor is not moved, but its `index` becomes `index - 1`.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.backspace(), Some(4)); // becomes [0, 1, 2, 3, 5, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 4);
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.backspace(), None);
    /// assert_eq!(cursor.index(), 0);
    /// assert_eq!(cursor.current(), Some(&0));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.backspace(), Some(9)); // becomes [0, 1, 2, 3, 5, 6, 7, 8]
    /// assert_eq!(cursor.index(), 8);
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }

    /// Split the list into two after the current element (inclusive).
    /// This will return a new list consisting of everything after the
    /// cursor (inclusive), with the original list retaining everything
    /// before (exclusive).
    ///
    /// If the cursor is pointing at the past-last sentinel, `None` will
    /// be returned.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// let list2 = cursor.split().unwrap();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.index(), 5);
    ///
    /// assert_eq!(Vec::from_iter(list2), vec![5, 6, 7, 8, 9]);
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn split(&mut self) -> Option<List<T>> {
        if self.is_past_last() {
            return None;
        }
        let len = self.list.len - self.index;
        // After splitting, the cursor is pointing to the past-last
        // sentinel, and its index is already the new length.
        let first = std::mem::replace(&mut self.raw, self.list.raw_end());
        let last = self.list.raw_last();
        // SAFETY: `first` is a non-sentinel position, so `first..=last`
        // is a valid range holding exactly `len` nodes.
        unsafe {
            Some(List::from_detached(
                self.list.detach_range(first, last, len),
            ))
        }
    }

    /// Split the list into two before the current element (exclusive).
    /// This will return a new list consisting of everything before the
    /// cursor (exclusive), with the original list retaining everything
    /// after (inclusive).
    ///
    /// If the cursor is pointing at the first node, `None` will be
    /// returned.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// let list2 = cursor.split_before().unwrap();
    /// assert_eq!(cursor.current(), Some(&5));
    /// assert_eq!(cursor.index(), 0);
    ///
    /// assert_eq!(Vec::from_iter(list2), vec![0, 1, 2, 3, 4]);
    /// assert_eq!(Vec::from_iter(list), vec![5, 6, 7, 8, 9]);
    /// ```
    pub fn split_before(&mut self) -> Option<List<T>> {
        if self.is_first() {
            return None;
        }
        // After splitting, the current node becomes a first node, so its
        // index becomes 0.
        let len = std::mem::replace(&mut self.index, 0);
        let first = self.list.raw_begin();
        // SAFETY: the cursor is not at the first position, so its
        // predecessor exists and `first..=predecessor` is a valid range
        // holding exactly `len` nodes.
        let last = unsafe { self.raw.retreat() };
        unsafe {
            Some(List::from_detached(
                self.list.detach_range(first, last, len),
            ))
        }
    }

    /// Splice another list between the current node and its previous
    /// node. The spliced list becomes empty but stays valid for further
    /// use.
    ///
    /// The spliced chain arrives in its own current traversal order, even
    /// if `other` has been reversed.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([0, 1, 7, 8, 9]);
    /// let mut list2 = List::from_iter([2, 3, 4, 5, 6]);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// cursor.splice(&mut list2);
    /// assert_eq!(cursor.current(), Some(&7));
    /// assert_eq!(cursor.index(), 7);
    ///
    /// assert!(list2.is_empty());
    /// assert_eq!(Vec::from_iter(list), Vec::from_iter(0..10));
    /// ```
    pub fn splice(&mut self, other: &mut List<T>) {
        if let Some(detached) = other.detach_all() {
            self.index += detached.len;
            // SAFETY: `self.raw` is a valid position of the list the
            // cursor borrows, and the detached range is well-formed.
            unsafe { self.list.attach_range(self.raw, detached) };
        }
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_movement() {
        let list = List::from_iter(0..5);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current(), Some(&0));
        assert_eq!(cursor.previous(), None);

        assert!(cursor.seek_forward(4).is_ok());
        assert_eq!(cursor.current(), Some(&4));
        assert_eq!(cursor.previous(), Some(&3));

        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.index(), 5);
        assert!(cursor.move_next().is_err());

        cursor.move_next_cyclic();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current(), Some(&0));

        cursor.move_prev_cyclic();
        assert_eq!(cursor.index(), 5);
        assert_eq!(cursor.previous(), Some(&4));
    }

    #[test]
    fn cursor_seek_to() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor_start();

        assert!(cursor.seek_to(7).is_ok());
        assert_eq!(cursor.current(), Some(&7));

        assert!(cursor.seek_to(2).is_ok());
        assert_eq!(cursor.current(), Some(&2));

        assert!(cursor.seek_to(10).is_ok());
        assert_eq!(cursor.current(), None);

        assert_eq!(cursor.seek_to(12), Err(2));
        assert_eq!(cursor.index(), 10);
    }

    #[test]
    fn cursor_movement_on_empty_list() {
        let list = List::<i32>::new();
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), None);
        assert!(cursor.move_next().is_err());
        assert!(cursor.move_prev().is_err());
        cursor.move_next_cyclic();
        assert_eq!(cursor.index(), 0);
        assert_eq!(list.cursor_start(), list.cursor_end());
    }

    #[test]
    fn cursor_movement_after_reverse() {
        let mut list = List::from_iter(0..5);
        list.reverse();

        let mut cursor = list.cursor_start();
        assert_eq!(cursor.current(), Some(&4));
        assert!(cursor.seek_forward(3).is_ok());
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.previous(), Some(&2));

        let mut cursor = list.cursor_end();
        assert!(cursor.move_prev().is_ok());
        assert_eq!(cursor.current(), Some(&0));
    }

    #[test]
    fn cursor_mut_insert_and_remove() {
        let mut list = List::from_iter(0..5);
        let mut cursor = list.cursor_mut(2);

        cursor.insert(10);
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.current(), Some(&2));

        assert_eq!(cursor.remove(), Some(2));
        assert_eq!(cursor.current(), Some(&3));

        assert_eq!(cursor.backspace(), Some(10));
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.index(), 2);

        assert_eq!(Vec::from_iter(list), vec![0, 1, 3, 4]);
    }

    #[test]
    fn cursor_mut_insert_after_reverse() {
        let mut list = List::from_iter(0..3);
        list.reverse();

        let mut cursor = list.cursor_mut(1);
        cursor.insert(10);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 10, 1, 0]);

        list.reverse();
        assert_eq!(Vec::from_iter(list), vec![0, 1, 10, 2]);
    }

    #[test]
    fn cursor_mut_split_and_splice() {
        let mut list = List::from_iter(0..6);

        let mut tail_half = list.cursor_mut(3).split().unwrap();
        assert_eq!(Vec::from_iter(tail_half.iter().copied()), vec![3, 4, 5]);
        assert_eq!(list.len(), 3);

        // Splice it back where it came from.
        let mut cursor = list.cursor_end_mut();
        cursor.splice(&mut tail_half);
        assert_eq!(cursor.index(), 6);
        assert!(tail_half.is_empty());
        assert_eq!(Vec::from_iter(list.iter().copied()), Vec::from_iter(0..6));

        let mut list = List::from_iter(0..6);
        let front_half = list.cursor_mut(3).split_before().unwrap();
        assert_eq!(Vec::from_iter(front_half), vec![0, 1, 2]);
        assert_eq!(Vec::from_iter(list), vec![3, 4, 5]);
    }
}
