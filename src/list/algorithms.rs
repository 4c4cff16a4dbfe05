use crate::list::cursor::Cursor;
use crate::list::{resolve, List, Node, Raw};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

/// The answer of a directional probe: how a target position is reached
/// from a probing cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Repeated forward movement of the probing cursor reaches the
    /// target.
    Forward,
    /// Repeated backward movement of the probing cursor reaches the
    /// target.
    Backward,
}

/// Walk two probes away from `from`, one through each neighbor slot, in
/// lock-step, until one of them stands on `to`.
///
/// Returns the direction bit at `from` that leads to `to` and the number
/// of steps taken. A probe that walks into the absent outward slot of a
/// sentinel is abandoned; if both die without meeting `to` (it lives in
/// another list), the probe returns `None`.
pub(crate) unsafe fn probe<T>(
    from: NonNull<Node<T>>,
    to: NonNull<Node<T>>,
) -> Option<(bool, usize)> {
    if from == to {
        return Some((true, 0));
    }
    let mut probes = [Some(Raw::new(from, false)), Some(Raw::new(from, true))];
    let mut steps = 0;
    while probes.iter().any(Option::is_some) {
        steps += 1;
        for (fwd, slot) in probes.iter_mut().enumerate() {
            if let Some(at) = *slot {
                *slot = match at.next_node() {
                    Some(next) => {
                        if next == to {
                            return Some((fwd == 1, steps));
                        }
                        Some(Raw::new(next, resolve(at.node, next)))
                    }
                    None => None,
                };
            }
        }
    }
    None
}

impl<'a, T: 'a> Cursor<'a, T> {
    /// Determine which way this cursor has to move to reach `target`, and
    /// how many steps it takes.
    ///
    /// Both probes start at this cursor's node and walk outwards in
    /// lock-step, one per neighbor slot; a probe that falls off an open
    /// end of the list is abandoned. The cost is therefore proportional
    /// to the distance between the two positions.
    ///
    /// Returns `None` if `target` belongs to a different list. If the two
    /// cursors sit at the same position, the answer is
    /// `(Direction::Forward, 0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::{Direction, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3, 4, 5]);
    ///
    /// let it = list.cursor(1);
    /// let dst = list.cursor(4);
    /// assert_eq!(it.direct(&dst), Some((Direction::Forward, 3)));
    /// assert_eq!(dst.direct(&it), Some((Direction::Backward, 3)));
    /// ```
    pub fn direct(&self, target: &Cursor<'_, T>) -> Option<(Direction, usize)> {
        if !self.same_list_with(target) {
            return None;
        }
        if self.raw.node == target.raw.node {
            return Some((Direction::Forward, 0));
        }
        // SAFETY: both positions belong to the same (valid) list.
        let (fwd, steps) = unsafe { probe(self.raw.node, target.raw.node) }?;
        let direction = if fwd == self.raw.fwd {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Some((direction, steps))
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetric_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{Direction, List};
    use std::iter::FromIterator;

    #[test]
    fn direct_finds_direction_and_distance() {
        let list = List::from_iter(0..5);

        assert_eq!(
            list.cursor(0).direct(&list.cursor(3)),
            Some((Direction::Forward, 3))
        );
        assert_eq!(
            list.cursor(3).direct(&list.cursor(0)),
            Some((Direction::Backward, 3))
        );
        assert_eq!(
            list.cursor(2).direct(&list.cursor(2)),
            Some((Direction::Forward, 0))
        );

        // The past-last sentinel is a reachable position like any other.
        assert_eq!(
            list.cursor(0).direct(&list.cursor_end()),
            Some((Direction::Forward, 5))
        );
        assert_eq!(
            list.cursor_end().direct(&list.cursor(4)),
            Some((Direction::Backward, 1))
        );
    }

    #[test]
    fn direct_distance_is_exact() {
        let list = List::from_iter(0..8);
        for i in 0..=8 {
            for j in 0..=8 {
                let (direction, steps) = list.cursor(i).direct(&list.cursor(j)).unwrap();
                assert_eq!(steps, (i as isize - j as isize).abs() as usize);
                if i < j {
                    assert_eq!(direction, Direction::Forward);
                } else if i > j {
                    assert_eq!(direction, Direction::Backward);
                }
            }
        }
    }

    #[test]
    fn direct_after_reverse() {
        let mut list = List::from_iter(0..6);
        list.reverse();

        // Fresh cursors observe the reversed order; the probe agrees with
        // their movement.
        let it = list.cursor(1);
        let dst = list.cursor(4);
        assert_eq!(it.current(), Some(&4));
        assert_eq!(dst.current(), Some(&1));
        assert_eq!(it.direct(&dst), Some((Direction::Forward, 3)));
        assert_eq!(dst.direct(&it), Some((Direction::Backward, 3)));
    }

    #[test]
    fn direct_other_list() {
        let list = List::from_iter(0..3);
        let other = List::from_iter(0..3);
        assert_eq!(list.cursor(0).direct(&other.cursor(1)), None);
    }

    #[test]
    fn list_compare_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let list = List::from_iter(0..4);
        let same = List::from_iter(0..4);
        let shorter = List::from_iter(0..3);
        let larger = List::from_iter(1..4);

        assert_eq!(list, same);
        assert_ne!(list, shorter);
        assert!(shorter < list);
        assert!(list < larger);

        let hash = |list: &List<i32>| {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&list), hash(&same));

        let cloned = list.clone();
        assert_eq!(list, cloned);
    }
}
