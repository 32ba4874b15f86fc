use std::ops::Range;

/// Positions of a cursor inside the sequence it was created from.
///
/// ```text
///  base_front      front          back       base_back
///      |  dropped   |   visible    |  dropped   |
///      |   front    |              |   back     |
/// ```
///
/// The three regions are disjoint and their concatenation is the base, so
/// any of them can be turned back into a cursor and spliced onto its
/// neighbours.
///
/// # Examples
/// ```
/// use cursor_core::Window;
///
/// let mut w = Window::new(0..10);
/// w.drop_front_n(2);
/// w.drop_back_n(3);
/// assert_eq!(w.front()..w.back(), 2..7);
///
/// let whole = w.dropped_front().splice(w).splice(w.dropped_back());
/// assert_eq!(whole.front()..whole.back(), 0..10);
/// assert_eq!(whole.base(), 0..10);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Window {
    base_front: usize,
    front: usize,
    back: usize,
    base_back: usize,
}

impl Window {
    pub fn new(range: Range<usize>) -> Self {
        let Range { start, end } = range;
        debug_assert!(start <= end);
        Self { base_front: start, front: start, back: end, base_back: end }
    }
    pub fn from_parts(
        base_front: usize,
        front: usize,
        back: usize,
        base_back: usize,
    ) -> Self {
        debug_assert!(base_front <= front);
        debug_assert!(front <= back);
        debug_assert!(back <= base_back);
        Self { base_front, front, back, base_back }
    }

    pub fn front(&self) -> usize { self.front }
    pub fn back(&self) -> usize { self.back }
    pub fn base(&self) -> Range<usize> { self.base_front..self.base_back }
    pub fn visible(&self) -> Range<usize> { self.front..self.back }
    pub fn len(&self) -> usize { self.back - self.front }
    pub fn is_empty(&self) -> bool { self.front == self.back }
    pub fn dropped_front_len(&self) -> usize { self.front - self.base_front }
    pub fn dropped_back_len(&self) -> usize { self.base_back - self.back }

    pub fn drop_front(&mut self) { self.drop_front_n(1) }
    pub fn drop_front_n(&mut self, n: usize) {
        debug_assert!(n <= self.len(), "dropping past the back");
        self.front += n;
    }
    pub fn drop_back(&mut self) { self.drop_back_n(1) }
    pub fn drop_back_n(&mut self, n: usize) {
        debug_assert!(n <= self.len(), "dropping past the front");
        self.back -= n;
    }

    pub fn forget_front(&mut self) { self.base_front = self.front }
    pub fn forget_back(&mut self) { self.base_back = self.back }
    pub fn exhaust_front(&mut self) { self.front = self.back }
    pub fn exhaust_back(&mut self) { self.back = self.front }
    pub fn rewind_front(&mut self) { self.front = self.base_front }
    pub fn rewind_back(&mut self) { self.back = self.base_back }
    pub fn rewind(&mut self) {
        self.rewind_front();
        self.rewind_back();
    }

    /// The window over exactly the dropped front, with nothing dropped.
    pub fn dropped_front(&self) -> Self {
        Self::new(self.base_front..self.front)
    }
    /// The window over exactly the dropped back, with nothing dropped.
    pub fn dropped_back(&self) -> Self { Self::new(self.back..self.base_back) }

    /// Concatenates `self` and `other`, which must meet at
    /// `self.back() == other.front()`.
    ///
    /// The result keeps the dropped front of `self` and the dropped back of
    /// `other`.
    pub fn splice(self, other: Self) -> Self {
        debug_assert_eq!(self.back, other.front, "splicing apart windows");
        Self {
            base_front: self.base_front,
            front: self.front,
            back: other.back,
            base_back: other.base_back,
        }
    }
}

impl From<Range<usize>> for Window {
    fn from(range: Range<usize>) -> Self { Self::new(range) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_check() {
        let mut w = Window::new(3..8);
        assert_eq!(w.len(), 5);
        w.drop_front();
        w.drop_back_n(2);
        assert_eq!(w.visible(), 4..6);
        assert_eq!(w.dropped_front_len(), 1);
        assert_eq!(w.dropped_back_len(), 2);
        assert_eq!(w.dropped_front().visible(), 3..4);
        assert_eq!(w.dropped_back().visible(), 6..8);

        w.forget_front();
        assert_eq!(w.base(), 4..8);
        w.rewind_back();
        assert_eq!(w.visible(), 4..8);

        w.exhaust_front();
        assert!(w.is_empty());
        assert_eq!(w.front(), 8);
        w.rewind_front();
        assert_eq!(w.visible(), 4..8);
    }

    #[test]
    fn splice_restores_base() {
        for len in 0..8 {
            for lo in 0..=len {
                for hi in lo..=len {
                    let mut w = Window::new(0..len);
                    w.drop_front_n(lo);
                    w.drop_back_n(len - hi);
                    let before = w.dropped_front();
                    let after = w.dropped_back();
                    let whole = before.splice(w).splice(after);
                    assert_eq!(whole, Window::new(0..len));
                }
            }
        }
    }

    #[test]
    fn splice_keeps_outer_bookkeeping() {
        let left = Window::from_parts(0, 2, 5, 5);
        let right = Window::from_parts(5, 5, 7, 9);
        let joined = left.splice(right);
        assert_eq!(joined, Window::from_parts(0, 2, 7, 9));
        assert_eq!(joined.dropped_front(), Window::new(0..2));
        assert_eq!(joined.dropped_back(), Window::new(7..9));
    }
}
