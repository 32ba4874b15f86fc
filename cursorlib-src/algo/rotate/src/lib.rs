//! Rotations and shifts.
//!
//! [`rotate`] takes its two blocks from one cursor: the dropped front is the
//! first block and the visible part is the second.
//!
//! # Examples
//! ```
//! use cursor_core::{Cursor, ForwardCursor};
//! use rotate::rotate;
//! use slice_cursor::cursor_mut;
//!
//! let mut a = [1, 2, 3, 4, 5];
//! let mut c = cursor_mut(&mut a);
//! c.advance_by(2);
//! let c = rotate(c);
//! assert_eq!(c.position(), 3);
//! assert_eq!(a, [3, 4, 5, 1, 2]);
//! ```

use cursor_core::{
    BidirectionalCursor, CursorMut, ForwardCursor, OutputCursor, Window,
};
use results::InOut;

/// Swaps the dropped front with the visible part.
///
/// The returned cursor sees the elements that used to be the dropped front,
/// now at the end; its own dropped front is the block moved to the start.
pub fn rotate<C: CursorMut>(mut c: C) -> C {
    let w = c.window();
    let (mut first, mut mid, last) = (w.base().start, w.front(), w.back());
    let new_mid = first + (last - mid);
    if first != mid && mid != last {
        let mut next = mid;
        while first != next {
            c.swap_at(first, next);
            first += 1;
            next += 1;
            if next == last {
                next = mid;
            } else if first == mid {
                mid = next;
            }
        }
    }
    c.reseat(Window::from_parts(w.base().start, new_mid, last, w.base().end));
    c
}

/// Writes the visible part followed by the dropped front.
pub fn rotate_copy<C, O>(mut c: C, mut out: O) -> InOut<C, O>
where
    C: ForwardCursor + Clone,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    let head = c.dropped_front();
    for pos in c.window().visible().chain(head.window().visible()) {
        if out.is_full() {
            break;
        }
        out.put(c.at(pos).clone());
    }
    c.exhaust_front();
    InOut::new(c, out)
}

/// Moves the visible elements `n` places towards the front.
///
/// The result sees the shifted elements; the `n` vacated slots at the back
/// become its dropped back and hold the displaced elements in unspecified
/// order.  When `n` is not smaller than the length nothing moves and the
/// result is empty.
pub fn shift_left<C: CursorMut>(mut c: C, n: usize) -> C {
    let w = c.window();
    let (front, back) = (w.front(), w.back());
    let end = if n >= w.len() {
        front
    } else {
        for pos in front..back - n {
            c.swap_at(pos, pos + n);
        }
        back - n
    };
    c.reseat(Window::from_parts(w.base().start, front, end, w.base().end));
    c
}

/// Moves the visible elements `n` places towards the back; the mirror
/// image of [`shift_left`].
pub fn shift_right<C>(mut c: C, n: usize) -> C
where
    C: BidirectionalCursor + CursorMut,
{
    let w = c.window();
    let (front, back) = (w.front(), w.back());
    let start = if n >= w.len() {
        back
    } else {
        for pos in (front + n..back).rev() {
            c.swap_at(pos, pos - n);
        }
        front + n
    };
    c.reseat(Window::from_parts(w.base().start, start, back, w.base().end));
    c
}

#[cfg(test)]
mod tests {
    use cursor_core::{Cursor, RandomAccessCursor};
    use slice_cursor::{cursor, cursor_mut};

    use super::*;

    #[test]
    fn sanity_check() {
        for n in 0..9 {
            for k in 0..=n {
                let mut a: Vec<_> = (0..n).collect();
                let mut expected = a.clone();
                expected.rotate_left(k);

                let mut c = cursor_mut(&mut a);
                c.advance_by(k);
                let c = rotate(c);
                assert_eq!(c.position(), n - k);
                assert_eq!(c.len(), k);
                assert_eq!(a, expected, "n: {n}, k: {k}");
            }
        }
    }

    #[test]
    fn rotate_inside_larger_range() {
        let mut a = [9, 1, 2, 3, 4, 5, 9];
        let mut c = cursor_mut(&mut a);
        c.pop_back();
        c.pop_front();
        c.forget_front();
        c.advance_by(2);
        let c = rotate(c);
        assert_eq!(c.window().base(), 1..7);
        assert_eq!(c.as_slice(), [1, 2]);
        assert_eq!(a, [9, 3, 4, 5, 1, 2, 9]);
    }

    #[test]
    fn copying() {
        let a = [1, 2, 3, 4, 5];
        let mut c = cursor(&a);
        c.advance_by(2);
        let r = rotate_copy(c, vec![]);
        assert!(r.input.is_empty());
        assert_eq!(r.output, [3, 4, 5, 1, 2]);

        let mut buf = [0; 3];
        let r = rotate_copy(c, cursor_mut(&mut buf));
        assert!(r.output.is_empty());
        assert_eq!(buf, [3, 4, 5]);
    }

    #[test]
    fn shifts() {
        let mut a = [1, 2, 3, 4, 5];
        let c = shift_left(cursor_mut(&mut a), 2);
        assert_eq!(c.as_slice(), [3, 4, 5]);
        assert_eq!(c.window().dropped_back_len(), 2);

        let mut a = [1, 2, 3, 4, 5];
        let c = shift_right(cursor_mut(&mut a), 2);
        assert_eq!(c.as_slice(), [1, 2, 3]);
        assert_eq!(c.position(), 2);

        for n in [0, 5, 7] {
            let mut a = [1, 2, 3, 4, 5];
            let c = shift_left(cursor_mut(&mut a), n);
            if n == 0 {
                assert_eq!(c.len(), 5);
            } else {
                assert!(c.is_empty());
                assert_eq!(c.position(), 0);
            }
            let c = shift_right(cursor_mut(&mut a), n);
            if n == 0 {
                assert_eq!(c.len(), 5);
            } else {
                assert!(c.is_empty());
                assert_eq!(c.position(), 5);
            }
            assert_eq!(a, [1, 2, 3, 4, 5]);
        }
    }
}
