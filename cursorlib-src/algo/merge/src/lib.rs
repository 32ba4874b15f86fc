//! Merging sorted runs.
//!
//! Both functions are stable: among equivalent elements, those of the first
//! run come first.

use cursor_core::{Cursor, CursorMut, ForwardCursor, OutputCursor, Window};
use partition::partition_point_in;
use results::InInOut;
use rotate::rotate;

pub fn merge<C1, C2, O>(c1: C1, c2: C2, out: O) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: PartialOrd + Clone,
    O: OutputCursor<C1::Item>,
{
    merge_by(c1, c2, out, |x, y| x < y)
}

pub fn merge_by<C1, C2, O>(
    mut c1: C1,
    mut c2: C2,
    mut out: O,
    mut is_less: impl FnMut(&C1::Item, &C1::Item) -> bool,
) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: Clone,
    O: OutputCursor<C1::Item>,
{
    while !out.is_full() {
        let take_second = match (c1.is_empty(), c2.is_empty()) {
            (true, true) => break,
            (true, false) => true,
            (false, true) => false,
            (false, false) => is_less(c2.front(), c1.front()),
        };
        if take_second {
            out.put(c2.front().clone());
            c2.pop_front();
        } else {
            out.put(c1.front().clone());
            c1.pop_front();
        }
    }
    InInOut::new(c1, c2, out)
}

/// Merges the dropped front with the visible part, both sorted.
///
/// Works without a buffer by splitting the longer run in half, bisecting
/// the split point in the other run and rotating the middle blocks, for
/// O(n log n) comparisons.  The merged range becomes the dropped front of
/// the returned cursor.
pub fn inplace_merge<C>(c: C) -> C
where
    C: CursorMut,
    C::Item: PartialOrd,
{
    inplace_merge_by(c, |x, y| x < y)
}

pub fn inplace_merge_by<C: CursorMut>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C {
    let w = c.window();
    merge_rec(&mut c, w.base().start, w.front(), w.back(), &mut is_less);
    let base = w.base();
    c.reseat(Window::from_parts(base.start, w.back(), w.back(), base.end));
    c
}

fn merge_rec<C, F>(
    c: &mut C,
    first: usize,
    mid: usize,
    last: usize,
    is_less: &mut F,
) where
    C: CursorMut,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let (len1, len2) = (mid - first, last - mid);
    if len1 == 0 || len2 == 0 {
        return;
    }
    if len1 + len2 == 2 {
        if is_less(c.at(mid), c.at(first)) {
            c.swap_at(first, mid);
        }
        return;
    }
    let (cut1, cut2) = if len1 > len2 {
        let cut1 = first + len1 / 2;
        let x = c.at(cut1);
        (cut1, partition_point_in(&*c, mid..last, |y| is_less(y, x)))
    } else {
        let cut2 = mid + len2 / 2;
        let y = c.at(cut2);
        (partition_point_in(&*c, first..mid, |x| !is_less(y, x)), cut2)
    };
    c.reseat(Window::from_parts(cut1, mid, cut2, cut2));
    let new_mid = rotate(&mut *c).position();
    merge_rec(c, first, cut1, new_mid, is_less);
    merge_rec(c, new_mid, cut2, last, is_less);
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use slice_cursor::{cursor, cursor_mut};

    use super::*;

    #[test]
    fn sanity_check() {
        let r = merge(cursor(&[1, 3, 5]), cursor(&[2, 4, 6]), vec![]);
        assert!(r.in1.is_empty() && r.in2.is_empty());
        assert_eq!(r.output, [1, 2, 3, 4, 5, 6]);

        let mut a = [1, 3, 5, 2, 4, 6];
        let mut c = cursor_mut(&mut a);
        c.advance_by(3);
        let c = inplace_merge(c);
        assert!(c.is_empty());
        assert_eq!(c.window().dropped_front_len(), 6);
        assert_eq!(a, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn bounded_output() {
        let mut buf = [0; 4];
        let out = cursor_mut(&mut buf);
        let r = merge(cursor(&[1, 3, 5]), cursor(&[2, 4, 6]), out);
        assert_eq!(r.in1.as_slice(), [5]);
        assert_eq!(r.in2.as_slice(), [6]);
        assert_eq!(buf, [1, 2, 3, 4]);

        let empty: [i32; 0] = [];
        let r = merge(cursor(&empty), cursor(&[7, 8]), vec![]);
        assert_eq!(r.output, [7, 8]);
    }

    #[test]
    fn stability() {
        let first = [(1, 'a'), (2, 'a'), (2, 'b'), (4, 'a')];
        let second = [(2, 'c'), (3, 'c'), (4, 'c')];
        let by_key = |x: &(i32, char), y: &(i32, char)| x.0 < y.0;
        let expected = [
            (1, 'a'),
            (2, 'a'),
            (2, 'b'),
            (2, 'c'),
            (3, 'c'),
            (4, 'a'),
            (4, 'c'),
        ];

        let r = merge_by(cursor(&first), cursor(&second), vec![], by_key);
        assert_eq!(r.output, expected);

        let mut a: Vec<_> = first.iter().chain(&second).copied().collect();
        let mut c = cursor_mut(&mut a);
        c.advance_by(first.len());
        inplace_merge_by(c, by_key);
        assert_eq!(a, expected);
    }

    #[test]
    fn random() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x3e79e);
        for _ in 0..300 {
            let n = rng.gen_range(0..40);
            let k = rng.gen_range(0..=n);
            let mut a: Vec<(u8, usize)> =
                (0..n).map(|i| (rng.gen_range(0..6), i)).collect();
            a[..k].sort_by_key(|e| e.0);
            a[k..].sort_by_key(|e| e.0);
            let mut expected = a.clone();
            expected.sort_by_key(|e| e.0);

            let mut c = cursor_mut(&mut a);
            c.advance_by(k);
            inplace_merge_by(c, |x, y| x.0 < y.0);
            assert_eq!(a, expected);
        }
    }
}
