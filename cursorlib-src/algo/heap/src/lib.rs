//! Binary max-heaps laid out in the visible part of a cursor.
//!
//! The element at the front is the largest with respect to `is_less`; the
//! children of the `i`-th element are the `2i + 1`-th and `2i + 2`-th.
//!
//! # Examples
//! ```
//! use heap::{is_heap, make_heap, pop_heap, push_heap, sort_heap};
//! use slice_cursor::cursor_mut;
//!
//! let mut a = vec![3, 1, 4, 1, 5];
//! make_heap(cursor_mut(&mut a));
//! assert!(is_heap(cursor_mut(&mut a)));
//! assert_eq!(a[0], 5);
//!
//! a.push(9);
//! push_heap(cursor_mut(&mut a));
//! assert_eq!(a[0], 9);
//!
//! pop_heap(cursor_mut(&mut a));
//! assert_eq!(a.pop(), Some(9));
//!
//! sort_heap(cursor_mut(&mut a));
//! assert_eq!(a, [1, 1, 3, 4, 5]);
//! ```

use cursor_core::{CursorMut, ForwardCursor, RandomAccessCursor};

/// Sifts the last visible element into the heap formed by the others.
pub fn push_heap<C>(c: C) -> C
where
    C: RandomAccessCursor + CursorMut,
    C::Item: PartialOrd,
{
    push_heap_by(c, |x, y| x < y)
}

pub fn push_heap_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: RandomAccessCursor + CursorMut,
{
    let w = c.window();
    if !w.is_empty() {
        sift_up(&mut c, w.front(), w.len() - 1, &mut is_less);
    }
    c.exhaust_front();
    c
}

/// Moves the largest element to the back and restores the heap in front
/// of it.
pub fn pop_heap<C>(c: C) -> C
where
    C: RandomAccessCursor + CursorMut,
    C::Item: PartialOrd,
{
    pop_heap_by(c, |x, y| x < y)
}

pub fn pop_heap_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: RandomAccessCursor + CursorMut,
{
    let w = c.window();
    if w.len() > 1 {
        c.swap_at(w.front(), w.back() - 1);
        sift_down(&mut c, w.front(), w.len() - 1, 0, &mut is_less);
    }
    c.exhaust_front();
    c
}

pub fn make_heap<C>(c: C) -> C
where
    C: RandomAccessCursor + CursorMut,
    C::Item: PartialOrd,
{
    make_heap_by(c, |x, y| x < y)
}

pub fn make_heap_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: RandomAccessCursor + CursorMut,
{
    let w = c.window();
    let len = w.len();
    for i in (0..len / 2).rev() {
        sift_down(&mut c, w.front(), len, i, &mut is_less);
    }
    c.exhaust_front();
    c
}

/// Turns a heap into an ascending sequence.
pub fn sort_heap<C>(c: C) -> C
where
    C: RandomAccessCursor + CursorMut,
    C::Item: PartialOrd,
{
    sort_heap_by(c, |x, y| x < y)
}

pub fn sort_heap_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: RandomAccessCursor + CursorMut,
{
    let w = c.window();
    for len in (2..=w.len()).rev() {
        c.swap_at(w.front(), w.front() + len - 1);
        sift_down(&mut c, w.front(), len - 1, 0, &mut is_less);
    }
    c.exhaust_front();
    c
}

pub fn is_heap<C>(c: C) -> bool
where
    C: RandomAccessCursor,
    C::Item: PartialOrd,
{
    is_heap_by(c, |x, y| x < y)
}

pub fn is_heap_by<C: RandomAccessCursor>(
    c: C,
    is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> bool {
    is_heap_until_by(c, is_less).is_empty()
}

/// Stops at the first element that is larger than its parent.
pub fn is_heap_until<C>(c: C) -> C
where
    C: RandomAccessCursor,
    C::Item: PartialOrd,
{
    is_heap_until_by(c, |x, y| x < y)
}

pub fn is_heap_until_by<C: RandomAccessCursor>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C {
    let w = c.window();
    let first = w.front();
    let end = (1..w.len())
        .find(|&i| is_less(c.at(first + (i - 1) / 2), c.at(first + i)))
        .unwrap_or(w.len());
    c.drop_front_n(end);
    c
}

fn sift_up<C: CursorMut, F: FnMut(&C::Item, &C::Item) -> bool>(
    c: &mut C,
    first: usize,
    mut i: usize,
    is_less: &mut F,
) {
    while i > 0 {
        let parent = (i - 1) / 2;
        if !is_less(c.at(first + parent), c.at(first + i)) {
            break;
        }
        c.swap_at(first + parent, first + i);
        i = parent;
    }
}

fn sift_down<C: CursorMut, F: FnMut(&C::Item, &C::Item) -> bool>(
    c: &mut C,
    first: usize,
    len: usize,
    mut i: usize,
    is_less: &mut F,
) {
    loop {
        let mut child = 2 * i + 1;
        if child >= len {
            break;
        }
        let right = child + 1;
        if right < len && is_less(c.at(first + child), c.at(first + right)) {
            child = right;
        }
        if !is_less(c.at(first + i), c.at(first + child)) {
            break;
        }
        c.swap_at(first + i, first + child);
        i = child;
    }
}

#[cfg(test)]
mod tests {
    use cursor_core::Cursor;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use slice_cursor::{cursor, cursor_mut};

    use super::*;

    #[test]
    fn sanity_check() {
        let a = [9, 5, 8, 1, 2, 7];
        assert!(is_heap(cursor(&a)));
        let b = [9, 5, 8, 6, 2, 7];
        assert_eq!(is_heap_until(cursor(&b)).position(), 3);
        assert!(is_heap(cursor(&[0; 0])));
        assert!(is_heap(cursor(&[1])));
    }

    #[test]
    fn min_heap() {
        let mut a = [5, 3, 8, 1, 9, 2];
        let gt = |x: &i32, y: &i32| x > y;
        make_heap_by(cursor_mut(&mut a), gt);
        assert_eq!(a[0], 1);
        assert!(is_heap_by(cursor(&a), gt));
        sort_heap_by(cursor_mut(&mut a), gt);
        assert_eq!(a, [9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn random() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x4ea9);
        for _ in 0..100 {
            let n = rng.gen_range(0..50);
            let a: Vec<u32> = (0..n).map(|_| rng.gen_range(0..20)).collect();

            // push one at a time
            let mut heap = vec![];
            for &x in &a {
                heap.push(x);
                push_heap(cursor_mut(&mut heap));
                assert!(is_heap(cursor(&heap)));
            }

            let mut expected = a.clone();
            expected.sort_unstable();
            let mut popped = vec![];
            while !heap.is_empty() {
                pop_heap(cursor_mut(&mut heap));
                popped.extend(heap.pop());
                assert!(is_heap(cursor(&heap)));
            }
            popped.reverse();
            assert_eq!(popped, expected);

            let mut b = a.clone();
            let c = make_heap(cursor_mut(&mut b));
            assert!(c.is_empty());
            assert!(is_heap(cursor(&b)));
            sort_heap(cursor_mut(&mut b));
            assert_eq!(b, expected);
        }
    }
}
