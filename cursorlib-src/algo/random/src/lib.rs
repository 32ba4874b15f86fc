//! Random permutation and sampling.
//!
//! The random number generator is always supplied by the caller.
//!
//! # Examples
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use random::{sample_sized, shuffle};
//! use slice_cursor::{cursor, cursor_mut};
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(1);
//! let mut a: Vec<_> = (0..10).collect();
//! shuffle(cursor_mut(&mut a), &mut rng);
//!
//! let r = sample_sized(cursor(&a), 3, vec![], &mut rng);
//! assert_eq!(r.output.len(), 3);
//! ```

use cursor_core::{
    Cursor, CursorMut, Finite, ForwardCursor, OutputCursor,
    RandomAccessCursor,
};
use rand::Rng;
use results::InOut;

/// Fisher-Yates shuffle; every permutation is equally likely.
pub fn shuffle<C, R>(mut c: C, rng: &mut R) -> C
where
    C: RandomAccessCursor + CursorMut,
    R: Rng + ?Sized,
{
    let w = c.window();
    for i in (1..w.len()).rev() {
        let j = rng.gen_range(0..=i);
        c.swap_at(w.front() + i, w.front() + j);
    }
    c.exhaust_front();
    c
}

/// Reservoir sampling (Algorithm R) of an input of unknown length.
///
/// Fills the visible part of `out` with a uniformly chosen subset of
/// `input`, in no particular order.  If the input is shorter, all of it is
/// copied and the returned output cursor starts at the first unwritten
/// slot.
pub fn sample<C, O, R>(mut input: C, mut out: O, rng: &mut R) -> InOut<C, O>
where
    C: Cursor<Cardinality = Finite>,
    C::Item: Clone,
    O: RandomAccessCursor<Item = C::Item> + CursorMut,
    R: Rng + ?Sized,
{
    let w = out.window();
    let k = w.len();
    let mut seen = 0;
    while !input.is_empty() {
        if seen < k {
            *out.at_mut(w.front() + seen) = input.front().clone();
        } else {
            let j = rng.gen_range(0..=seen);
            if j < k {
                *out.at_mut(w.front() + j) = input.front().clone();
            }
        }
        seen += 1;
        input.pop_front();
    }
    if seen < k {
        log::debug!("sample of {k} requested from {seen} elements");
    }
    out.advance_by(seen.min(k));
    InOut::new(input, out)
}

/// Selection sampling of `n` elements from an input of known length,
/// keeping their relative order.
///
/// Reads no further than the last chosen element.  Asking for more elements
/// than there are copies all of them.
pub fn sample_sized<C, O, R>(
    mut input: C,
    n: usize,
    mut out: O,
    rng: &mut R,
) -> InOut<C, O>
where
    C: ForwardCursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
    R: Rng + ?Sized,
{
    let mut remaining = input.window().len();
    if n > remaining {
        log::debug!("sample of {n} requested from {remaining} elements");
    }
    let mut needed = n.min(remaining);
    while needed > 0 && !out.is_full() {
        // chosen with probability needed / remaining
        if rng.gen_range(0..remaining) < needed {
            out.put(input.front().clone());
            needed -= 1;
        }
        remaining -= 1;
        input.pop_front();
    }
    InOut::new(input, out)
}
