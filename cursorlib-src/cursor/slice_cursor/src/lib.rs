//! Random-access cursors over slices.
//!
//! The slice is the arena, the [`Window`] says which part of it the cursor
//! currently sees.
//!
//! # Examples
//! ```
//! use cursor_core::{BidirectionalCursor, Cursor, ForwardCursor};
//! use slice_cursor::cursor;
//!
//! let a = [1, 2, 3, 4, 5];
//! let mut c = cursor(&a);
//! c.pop_front();
//! c.pop_back();
//! assert_eq!(c.as_slice(), [2, 3, 4]);
//! assert_eq!(c.dropped_front().as_slice(), [1]);
//! assert_eq!(c.dropped_back().as_slice(), [5]);
//! ```

use std::fmt;

use cursor_core::{
    BidirectionalCursor, Cursor, CursorMut, Finite, ForwardCursor,
    OutputCursor, RandomAccessCursor, Window,
};

pub fn cursor<T>(slice: &[T]) -> SliceCursor<'_, T> { SliceCursor::new(slice) }
pub fn cursor_mut<T>(slice: &mut [T]) -> SliceCursorMut<'_, T> {
    SliceCursorMut::new(slice)
}

pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    window: Window,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, window: Window::new(0..slice.len()) }
    }
    pub fn as_slice(&self) -> &'a [T] { &self.slice[self.window.visible()] }
    pub fn base_slice(&self) -> &'a [T] { &self.slice[self.window.base()] }
    pub fn iter(&self) -> std::slice::Iter<'a, T> { self.as_slice().iter() }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self { *self }
}
impl<T> Copy for SliceCursor<'_, T> {}

impl<'a, T> From<&'a [T]> for SliceCursor<'a, T> {
    fn from(slice: &'a [T]) -> Self { Self::new(slice) }
}

impl<T: fmt::Debug> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    type Item = T;
    type Cardinality = Finite;
    fn is_empty(&self) -> bool { self.window.is_empty() }
    fn front(&self) -> &T { &self.slice[self.window.front()] }
    fn pop_front(&mut self) { self.window.drop_front() }
    fn advance_by(&mut self, n: usize) { self.window.drop_front_n(n) }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {
    fn window(&self) -> Window { self.window }
    fn reseat(&mut self, window: Window) {
        debug_assert!(window.base().end <= self.slice.len());
        self.window = window;
    }
    fn at(&self, pos: usize) -> &T { &self.slice[pos] }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {}
impl<T> RandomAccessCursor for SliceCursor<'_, T> {}

pub struct SliceCursorMut<'a, T> {
    slice: &'a mut [T],
    window: Window,
}

impl<'a, T> SliceCursorMut<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        let window = Window::new(0..slice.len());
        Self { slice, window }
    }
    pub fn as_slice(&self) -> &[T] { &self.slice[self.window.visible()] }
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slice[self.window.visible()]
    }
    pub fn base_slice(&self) -> &[T] { &self.slice[self.window.base()] }
    pub fn into_slice(self) -> &'a mut [T] {
        &mut self.slice[self.window.visible()]
    }
    /// A read-only cursor with the same window.
    pub fn as_cursor(&self) -> SliceCursor<'_, T> {
        SliceCursor { slice: &*self.slice, window: self.window }
    }
    pub fn reborrow(&mut self) -> SliceCursorMut<'_, T> {
        SliceCursorMut { slice: &mut *self.slice, window: self.window }
    }
}

impl<'a, T> From<&'a mut [T]> for SliceCursorMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self { Self::new(slice) }
}

impl<T: fmt::Debug> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Cursor for SliceCursorMut<'_, T> {
    type Item = T;
    type Cardinality = Finite;
    fn is_empty(&self) -> bool { self.window.is_empty() }
    fn front(&self) -> &T { &self.slice[self.window.front()] }
    fn pop_front(&mut self) { self.window.drop_front() }
    fn advance_by(&mut self, n: usize) { self.window.drop_front_n(n) }
}

impl<T> ForwardCursor for SliceCursorMut<'_, T> {
    fn window(&self) -> Window { self.window }
    fn reseat(&mut self, window: Window) {
        debug_assert!(window.base().end <= self.slice.len());
        self.window = window;
    }
    fn at(&self, pos: usize) -> &T { &self.slice[pos] }
}

impl<T> BidirectionalCursor for SliceCursorMut<'_, T> {}
impl<T> RandomAccessCursor for SliceCursorMut<'_, T> {}

impl<T> CursorMut for SliceCursorMut<'_, T> {
    fn at_mut(&mut self, pos: usize) -> &mut T { &mut self.slice[pos] }
    fn swap_at(&mut self, a: usize, b: usize) { self.slice.swap(a, b) }
}

impl<T> OutputCursor<T> for SliceCursorMut<'_, T> {
    fn put(&mut self, value: T) {
        debug_assert!(!self.window.is_empty(), "writing past the end");
        self.slice[self.window.front()] = value;
        self.window.drop_front();
    }
    fn is_full(&self) -> bool { self.window.is_empty() }
}
