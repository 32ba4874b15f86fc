//! Generic algorithms over cursors.
//!
//! Each category is a module here and also a crate of its own under
//! `cursorlib-src/`; leaf crates can be depended on individually.

use inner::doc_inline_reexport;

doc_inline_reexport! {
    ;
    algo,
    cursor,
    expected,
    numeric,
}
