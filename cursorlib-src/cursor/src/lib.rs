use inner::doc_inline_reexport;

doc_inline_reexport! {
    cursor_core,
    iter_cursor,
    output_cursor,
    slice_cursor,
}
