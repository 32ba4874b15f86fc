use inner::doc_inline_reexport;

doc_inline_reexport! {
    binary_search,
    compare,
    find,
    heap,
    merge,
    minmax,
    modify,
    partition,
    permutation,
    random,
    results,
    rotate,
    search,
    set_ops,
    sort,
}
