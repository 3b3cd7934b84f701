//! Dense array helpers and conversions to and from persistent lists.

use pith_text::List;

pub fn new_array<A: Clone>(len: usize, init: A) -> Vec<A> {
    vec![init; len]
}

pub fn new_array_with<A>(len: usize, init: impl FnMut(usize) -> A) -> Vec<A> {
    (0..len).map(init).collect()
}

/// Prepend the elements of `items` onto `tail`, keeping their order.
pub fn vlist<A>(items: Vec<A>, tail: &List<A>) -> List<A> {
    List::from_vec_with_tail(items, tail)
}

pub fn unvlist<A: Clone>(list: &List<A>) -> Vec<A> {
    list.to_vec()
}
