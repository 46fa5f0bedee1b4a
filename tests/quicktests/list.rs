use basic_collections::list::List;
use basic_collections::Error;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn full_range_is_push_order(xs: Vec<u8>) -> bool {
    let mut list = List::new();
    list.push_back(xs.iter().copied());

    list.range(0, -1).into_iter().eq(xs.iter())
}

#[quickcheck]
fn index_agrees_from_both_ends(xs: Vec<u8>) -> bool {
    let list: List<_> = xs.iter().copied().collect();
    let len = xs.len() as isize;

    (0..len).all(|i| list.index(i) == list.index(i - len))
        && list.index(len) == Err(Error::IndexOutOfRange { index: len, len: xs.len() })
        && list.index(-len - 1).is_err()
}

#[quickcheck]
fn find_is_first_position(xs: Vec<u8>, needle: u8) -> bool {
    let list: List<_> = xs.iter().copied().collect();

    list.find(&needle) == xs.iter().position(|x| *x == needle)
}

#[quickcheck]
fn reversed_bounds_are_empty(xs: Vec<u8>, start: usize) -> bool {
    let list: List<_> = xs.iter().copied().collect();
    if list.is_empty() {
        return list.range(0, -1).is_empty();
    }
    let start = (start % list.len()) as isize;

    (0..start).all(|end| list.range(start, end).is_empty())
}

#[quickcheck]
fn push_front_pop_front_is_lifo(xs: Vec<u8>) -> bool {
    let mut list = List::new();
    list.push_front(xs.iter().copied());

    let popped: Vec<_> = std::iter::from_fn(|| list.pop_front().ok()).collect();
    popped.into_iter().eq(xs.into_iter().rev()) && list.is_empty()
}
