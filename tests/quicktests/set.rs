use basic_collections::set::Set;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

#[quickcheck]
fn matches_hash_set(ops: Vec<Op<i8>>) -> bool {
    let set = Set::new();
    let mut model = HashSet::new();

    for op in ops {
        match op {
            Op::Insert(k) => {
                set.add([k]);
                model.insert(k);
            }
            Op::Remove(k) => {
                set.remove(&[k]);
                model.remove(&k);
            }
        }
    }

    let flattened: HashSet<_> = set.flatten().iter().copied().collect();
    set.len() == model.len() && set.all(&model) && flattened == model
}
