#[macro_use]
extern crate quickcheck_macros;

mod functional;
mod quaternion;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the key into the data structure
    Insert(T),
    /// Check whether the key is in the data structure
    Contains(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Contains(T::arbitrary(g))
        }
    }
}
