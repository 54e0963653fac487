// MIT/Apache2 License

use std::{iter::FusedIterator, mem};

/// An iterator that produces two items, at most.
#[derive(Debug, Clone)]
pub(crate) enum Twice<T> {
    Two(T, T),
    One(T),
    Empty,
}

impl<T> Twice<T> {
    pub(crate) fn empty() -> Self {
        Twice::Empty
    }

    pub(crate) fn one(item: T) -> Self {
        Twice::One(item)
    }

    pub(crate) fn two(first: T, second: T) -> Self {
        Twice::Two(first, second)
    }
}

impl<T> Iterator for Twice<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(self, Self::Empty) {
            Twice::Two(first, second) => {
                *self = Twice::One(second);
                Some(first)
            }
            Twice::One(first) => Some(first),
            Twice::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Twice::Two(_, _) => (2, Some(2)),
            Twice::One(_) => (1, Some(1)),
            Twice::Empty => (0, Some(0)),
        }
    }
}

impl<T> FusedIterator for Twice<T> {}

impl<T> ExactSizeIterator for Twice<T> {}
