//! Pointer-like access expressed as ownership variants instead of raw addresses.
//!
//! [`Access`] tags a value as owned, shared-borrowed or exclusively borrowed.
//! [`PtrWalk`] walks a slice the way a C loop walks an array: a cursor
//! advanced one element at a time until it meets the one-past-the-end pointer.

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use crate::error::{LessonError, Result};

// =============================================================================
// Access: owned / shared / exclusive views
// =============================================================================

#[derive(Debug)]
pub enum Access<'a, T> {
    Owned(T),
    Shared(&'a T),
    Exclusive(&'a mut T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Owned,
    Shared,
    Exclusive,
}

impl AccessKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessKind::Owned => "owned",
            AccessKind::Shared => "shared",
            AccessKind::Exclusive => "exclusive",
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a, T> Access<'a, T> {
    pub fn kind(&self) -> AccessKind {
        match self {
            Access::Owned(_) => AccessKind::Owned,
            Access::Shared(_) => AccessKind::Shared,
            Access::Exclusive(_) => AccessKind::Exclusive,
        }
    }

    /// Dereference: read the target whatever the variant.
    pub fn get(&self) -> &T {
        match self {
            Access::Owned(value) => value,
            Access::Shared(target) => target,
            Access::Exclusive(target) => target,
        }
    }

    /// Replaces the target and hands back the previous value.
    ///
    /// Only owned and exclusive views may write; a shared view is refused.
    pub fn set(&mut self, value: T) -> Result<T> {
        match self {
            Access::Owned(slot) => Ok(mem::replace(slot, value)),
            Access::Exclusive(target) => Ok(mem::replace(&mut **target, value)),
            Access::Shared(_) => Err(LessonError::ReadOnly {
                kind: AccessKind::Shared.as_str(),
            }),
        }
    }

    /// Where the target lives. For borrowed views this is the original binding.
    pub fn address(&self) -> *const T {
        self.get() as *const T
    }

    pub fn is_writable(&self) -> bool {
        !matches!(self, Access::Shared(_))
    }
}

// =============================================================================
// PtrWalk: address arithmetic over a slice
// =============================================================================

pub struct PtrWalk<'a, T> {
    cursor: *const T,
    end: *const T,
    /// Zero-sized elements share one address, so they are counted instead.
    zst_left: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> PtrWalk<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        let range = items.as_ptr_range();
        PtrWalk {
            cursor: range.start,
            end: range.end,
            zst_left: if mem::size_of::<T>() == 0 { items.len() } else { 0 },
            _marker: PhantomData,
        }
    }

    fn remaining(&self) -> usize {
        if mem::size_of::<T>() == 0 {
            return self.zst_left;
        }
        // SAFETY: both pointers come from the same slice and cursor never
        // passes end.
        unsafe { self.end.offset_from(self.cursor) as usize }
    }
}

impl<'a, T> Iterator for PtrWalk<'a, T> {
    /// The element and the address it was read from.
    type Item = (&'a T, *const T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let current = self.cursor;
        if mem::size_of::<T>() == 0 {
            self.zst_left -= 1;
        }
        // SAFETY: `current` lies in [start, end) of a slice borrowed for 'a, and
        // `add(1)` moves at most to the one-past-the-end pointer.
        unsafe {
            self.cursor = current.add(1);
            Some((&*current, current))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for PtrWalk<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_write_is_visible_through_original() {
        let mut name = String::from("Emerson");
        let original = &name as *const String;
        {
            let mut view = Access::Exclusive(&mut name);
            assert_eq!(view.address(), original);
            let old = view.set(String::from("Rogers")).unwrap();
            assert_eq!(old, "Emerson");
            assert_eq!(view.get(), "Rogers");
        }
        assert_eq!(name, "Rogers");
    }

    #[test]
    fn shared_view_refuses_writes() {
        let name = String::from("Emerson");
        let mut view = Access::Shared(&name);
        assert!(!view.is_writable());
        let err = view.set(String::from("Rogers")).unwrap_err();
        assert!(matches!(err, LessonError::ReadOnly { kind: "shared" }));
        assert_eq!(name, "Emerson");
    }

    #[test]
    fn owned_view_replaces_in_place() {
        let mut view = Access::Owned(7_i32);
        assert_eq!(view.kind(), AccessKind::Owned);
        assert_eq!(view.set(9).unwrap(), 7);
        assert_eq!(*view.get(), 9);
    }

    #[test]
    fn walk_yields_elements_in_order() {
        let a = [1, 2, 3, 4, 5];
        let walk = PtrWalk::new(&a);
        assert_eq!(walk.len(), 5);
        let values: Vec<i32> = walk.map(|(v, _)| *v).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn walk_addresses_step_by_element_size() {
        let a = [10_u64, 20, 30];
        let addrs: Vec<usize> = PtrWalk::new(&a).map(|(_, p)| p as usize).collect();
        assert_eq!(addrs[0], a.as_ptr() as usize);
        for pair in addrs.windows(2) {
            assert_eq!(pair[1] - pair[0], mem::size_of::<u64>());
        }
    }

    #[test]
    fn walk_counts_zero_sized_elements() {
        let units = [(); 4];
        let walk = PtrWalk::new(&units);
        assert_eq!(walk.len(), 4);
        assert_eq!(walk.count(), 4);
    }

    #[test]
    fn walk_len_shrinks_as_it_advances() {
        let a = [1, 2, 3];
        let mut walk = PtrWalk::new(&a);
        walk.next();
        assert_eq!(walk.len(), 2);
        walk.by_ref().for_each(drop);
        assert_eq!(walk.len(), 0);
        assert!(walk.next().is_none());
    }

    #[test]
    fn walk_over_empty_slice_yields_nothing() {
        let empty: [i32; 0] = [];
        let mut walk = PtrWalk::new(&empty);
        assert_eq!(walk.len(), 0);
        assert!(walk.next().is_none());
    }
}
