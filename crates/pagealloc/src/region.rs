//! Caller-supplied memory regions and their derived, page-aligned form.

use core::ptr::NonNull;

use crate::page::Page;

/// A single contiguous, physically owned span of memory handed to
/// [`PageAllocator::init`](crate::PageAllocator::init) by the caller.
///
/// A region whose `size` is zero acts as an early-stop sentinel within the
/// input slice, preserving the `while regions[i].size != 0` walk of the
/// allocator this crate descends from, on top of the slice's own length
/// bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// The region's starting physical address.
    pub address: usize,
    /// The region's length in bytes.
    pub size: usize,
}

impl Region {
    /// Creates a new region descriptor.
    pub const fn new(address: usize, size: usize) -> Self {
        Self { address, size }
    }

    /// The sentinel value that terminates a region list early.
    pub const SENTINEL: Self = Self::new(0, 0);
}

/// Derived, page-aligned bookkeeping for one valid input [`Region`].
///
/// Produced by [`PageAllocator::init`](crate::PageAllocator::init); never
/// constructed by callers directly.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RegionInfo {
    pub start: usize,
    pub end: usize,
    pub aligned_start: usize,
    pub aligned_end: usize,
    pub size: usize,
    pub aligned_size: usize,
    pub page_count: usize,
    pub first_page: Option<NonNull<Page>>,
    pub last_page: Option<NonNull<Page>>,
}

impl RegionInfo {
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        aligned_start: 0,
        aligned_end: 0,
        size: 0,
        aligned_size: 0,
        page_count: 0,
        first_page: None,
        last_page: None,
    };

    /// Checks whether `page` falls within this region's descriptor range.
    pub fn contains_page(&self, page: NonNull<Page>) -> bool {
        match (self.first_page, self.last_page) {
            (Some(first), Some(last)) => {
                page.as_ptr() >= first.as_ptr() && page.as_ptr() <= last.as_ptr()
            }
            _ => false,
        }
    }
}
