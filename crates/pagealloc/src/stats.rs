//! Read-only snapshot of an allocator's accounting state.

/// A point-in-time snapshot of a [`PageAllocator`](crate::PageAllocator)'s
/// bookkeeping, as returned by
/// [`PageAllocator::get_stats`](crate::PageAllocator::get_stats).
///
/// `Debug`-derived so a consuming kernel can log it through whatever
/// channel it already has, without this crate taking on a logging or
/// formatting dependency of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// The page size the allocator was initialized with.
    pub page_size: usize,
    /// Sum of the raw, unaligned sizes of every accepted input region.
    pub total_memory_size: usize,
    /// Sum of the page-aligned sizes of every accepted input region.
    pub effective_memory_size: usize,
    /// `effective_memory_size` minus the bytes reserved for the
    /// descriptor table.
    pub user_memory_size: usize,
    /// `free_pages_count * page_size`.
    pub free_memory_size: usize,
    /// Total number of page descriptors tracked by the allocator.
    pub total_pages_count: usize,
    /// Number of pages reserved to host the descriptor table itself.
    pub reserved_pages_count: usize,
    /// Number of pages currently free.
    pub free_pages_count: usize,
}
