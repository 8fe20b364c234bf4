//! The page allocator state machine itself.

use core::ptr::NonNull;

use libutils::mem::{align_down, align_up};

use crate::{
    group::{self, group_idx},
    page::Page,
    region::{Region, RegionInfo},
    stats::Stats,
};

/// Reference default for the number of regions a [`PageAllocator`] can
/// track simultaneously.
pub const DEFAULT_MAX_REGIONS: usize = 8;

/// Reference default for the number of free-group size classes.
///
/// Twenty classes comfortably covers every group size up to `2^21 - 1`
/// pages, far beyond what a single physical region is expected to hold.
pub const DEFAULT_NUM_CLASSES: usize = 20;

/// A self-hosted, buddy-style physical page allocator.
///
/// `PageAllocator` manages one or more caller-supplied physical memory
/// regions as fixed-size pages. Its own bookkeeping, the page descriptor
/// table and the free-group lists threaded through it, lives inside the
/// managed memory itself; the struct holds only a handful of words plus
/// the small, fixed-size region table.
///
/// `PageAllocator` is `!Sync`: it performs no internal locking, so a
/// caller sharing one across threads of control must wrap it in their own
/// mutex, the same way the rest of this workspace wraps its early-boot
/// allocators.
pub struct PageAllocator<
    const MAX_REGIONS: usize = DEFAULT_MAX_REGIONS,
    const NUM_CLASSES: usize = DEFAULT_NUM_CLASSES,
> {
    regions: [RegionInfo; MAX_REGIONS],
    region_count: usize,

    page_size: usize,
    pages_head: Option<NonNull<Page>>,
    pages_count: usize,

    desc_region_idx: Option<usize>,
    desc_pages_count: usize,

    free_lists: [Option<NonNull<Page>>; NUM_CLASSES],
    free_pages_count: usize,
}

// The `NonNull<Page>` fields already rule out an auto-derived `Sync`, but
// we restate it explicitly: callers must not share a `PageAllocator`
// across threads of control without an external lock, and a stated
// `!Sync` keeps that true even if the fields ever change shape.
impl<const MAX_REGIONS: usize, const NUM_CLASSES: usize> !Sync
    for PageAllocator<MAX_REGIONS, NUM_CLASSES>
{
}

impl<const MAX_REGIONS: usize, const NUM_CLASSES: usize> Default
    for PageAllocator<MAX_REGIONS, NUM_CLASSES>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_REGIONS: usize, const NUM_CLASSES: usize> PageAllocator<MAX_REGIONS, NUM_CLASSES> {
    /// Creates an uninitialized allocator.
    ///
    /// No region is managed and every query returns empty/zeroed results
    /// until [`init`](Self::init) or [`init_single`](Self::init_single)
    /// succeeds.
    pub const fn new() -> Self {
        Self {
            regions: [RegionInfo::EMPTY; MAX_REGIONS],
            region_count: 0,
            page_size: 0,
            pages_head: None,
            pages_count: 0,
            desc_region_idx: None,
            desc_pages_count: 0,
            free_lists: [None; NUM_CLASSES],
            free_pages_count: 0,
        }
    }

    fn clear(&mut self) {
        self.regions = [RegionInfo::EMPTY; MAX_REGIONS];
        self.region_count = 0;
        self.page_size = 0;
        self.pages_head = None;
        self.pages_count = 0;
        self.desc_region_idx = None;
        self.desc_pages_count = 0;
        self.free_lists = [None; NUM_CLASSES];
        self.free_pages_count = 0;
    }

    /// Initializes the allocator from a single contiguous span.
    ///
    /// Equivalent to calling [`init`](Self::init) with a one-element
    /// region list spanning `[start, end)`.
    ///
    /// # Safety
    ///
    /// `start..end` must describe memory this allocator may take
    /// exclusive, permanent ownership of.
    pub unsafe fn init_single(&mut self, start: usize, end: usize, page_size: usize) -> bool {
        if end < start {
            return false;
        }
        let regions = [Region::new(start, end - start)];
        unsafe { self.init(&regions, page_size) }
    }

    /// Initializes the allocator from a list of regions.
    ///
    /// Re-initializing an already-initialized allocator is well-defined:
    /// `init` clears all prior state before ingesting `regions`.
    ///
    /// Fails (returning `false`, leaving the allocator in the cleared
    /// state) when:
    /// - `page_size` is not a power of two, or is smaller than
    ///   `size_of::<Page>()`;
    /// - no region survives alignment with a nonzero page count;
    /// - no surviving region is large enough to host the descriptor table
    ///   for every page across all surviving regions;
    /// - the largest group the initial free-list seeding would produce
    ///   falls in a bucket `>= NUM_CLASSES`.
    ///
    /// # Safety
    ///
    /// Every byte covered by `regions` must be memory this allocator may
    /// take exclusive, permanent ownership of: not otherwise aliased, and
    /// valid to read and write page-sized chunks of for as long as this
    /// allocator lives.
    pub unsafe fn init(&mut self, regions: &[Region], page_size: usize) -> bool {
        self.clear();

        if !page_size.is_power_of_two() || page_size < core::mem::size_of::<Page>() {
            return false;
        }
        self.page_size = page_size;

        // Step 1+2: ingest regions, in input order, bounded by whichever
        // of MAX_REGIONS / the size==0 sentinel / the slice length comes
        // first, discarding any region that alignment reduces to nothing.
        for region in regions.iter().take(MAX_REGIONS) {
            if region.size == 0 {
                break;
            }

            let aligned_start = align_up(region.address, page_size);
            let aligned_end = align_down(region.address + region.size, page_size);
            if aligned_end <= aligned_start {
                continue;
            }

            let aligned_size = aligned_end - aligned_start;
            let info = RegionInfo {
                start: region.address,
                end: region.address + region.size,
                aligned_start,
                aligned_end,
                size: region.size,
                aligned_size,
                page_count: aligned_size / page_size,
                first_page: None,
                last_page: None,
            };
            self.regions[self.region_count] = info;
            self.region_count += 1;
        }
        if self.region_count == 0 {
            self.clear();
            return false;
        }

        // Step 2: total page count across every surviving region.
        self.pages_count = self.regions[..self.region_count]
            .iter()
            .map(|r| r.page_count)
            .sum();

        // Step 3: pick the smallest surviving region that can host a
        // descriptor table for every page, with ties broken by earliest
        // input order.
        let table_bytes = self.pages_count * core::mem::size_of::<Page>();
        let mut chosen: Option<usize> = None;
        for (i, r) in self.regions[..self.region_count].iter().enumerate() {
            if r.aligned_size < table_bytes {
                continue;
            }
            chosen = match chosen {
                None => Some(i),
                Some(c) if r.aligned_size < self.regions[c].aligned_size => Some(i),
                some => some,
            };
        }
        let desc_region_idx = match chosen {
            Some(i) => i,
            None => {
                self.clear();
                return false;
            }
        };
        self.desc_region_idx = Some(desc_region_idx);

        // Step 4: the descriptor table lives at the very start of the
        // chosen region's aligned span.
        let table_addr = self.regions[desc_region_idx].aligned_start;
        let pages_head = table_addr as *mut Page;
        self.pages_head = NonNull::new(pages_head);
        let Some(pages_head_nn) = self.pages_head else {
            self.clear();
            return false;
        };

        // Step 5: seed one descriptor per page, in address order within
        // each region, regions visited in the same order they were
        // ingested.
        let mut cursor = 0usize;
        for i in 0..self.region_count {
            let r = self.regions[i];
            let first = unsafe { pages_head_nn.as_ptr().add(cursor) };
            for j in 0..r.page_count {
                let slot = unsafe { pages_head_nn.as_ptr().add(cursor + j) };
                unsafe { slot.write(Page::new(r.aligned_start + j * page_size)) };
            }
            let last = unsafe { pages_head_nn.as_ptr().add(cursor + r.page_count - 1) };
            self.regions[i].first_page = NonNull::new(first);
            self.regions[i].last_page = NonNull::new(last);
            cursor += r.page_count;
        }
        debug_assert_eq!(cursor, self.pages_count);

        // Step 6: reserve every page the descriptor table physically
        // occupies, rounding up to a whole number of pages.
        let desc_region = self.regions[desc_region_idx];
        let table_end = desc_region.aligned_start + table_bytes;
        let mut desc_pages = 0usize;
        for k in 0..desc_region.page_count {
            let page_addr = desc_region.aligned_start + k * page_size;
            if page_addr >= table_end {
                break;
            }
            let page = unsafe { &mut *desc_region.first_page.unwrap().as_ptr().add(k) };
            page.set_used(true);
            desc_pages += 1;
        }
        self.desc_pages_count = desc_pages;

        // Step 7: validate every prospective free group fits the
        // configured class count before committing any of them, so a
        // misconfigured NUM_CLASSES fails cleanly instead of partially
        // seeding the free lists.
        for i in 0..self.region_count {
            let r = self.regions[i];
            let reserved = if i == desc_region_idx { desc_pages } else { 0 };
            let remaining = r.page_count - reserved;
            if remaining == 0 {
                continue;
            }
            if group_idx(remaining) >= NUM_CLASSES {
                self.clear();
                return false;
            }
        }

        // Step 7 (commit): seed one free group per region for whatever
        // pages survive descriptor reservation.
        for i in 0..self.region_count {
            let r = self.regions[i];
            let reserved = if i == desc_region_idx { desc_pages } else { 0 };
            let remaining = r.page_count - reserved;
            if remaining == 0 {
                continue;
            }
            let head = unsafe { r.first_page.unwrap().as_ptr().add(reserved) };
            let head = NonNull::new(head).unwrap();
            unsafe { self.add_group(head, remaining) };
            self.free_pages_count += remaining;
        }

        #[cfg(debug_assertions)]
        self.debug_assert_consistent();

        true
    }

    unsafe fn add_group(&mut self, head: NonNull<Page>, count: usize) {
        let class = group_idx(count);
        debug_assert!(class < NUM_CLASSES);
        unsafe { group::push_front(&mut self.free_lists[class], head, count) };
    }

    unsafe fn remove_group(&mut self, head: NonNull<Page>) {
        let count = unsafe { (*head.as_ptr()).group_size() };
        let class = group_idx(count);
        unsafe { group::unlink(&mut self.free_lists[class], head) };
    }

    /// Finds the region index that descriptor `page` belongs to, if any.
    fn region_index_of(&self, page: NonNull<Page>) -> Option<usize> {
        self.regions[..self.region_count]
            .iter()
            .position(|r| r.contains_page(page))
    }

    /// Searches classes `from..NUM_CLASSES`, scanning each list front to
    /// back, for the first group whose size is at least `min_size`.
    ///
    /// A class only guarantees its *minimum* member size, not every
    /// member's size, so a short within-list scan is needed even after
    /// landing on the right class; this still amounts to first-fit within
    /// the smallest adequate class, since classes above `from` are never
    /// consulted unless `from` comes up empty.
    fn find_group(&self, from: usize, min_size: usize) -> Option<NonNull<Page>> {
        for class in from..NUM_CLASSES {
            let mut cursor = self.free_lists[class];
            while let Some(node) = cursor {
                let size = unsafe { (*node.as_ptr()).group_size() };
                if size >= min_size {
                    return Some(node);
                }
                cursor = unsafe { (*node.as_ptr()).next_group };
            }
        }
        None
    }

    /// Allocates a contiguous run of `page_count` pages.
    ///
    /// Returns `None` when no free group is large enough to satisfy the
    /// request. Splits the chosen group when it is larger than needed,
    /// returning the leftover tail to the free lists.
    ///
    /// # Safety
    ///
    /// The allocator must have been successfully [`init`](Self::init)ed.
    pub unsafe fn allocate(&mut self, page_count: usize) -> Option<NonNull<Page>> {
        debug_assert!(page_count >= 1);
        if page_count == 0 {
            return None;
        }

        let class = group_idx(page_count);
        let group = self.find_group(class, page_count)?;
        let size = unsafe { (*group.as_ptr()).group_size() };

        unsafe { self.remove_group(group) };

        if size > page_count {
            let leftover = size - page_count;
            let tail_head = unsafe { NonNull::new_unchecked(group.as_ptr().add(page_count)) };
            unsafe { self.add_group(tail_head, leftover) };
        }

        for i in 0..page_count {
            let page = unsafe { &mut *group.as_ptr().add(i) };
            page.set_used(true);
        }
        unsafe { (*group.as_ptr()).set_group_size(page_count) };

        self.free_pages_count -= page_count;

        #[cfg(debug_assertions)]
        self.debug_assert_consistent();

        Some(group)
    }

    /// Releases a run previously returned by [`allocate`](Self::allocate),
    /// coalescing it with an immediately adjacent free neighbor on either
    /// side, within the same region only.
    ///
    /// A `None` argument is a no-op, matching release-of-null being
    /// harmless throughout this workspace's allocators.
    ///
    /// # Safety
    ///
    /// `page` must be exactly a value previously returned by
    /// [`allocate`](Self::allocate) on this same allocator, not yet
    /// released.
    pub unsafe fn release(&mut self, page: Option<NonNull<Page>>) {
        let Some(head) = page else {
            return;
        };

        let count = unsafe { (*head.as_ptr()).group_size() };
        debug_assert!(count >= 1);
        let region_idx = self
            .region_index_of(head)
            .expect("released page is not managed by this allocator");

        for i in 0..count {
            let p = unsafe { &mut *head.as_ptr().add(i) };
            p.set_used(false);
        }
        unsafe { (*head.as_ptr()).set_group_size(0) };

        let mut merged_head = head;
        let mut merged_len = count;

        let region = self.regions[region_idx];
        let first_page = region.first_page.unwrap();
        if merged_head.as_ptr() > first_page.as_ptr() {
            let left = unsafe { NonNull::new_unchecked(merged_head.as_ptr().sub(1)) };
            let left_size = unsafe { (*left.as_ptr()).group_size() };
            if !unsafe { (*left.as_ptr()).is_used() } && left_size > 0 {
                let left_head = unsafe { NonNull::new_unchecked(left.as_ptr().sub(left_size - 1)) };
                unsafe { self.remove_group(left_head) };
                merged_head = left_head;
                merged_len += left_size;
            }
        }

        let last_page = region.last_page.unwrap();
        let merged_tail = unsafe { NonNull::new_unchecked(merged_head.as_ptr().add(merged_len - 1)) };
        if merged_tail.as_ptr() < last_page.as_ptr() {
            let right = unsafe { NonNull::new_unchecked(merged_tail.as_ptr().add(1)) };
            let right_size = unsafe { (*right.as_ptr()).group_size() };
            if !unsafe { (*right.as_ptr()).is_used() } && right_size > 0 {
                unsafe { self.remove_group(right) };
                merged_len += right_size;
            }
        }

        unsafe { self.add_group(merged_head, merged_len) };
        self.free_pages_count += count;

        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
    }

    /// Resolves a physical address to its owning page descriptor.
    ///
    /// Returns `None` when `addr` does not fall within any managed
    /// region's aligned span.
    pub fn get_page(&self, addr: usize) -> Option<NonNull<Page>> {
        for r in &self.regions[..self.region_count] {
            if addr < r.aligned_start || addr >= r.aligned_end {
                continue;
            }
            let offset = (addr - r.aligned_start) / self.page_size;
            let first = r.first_page?;
            return NonNull::new(unsafe { first.as_ptr().add(offset) });
        }
        None
    }

    /// Returns a snapshot of the allocator's current accounting state.
    pub fn get_stats(&self) -> Stats {
        let regions = &self.regions[..self.region_count];
        let total_memory_size = regions.iter().map(|r| r.size).sum();
        let effective_memory_size: usize = regions.iter().map(|r| r.aligned_size).sum();
        let reserved_bytes = self.desc_pages_count * self.page_size;

        Stats {
            page_size: self.page_size,
            total_memory_size,
            effective_memory_size,
            user_memory_size: effective_memory_size - reserved_bytes,
            free_memory_size: self.free_pages_count * self.page_size,
            total_pages_count: self.pages_count,
            reserved_pages_count: self.desc_pages_count,
            free_pages_count: self.free_pages_count,
        }
    }

    /// Walks every descriptor, checking that the used/free partition adds
    /// up to the total page count.
    ///
    /// Compiled only in debug builds, the same way `crates/libkern`'s
    /// `HoleList`/`Cursor` restrict their own invariant checks to
    /// `debug_assert!`.
    #[cfg(debug_assertions)]
    fn debug_assert_consistent(&self) {
        let Some(head) = self.pages_head else {
            debug_assert_eq!(self.pages_count, 0);
            return;
        };

        let mut used = 0usize;
        for i in 0..self.pages_count {
            let page = unsafe { &*head.as_ptr().add(i) };
            if page.is_used() {
                used += 1;
            }
        }
        debug_assert_eq!(used + self.free_pages_count, self.pages_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_SIZE: usize = 256;

    fn new_allocator() -> PageAllocator {
        PageAllocator::new()
    }

    // Scenario 1: a single one-page region.
    #[test]
    fn single_page_region() {
        let mut alloc = new_allocator();
        let regions = [Region::new(0x1000, PAGE_SIZE)];
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });

        let stats = alloc.get_stats();
        assert_eq!(stats.total_pages_count, 1);
        assert_eq!(alloc.desc_region_idx, Some(0));
        assert_eq!(stats.reserved_pages_count, 1);
        assert_eq!(stats.free_pages_count, 0);

        assert!(unsafe { alloc.allocate(1) }.is_none());
    }

    // Scenario 2: three regions of 535, 87, and 4 pages.
    #[test]
    fn three_regions_pick_smallest_fitting_descriptor_host() {
        let mut alloc = new_allocator();
        let regions = [
            Region::new(0x100_000, 535 * PAGE_SIZE),
            Region::new(0x200_000, 87 * PAGE_SIZE),
            Region::new(0x300_000, 4 * PAGE_SIZE),
        ];
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });

        let stats = alloc.get_stats();
        assert_eq!(stats.total_pages_count, 626);
        assert_eq!(alloc.desc_region_idx, Some(1));
        assert_eq!(stats.reserved_pages_count, 79);
        assert_eq!(stats.free_pages_count, 547);

        assert_eq!(alloc.free_lists[group_idx(8)].map(|p| unsafe { (*p.as_ptr()).group_size() }), Some(8));
        assert_eq!(alloc.free_lists[group_idx(4)].map(|p| unsafe { (*p.as_ptr()).group_size() }), Some(4));
        assert_eq!(alloc.free_lists[group_idx(535)].map(|p| unsafe { (*p.as_ptr()).group_size() }), Some(535));
    }

    // Scenario 3: eight regions of five pages each.
    #[test]
    fn many_equal_regions_break_ties_on_earliest_input() {
        let mut alloc = new_allocator();
        let regions: [Region; 8] =
            core::array::from_fn(|i| Region::new(0x10_000 + i * 0x1000, 5 * PAGE_SIZE));
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });

        let stats = alloc.get_stats();
        assert_eq!(stats.total_pages_count, 40);
        assert_eq!(alloc.desc_region_idx, Some(0));
        assert_eq!(stats.reserved_pages_count, 5);
        assert_eq!(stats.free_pages_count, 35);
    }

    // Scenario 4: a one-page region and a seven-page region.
    #[test]
    fn descriptor_host_can_be_fully_consumed() {
        let mut alloc = new_allocator();
        let regions = [
            Region::new(0x10_000, PAGE_SIZE),
            Region::new(0x20_000, 7 * PAGE_SIZE),
        ];
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });

        let stats = alloc.get_stats();
        assert_eq!(stats.total_pages_count, 8);
        assert_eq!(alloc.desc_region_idx, Some(0));
        assert_eq!(stats.reserved_pages_count, 1);
        assert_eq!(stats.free_pages_count, 7);
    }

    #[test]
    fn allocate_then_release_restores_original_free_group() {
        let mut alloc = new_allocator();
        // 16 pages need ceil(16 * 32 / 256) == 2 descriptor pages, leaving
        // 14 free.
        let regions = [Region::new(0x10_000, 16 * PAGE_SIZE)];
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });
        assert_eq!(alloc.get_stats().free_pages_count, 14);

        let a = unsafe { alloc.allocate(3) }.unwrap();
        let b = unsafe { alloc.allocate(5) }.unwrap();
        assert_eq!(alloc.get_stats().free_pages_count, 6);

        unsafe { alloc.release(Some(a)) };
        unsafe { alloc.release(Some(b)) };
        assert_eq!(alloc.get_stats().free_pages_count, 14);

        // Releasing both runs, plus whatever free pages were left between
        // them, must coalesce back into one group covering everything but
        // the descriptor pages.
        let class = group_idx(14);
        let head = alloc.free_lists[class].unwrap();
        assert_eq!(unsafe { (*head.as_ptr()).group_size() }, 14);
    }

    // Scenario 6: releasing two adjacent groups of 3 and 5 pages coalesces
    // into a single group of 8, crossing from buckets 0 and 1 into bucket 2.
    #[test]
    fn coalescing_merges_across_a_bucket_boundary() {
        let mut alloc = new_allocator();
        // 10 pages need ceil(10 * 32 / 256) == 2 descriptor pages, leaving
        // exactly 8 free pages to split between the two allocations below.
        let regions = [Region::new(0x10_000, 10 * PAGE_SIZE)];
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });
        assert_eq!(alloc.get_stats().free_pages_count, 8);

        let a = unsafe { alloc.allocate(3) }.unwrap();
        let b = unsafe { alloc.allocate(5) }.unwrap();

        unsafe { alloc.release(Some(a)) };
        unsafe { alloc.release(Some(b)) };

        let class = group_idx(8);
        let head = alloc.free_lists[class];
        assert!(head.is_some());
        assert_eq!(unsafe { (*head.unwrap().as_ptr()).group_size() }, 8);
        assert_eq!(alloc.get_stats().free_pages_count, 8);
    }

    #[test]
    fn coalescing_never_crosses_a_region_boundary() {
        let mut alloc = new_allocator();
        let regions = [
            Region::new(0x10_000, 4 * PAGE_SIZE),
            Region::new(0x20_000, 4 * PAGE_SIZE),
        ];
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });
        // Region 0 hosts the descriptor table (4 pages * 32 bytes = 128
        // bytes, needs 1 page), leaving 3 free; region 1 is fully free.
        let stats = alloc.get_stats();
        assert_eq!(alloc.desc_region_idx, Some(0));
        assert_eq!(stats.reserved_pages_count, 1);

        let last_of_region0 = unsafe { alloc.allocate(3) }.unwrap();
        let first_of_region1 = unsafe { alloc.allocate(4) }.unwrap();
        unsafe { alloc.release(Some(last_of_region0)) };
        unsafe { alloc.release(Some(first_of_region1)) };

        // Each region's free pages must form their own group, never one
        // spanning both regions, even though they are adjacent in the
        // descriptor table's address order.
        assert_eq!(alloc.free_lists[group_idx(3)].map(|p| unsafe { (*p.as_ptr()).group_size() }), Some(3));
        assert_eq!(alloc.free_lists[group_idx(4)].map(|p| unsafe { (*p.as_ptr()).group_size() }), Some(4));
    }

    #[test]
    fn get_page_resolves_addresses_within_managed_regions() {
        let mut alloc = new_allocator();
        let regions = [Region::new(0x10_000, 8 * PAGE_SIZE)];
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });

        let page = alloc.get_page(0x10_000 + 3 * PAGE_SIZE).unwrap();
        assert_eq!(unsafe { (*page.as_ptr()).address() }, 0x10_000 + 3 * PAGE_SIZE);

        assert!(alloc.get_page(0x10_000 - PAGE_SIZE).is_none());
        assert!(alloc.get_page(0x10_000 + 8 * PAGE_SIZE).is_none());
    }

    #[test]
    fn init_fails_on_non_power_of_two_page_size() {
        let mut alloc = new_allocator();
        let regions = [Region::new(0x10_000, 1000)];
        assert!(!unsafe { alloc.init(&regions, 300) });
    }

    #[test]
    fn init_fails_when_no_region_survives_alignment() {
        let mut alloc = new_allocator();
        // Smaller than one page once aligned down to nothing usable.
        let regions = [Region::new(0x10_001, 10)];
        assert!(!unsafe { alloc.init(&regions, PAGE_SIZE) });
    }

    #[test]
    fn reinit_clears_prior_state() {
        let mut alloc = new_allocator();
        let first = [Region::new(0x10_000, 16 * PAGE_SIZE)];
        assert!(unsafe { alloc.init(&first, PAGE_SIZE) });
        let _ = unsafe { alloc.allocate(4) };

        let second = [Region::new(0x20_000, 8 * PAGE_SIZE)];
        assert!(unsafe { alloc.init(&second, PAGE_SIZE) });

        let stats = alloc.get_stats();
        assert_eq!(stats.total_pages_count, 8);
        assert_eq!(stats.free_pages_count, 7);
    }

    #[test]
    fn zero_size_region_sentinel_stops_ingestion_early() {
        let mut alloc = new_allocator();
        let regions = [
            Region::new(0x10_000, 4 * PAGE_SIZE),
            Region::SENTINEL,
            Region::new(0x30_000, 4 * PAGE_SIZE),
        ];
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });
        assert_eq!(alloc.get_stats().total_pages_count, 4);
    }

    // Asserts that the free lists have exactly scenario 2's shape: one
    // group of 4 pages at `group_idx(4)`, one of 8 at `group_idx(8)`, one
    // of 535 at `group_idx(535)`, and nothing anywhere else.
    fn assert_scenario_2_shape(alloc: &PageAllocator) {
        for (size, class) in [(4usize, group_idx(4)), (8, group_idx(8)), (535, group_idx(535))] {
            let head = alloc.free_lists[class].expect("expected class to hold a group");
            assert_eq!(unsafe { (*head.as_ptr()).group_size() }, size);
            assert!(unsafe { (*head.as_ptr()).next_group }.is_none());
        }

        let occupied: std::collections::BTreeSet<usize> =
            [group_idx(4), group_idx(8), group_idx(535)].into_iter().collect();
        for (class, list) in alloc.free_lists.iter().enumerate() {
            if !occupied.contains(&class) {
                assert!(list.is_none(), "unexpected group in class {class}");
            }
        }
    }

    // Scenario 5: a long-running randomized workload against the scenario-2
    // layout. Each round allocates randomly sized runs (bounded by
    // `freePagesCount / 4`, per spec) up to 100 outstanding, then releases
    // every one of them; after each complete release cycle the free-list
    // shape must be indistinguishable from the freshly initialized state
    // and `freePagesCount` must return to its initial value. Driven by a
    // dependency-free, deterministically-seeded PRNG (mirrors the kernel's
    // own `MtRand`-driven randomized page selection).
    #[test]
    fn randomized_allocate_release_workload_restores_scenario_2_shape() {
        use crate::test_support::MtRand;

        let mut alloc: PageAllocator<8, 20> = PageAllocator::new();
        let regions = [
            Region::new(0x100_000, 535 * PAGE_SIZE),
            Region::new(0x200_000, 87 * PAGE_SIZE),
            Region::new(0x300_000, 4 * PAGE_SIZE),
        ];
        assert!(unsafe { alloc.init(&regions, PAGE_SIZE) });

        let initial_free = alloc.get_stats().free_pages_count;
        assert_eq!(initial_free, 547);
        assert_scenario_2_shape(&alloc);

        let mut rng = MtRand::new(0xC0FFEE);
        // This crate builds with `std` under `#[cfg(test)]`, so a plain
        // `Vec` is available for tracking outstanding allocations without
        // pulling in `alloc` for the crate itself.
        let mut outstanding: std::vec::Vec<NonNull<Page>> = std::vec::Vec::new();

        for _ in 0..20 {
            while outstanding.len() < 100 {
                let bound = alloc.get_stats().free_pages_count / 4;
                if bound == 0 {
                    break;
                }
                let count = (rng.next_u32() as usize % bound) + 1;
                match unsafe { alloc.allocate(count) } {
                    Some(page) => outstanding.push(page),
                    None => break,
                }
            }

            while let Some(page) = outstanding.pop() {
                unsafe { alloc.release(Some(page)) };
            }

            assert_eq!(alloc.get_stats().free_pages_count, initial_free);
            assert_scenario_2_shape(&alloc);
        }
    }
}
