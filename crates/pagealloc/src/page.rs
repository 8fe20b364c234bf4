//! The self-hosted per-page descriptor.

use core::ptr::NonNull;

use bitflags::bitflags;

bitflags! {
    /// Flags packed into the low, always-zero bits of a page-aligned
    /// address, rather than occupying a descriptor field of their own.
    ///
    /// Every managed page is at least as large as `size_of::<Page>()`
    /// (enforced by [`PageAllocator::init`](crate::PageAllocator::init)),
    /// so a page-aligned address always has enough free low bits to carry
    /// this bitset without ambiguity.
    pub struct PageFlags: usize {
        /// Set while the page is part of an allocated run (including its
        /// interior pages); clear while it is free, whether or not it sits
        /// at a free group's boundary.
        const USED = 1 << 0;
    }
}

const FLAGS_MASK: usize = 0b1;

/// A single page-sized unit of managed memory.
///
/// `Page` is the element type of the self-hosted descriptor table carved
/// out of the largest input region during `init`. Descriptors never move
/// once placed; all addressing of a `Page` happens through pointer
/// arithmetic over that table, never by value.
///
/// Only the first and last descriptor of a free group, or the first
/// descriptor of an allocated run, carry a meaningful `group_size`; every
/// other descriptor leaves it at zero.
pub struct Page {
    addr_and_flags: usize,
    group_size: usize,
    pub(crate) prev_group: Option<NonNull<Page>>,
    pub(crate) next_group: Option<NonNull<Page>>,
}

impl Page {
    /// Builds a fresh, free, zero-sized descriptor for the page at
    /// `address`.
    ///
    /// `address` must already be aligned to the allocator's page size.
    pub(crate) fn new(address: usize) -> Self {
        debug_assert_eq!(address & FLAGS_MASK, 0, "page address is not aligned");
        Self {
            addr_and_flags: address,
            group_size: 0,
            prev_group: None,
            next_group: None,
        }
    }

    /// The physical address of the page this descriptor represents.
    pub fn address(&self) -> usize {
        self.addr_and_flags & !FLAGS_MASK
    }

    /// The packed flag bits of this descriptor.
    pub fn flags(&self) -> PageFlags {
        PageFlags::from_bits_truncate(self.addr_and_flags & FLAGS_MASK)
    }

    /// Whether this page is part of an allocated run.
    pub fn is_used(&self) -> bool {
        self.flags().contains(PageFlags::USED)
    }

    pub(crate) fn set_used(&mut self, used: bool) {
        if used {
            self.addr_and_flags |= PageFlags::USED.bits();
        } else {
            self.addr_and_flags &= !PageFlags::USED.bits();
        }
    }

    /// The size, in pages, of the free group or allocated run this
    /// descriptor is the head of.
    ///
    /// Zero for interior descriptors of a multi-page group or run.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub(crate) fn set_group_size(&mut self, size: usize) {
        self.group_size = size;
    }
}

// Every managed page costs one descriptor, so `Page` staying exactly four
// words wide is load-bearing for how many pages the descriptor table itself
// reserves; catch any accidental growth at compile time rather than in a
// test someone might skip.
assert_eq_size!(Page, [usize; 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_is_free_and_addressed_correctly() {
        let page = Page::new(0x1000);
        assert_eq!(page.address(), 0x1000);
        assert!(!page.is_used());
        assert_eq!(page.group_size(), 0);
    }

    #[test]
    fn used_flag_does_not_disturb_address() {
        let mut page = Page::new(0x4000);
        page.set_used(true);
        assert!(page.is_used());
        assert_eq!(page.address(), 0x4000);

        page.set_used(false);
        assert!(!page.is_used());
        assert_eq!(page.address(), 0x4000);
    }

    #[test]
    fn group_size_round_trips() {
        let mut page = Page::new(0x8000);
        page.set_group_size(42);
        assert_eq!(page.group_size(), 42);
    }

    #[test]
    fn descriptor_is_four_words_wide() {
        // Packing flags into the address field keeps every descriptor at
        // four pointer-sized words: this is load-bearing for how many
        // pages the descriptor table itself must reserve.
        assert_eq!(
            core::mem::size_of::<Page>(),
            4 * core::mem::size_of::<usize>()
        );
    }
}
