//! Free-group bucketing and the intrusive doubly-linked lists that back it.

use core::ptr::NonNull;

use crate::page::Page;

/// Maps a free group's page count to the index of the free-list bucket it
/// belongs in.
///
/// Buckets 0 covers sizes `0..=3`; bucket `i >= 1` covers the half-open
/// power-of-two range `2^(i+1)..2^(i+2)`. This quirk (bucket 1 starting at
/// size 4, not 2) is reference-exact and load-bearing: callers must not
/// "simplify" it to a plain `ilog2`.
pub fn group_idx(page_count: usize) -> usize {
    if page_count < 4 {
        0
    } else {
        page_count.ilog2() as usize - 1
    }
}

/// Unlinks every page in `head..head+count` from its previous life and
/// inserts the run as a new group at the front of `list`, stamping
/// `group_size` on both ends.
///
/// # Safety
///
/// `head` must be the first of `count` contiguous, otherwise-untracked
/// `Page` descriptors.
pub(crate) unsafe fn push_front(
    list: &mut Option<NonNull<Page>>,
    head: NonNull<Page>,
    count: usize,
) {
    debug_assert!(count >= 1);

    let tail = unsafe { NonNull::new_unchecked(head.as_ptr().add(count - 1)) };
    unsafe {
        (*head.as_ptr()).set_group_size(count);
        (*tail.as_ptr()).set_group_size(count);

        (*head.as_ptr()).prev_group = None;
        (*head.as_ptr()).next_group = *list;
        if let Some(old_head) = *list {
            (*old_head.as_ptr()).prev_group = Some(head);
        }
    }
    *list = Some(head);
}

/// Removes the group headed by `head` from `list`.
///
/// # Safety
///
/// `head` must currently be the head descriptor of a group linked into
/// `list`.
pub(crate) unsafe fn unlink(list: &mut Option<NonNull<Page>>, head: NonNull<Page>) {
    let count = unsafe { (*head.as_ptr()).group_size() };
    debug_assert!(count >= 1);

    let prev = unsafe { (*head.as_ptr()).prev_group };
    let next = unsafe { (*head.as_ptr()).next_group };

    match prev {
        Some(prev) => unsafe { (*prev.as_ptr()).next_group = next },
        None => *list = next,
    }
    if let Some(next) = next {
        unsafe { (*next.as_ptr()).prev_group = prev };
    }

    let tail = unsafe { NonNull::new_unchecked(head.as_ptr().add(count - 1)) };
    unsafe {
        (*head.as_ptr()).set_group_size(0);
        (*tail.as_ptr()).set_group_size(0);
        (*head.as_ptr()).prev_group = None;
        (*head.as_ptr()).next_group = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucketing_matches_reference_table() {
        assert_eq!(group_idx(0), 0);
        assert_eq!(group_idx(1), 0);
        assert_eq!(group_idx(2), 0);
        assert_eq!(group_idx(3), 0);
        assert_eq!(group_idx(4), 1);
        assert_eq!(group_idx(7), 1);
        assert_eq!(group_idx(8), 2);
        assert_eq!(group_idx(15), 2);
        assert_eq!(group_idx(16), 3);
        assert_eq!(group_idx(535), 8);
        assert_eq!(group_idx(1023), 8);
        assert_eq!(group_idx(1024), 9);
    }
}
