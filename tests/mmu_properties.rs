//! Property tests for invariants shared by every replacement policy.

use proptest::prelude::*;
use vmsim::{AccessKind, Mmu, MmuConfig, PageNumber, PolicyKind};

fn policy_strategy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![
        Just(PolicyKind::Lru),
        Just(PolicyKind::Clock),
        Just(PolicyKind::Random),
    ]
}

fn access_strategy() -> impl Strategy<Value = (u64, AccessKind)> {
    (
        0u64..24,
        prop_oneof![Just(AccessKind::Read), Just(AccessKind::Write)],
    )
}

fn build(frames: usize, kind: PolicyKind, seed: u64) -> Box<dyn Mmu> {
    MmuConfig::new(frames, kind).with_seed(seed).build().unwrap()
}

proptest! {
    /// Faults are exactly the accesses to non-resident pages, each costs one
    /// read, and the resident set never outgrows the frame count.
    #[test]
    fn prop_fault_accounting(
        kind in policy_strategy(),
        frames in 1usize..8,
        seed in any::<u64>(),
        events in prop::collection::vec(access_strategy(), 0..300)
    ) {
        let mut mmu = build(frames, kind, seed);
        let mut expected_faults = 0u64;

        for (page, access) in events {
            let page = PageNumber::new(page);
            if !mmu.is_resident(page) {
                expected_faults += 1;
            }
            mmu.access(page, access);

            prop_assert!(mmu.is_resident(page));
            prop_assert!(mmu.resident_count() <= frames);
            prop_assert_eq!(mmu.total_page_faults(), expected_faults);
            prop_assert_eq!(mmu.total_disk_reads(), mmu.total_page_faults());
        }
    }

    /// Counters never decrease and write-backs never exceed faults.
    #[test]
    fn prop_counters_monotonic(
        kind in policy_strategy(),
        frames in 1usize..8,
        seed in any::<u64>(),
        events in prop::collection::vec(access_strategy(), 0..300)
    ) {
        let mut mmu = build(frames, kind, seed);
        let mut prev = mmu.stats();

        for (page, access) in events {
            mmu.access(PageNumber::new(page), access);
            let now = mmu.stats();
            prop_assert!(now.page_faults >= prev.page_faults);
            prop_assert!(now.disk_writes >= prev.disk_writes);
            prop_assert!(now.disk_writes <= now.page_faults);
            prev = now;
        }
    }

    /// Without writes nothing is ever dirty, so nothing is written back.
    #[test]
    fn prop_read_only_trace_never_writes(
        kind in policy_strategy(),
        frames in 1usize..8,
        seed in any::<u64>(),
        pages in prop::collection::vec(0u64..24, 0..300)
    ) {
        let mut mmu = build(frames, kind, seed);
        for page in pages {
            mmu.read_memory(PageNumber::new(page));
        }
        prop_assert_eq!(mmu.total_disk_writes(), 0);
    }

    /// Re-reading a resident page changes no counter.
    #[test]
    fn prop_repeated_read_hit_is_idempotent(
        kind in policy_strategy(),
        frames in 1usize..8,
        seed in any::<u64>(),
        events in prop::collection::vec(access_strategy(), 1..100),
        repeats in 1usize..10
    ) {
        let mut mmu = build(frames, kind, seed);
        for &(page, access) in &events {
            mmu.access(PageNumber::new(page), access);
        }

        let last = PageNumber::new(events[events.len() - 1].0);
        let before = mmu.stats();
        for _ in 0..repeats {
            mmu.read_memory(last);
        }
        prop_assert_eq!(mmu.stats(), before);
    }

    /// Any page number is accepted, including the extremes of the range.
    #[test]
    fn prop_any_page_number_accepted(
        kind in policy_strategy(),
        pages in prop::collection::vec(any::<u64>(), 1..50)
    ) {
        let mut mmu = build(2, kind, 0);
        for page in pages {
            mmu.write_memory(PageNumber::new(page));
        }
        prop_assert!(mmu.total_page_faults() >= 1);
        prop_assert!(mmu.resident_count() <= 2);
    }
}
