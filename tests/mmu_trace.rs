//! Debug trace output tests.
//!
//! A capturing `log::Log` collects every line emitted under the trace
//! target, so the exact event sequence can be checked.

use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};
use vmsim::{ClockMmu, LruMmu, Mmu, PageNumber};

const TRACE_TARGET: &str = "vmsim::trace";

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == TRACE_TARGET
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

fn install_logger() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Debug);
}

/// Take every line captured since the last call.
fn drain_lines() -> Vec<String> {
    std::mem::take(&mut *LOGGER.lines.lock().unwrap())
}

fn p(n: u64) -> PageNumber {
    PageNumber::new(n)
}

// One test function: the logger is global to this binary, and parallel
// tests would interleave their lines.
#[test]
fn test_trace_lines() {
    install_logger();

    // ------------------------------------------------------------------
    // Clock: free-slot loads, full sweep, replacement, referenced hit
    // ------------------------------------------------------------------
    let mut clock = ClockMmu::new(2).unwrap();
    clock.set_debug(true);

    clock.read_memory(p(1));
    clock.read_memory(p(2));
    assert_eq!(
        drain_lines(),
        vec![
            "FAULT: Page 1",
            "LOADED: Page 1. Dirty: false. Reference: 1 (Free slot)",
            "FAULT: Page 2",
            "LOADED: Page 2. Dirty: false. Reference: 1 (Free slot)",
        ]
    );

    clock.read_memory(p(3));
    assert_eq!(
        drain_lines(),
        vec![
            "FAULT: Page 3",
            "SECOND CHANCE: Page 1. Reference: 0",
            "SECOND CHANCE: Page 2. Reference: 0",
            "REMOVING: Clean 1",
            "LOADED: Page 3. Dirty: false. Reference: 1 (Replaced page)",
        ]
    );

    clock.write_memory(p(3));
    assert_eq!(drain_lines(), vec!["HIT: Page 3. Dirty: true. Reference: 1"]);

    // Disabled: nothing is emitted, counters still move.
    clock.set_debug(false);
    clock.read_memory(p(9));
    clock.write_memory(p(9));
    assert!(drain_lines().is_empty());
    assert_eq!(clock.total_page_faults(), 4);

    // ------------------------------------------------------------------
    // LRU: dirty eviction
    // ------------------------------------------------------------------
    let mut lru = LruMmu::new(1).unwrap();
    lru.set_debug(true);

    lru.write_memory(p(1));
    lru.read_memory(p(1));
    lru.read_memory(p(2));
    assert_eq!(
        drain_lines(),
        vec![
            "FAULT: Page 1",
            "LOADED: Page 1. Dirty: true",
            "HIT: Page 1. Dirty: true",
            "FAULT: Page 2",
            "REMOVING: Dirty 1",
            "LOADED: Page 2. Dirty: false",
        ]
    );

    // Never enabled: silent from the start.
    let mut quiet = LruMmu::new(1).unwrap();
    quiet.write_memory(p(1));
    quiet.read_memory(p(2));
    assert!(drain_lines().is_empty());
    assert_eq!(quiet.total_disk_writes(), 1);
}
