// Lightweight instrumentation for counting matcher work in development.
// Thread-local cells keep the counters off the hot path's shared state;
// reset and snapshot helpers let a small dev binary collect breakdowns.
use std::cell::Cell;

thread_local! {
    static SCANS: Cell<u64> = Cell::new(0);
    static CHARS_COMPARED: Cell<u64> = Cell::new(0);
    static CELLS_FILLED: Cell<u64> = Cell::new(0);
}

pub fn reset_counters() {
    SCANS.with(|c| c.set(0));
    CHARS_COMPARED.with(|c| c.set(0));
    CELLS_FILLED.with(|c| c.set(0));
}

/// (scans, chars_compared, cells_filled) since the last reset.
pub fn counters_snapshot() -> (u64, u64, u64) {
    let scans = SCANS.with(|c| c.get());
    let chars = CHARS_COMPARED.with(|c| c.get());
    let cells = CELLS_FILLED.with(|c| c.get());
    (scans, chars, cells)
}

pub fn add_scan() {
    SCANS.with(|c| c.set(c.get().wrapping_add(1)));
}

/// Character comparisons spent extending runs in the scanning matcher.
pub fn add_chars(n: u64) {
    CHARS_COMPARED.with(|c| c.set(c.get().wrapping_add(n)));
}

/// Non-zero cells written by the tabulated matcher.
pub fn add_cells(n: u64) {
    CELLS_FILLED.with(|c| c.set(c.get().wrapping_add(n)));
}
