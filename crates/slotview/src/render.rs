//! Slot and cache view fragments
//!
//! Both fragments are total recomputations from simulator state. Warm or
//! cold status is derived by testing access-cache membership with the same
//! canonical `i64` keys the simulator uses, so the rendered status can
//! never disagree with what `load` would report.

use slotsim::StorageSim;

const EMPTY_SLOTS: &str = "<div class=\"placeholder\">No data stored yet. Try storing a value!</div>";
const EMPTY_CACHE: &str =
    "<div class=\"placeholder\">Cache is empty. Load some values to warm them up!</div>";

/// Render the storage slot list
///
/// One `storage-slot` div per stored key, ascending key order, showing
/// key, value and warm/cold status. Placeholder text when nothing is
/// stored.
pub fn render_slots(sim: &StorageSim) -> String {
    let entries = sim.slots();
    if entries.is_empty() {
        return EMPTY_SLOTS.to_string();
    }

    entries
        .iter()
        .map(|(key, value)| {
            let status = if sim.is_warm(*key) { "warm" } else { "cold" };
            format!(
                "<div class=\"storage-slot {status}\">\
                 <span class=\"slot-key\">Key: {key}</span>\
                 <span class=\"slot-value\">{value}</span>\
                 <span class=\"slot-status {status}-status\">{status}</span>\
                 </div>"
            )
        })
        .collect()
}

/// Render the access cache list
///
/// One `cache-item` div per cached key in first-access order. Placeholder
/// text when the cache is empty.
pub fn render_cache(sim: &StorageSim) -> String {
    let keys = sim.warm_keys();
    if keys.is_empty() {
        return EMPTY_CACHE.to_string();
    }

    keys.iter()
        .map(|key| format!("<div class=\"cache-item\">Key: {key}</div>"))
        .collect()
}
