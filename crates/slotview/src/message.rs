//! Status lines and explanation text
//!
//! The status line is the one-line result of the last action; the
//! explanation block restates the teaching concepts plus a sentence about
//! that action. Both are plain strings embedded into the page by
//! [`render_page`](crate::render_page).

use slotsim::{Error, LoadOutcome};

/// Status line before any action has run
pub fn ready_status() -> String {
    "Ready. Store a value or load a key to begin.".to_string()
}

/// Explanation shown before any action has run
pub fn ready_explanation() -> String {
    "Store writes a value into a slot; the first load of a slot is a cold access."
        .to_string()
}

/// Status line for a successful store
pub fn store_status(key: i64, value: i64) -> String {
    format!("✅ Stored value {value} at key {key}")
}

/// Explanation for a successful store
pub fn store_explanation(key: i64, value: i64) -> String {
    format!(
        "Value {value} has been stored at storage slot {key}. \
         The slot will be marked as warm when first accessed."
    )
}

/// Status line for a load, with warm/cold glyph and gas indicator
///
/// Gas labels are illustrative only: cold reads show `high-gas`, warm
/// reads `low-gas`, no real cost model behind them.
pub fn load_status(key: i64, outcome: LoadOutcome) -> String {
    let gas = if outcome.warm {
        "<span class=\"gas-indicator low-gas\">Low Gas</span>"
    } else {
        "<span class=\"gas-indicator high-gas\">High Gas</span>"
    };
    let glyph = if outcome.warm { "🔥 WARM" } else { "❄️ COLD" };
    format!(
        "📖 Key: {key} → Value: {value} | {glyph} {gas}",
        value = outcome.value
    )
}

/// Explanation for a load
pub fn load_explanation(key: i64, outcome: LoadOutcome) -> String {
    let cost = if outcome.warm {
        "This was a warm access - costs less gas since the slot was accessed before."
    } else {
        "This was a cold access - costs more gas since it's the first time accessing this slot."
    };
    format!(
        "Loaded value {value} from storage slot {key}. {cost}",
        value = outcome.value
    )
}

/// Status line for a clear
pub fn clear_status() -> String {
    "🗑️ Storage and cache cleared".to_string()
}

/// Explanation for a clear
pub fn clear_explanation() -> String {
    "All storage slots and cache have been cleared. Ready for new operations!".to_string()
}

/// Status line for rejected input; no state was mutated
pub fn rejected_status(err: &Error) -> String {
    format!("❌ {err}")
}

/// Explanation block: operation-specific sentence plus the key concepts
pub fn explanation_block(operation: &str) -> String {
    format!(
        "<strong>💡 Current Operation:</strong><br>\
         {operation}<br><br>\
         <strong>Key Concepts:</strong><br>\
         • <strong>Cold access:</strong> First time accessing costs more gas<br>\
         • <strong>Warm access:</strong> Subsequent accesses cost less gas<br>\
         • <strong>Cache:</strong> Tracks which slots have been accessed<br>\
         • <strong>Default value:</strong> Unset storage slots return 0"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_status() {
        assert_eq!(store_status(5, 100), "✅ Stored value 100 at key 5");
    }

    #[test]
    fn test_load_status_cold() {
        let msg = load_status(7, LoadOutcome { warm: false, value: 0 });
        assert!(msg.contains("Key: 7"));
        assert!(msg.contains("Value: 0"));
        assert!(msg.contains("COLD"));
        assert!(msg.contains("high-gas"));
    }

    #[test]
    fn test_load_status_warm() {
        let msg = load_status(5, LoadOutcome { warm: true, value: 100 });
        assert!(msg.contains("WARM"));
        assert!(msg.contains("low-gas"));
        assert!(!msg.contains("high-gas"));
    }

    #[test]
    fn test_rejected_status() {
        let msg = rejected_status(&Error::InvalidKey("abc".to_string()));
        assert!(msg.starts_with("❌"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_explanation_block_concepts() {
        let block = explanation_block("Loaded value 0 from storage slot 7.");
        assert!(block.contains("Current Operation"));
        assert!(block.contains("Cold access"));
        assert!(block.contains("Warm access"));
        assert!(block.contains("Unset storage slots return 0"));
    }
}
