//! Full page template
//!
//! The page is rebuilt from scratch on every request: current fragments,
//! the status line for the last action, and the explanation block. The
//! form posts back as plain GET queries, so the page works without any
//! client-side scripting.

use slotsim::StorageSim;

use crate::render::{render_cache, render_slots};

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 720px; margin: 2em auto; color: #2c3e50; }\n\
h1 { font-size: 1.4em; }\n\
form { display: inline-block; margin-right: 1em; }\n\
.panel { border: 1px solid #bdc3c7; border-radius: 6px; padding: 12px; margin: 1em 0; }\n\
.placeholder { text-align: center; color: #7f8c8d; padding: 20px; }\n\
.storage-slot { display: flex; justify-content: space-between; padding: 6px 10px; margin: 4px 0; border-radius: 4px; }\n\
.storage-slot.cold { background: #eaf2f8; }\n\
.storage-slot.warm { background: #fdebd0; }\n\
.slot-status.cold-status { color: #2980b9; }\n\
.slot-status.warm-status { color: #e67e22; }\n\
.cache-item { display: inline-block; background: #fdebd0; border-radius: 4px; padding: 4px 10px; margin: 2px; }\n\
.gas-indicator { border-radius: 4px; padding: 2px 6px; font-size: 0.85em; }\n\
.gas-indicator.high-gas { background: #f5b7b1; }\n\
.gas-indicator.low-gas { background: #abebc6; }\n\
#result { min-height: 1.5em; font-weight: bold; }\n\
#explanation { background: #f8f9f9; }";

/// Render the complete HTML document for the current simulator state
///
/// `status` is the one-line result of the last action; `explanation` is
/// the operation-specific sentence fed into the key-concepts block by the
/// caller (already formatted, see [`explanation_block`](crate::explanation_block)).
pub fn render_page(sim: &StorageSim, status: &str, explanation: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Storage Gas Simulator</title>\n\
         <style>\n{STYLE}\n</style>\n\
         </head>\n\
         <body>\n\
         <h1>⛽ Storage Gas Simulator</h1>\n\
         <p>Cold reads cost more gas than warm reads. Store values, load keys, watch the cache warm up.</p>\n\
         <form action=\"/store\" method=\"get\">\n\
         <input type=\"text\" name=\"key\" placeholder=\"key\" size=\"6\">\n\
         <input type=\"text\" name=\"value\" placeholder=\"value\" size=\"6\">\n\
         <button type=\"submit\">Store</button>\n\
         </form>\n\
         <form action=\"/load\" method=\"get\">\n\
         <input type=\"text\" name=\"key\" placeholder=\"key\" size=\"6\">\n\
         <button type=\"submit\">Load</button>\n\
         </form>\n\
         <form action=\"/clear\" method=\"get\">\n\
         <button type=\"submit\">Clear</button>\n\
         </form>\n\
         <div id=\"result\" class=\"panel\">{status}</div>\n\
         <h2>Storage Slots</h2>\n\
         <div id=\"storageSlots\" class=\"panel\">{slots}</div>\n\
         <h2>Access Cache</h2>\n\
         <div id=\"cacheItems\" class=\"panel\">{cache}</div>\n\
         <div id=\"explanation\" class=\"panel\">{explanation}</div>\n\
         </body>\n\
         </html>\n",
        slots = render_slots(sim),
        cache = render_cache(sim),
    )
}
