//! Action handler: routes browser requests to simulator operations
//!
//! Every action validates its input first, then mutates the simulator and
//! re-renders the full page from the resulting state. Invalid numeric
//! input renders an error status and mutates nothing.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use slotsim::{parse_key, parse_value, AccessStats, StorageSim};
use slotview::{
    clear_explanation, clear_status, explanation_block, load_explanation, load_status,
    ready_explanation, ready_status, rejected_status, render_page, store_explanation, store_status,
};

use crate::http::{Request, Response};

/// JSON document served by `/state`
#[derive(Debug, Serialize)]
struct StateDoc {
    slots: Vec<SlotDoc>,
    cache: Vec<i64>,
    stats: StatsDoc,
}

#[derive(Debug, Serialize)]
struct SlotDoc {
    key: i64,
    value: i64,
    warm: bool,
}

#[derive(Debug, Serialize)]
struct StatsDoc {
    cold_loads: u64,
    warm_loads: u64,
    stores: u64,
    clears: u64,
    warm_ratio: f64,
}

pub struct ActionHandler {
    sim: Arc<RwLock<StorageSim>>,
    stats: Arc<AccessStats>,
}

impl ActionHandler {
    pub fn new(sim: Arc<RwLock<StorageSim>>, stats: Arc<AccessStats>) -> Self {
        Self { sim, stats }
    }

    pub fn handle(&self, request: &Request) -> Response {
        if request.method != "GET" {
            return Response::method_not_allowed(&request.method);
        }

        match request.path.as_str() {
            "/" => self.handle_index(),
            "/store" => self.handle_store(request),
            "/load" => self.handle_load(request),
            "/clear" => self.handle_clear(),
            "/state" => self.handle_state(),
            path => Response::not_found(path),
        }
    }

    fn handle_index(&self) -> Response {
        let sim = self.sim.read();
        Response::html(render_page(
            &sim,
            &ready_status(),
            &explanation_block(&ready_explanation()),
        ))
    }

    fn handle_store(&self, request: &Request) -> Response {
        // Both fields must parse before anything is touched
        let parsed = parse_key(request.param("key"))
            .and_then(|key| parse_value(request.param("value")).map(|value| (key, value)));

        let (key, value) = match parsed {
            Ok(pair) => pair,
            Err(err) => return self.render_rejected(&err),
        };

        let mut sim = self.sim.write();
        sim.store(key, value);
        self.stats.record_store();

        Response::html(render_page(
            &sim,
            &store_status(key, value),
            &explanation_block(&store_explanation(key, value)),
        ))
    }

    fn handle_load(&self, request: &Request) -> Response {
        let key = match parse_key(request.param("key")) {
            Ok(key) => key,
            Err(err) => return self.render_rejected(&err),
        };

        let mut sim = self.sim.write();
        let outcome = sim.load(key);
        if outcome.warm {
            self.stats.record_warm();
        } else {
            self.stats.record_cold();
        }

        Response::html(render_page(
            &sim,
            &load_status(key, outcome),
            &explanation_block(&load_explanation(key, outcome)),
        ))
    }

    fn handle_clear(&self) -> Response {
        let mut sim = self.sim.write();
        sim.clear();
        self.stats.record_clear();

        Response::html(render_page(
            &sim,
            &clear_status(),
            &explanation_block(&clear_explanation()),
        ))
    }

    fn handle_state(&self) -> Response {
        let sim = self.sim.read();
        let doc = StateDoc {
            slots: sim
                .slots()
                .into_iter()
                .map(|(key, value)| SlotDoc {
                    key,
                    value,
                    warm: sim.is_warm(key),
                })
                .collect(),
            cache: sim.warm_keys().to_vec(),
            stats: StatsDoc {
                cold_loads: self.stats.cold_loads(),
                warm_loads: self.stats.warm_loads(),
                stores: self.stats.stores(),
                clears: self.stats.clears(),
                warm_ratio: self.stats.warm_ratio(),
            },
        };

        match serde_json::to_string_pretty(&doc) {
            Ok(body) => Response::json(body),
            Err(e) => Response::bad_request(&format!("snapshot failed: {}", e)),
        }
    }

    fn render_rejected(&self, err: &slotsim::Error) -> Response {
        let sim = self.sim.read();
        Response::html(render_page(
            &sim,
            &rejected_status(err),
            &explanation_block(&err.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Status;

    fn handler() -> ActionHandler {
        ActionHandler::new(
            Arc::new(RwLock::new(StorageSim::new())),
            Arc::new(AccessStats::new()),
        )
    }

    fn get(path_and_query: &str) -> Request {
        let (path, query) = match path_and_query.split_once('?') {
            None => (path_and_query.to_string(), Vec::new()),
            Some((path, query)) => (
                path.to_string(),
                query
                    .split('&')
                    .map(|pair| {
                        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                        (k.to_string(), v.to_string())
                    })
                    .collect(),
            ),
        };
        Request {
            method: "GET".to_string(),
            path,
            query,
        }
    }

    #[test]
    fn test_index_renders_empty_state() {
        let handler = handler();
        let resp = handler.handle(&get("/"));

        assert_eq!(resp.status, Status::Ok);
        assert!(resp.body.contains("No data stored yet"));
        assert!(resp.body.contains("Cache is empty"));
    }

    #[test]
    fn test_store_then_load_scenario() {
        let handler = handler();

        let resp = handler.handle(&get("/store?key=5&value=100"));
        assert!(resp.body.contains("✅ Stored value 100 at key 5"));

        let resp = handler.handle(&get("/load?key=5"));
        assert!(resp.body.contains("Value: 100"));
        assert!(resp.body.contains("COLD"));
        assert!(resp.body.contains("high-gas"));

        let resp = handler.handle(&get("/load?key=5"));
        assert!(resp.body.contains("Value: 100"));
        assert!(resp.body.contains("WARM"));
        assert!(resp.body.contains("low-gas"));
    }

    #[test]
    fn test_load_unstored_key() {
        let handler = handler();

        let resp = handler.handle(&get("/load?key=7"));
        assert!(resp.body.contains("Value: 0"));
        assert!(resp.body.contains("COLD"));

        let resp = handler.handle(&get("/load?key=7"));
        assert!(resp.body.contains("Value: 0"));
        assert!(resp.body.contains("WARM"));
    }

    #[test]
    fn test_clear_resets_warmness() {
        let handler = handler();

        handler.handle(&get("/store?key=3&value=9"));
        handler.handle(&get("/clear"));

        let resp = handler.handle(&get("/load?key=3"));
        assert!(resp.body.contains("Value: 0"));
        assert!(resp.body.contains("COLD"));
    }

    #[test]
    fn test_invalid_key_mutates_nothing() {
        let handler = handler();
        handler.handle(&get("/store?key=1&value=10"));
        handler.handle(&get("/load?key=1"));

        let resp = handler.handle(&get("/store?key=abc&value=5"));
        assert!(resp.body.contains("❌"));

        let resp = handler.handle(&get("/load?key=abc"));
        assert!(resp.body.contains("❌"));

        // State is exactly as before the rejected calls
        let sim = handler.sim.read();
        assert_eq!(sim.slots(), vec![(1, 10)]);
        assert_eq!(sim.warm_keys(), &[1]);
    }

    #[test]
    fn test_store_rejects_bad_value() {
        let handler = handler();

        let resp = handler.handle(&get("/store?key=1&value=ten"));
        assert!(resp.body.contains("❌"));
        assert!(handler.sim.read().is_empty());
    }

    #[test]
    fn test_missing_params_rejected() {
        let handler = handler();

        let resp = handler.handle(&get("/store"));
        assert!(resp.body.contains("❌"));

        let resp = handler.handle(&get("/load"));
        assert!(resp.body.contains("❌"));
        assert_eq!(handler.sim.read().cache_len(), 0);
    }

    #[test]
    fn test_unknown_path() {
        let handler = handler();
        let resp = handler.handle(&get("/nope"));
        assert_eq!(resp.status, Status::NotFound);
    }

    #[test]
    fn test_non_get_rejected() {
        let handler = handler();
        let request = Request {
            method: "POST".to_string(),
            path: "/clear".to_string(),
            query: Vec::new(),
        };
        let resp = handler.handle(&request);
        assert_eq!(resp.status, Status::MethodNotAllowed);
    }

    #[test]
    fn test_state_snapshot() {
        let handler = handler();
        handler.handle(&get("/store?key=5&value=100"));
        handler.handle(&get("/load?key=5"));
        handler.handle(&get("/load?key=5"));
        handler.handle(&get("/load?key=7"));

        let resp = handler.handle(&get("/state"));
        assert_eq!(resp.content_type, "application/json");

        let doc: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(doc["slots"][0]["key"], 5);
        assert_eq!(doc["slots"][0]["value"], 100);
        assert_eq!(doc["slots"][0]["warm"], true);
        assert_eq!(doc["cache"], serde_json::json!([5, 7]));
        assert_eq!(doc["stats"]["cold_loads"], 2);
        assert_eq!(doc["stats"]["warm_loads"], 1);
        assert_eq!(doc["stats"]["stores"], 1);
    }
}
