//! Query-string state: `seed=<hex>&state=<json>`.

use nib_core::Seed;
use serde_json::Value;
use tracing::warn;

/// State recovered from a shareable query string.
///
/// Parsing is lossy by design: a malformed seed or `state` payload is
/// logged and dropped so a bad link still renders with defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    pub seed: Option<Seed>,
    pub state: Option<Value>,
}

impl QueryState {
    /// Parse a query string, with or without a leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut out = QueryState::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode(raw);
            match key {
                "seed" => match Seed::parse(&value) {
                    Ok(seed) => out.seed = Some(seed),
                    Err(e) => warn!(error = %e, "ignoring malformed seed in query"),
                },
                "state" => match serde_json::from_str(&value) {
                    Ok(state) => out.state = Some(state),
                    Err(e) => warn!(error = %e, "failed to parse state from query"),
                },
                _ => {}
            }
        }
        out
    }

    /// Serialize a seed and optional snapshot back into a query string.
    pub fn to_query_string(seed: &Seed, state: Option<&Value>) -> String {
        let mut out = format!("seed={seed}");
        if let Some(state) = state {
            out.push_str("&state=");
            out.push_str(&percent_encode(&state.to_string()));
        }
        out
    }
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match hex_pair(bytes.get(i + 1).copied(), bytes.get(i + 2).copied()) {
                Some(b) => {
                    out.push(b);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: Option<u8>, lo: Option<u8>) -> Option<u8> {
    let hi = (hi? as char).to_digit(16)?;
    let lo = (lo? as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
