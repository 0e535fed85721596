#![allow(dead_code)]

use bookmarks_api::{CorsDecision, Headers};

pub fn assert_allowed(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Allowed { headers } => headers,
        other => panic!("expected allowed decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Rejected { headers } => headers,
        other => panic!("expected rejected decision, got {:?}", other),
    }
}
