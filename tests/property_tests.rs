//! # Property Tests: Response Model and Registry
//!
//! Universally quantified checks over header names, status codes and
//! registration sequences.

mod common;

use std::sync::Arc;

use common::{AlphaServer, BetaServer};
use proptest::prelude::*;
use serverlib_codec::{HeaderMap, HttpResponse, Response, StatusClass};
use serverlib_core::ServerRegistry;

fn header_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9-]{0,24}"
}

fn header_value() -> impl Strategy<Value = String> {
    "[ -~]{0,32}"
}

proptest! {
    #[test]
    fn prop_header_lookup_ignores_case(name in header_name(), value in header_value()) {
        let mut response = HttpResponse::new("req", "");
        response.set_header(&name, &value);

        prop_assert_eq!(response.has_header(&name), response.has_header(&name.to_uppercase()));
        prop_assert_eq!(response.has_header(&name), response.has_header(&name.to_lowercase()));
        prop_assert_eq!(response.header(&name.to_lowercase()), value.as_str());
    }

    #[test]
    fn prop_status_predicates_match_ranges(code in 0u16..1000) {
        let mut response = HttpResponse::new("req", "");
        response.set_status_code(code);

        prop_assert_eq!(response.is_success(), (200..300).contains(&code));
        prop_assert_eq!(response.is_redirect(), (300..400).contains(&code));
        prop_assert_eq!(response.is_client_error(), (400..500).contains(&code));
        prop_assert_eq!(response.is_server_error(), (500..600).contains(&code));

        let classified = [
            response.is_success(),
            response.is_redirect(),
            response.is_client_error(),
            response.is_server_error(),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();
        prop_assert!(classified <= 1);
        prop_assert_eq!(classified == 0, matches!(
            StatusClass::of(code),
            StatusClass::Informational | StatusClass::Unclassified
        ));
    }

    #[test]
    fn prop_status_line_round_trips(
        code in 100u16..600,
        message in "[A-Za-z][A-Za-z ]{0,20}",
        body in "[ -~]{0,64}",
    ) {
        let response = HttpResponse::with_parts("req", code, &message, HeaderMap::new(), &body);
        let wire = response.to_http_string();
        let status_line = wire.split("\r\n").next().unwrap();
        let mut parts = status_line.splitn(3, ' ');

        prop_assert_eq!(parts.next(), Some("HTTP/1.1"));
        prop_assert_eq!(parts.next().and_then(|c| c.parse::<u16>().ok()), Some(code));
        prop_assert_eq!(parts.next(), Some(message.as_str()));
        prop_assert!(wire.ends_with(body.as_str()));
    }

    #[test]
    fn prop_set_headers_render_once(
        names in proptest::collection::btree_set("X-[A-Za-z]{1,12}", 1..8),
    ) {
        let mut response = HttpResponse::new("req", "payload");
        for name in &names {
            response.set_header(name, "v");
            // Writing the same header again in another case must not add a line.
            response.set_header(&name.to_lowercase(), "v");
        }

        let wire = response.to_http_string().to_ascii_lowercase();
        let header_block = wire.split("\r\n\r\n").next().unwrap();
        for name in &names {
            let line = format!("{}: v", name.to_lowercase());
            prop_assert_eq!(header_block.split("\r\n").filter(|l| *l == line).count(), 1);
        }
    }

    #[test]
    fn prop_content_length_matches_body(body in "\\PC{0,64}") {
        let response = HttpResponse::new("req", &body);
        prop_assert_eq!(response.content_length(), body.len() as u64);
        prop_assert_eq!(response.has_body(), !body.is_empty());
    }

    #[test]
    fn prop_default_is_first_remaining_registration(
        ids in proptest::collection::vec("[a-z]{1,6}", 1..10),
        remove in 0usize..10,
    ) {
        let mut registry = ServerRegistry::new();
        let mut expected: Vec<String> = Vec::new();
        for (i, id) in ids.iter().enumerate() {
            let added = if i % 2 == 0 {
                registry.register::<AlphaServer>(id)
            } else {
                registry.register::<BetaServer>(id)
            };
            prop_assert_eq!(added, !expected.contains(id));
            if added {
                expected.push(id.clone());
            }
        }

        let first = registry.get_default_server().unwrap();
        let again = registry.get_default_server().unwrap();
        prop_assert!(Arc::ptr_eq(&first, &again));

        let victim = expected[remove % expected.len()].clone();
        prop_assert!(registry.unregister_server(&victim));
        expected.retain(|id| *id != victim);

        let ids_now: Vec<&str> = registry.ids().collect();
        prop_assert_eq!(ids_now, expected.iter().map(String::as_str).collect::<Vec<_>>());

        match registry.get_default_server() {
            Some(rebuilt) => {
                prop_assert!(!expected.is_empty());
                prop_assert!(!Arc::ptr_eq(&first, &rebuilt));
            }
            None => prop_assert!(expected.is_empty()),
        }
    }
}
