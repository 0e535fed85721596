#![allow(dead_code)]

use bookmarks_api::Headers;
use bookmarks_api::constants::header;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

/// Reflected origin, if the response approved one.
pub fn allow_origin(headers: &Headers) -> Option<&str> {
    header_value(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN)
}

/// Whether caches are told the response depends on `Origin`.
pub fn varies_on_origin(headers: &Headers) -> bool {
    header_value(headers, header::VARY).is_some_and(|value| {
        value
            .split(',')
            .any(|part| part.trim().eq_ignore_ascii_case(header::ORIGIN))
    })
}
