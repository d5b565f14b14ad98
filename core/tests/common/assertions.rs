// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use badical_core::LocalizedEvent;

/// Asserts that events are ordered by date, ties broken by id.
///
/// # Panics
///
/// Panics at the first pair out of order.
pub fn assert_chronological(events: &[LocalizedEvent]) {
    for pair in events.windows(2) {
        let (a, b) = (&pair[0].event, &pair[1].event);
        let key_a = (a.instant, a.id.to_string());
        let key_b = (b.instant, b.id.to_string());
        assert!(key_a <= key_b, "{} {} after {} {}", a.instant, a.id, b.instant, b.id);
    }
}

/// Asserts that a calendar file uses CRLF line endings and lines of at most 75 octets.
///
/// # Panics
///
/// Panics at the first offending line.
pub fn assert_folded(bytes: &[u8]) {
    let text = std::str::from_utf8(bytes).expect("calendar should be UTF-8");
    assert!(text.ends_with("\r\n"), "missing final CRLF");
    for line in text.split("\r\n") {
        assert!(!line.contains('\n'), "bare LF in {line:?}");
        assert!(line.len() <= 75, "{} octets: {line:?}", line.len());
    }
}
