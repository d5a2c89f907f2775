//! Hex report helpers.
//!
//! Expected reports are written the way they appear in USB captures:
//! colon-separated hex bytes, e.g. `"00:01:FF:C8:14:2A:00:00:00"`.

/// Parse a colon-separated hex string into bytes.
///
/// ```rust
/// use luxafor_test_helpers::hex_report;
///
/// assert_eq!(hex_report("00:04:03"), vec![0x00, 0x04, 0x03]);
/// ```
///
/// # Panics
///
/// Panics if any segment is not a valid hex byte.
#[track_caller]
pub fn hex_report(text: &str) -> Vec<u8> {
    text.split(':')
        .map(|byte| match u8::from_str_radix(byte.trim(), 16) {
            Ok(value) => value,
            Err(e) => panic!("hex_report: invalid byte {byte:?} in {text:?}: {e}"),
        })
        .collect()
}

/// `count` copies of the same parsed report, for repeated-write assertions.
#[track_caller]
pub fn hex_reports(text: &str, count: usize) -> Vec<Vec<u8>> {
    let report = hex_report(text);
    vec![report; count]
}

/// Assert that a write history equals the given hex reports, printing both
/// sides in the capture format on mismatch.
///
/// ```rust
/// use luxafor_test_helpers::assert_report;
///
/// let history = vec![vec![0x00, 0x06, 0x08, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00]];
/// assert_report!(history, ["00:06:08:03:00:00:00:00:00"]);
/// ```
#[macro_export]
macro_rules! assert_report {
    ($history:expr, [$($expected:expr),* $(,)?]) => {{
        let actual: Vec<Vec<u8>> = $history;
        let expected: Vec<Vec<u8>> = vec![$($crate::report::hex_report($expected)),*];
        if actual != expected {
            let fmt = |reports: &[Vec<u8>]| {
                reports
                    .iter()
                    .map(|r| $crate::report::format_hex(r))
                    .collect::<Vec<_>>()
                    .join("\n  ")
            };
            panic!(
                "report mismatch\n actual:\n  {}\n expected:\n  {}",
                fmt(&actual),
                fmt(&expected)
            );
        }
    }};
}

#[doc(hidden)]
pub fn format_hex(report: &[u8]) -> String {
    luxafor_hid_protocol::format_report(report)
}
