//! Overhead calculator: payload size plus the fixed TCP/IP header cost.

/// Combined TCP + IP header bytes added to every payload.
pub const OVERHEAD_BYTES: u64 = 40;

/// Warning line shown when the input could not be read as a number.
pub const MSG_NOT_A_NUMBER: &str = "Input was not a number; using 0.";

/// Result of one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverheadResult {
    /// Payload size after coercion and clamping.
    pub payload: u64,
    /// Payload plus [`OVERHEAD_BYTES`].
    pub total: u64,
    /// Input was non-empty but not parseable.
    pub warning: bool,
}

/// Leading-integer coercion: an optional sign followed by leading digits
/// parses as that prefix ("42abc" is 42), anything else is None.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut seen_digit = false;
    let mut value: i64 = 0;
    for ch in rest.chars() {
        let Some(digit) = ch.to_digit(10) else { break };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(digit as i64);
    }
    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Compute the bytes on the wire for a raw payload-size input.
///
/// Empty input counts as 0, negatives clamp to 0. The warning flag is set
/// only when a non-empty input failed to parse at all; a clamped negative
/// or a literal "0" is not a warning.
pub fn compute_overhead(raw: &str) -> OverheadResult {
    let trimmed = raw.trim();
    let (payload, warning) = if trimmed.is_empty() {
        (0, false)
    } else {
        match parse_leading_int(trimmed) {
            Some(value) => (value.max(0) as u64, false),
            None => (0, true),
        }
    };
    OverheadResult {
        payload,
        total: payload + OVERHEAD_BYTES,
        warning,
    }
}
