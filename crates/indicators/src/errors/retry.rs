/// Classification for retry policy.
///
/// Used by the HTTP fetcher to decide whether a failed provider call gets its
/// single fixed-backoff retry.
///
/// # Behavior Summary
///
/// | Class | Retry once after backoff? | Adapter result on final failure |
/// |-------|---------------------------|---------------------------------|
/// | `Never` | No | Empty series |
/// | `WithBackoff` | Yes | Empty series |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad status, malformed body, or unsupported request.
    /// Repeating the same call would produce the same answer.
    Never,

    /// Transient transport failure (connect error, reset, timeout).
    /// Retried exactly once after the configured fixed backoff.
    WithBackoff,
}
