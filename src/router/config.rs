/// Knobs for the host-facing rendering of the error outcomes.
///
/// The reference default mirrors the classic Express-style router, which
/// writes `Content-Type: application/json` on its empty 404/405 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    pub error_content_type: &'static str,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            error_content_type: "application/json",
        }
    }
}
