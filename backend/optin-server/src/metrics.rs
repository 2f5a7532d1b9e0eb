use metrics::counter;

/// Counters for contact-list gateway traffic
#[derive(Clone)]
pub struct GatewayMetrics {
    prefix: &'static str,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "optin_gateway",
        }
    }

    /// Record a request that passed validation
    pub fn request_received(&self, action: &str) {
        counter!(format!("{}.requests.total", self.prefix)).increment(1);
        counter!(format!("{}.requests.{}", self.prefix, action)).increment(1);
    }

    /// Record a contact-list mutation that completed upstream
    pub fn request_succeeded(&self, action: &str) {
        counter!(format!("{}.succeeded.{}", self.prefix, action)).increment(1);
    }

    /// Record a failed request by error kind
    pub fn error_occurred(&self, kind: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, kind)).increment(1);
    }
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::new()
    }
}
