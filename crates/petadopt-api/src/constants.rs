/// Prefix of every JSON endpoint.
pub const API_PREFIX: &str = "/api";

/// Slack added to the photo limit for the rest of a multipart body.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Upper bound on in-flight requests.
pub const HTTP_CONCURRENCY_LIMIT: usize = 1024;
