//! Client-facing message constants shared by the service and HTTP layers.

/// Value of the `result` field on every successful response.
pub const OK: &str = "OK";

pub const NO_AUTHORITY_TO_ACCESS: &str = "no authority to access";
pub const INVALID_REQUEST: &str = "invalid request";
pub const UNEXPECTED_ERROR: &str = "unexpected error";
pub const NOT_AUTHENTICATED: &str = "not authenticated";
