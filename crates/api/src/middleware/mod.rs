//! Request extractors for authentication.
//!
//! - [`auth::CurrentUser`] -- Resolves the acting user from the `auth` cookie
//!   or a JWT Bearer token.

pub mod auth;
