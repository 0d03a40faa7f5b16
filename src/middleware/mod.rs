//! Request middleware and extractors.
//!
//! - [`auth`]: the administrator gate in front of school mutations, the
//!   [`auth::AuthAdm`] extractor it feeds, and the [`auth::BasicAuth`]
//!   extractor used by the login endpoints.
//!
//! # Authentication Flow
//!
//! 1. A user logs in with `Authorization: Basic base64(cpf:password)`
//! 2. The login endpoint returns an `accessToken`
//! 3. School mutations require `Authorization: Bearer <accessToken>` issued to
//!    an existing administrator; anything else is answered with 403

pub mod auth;
