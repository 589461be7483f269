// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use thiserror::Error;

/// Failure reported by the identity provider. None of these are fatal to
/// the client; callers degrade to the signed-out state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Identity provider request timed out.")]
    TimedOut,
    #[error("Identity provider request failed: {msg}")]
    Generic { msg: String },
}
