// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::auth::models::Session;

/// A change notification pushed by the identity provider after the initial
/// bootstrap read.
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityChange {
    SignedIn { session: Session },
    TokenRefreshed { session: Session },
    SignedOut,
}

impl IdentityChange {
    pub fn into_session(self) -> Option<Session> {
        match self {
            Self::SignedIn { session } | Self::TokenRefreshed { session } => Some(session),
            Self::SignedOut => None,
        }
    }
}
