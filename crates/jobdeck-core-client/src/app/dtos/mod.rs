// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use profile_seed::ProfileSeed;

pub use crate::domain::{
    auth::models::{IdentityChange, IdentityError, Session, UserKind},
    feed::models::{
        DetailsSelection, DismissDirection, DismissTrigger, DismissVerdict, FeedSnapshot,
        SwipePhase,
    },
    jobs::models::{JobPost, JobPostStatus},
    navigation::models::Page,
    profiles::models::{ProfileStatus, SeekerProfile},
    shared::models::{JobPostId, UserId},
};

mod profile_seed;
