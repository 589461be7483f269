// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mock_app_dependencies::{
    mock_job_post, mock_seeker_profile, mock_session, mock_user_id, MockAppDependencies,
    MockFeedDomainServiceDependencies, MockSessionDomainServiceDependencies,
};

mod mock_app_dependencies;
