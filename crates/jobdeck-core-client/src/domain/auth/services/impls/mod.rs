// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use session_domain_service::{SessionDomainService, SessionDomainServiceDependencies};

mod session_domain_service;
