// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use feed_domain_service::{FeedDomainService, FeedDomainServiceDependencies};

mod feed_domain_service;
