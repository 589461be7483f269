// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::general::services::HapticsService;

/// Default `HapticsService` for hosts without haptic support.
pub struct NoopHapticsService;

impl HapticsService for NoopHapticsService {
    fn pulse(&self) {}
}
