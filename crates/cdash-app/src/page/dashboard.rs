//! Dashboard page: user and post totals

use cdash_core::DashboardStats;

use crate::load_state::LoadState;

#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    pub load: LoadState<DashboardStats>,
}
