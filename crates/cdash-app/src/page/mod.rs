//! Page instances and their fetch cycles
//!
//! A page instance lives from one navigation to the next. Every fetch cycle
//! it starts is stamped with a [`FetchTicket`]; results carrying any other
//! ticket are stale and ignored.

pub mod dashboard;
pub mod user_detail;
pub mod users;

pub use dashboard::DashboardPage;
pub use user_detail::{UserDetail, UserDetailPage};
pub use users::UsersPage;

use cdash_core::prelude::*;
use cdash_core::I18n;

use crate::handler::Task;
use crate::load_state::{FetchTicket, LoadState, PageError, PageId};
use crate::route::Route;

/// Page-specific state
#[derive(Debug, Clone)]
pub enum Page {
    Dashboard(DashboardPage),
    Users(UsersPage),
    UserDetail(UserDetailPage),
}

/// The page currently on screen
#[derive(Debug, Clone)]
pub struct PageInstance {
    pub id: PageId,
    pub route: Route,
    /// Number of fetch cycles started so far
    cycle: u64,
    pub page: Page,
}

impl PageInstance {
    pub fn new(id: PageId, route: Route, page: Page) -> Self {
        Self {
            id,
            route,
            cycle: 0,
            page,
        }
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Ticket of the latest cycle
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            page: self.id,
            cycle: self.cycle,
        }
    }

    /// Whether a result with this ticket belongs to the latest cycle
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        ticket == self.ticket()
    }

    pub fn is_idle(&self) -> bool {
        match &self.page {
            Page::Dashboard(p) => p.load.is_idle(),
            Page::Users(p) => p.load.is_idle(),
            Page::UserDetail(p) => p.load.is_idle(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match &self.page {
            Page::Dashboard(p) => p.load.is_loading(),
            Page::Users(p) => p.load.is_loading(),
            Page::UserDetail(p) => p.load.is_loading(),
        }
    }

    pub fn error(&self) -> Option<&PageError> {
        match &self.page {
            Page::Dashboard(p) => p.load.error(),
            Page::Users(p) => p.load.error(),
            Page::UserDetail(p) => p.load.error(),
        }
    }

    pub fn can_retry(&self) -> bool {
        match &self.page {
            Page::Dashboard(p) => p.load.can_retry(),
            Page::Users(p) => p.load.can_retry(),
            Page::UserDetail(p) => p.load.can_retry(),
        }
    }

    /// Start a new fetch cycle
    ///
    /// Returns the task to run, or `None` when the page rejected its input
    /// and went straight to `Failed` without any request.
    pub fn begin_cycle(&mut self, i18n: &I18n) -> Option<Task> {
        self.cycle += 1;
        let ticket = self.ticket();

        match &mut self.page {
            Page::Dashboard(p) => {
                p.load = LoadState::Loading;
                Some(Task::LoadDashboard { ticket })
            }
            Page::Users(p) => {
                p.load = LoadState::Loading;
                Some(Task::LoadUsers { ticket })
            }
            Page::UserDetail(p) => match p.user_id {
                Some(user_id) => {
                    p.load = LoadState::Loading;
                    Some(Task::LoadUserDetail { ticket, user_id })
                }
                None => {
                    debug!("Rejected user id {:?}", p.raw_id);
                    p.load = LoadState::Failed(PageError::validation(
                        i18n.t("userDetail.invalidId"),
                    ));
                    None
                }
            },
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardPage> {
        match &self.page {
            Page::Dashboard(p) => Some(p),
            _ => None,
        }
    }

    pub fn users(&self) -> Option<&UsersPage> {
        match &self.page {
            Page::Users(p) => Some(p),
            _ => None,
        }
    }

    pub fn users_mut(&mut self) -> Option<&mut UsersPage> {
        match &mut self.page {
            Page::Users(p) => Some(p),
            _ => None,
        }
    }

    pub fn user_detail(&self) -> Option<&UserDetailPage> {
        match &self.page {
            Page::UserDetail(p) => Some(p),
            _ => None,
        }
    }

    pub(crate) fn dashboard_mut(&mut self) -> Option<&mut DashboardPage> {
        match &mut self.page {
            Page::Dashboard(p) => Some(p),
            _ => None,
        }
    }

    pub(crate) fn user_detail_mut(&mut self) -> Option<&mut UserDetailPage> {
        match &mut self.page {
            Page::UserDetail(p) => Some(p),
            _ => None,
        }
    }
}
