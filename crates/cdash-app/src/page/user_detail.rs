//! User detail page: one user and their posts

use cdash_core::{Post, User};
use serde::Serialize;

use crate::load_state::LoadState;
use crate::route::parse_user_id;

/// Data shown on the detail page, fetched together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDetail {
    pub user: User,
    pub posts: Vec<Post>,
}

impl UserDetail {
    /// Translation key for the posts counter, singular for exactly one post
    pub fn post_count_key(&self) -> &'static str {
        if self.posts.len() == 1 {
            "userDetail.posts.count"
        } else {
            "userDetail.posts.countPlural"
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserDetailPage {
    /// Id segment exactly as it appeared in the route
    pub raw_id: String,
    /// Parsed id; `None` means the route id was rejected
    pub user_id: Option<u32>,
    pub load: LoadState<UserDetail>,
}

impl UserDetailPage {
    pub fn new(raw_id: impl Into<String>) -> Self {
        let raw_id = raw_id.into();
        let user_id = parse_user_id(&raw_id);
        Self {
            raw_id,
            user_id,
            load: LoadState::Idle,
        }
    }
}
