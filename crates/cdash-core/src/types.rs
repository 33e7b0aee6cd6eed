//! Domain types served by the remote API
//!
//! Field names follow Rust conventions; serde maps them onto the camelCase
//! JSON the API returns. Records are immutable once fetched.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// A user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identity, used for lookups and routing
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

/// Postal address of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

impl Address {
    /// "street, suite"
    pub fn street_line(&self) -> String {
        format!("{}, {}", self.street, self.suite)
    }

    /// "zipcode city"
    pub fn city_line(&self) -> String {
        format!("{} {}", self.zipcode, self.city)
    }
}

/// Geographic coordinates, kept as the API's string encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Employer of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    /// Company slogan
    pub catch_phrase: String,
    /// Business descriptor
    pub bs: String,
}

/// A post written by a user
///
/// `user_id` is a weak reference; nothing checks that the user exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Aggregate figures for the landing page, recomputed on every load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_posts: usize,
    pub last_update: DateTime<Local>,
}

impl DashboardStats {
    /// Build stats from freshly loaded collections, stamped with the current time
    pub fn from_collections(users: &[User], posts: &[Post]) -> Self {
        Self::at(users, posts, Local::now())
    }

    pub fn at(users: &[User], posts: &[Post], last_update: DateTime<Local>) -> Self {
        Self {
            total_users: users.len(),
            total_posts: posts.len(),
            last_update,
        }
    }

    /// Format `last_update` the way the given locale writes dates
    pub fn formatted_last_update(&self, locale: Locale) -> String {
        self.last_update
            .format(locale.datetime_format())
            .to_string()
    }
}

/// Sample records for tests in this and downstream crates
#[cfg(any(test, feature = "test-helpers"))]
pub mod fixtures {
    use super::*;

    /// Build a user with the fields the collection view looks at
    pub fn user(id: u32, name: &str, email: &str, company: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.split_whitespace().next().unwrap_or(name).to_lowercase(),
            email: email.to_string(),
            phone: "1-770-736-8031".to_string(),
            website: "example.org".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            company: Company {
                name: company.to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
    }

    pub fn post(id: u32, user_id: u32) -> Post {
        Post {
            user_id,
            id,
            title: format!("Post {id}"),
            body: format!("Body of post {id}"),
        }
    }

    /// `count` users named "User N" with predictable emails and companies
    pub fn users(count: u32) -> Vec<User> {
        (1..=count)
            .map(|i| {
                user(
                    i,
                    &format!("User {i}"),
                    &format!("user{i}@example.com"),
                    &format!("Company {i}"),
                )
            })
            .collect()
    }
}
