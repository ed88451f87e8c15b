mod client;
pub mod queries;
mod schema;
mod types;

pub use client::BoardClient;
pub use schema::BoardSchema;
pub use types::{
    ChangedFile, ContributionsCollection, IssueItem, PullRequestItem, RepositoryContributions,
    TargetItem,
};
