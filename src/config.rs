use crate::auth::Token;
use crate::error::{DocboardError, Result};

/// Repository whose community contributions get the longer review turnaround
/// and the first-time-contributor check.
pub const OPEN_SOURCE_REPO: &str = "github/docs";

/// First path segment that marks documentation content; the second segment
/// under it names the feature area.
pub const CONTENT_ROOT: &str = "content";

/// Team whose members are classified as docs writers.
pub const DOCS_TEAM_SLUG: &str = "docs";

const DEFAULT_TURNAROUND_DAYS: i64 = 2;
const OPEN_SOURCE_TURNAROUND_DAYS: i64 = 3;

/// Run configuration, built once at startup and passed down explicitly.
///
/// Everything here comes from the triggering workflow: the event provides the
/// item, repository, and author; the workflow provides the board coordinates
/// and credential.
#[derive(Debug, Clone)]
pub struct Config {
    /// Opaque node id of the pull request or issue to file.
    pub item_node_id: String,
    /// Organization that owns the review board.
    pub organization: String,
    /// Project number of the review board within the organization.
    pub project_number: i64,
    /// Full name ("owner/repo") of the repository the event fired in.
    pub repository: String,
    /// Login of the item's author.
    pub author: String,
    /// Bearer credential for the API.
    pub token: Option<Token>,
    /// API base URL; overridable for tests.
    pub api_base_url: String,
}

impl Config {
    pub fn is_open_source_repo(&self) -> bool {
        self.repository == OPEN_SOURCE_REPO
    }

    /// Days added to "now" to compute the review due date.
    pub fn turnaround_days(&self) -> i64 {
        if self.is_open_source_repo() {
            OPEN_SOURCE_TURNAROUND_DAYS
        } else {
            DEFAULT_TURNAROUND_DAYS
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.item_node_id.is_empty() {
            return Err(DocboardError::Config("item node id is empty".to_string()));
        }
        if self.organization.is_empty() {
            return Err(DocboardError::Config(
                "organization login is empty".to_string(),
            ));
        }
        if !self.repository.contains('/') {
            return Err(DocboardError::Config(format!(
                "repository '{}' is not in 'owner/repo' format",
                self.repository
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(repository: &str) -> Config {
        Config {
            item_node_id: "PR_node".to_string(),
            organization: "github".to_string(),
            project_number: 1,
            repository: repository.to_string(),
            author: "octocat".to_string(),
            token: None,
            api_base_url: "https://api.github.com".to_string(),
        }
    }

    #[test]
    fn turnaround_is_three_days_for_open_source_repo() {
        assert_eq!(config_for("github/docs").turnaround_days(), 3);
    }

    #[test]
    fn turnaround_is_two_days_everywhere_else() {
        assert_eq!(config_for("github/docs-internal").turnaround_days(), 2);
        assert_eq!(config_for("acme/widgets").turnaround_days(), 2);
    }

    #[test]
    fn validate_rejects_malformed_repository() {
        let config = config_for("not-a-full-name");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_item_id() {
        let mut config = config_for("github/docs");
        config.item_node_id.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(config_for("github/docs").validate().is_ok());
    }
}
