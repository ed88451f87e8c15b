use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use log::info;

use crate::auth::Token;
use crate::board::queries::{build_update_mutation, FieldUpdates};
use crate::board::BoardClient;
use crate::config::{Config, DOCS_TEAM_SLUG};
use crate::triage::{author_label, feature_string, prior_contributions, ContributorType, SizeCategory};

/// One-shot job: file the triggering pull request or issue on the docs
/// review board and populate its fields. Arguments come from the workflow
/// environment.
#[derive(Parser)]
#[command(name = "docboard")]
#[command(author, version, about = "Docs review board filing tool", long_about = None)]
pub struct Cli {
    /// Node id of the pull request or issue to file
    #[arg(long, env = "ITEM_NODE_ID")]
    item_id: String,

    /// Organization that owns the review board
    #[arg(long, env = "ORGANIZATION", default_value = "github")]
    organization: String,

    /// Project number of the review board
    #[arg(long, env = "PROJECT_NUMBER")]
    project_number: i64,

    /// Full name (owner/repo) of the repository the event fired in
    #[arg(long, env = "REPO")]
    repo: String,

    /// Login of the item's author
    #[arg(long, env = "AUTHOR_LOGIN")]
    author: String,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    api_url: String,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            item_node_id: self.item_id,
            organization: self.organization,
            project_number: self.project_number,
            repository: self.repo,
            author: self.author,
            token: self.token.map(Token::from),
            api_base_url: self.api_url,
        }
    }

    pub async fn execute(self) -> Result<()> {
        let config = self.into_config();
        config.validate()?;

        let client = BoardClient::new(&config.api_base_url, config.token.clone())?;
        let item_id = file_item(&config, &client).await?;

        info!("Filed item {item_id} on the review board");
        Ok(())
    }
}

/// The full pipeline: fetch board metadata and the target item, derive the
/// field values, add the item, then set every field in one mutation.
/// Returns the new project item id.
async fn file_item(config: &Config, client: &BoardClient) -> crate::error::Result<String> {
    info!(
        "Fetching board metadata for project {}/{}",
        config.organization, config.project_number
    );
    let (schema, item) = client
        .fetch_board_and_item(&config.organization, config.project_number, &config.item_node_id)
        .await?;

    let size = SizeCategory::for_item(&item);
    let feature = feature_string(&item);

    let is_docs_team = client
        .is_team_member(&config.organization, DOCS_TEAM_SLUG, &config.author)
        .await?;
    let is_org_member = client
        .is_org_member(&config.organization, &config.author)
        .await?;
    let contributor_type =
        ContributorType::classify(is_docs_team, is_org_member, config.is_open_source_repo());

    // Only the open-source repo gets the first-time-contributor check.
    let prior = if config.is_open_source_repo() {
        let contributions = client.fetch_contributions(&config.author).await?;
        Some(prior_contributions(&contributions, &config.repository))
    } else {
        None
    };
    let contributor = author_label(&config.author, prior);

    info!(
        "Derived size={}, feature='{feature}', contributor type={}, contributor='{contributor}'",
        size.option_label(),
        contributor_type.option_label(),
    );

    let item_id = client
        .add_item(schema.project_id(), &config.item_node_id)
        .await?;

    let today = Utc::now().date_naive();
    let updates = FieldUpdates {
        status_field: schema.field_id("Status")?,
        status_option: schema.option_id("Status", "Ready for review")?,
        date_posted_field: schema.field_id("Date posted")?,
        date_posted: today,
        due_date_field: schema.field_id("Review due date")?,
        due_date: today + Duration::days(config.turnaround_days()),
        contributor_type_field: schema.field_id("Contributor type")?,
        contributor_type_option: schema
            .option_id("Contributor type", contributor_type.option_label())?,
        size_field: schema.field_id("Size")?,
        size_option: schema.option_id("Size", size.option_label())?,
        feature_field: schema.field_id("Feature")?,
        feature: &feature,
        contributor_field: schema.field_id("Contributor")?,
        contributor: &contributor,
    };

    let mutation = build_update_mutation(schema.project_id(), &item_id, &updates);
    client.update_fields(&mutation).await?;

    Ok(item_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_map_into_config() {
        let cli = Cli::try_parse_from([
            "docboard",
            "--item-id",
            "PR_abc",
            "--project-number",
            "493",
            "--repo",
            "github/docs",
            "--author",
            "octocat",
            "--token",
            "ghp_test",
        ])
        .unwrap();

        let config = cli.into_config();
        assert_eq!(config.item_node_id, "PR_abc");
        assert_eq!(config.organization, "github");
        assert_eq!(config.project_number, 493);
        assert_eq!(config.repository, "github/docs");
        assert_eq!(config.author, "octocat");
        assert!(config.token.is_some());
        assert_eq!(config.api_base_url, "https://api.github.com");
    }

    #[test]
    fn project_number_is_required() {
        let result = Cli::try_parse_from([
            "docboard",
            "--item-id",
            "PR_abc",
            "--repo",
            "github/docs",
            "--author",
            "octocat",
        ]);
        assert!(result.is_err());
    }
}
