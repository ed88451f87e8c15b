use log::{debug, warn};
use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::auth::Token;
use crate::error::{DocboardError, Result};

use super::queries;
use super::schema::BoardSchema;
use super::types::{
    AddItemData, BoardAndItemData, ContributionsCollection, ContributionsData, GraphQlResponse,
    TargetItem,
};

/// Client for the review board's API: GraphQL for the board operations,
/// REST for the membership probes.
///
/// Every call is attempted exactly once; the invoking workflow owns retries
/// and timeouts.
pub struct BoardClient {
    client: Client,
    base_url: Url,
    graphql_url: Url,
    token: Option<Token>,
}

impl BoardClient {
    pub fn new(base_url: &str, token: Option<Token>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("docboard/0.3")
            .build()
            .map_err(|e| DocboardError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| DocboardError::Config(format!("Invalid base URL: {e}")))?;

        let graphql_url = base_url
            .join("graphql")
            .map_err(|e| DocboardError::Config(format!("Invalid GraphQL URL: {e}")))?;

        Ok(Self {
            client,
            base_url,
            graphql_url,
            token,
        })
    }

    fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.token {
            request.bearer_auth(token.as_str())
        } else {
            request
        }
    }

    /// Execute one GraphQL request and unwrap the response envelope.
    async fn execute_graphql<T>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!("Executing GraphQL operation '{operation}'");

        let request = self.auth_request(
            self.client
                .post(self.graphql_url.clone())
                .json(&json!({ "query": query, "variables": variables })),
        );

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(DocboardError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let body: GraphQlResponse<T> = serde_json::from_str(&text)?;

        if let Some(errors) = body.errors {
            return Err(DocboardError::GraphQl {
                operation: operation.to_string(),
                errors: errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        body.data.ok_or(DocboardError::NoResponseData)
    }

    /// Fetch the board's field metadata and the target item in one query.
    pub async fn fetch_board_and_item(
        &self,
        organization: &str,
        project_number: i64,
        item_node_id: &str,
    ) -> Result<(BoardSchema, TargetItem)> {
        let data: BoardAndItemData = self
            .execute_graphql(
                "BoardAndItem",
                queries::BOARD_AND_ITEM_QUERY,
                json!({
                    "organization": organization,
                    "projectNumber": project_number,
                    "id": item_node_id,
                }),
            )
            .await?;

        let project = data
            .organization
            .ok_or_else(|| {
                DocboardError::MissingData(format!("organization '{organization}' not found"))
            })?
            .project_v2
            .ok_or_else(|| {
                DocboardError::MissingData(format!(
                    "project {project_number} not found in organization '{organization}'"
                ))
            })?;

        let item = data.item.ok_or_else(|| {
            DocboardError::MissingData(format!("item node '{item_node_id}' not found"))
        })?;

        Ok((BoardSchema::new(project), item))
    }

    /// Fetch the author's per-repository contribution counts.
    pub async fn fetch_contributions(&self, login: &str) -> Result<ContributionsCollection> {
        let data: ContributionsData = self
            .execute_graphql(
                "AuthorContributions",
                queries::CONTRIBUTIONS_QUERY,
                json!({ "login": login }),
            )
            .await?;

        let user = data
            .user
            .ok_or_else(|| DocboardError::MissingData(format!("user '{login}' not found")))?;

        Ok(user.contributions_collection)
    }

    /// Add the target item to the board; returns the new project item id.
    pub async fn add_item(&self, project_id: &str, content_id: &str) -> Result<String> {
        let data: AddItemData = self
            .execute_graphql(
                "AddItemToBoard",
                queries::ADD_ITEM_MUTATION,
                json!({ "projectId": project_id, "contentId": content_id }),
            )
            .await?;

        data.add_project_v2_item_by_id
            .and_then(|payload| payload.item)
            .map(|item| item.id)
            .ok_or_else(|| {
                DocboardError::MissingData("add-item mutation returned no item".to_string())
            })
    }

    /// Run the generated combined field-update mutation. No payload is
    /// consumed beyond success or failure.
    pub async fn update_fields(&self, mutation: &str) -> Result<()> {
        let _: serde_json::Value = self
            .execute_graphql("UpdateItemFields", mutation, json!({}))
            .await?;
        Ok(())
    }

    /// Whether `login` is a member of the `team_slug` team in `organization`.
    ///
    /// Any non-success response (404 for non-members, 403 for insufficient
    /// token scope) counts as "not a member"; a membership probe never fails
    /// the run.
    pub async fn is_team_member(
        &self,
        organization: &str,
        team_slug: &str,
        login: &str,
    ) -> Result<bool> {
        let path = format!("orgs/{organization}/teams/{team_slug}/memberships/{login}");
        self.membership_probe(&path).await
    }

    /// Whether `login` is a member of `organization`.
    pub async fn is_org_member(&self, organization: &str, login: &str) -> Result<bool> {
        let path = format!("orgs/{organization}/members/{login}");
        self.membership_probe(&path).await
    }

    async fn membership_probe(&self, path: &str) -> Result<bool> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| DocboardError::Config(format!("Invalid membership URL: {e}")))?;

        match self.auth_request(self.client.get(url)).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                warn!("Membership probe '{path}' failed ({e}), treating as non-member");
                Ok(false)
            }
        }
    }
}
