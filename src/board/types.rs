//! Response models for the board's GraphQL operations.

use serde::Deserialize;

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Data shape of [`super::queries::BOARD_AND_ITEM_QUERY`].
#[derive(Debug, Deserialize)]
pub struct BoardAndItemData {
    pub organization: Option<OrganizationNode>,
    pub item: Option<TargetItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationNode {
    pub project_v2: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectNode {
    pub id: String,
    pub fields: FieldConnection,
}

#[derive(Debug, Deserialize)]
pub struct FieldConnection {
    pub nodes: Vec<FieldNode>,
}

/// A board field. `options` is present only for single-select fields.
#[derive(Debug, Deserialize)]
pub struct FieldNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub options: Option<Vec<FieldOption>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldOption {
    pub id: String,
    pub name: String,
}

/// The pull request or issue being filed, discriminated on `__typename` so
/// derivation is exhaustive over the item kind.
#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
pub enum TargetItem {
    PullRequest(PullRequestItem),
    Issue(IssueItem),
}

#[derive(Debug, Deserialize)]
pub struct PullRequestItem {
    pub files: Option<FileConnection>,
}

impl PullRequestItem {
    pub fn changed_files(&self) -> Vec<&ChangedFile> {
        self.files
            .iter()
            .flat_map(|connection| connection.nodes.iter().flatten())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueItem {}

#[derive(Debug, Deserialize)]
pub struct FileConnection {
    pub nodes: Vec<Option<ChangedFile>>,
}

#[derive(Debug, Deserialize)]
pub struct ChangedFile {
    pub additions: u64,
    pub deletions: u64,
    pub path: String,
}

/// Data shape of [`super::queries::CONTRIBUTIONS_QUERY`].
#[derive(Debug, Deserialize)]
pub struct ContributionsData {
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    #[serde(default)]
    pub pull_request_contributions_by_repository: Vec<RepositoryContributions>,
    #[serde(default)]
    pub issue_contributions_by_repository: Vec<RepositoryContributions>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryContributions {
    pub repository: RepositoryRef,
    pub contributions: ContributionCount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRef {
    pub name_with_owner: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCount {
    pub total_count: u64,
}

/// Data shape of [`super::queries::ADD_ITEM_MUTATION`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemData {
    pub add_project_v2_item_by_id: Option<AddItemPayload>,
}

#[derive(Debug, Deserialize)]
pub struct AddItemPayload {
    pub item: Option<ItemRef>,
}

#[derive(Debug, Deserialize)]
pub struct ItemRef {
    pub id: String,
}
