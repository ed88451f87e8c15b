use crate::board::ContributionsCollection;

/// Literal written to the Contributor field when the author has at most one
/// recorded contribution to the open-source repository.
pub const FIRST_TIME_CONTRIBUTOR_LABEL: &str = "first time contributor";

/// Who is sending this item to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributorType {
    DocsTeam,
    OrgMember,
    OpenSourceContributor,
}

impl ContributorType {
    /// Label of the matching single-select option on the board.
    pub fn option_label(&self) -> &'static str {
        match self {
            ContributorType::DocsTeam => "Docs team",
            ContributorType::OrgMember => "Hubber or partner",
            ContributorType::OpenSourceContributor => "OS contributor",
        }
    }

    /// First matching rule wins: docs-team membership, then org membership,
    /// then the open-source repository. The final fallback is OrgMember so
    /// the field is never left unset.
    pub fn classify(is_docs_team: bool, is_org_member: bool, is_open_source_repo: bool) -> Self {
        if is_docs_team {
            ContributorType::DocsTeam
        } else if is_org_member {
            ContributorType::OrgMember
        } else if is_open_source_repo {
            ContributorType::OpenSourceContributor
        } else {
            ContributorType::OrgMember
        }
    }
}

/// Sum of the author's recorded pull-request and issue contributions to
/// `repository`. A repository absent from either collection counts as zero.
pub fn prior_contributions(collection: &ContributionsCollection, repository: &str) -> u64 {
    let sum = |entries: &[crate::board::RepositoryContributions]| {
        entries
            .iter()
            .filter(|entry| entry.repository.name_with_owner == repository)
            .map(|entry| entry.contributions.total_count)
            .sum::<u64>()
    };

    sum(&collection.pull_request_contributions_by_repository)
        + sum(&collection.issue_contributions_by_repository)
}

/// Value for the board's Contributor field. `prior` is the contribution sum
/// when the first-time check ran, or `None` when it did not apply; the
/// current item may already be counted, so a sum of 1 still means first
/// contribution.
pub fn author_label(login: &str, prior: Option<u64>) -> String {
    match prior {
        Some(count) if count <= 1 => FIRST_TIME_CONTRIBUTOR_LABEL.to_string(),
        _ => login.to_string(),
    }
}
