//! Raw GraphQL documents for the board operations.
//!
//! The field-update mutation cannot be a static document: field and option
//! identifiers are only known after the metadata fetch, so it is generated
//! per run from the resolved identifiers.

use chrono::NaiveDate;

/// Fetches the review board's field metadata and, when the target node is a
/// pull request, its changed files (first 100; further pages are not
/// followed).
pub const BOARD_AND_ITEM_QUERY: &str = r#"
    query BoardAndItem($organization: String!, $projectNumber: Int!, $id: ID!) {
      organization(login: $organization) {
        projectV2(number: $projectNumber) {
          id
          fields(first: 20) {
            nodes {
              ... on ProjectV2FieldCommon {
                id
                name
              }
              ... on ProjectV2SingleSelectField {
                id
                name
                options {
                  id
                  name
                }
              }
            }
          }
        }
      }
      item: node(id: $id) {
        __typename
        ... on PullRequest {
          files(first: 100) {
            nodes {
              additions
              deletions
              path
            }
          }
        }
      }
    }
    "#;

/// Fetches the author's per-repository pull-request and issue contribution
/// counts, used for the first-time-contributor check.
pub const CONTRIBUTIONS_QUERY: &str = r#"
    query AuthorContributions($login: String!) {
      user(login: $login) {
        contributionsCollection {
          pullRequestContributionsByRepository(maxRepositories: 100) {
            repository {
              nameWithOwner
            }
            contributions {
              totalCount
            }
          }
          issueContributionsByRepository(maxRepositories: 100) {
            repository {
              nameWithOwner
            }
            contributions {
              totalCount
            }
          }
        }
      }
    }
    "#;

/// Adds the target item to the board and returns the new project item id.
pub const ADD_ITEM_MUTATION: &str = r#"
    mutation AddItemToBoard($projectId: ID!, $contentId: ID!) {
      addProjectV2ItemById(input: { projectId: $projectId, contentId: $contentId }) {
        item {
          id
        }
      }
    }
    "#;

/// Resolved field identifiers and values for the combined field update.
#[derive(Debug)]
pub struct FieldUpdates<'a> {
    pub status_field: &'a str,
    pub status_option: &'a str,
    pub date_posted_field: &'a str,
    pub date_posted: NaiveDate,
    pub due_date_field: &'a str,
    pub due_date: NaiveDate,
    pub contributor_type_field: &'a str,
    pub contributor_type_option: &'a str,
    pub size_field: &'a str,
    pub size_option: &'a str,
    pub feature_field: &'a str,
    pub feature: &'a str,
    pub contributor_field: &'a str,
    pub contributor: &'a str,
}

/// Builds the combined mutation that sets every resolved field in a single
/// request. Aliases keep the repeated `updateProjectV2ItemFieldValue` calls
/// distinct.
pub fn build_update_mutation(project_id: &str, item_id: &str, updates: &FieldUpdates) -> String {
    let set = |alias: &str, field_id: &str, value: String| {
        format!(
            r#"      {alias}: updateProjectV2ItemFieldValue(input: {{
        projectId: {project}
        itemId: {item}
        fieldId: {field}
        value: {{ {value} }}
      }}) {{
        projectV2Item {{ id }}
      }}
"#,
            project = quote(project_id),
            item = quote(item_id),
            field = quote(field_id),
        )
    };

    let mut body = String::from("    mutation {\n");
    body.push_str(&set(
        "status",
        updates.status_field,
        format!("singleSelectOptionId: {}", quote(updates.status_option)),
    ));
    body.push_str(&set(
        "datePosted",
        updates.date_posted_field,
        format!("date: {}", quote(&updates.date_posted.format("%Y-%m-%d").to_string())),
    ));
    body.push_str(&set(
        "reviewDueDate",
        updates.due_date_field,
        format!("date: {}", quote(&updates.due_date.format("%Y-%m-%d").to_string())),
    ));
    body.push_str(&set(
        "contributorType",
        updates.contributor_type_field,
        format!(
            "singleSelectOptionId: {}",
            quote(updates.contributor_type_option)
        ),
    ));
    body.push_str(&set(
        "size",
        updates.size_field,
        format!("singleSelectOptionId: {}", quote(updates.size_option)),
    ));
    body.push_str(&set(
        "feature",
        updates.feature_field,
        format!("text: {}", quote(updates.feature)),
    ));
    body.push_str(&set(
        "contributor",
        updates.contributor_field,
        format!("text: {}", quote(updates.contributor)),
    ));
    body.push_str("    }\n");
    body
}

/// Quotes a value as a GraphQL string literal (JSON string escaping rules).
fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_updates() -> FieldUpdates<'static> {
        FieldUpdates {
            status_field: "F_status",
            status_option: "O_ready",
            date_posted_field: "F_posted",
            date_posted: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            due_date_field: "F_due",
            due_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            contributor_type_field: "F_ctype",
            contributor_type_option: "O_hubber",
            size_field: "F_size",
            size_option: "O_xs",
            feature_field: "F_feature",
            feature: "actions, admin",
            contributor_field: "F_contributor",
            contributor: "octocat",
        }
    }

    #[test]
    fn update_mutation_contains_every_field_and_value() {
        let mutation = build_update_mutation("P_1", "PVTI_1", &sample_updates());

        for id in [
            "F_status",
            "F_posted",
            "F_due",
            "F_ctype",
            "F_size",
            "F_feature",
            "F_contributor",
            "O_ready",
            "O_hubber",
            "O_xs",
        ] {
            assert!(mutation.contains(id), "missing identifier {id}");
        }
        assert!(mutation.contains(r#"date: "2024-03-01""#));
        assert!(mutation.contains(r#"date: "2024-03-04""#));
        assert!(mutation.contains(r#"text: "actions, admin""#));
        assert!(mutation.contains(r#"text: "octocat""#));
        assert_eq!(mutation.matches("updateProjectV2ItemFieldValue").count(), 7);
    }

    #[test]
    fn update_mutation_escapes_text_values() {
        let mut updates = sample_updates();
        updates.contributor = r#"o"cto\cat"#;
        let mutation = build_update_mutation("P_1", "PVTI_1", &updates);
        assert!(mutation.contains(r#"text: "o\"cto\\cat""#));
    }

    #[test]
    fn aliases_are_unique() {
        let mutation = build_update_mutation("P_1", "PVTI_1", &sample_updates());
        for alias in [
            "status:",
            "datePosted:",
            "reviewDueDate:",
            "contributorType:",
            "size:",
            "feature:",
            "contributor:",
        ] {
            assert_eq!(mutation.matches(alias).count(), 1, "alias {alias}");
        }
    }
}
