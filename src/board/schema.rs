//! Lookup over the board's fetched field metadata.

use super::types::{FieldNode, ProjectNode};
use crate::error::{DocboardError, Result};

/// Field and option identifiers for one review board, fetched fresh every
/// run. Lookups are by exact name; a miss is a hard error, since a bogus
/// identifier would silently corrupt the field-update mutation.
#[derive(Debug)]
pub struct BoardSchema {
    project_id: String,
    fields: Vec<FieldNode>,
}

impl BoardSchema {
    pub fn new(project: ProjectNode) -> Self {
        Self {
            project_id: project.id,
            fields: project.fields.nodes,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Identifier of the field named `name`.
    pub fn field_id(&self, name: &str) -> Result<&str> {
        self.find_field(name).map(|field| field.id.as_str())
    }

    /// Identifier of the option labelled `option_name` on the single-select
    /// field named `field_name`.
    pub fn option_id(&self, field_name: &str, option_name: &str) -> Result<&str> {
        let field = self.find_field(field_name)?;
        field
            .options
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|option| option.name == option_name)
            .map(|option| option.id.as_str())
            .ok_or_else(|| DocboardError::UnknownOption {
                field: field_name.to_string(),
                option: option_name.to_string(),
            })
    }

    fn find_field(&self, name: &str) -> Result<&FieldNode> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| DocboardError::UnknownField(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> BoardSchema {
        let project: ProjectNode = serde_json::from_str(
            r#"{
                "id": "P_board",
                "fields": {
                    "nodes": [
                        {"id": "F_title", "name": "Title"},
                        {"id": "F_status", "name": "Status", "options": [
                            {"id": "O_ready", "name": "Ready for review"},
                            {"id": "O_done", "name": "Done"}
                        ]},
                        {"id": "F_feature", "name": "Feature"}
                    ]
                }
            }"#,
        )
        .unwrap();
        BoardSchema::new(project)
    }

    #[test]
    fn field_lookup_by_exact_name() {
        let schema = sample_schema();
        assert_eq!(schema.project_id(), "P_board");
        assert_eq!(schema.field_id("Feature").unwrap(), "F_feature");
        assert_eq!(schema.field_id("Status").unwrap(), "F_status");
    }

    #[test]
    fn option_lookup_by_exact_name() {
        let schema = sample_schema();
        assert_eq!(
            schema.option_id("Status", "Ready for review").unwrap(),
            "O_ready"
        );
    }

    #[test]
    fn missing_field_is_an_error() {
        let schema = sample_schema();
        let err = schema.field_id("Size").unwrap_err();
        assert!(matches!(err, DocboardError::UnknownField(name) if name == "Size"));
    }

    #[test]
    fn missing_option_is_an_error() {
        let schema = sample_schema();
        let err = schema.option_id("Status", "Ready").unwrap_err();
        assert!(matches!(err, DocboardError::UnknownOption { .. }));
    }

    #[test]
    fn option_lookup_on_plain_field_is_an_error() {
        let schema = sample_schema();
        assert!(schema.option_id("Feature", "actions").is_err());
    }
}
