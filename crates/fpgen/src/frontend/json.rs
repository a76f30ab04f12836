//! JSON definition files.

use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::diagnostic::GeneratorError;
use crate::ir::{Definition, DefinitionCollection};
use super::Frontend;

/// Top-level shape of a definition file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionFile {
    pub definitions: Vec<Definition>,
}

/// Loads `{"definitions": [...]}` documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFrontend;

impl Frontend for JsonFrontend {
    fn format(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, source: &str, path: &Path) -> Result<DefinitionCollection, GeneratorError> {
        let file: DefinitionFile = serde_json::from_str(source).map_err(|e| GeneratorError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        DefinitionCollection::from_definitions(file.definitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Deriving, Primitive, TypeRef};

    #[test]
    fn test_parses_full_definition() {
        let source = r#"{
            "definitions": [{
                "namespace": "My",
                "name": "Person",
                "constructors": [{
                    "name": "My\\Person",
                    "arguments": [
                        {"name": "id", "type": "My\\UserId"},
                        {"name": "age", "type": "int", "nullable": true}
                    ]
                }],
                "derivings": ["FromArray", "ToArray"],
                "conditions": [{"target": "_", "expression": "$age < 0", "message": "Negative"}],
                "message_name": "person"
            }]
        }"#;

        let collection = JsonFrontend.parse(source, Path::new("person.json")).unwrap();
        let person = collection.get("My\\Person").unwrap();

        let arguments = &person.constructors[0].arguments;
        assert_eq!(arguments[0].typ, TypeRef::Definition("My\\UserId".to_string()));
        assert_eq!(arguments[1].typ, TypeRef::Primitive(Primitive::Int));
        assert!(arguments[1].nullable);
        assert_eq!(person.derivings, vec![Deriving::FromArray, Deriving::ToArray]);
        assert_eq!(person.conditions[0].message, "Negative");
        assert_eq!(person.message_name(), "person");
    }

    #[test]
    fn test_defaults() {
        let source = r#"{"definitions": [{"namespace": "My", "name": "Name", "constructors": [{"name": "String"}]}]}"#;
        let collection = JsonFrontend.parse(source, Path::new("name.json")).unwrap();
        let name = collection.get("My\\Name").unwrap();
        assert!(name.derivings.is_empty());
        assert!(name.conditions.is_empty());
        assert!(name.constructors[0].arguments.is_empty());
    }

    #[test]
    fn test_reports_parse_errors() {
        let result = JsonFrontend.parse(r#"{"definitions": [{"name": 1}]}"#, Path::new("bad.json"));
        assert!(matches!(result, Err(GeneratorError::ParseFailed { path, .. }) if path == Path::new("bad.json")));

        let result = JsonFrontend.parse(r#"{"definitions": [], "extra": true}"#, Path::new("bad.json"));
        assert!(matches!(result, Err(GeneratorError::ParseFailed { .. })));

        let result = JsonFrontend.parse(r#"{"definitions": [{"namespace": "My", "name": "X", "constructors": [], "derivings": ["Nope"]}]}"#, Path::new("bad.json"));
        assert!(matches!(result, Err(GeneratorError::ParseFailed { .. })));
    }
}
