//! The read-only symbol table of one generation run.

use std::collections::HashMap;

use crate::diagnostic::GeneratorError;
use super::Definition;

/// All definitions of one run, in insertion order, addressable by qualified name.
#[derive(Debug, Default, Clone)]
pub struct DefinitionCollection {
    definitions: Vec<Definition>,
    index: HashMap<String, usize>,
}

impl DefinitionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, rejecting duplicate qualified names.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = Definition>,
    ) -> Result<Self, GeneratorError> {
        let mut collection = Self::new();
        for definition in definitions {
            collection.add(definition)?;
        }
        Ok(collection)
    }

    pub fn add(&mut self, definition: Definition) -> Result<(), GeneratorError> {
        let name = definition.qualified_name();
        if self.index.contains_key(&name) {
            return Err(GeneratorError::DuplicateDefinition { name });
        }
        self.index.insert(name, self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    /// Looks up a definition by fully-qualified name. A leading separator is ignored.
    pub fn get(&self, qualified_name: &str) -> Option<&Definition> {
        self.index
            .get(qualified_name.trim_start_matches('\\'))
            .map(|&idx| &self.definitions[idx])
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.get(qualified_name).is_some()
    }

    /// The definition declaring `child` as one of its variant constructors.
    pub fn parent_of(&self, child: &Definition) -> Option<&Definition> {
        let name = child.qualified_name();
        self.definitions
            .iter()
            .find(|d| d.variants().any(|c| c.name == name))
    }

    /// Every definition declaring `qualified_name` as a variant constructor.
    pub(crate) fn parents_of(&self, qualified_name: &str) -> Vec<&Definition> {
        self.definitions
            .iter()
            .filter(|d| d.variants().any(|c| c.name == qualified_name))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<'a> IntoIterator for &'a DefinitionCollection {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
