//! Schema, definition, and relation nodes

use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// A full parsed schema document, in declaration order.
///
/// A schema may be empty; definition names are not required to be unique at
/// this level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    pub definitions: Vec<Definition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.definitions.iter().join("\n"))
    }
}

/// A named object type together with its relations.
///
/// A definition with zero relations is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub relations: Vec<Relation>,
}

impl Definition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: vec![],
        }
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "definition {} {{", self.name)?;
        for relation in &self.relations {
            write!(f, " {relation}")?;
        }
        write!(f, " }}")
    }
}

/// A named edge type on a definition, restricted to a non-empty union of
/// allowed related-object-type names.
///
/// The grammar guarantees `types` holds at least one entry; duplicates are
/// preserved verbatim, in listed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub name: String,
    pub types: Vec<String>,
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "relation {}: {}", self.name, self.types.iter().join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_definition() {
        let definition = Definition::new("monsujet");
        assert_eq!(definition.to_string(), "definition monsujet { }");
    }

    #[test]
    fn test_display_relation_union() {
        let relation = Relation {
            name: "marelation1".to_string(),
            types: vec!["monsujet2".to_string(), "monsujet3".to_string()],
        };
        assert_eq!(relation.to_string(), "relation marelation1: monsujet2 | monsujet3");
    }

    #[test]
    fn test_display_schema() {
        let schema = Schema {
            definitions: vec![
                Definition::new("monsujet"),
                Definition {
                    name: "maressource".to_string(),
                    relations: vec![Relation {
                        name: "marelation".to_string(),
                        types: vec!["monsujet".to_string()],
                    }],
                },
            ],
        };
        assert_eq!(
            schema.to_string(),
            "definition monsujet { }\ndefinition maressource { relation marelation: monsujet }"
        );
    }

    #[test]
    fn test_empty_schema_displays_nothing() {
        assert_eq!(Schema::new().to_string(), "");
    }
}
