//! Catalog
//!
//! Ordered, read-only sequence of blueprints supplied before the UI starts.

use super::blueprint::{Blueprint, BlueprintId};
use super::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    blueprints: Vec<Blueprint>,
}

impl Catalog {
    pub fn new(blueprints: Vec<Blueprint>) -> Self {
        Self { blueprints }
    }

    /// Parse a JSON array of blueprint records
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let blueprints: Vec<Blueprint> =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        Ok(Self::new(blueprints))
    }

    pub fn blueprints(&self) -> &[Blueprint] {
        &self.blueprints
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }

    /// Look up a blueprint by id (first match wins)
    pub fn get(&self, id: &BlueprintId) -> DomainResult<&Blueprint> {
        self.blueprints
            .iter()
            .find(|bp| &bp.type_id == id)
            .ok_or_else(|| DomainError::NotFound(format!("blueprint {}", id)))
    }
}

impl From<Vec<Blueprint>> for Catalog {
    fn from(blueprints: Vec<Blueprint>) -> Self {
        Self::new(blueprints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[
                {"typeId": 1, "name": "Widget", "category": "Tools", "group": "G1"},
                {"typeId": 2, "name": "apple", "category": "Tools", "group": "G2"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.blueprints()[1].name, "apple");
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Catalog::from_json(r#"{"typeId": 1}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::new(vec![Blueprint::new("9", "Nine", "Misc", "")]);
        assert_eq!(catalog.get(&BlueprintId::from("9")).unwrap().name, "Nine");
        assert_eq!(
            catalog.get(&BlueprintId::from("10")),
            Err(DomainError::NotFound("blueprint 10".to_string()))
        );
    }

    #[test]
    fn test_empty() {
        assert!(Catalog::default().is_empty());
    }
}
