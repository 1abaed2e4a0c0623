use serde::{Deserialize, Serialize};

/// Kind of physical or logical relation between two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionType {
    Contains,
    Controls,
    Feeds,
    HasPart,
    HasRange,
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ConnectionType::Contains => "CONTAINS",
            ConnectionType::Controls => "CONTROLS",
            ConnectionType::Feeds => "FEEDS",
            ConnectionType::HasPart => "HAS_PART",
            ConnectionType::HasRange => "HAS_RANGE",
        };
        f.write_str(label)
    }
}

/// Connection - a relation from a source entity to the entity holding it
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Connection {
    /// Guid of the entity on the other end of the relation
    pub source_entity_guid: String,

    /// Relation kind
    pub connection_type: ConnectionType,
}

impl Connection {
    pub fn new(source_entity_guid: impl Into<String>, connection_type: ConnectionType) -> Self {
        Self {
            source_entity_guid: source_entity_guid.into(),
            connection_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_equality_is_structural() {
        let a = Connection::new("guid-ahu", ConnectionType::Feeds);
        let b = Connection::new("guid-ahu", ConnectionType::Feeds);
        let c = Connection::new("guid-ahu", ConnectionType::Controls);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_connection_type_wire_name() {
        let json = serde_json::to_string(&ConnectionType::HasPart).unwrap();
        assert_eq!(json, "\"HAS_PART\"");
        assert_eq!(ConnectionType::HasPart.to_string(), "HAS_PART");
    }
}
