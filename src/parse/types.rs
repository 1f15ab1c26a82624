//! Lenient typed view over a workflow document.
//!
//! Only the containers the logical checks walk are typed. Node fields and
//! connection targets stay untyped because reporting on their shape is part
//! of validation; every other field is ignored.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

/// Node types that can start a workflow.
pub const TRIGGER_NODE_TYPES: [&str; 5] = [
    MANUAL_TRIGGER_TYPE,
    "n8n-nodes-base.webhook",
    "n8n-nodes-base.scheduleTrigger",
    "n8n-nodes-base.chatTrigger",
    "n8n-nodes-base.emailTrigger",
];

pub const MANUAL_TRIGGER_TYPE: &str = "n8n-nodes-base.manualTrigger";

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default)]
    pub connections: Connections,
}

/// `source name → connection type → output slots → connections`.
pub type Connections = OrderedMap<OrderedMap<Vec<Vec<Connection>>>>;

impl Workflow {
    /// Declared string node names. Duplicates collapse into one entry.
    pub fn node_names(&self) -> HashSet<&str> {
        self.nodes.iter().filter_map(|n| n.name.as_str()).collect()
    }
}

// =============================================================================
// NODES AND CONNECTIONS
// =============================================================================

/// `name`, `type` and connection targets stay untyped: a mistyped scalar
/// must not hide the rest of the document from the checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowNode {
    #[serde(default)]
    pub name: Value,
    #[serde(rename = "type", default)]
    pub node_type: Value,
    #[serde(default)]
    pub position: Value,
    #[serde(default)]
    pub parameters: Value,
}

impl WorkflowNode {
    /// Name used in messages. `Unknown` when absent or null; other
    /// non-strings render as JSON.
    pub fn display_name(&self) -> Cow<'_, str> {
        match &self.name {
            Value::Null => Cow::Borrowed("Unknown"),
            other => render(other),
        }
    }

    /// Non-string types never match a trigger type.
    pub fn is_trigger(&self) -> bool {
        self.node_type
            .as_str()
            .is_some_and(|t| TRIGGER_NODE_TYPES.contains(&t))
    }

    pub fn is_manual_trigger(&self) -> bool {
        self.node_type.as_str() == Some(MANUAL_TRIGGER_TYPE)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Connection {
    #[serde(default)]
    pub node: Value,
}

impl Connection {
    /// The target node reference, if it is set to a non-empty value.
    /// Null, `false`, `0`, `""`, `[]` and `{}` count as unset.
    pub fn target(&self) -> Option<Cow<'_, str>> {
        let set = match &self.node {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64() != Some(0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        };
        set.then(|| render(&self.node))
    }
}

/// Strings render as-is, anything else as compact JSON.
fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

// =============================================================================
// ORDERED MAP
// =============================================================================

/// A string-keyed map that keeps entries in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map keyed by node name")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}
