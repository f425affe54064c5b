//! Route descriptors: flat records describing one navigable page.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::{DomainError, TreeResult};

/// One navigable page, as declared by the page-routing configuration.
///
/// `route` holds the slash-delimited path. Every other attribute (title,
/// icon, image, ...) is opaque to this crate and carried through into the
/// tree unchanged. Metadata lives in its own map so it can never collide
/// with the reserved node schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Slash-delimited path, e.g. `/blog/posts/1`
    pub route: String,
    /// Opaque page attributes, in declaration order
    #[serde(flatten)]
    pub meta: IndexMap<String, Value>,
}

impl RouteDescriptor {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            meta: IndexMap::new(),
        }
    }

    /// Attaches a metadata attribute, builder-style.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Parses a descriptor from a loose JSON object.
    ///
    /// The `route` key is required and must be a string; all other keys are
    /// kept as metadata. A missing `route` is a configuration bug and fails
    /// immediately.
    pub fn from_value(value: Value) -> TreeResult<Self> {
        let Value::Object(map) = value else {
            return Err(DomainError::InvalidDescriptor(format!(
                "expected an object, got: {value}"
            )));
        };

        let mut route = None;
        let mut meta = IndexMap::new();
        for (key, val) in map {
            if key == "route" {
                match val {
                    Value::String(s) => route = Some(s),
                    other => {
                        return Err(DomainError::InvalidDescriptor(format!(
                            "route must be a string, got: {other}"
                        )))
                    }
                }
            } else {
                meta.insert(key, val);
            }
        }

        let route = route.ok_or_else(|| DomainError::MissingField("route".to_string()))?;
        Ok(Self { route, meta })
    }

    /// Splits the route into its path segments.
    ///
    /// Leading and trailing slashes are insignificant: `/a/b/` and `a/b`
    /// both yield `["a", "b"]`. A path empty after trimming yields a single
    /// empty segment, so `/` maps to the `""` node.
    pub fn segments(&self) -> Vec<&str> {
        self.route.trim_matches('/').split('/').collect()
    }
}
