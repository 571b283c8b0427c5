use crate::model::{SizeBucket, Trait, Zone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Groups every default query includes.
pub const DEFAULT_GROUPS: [&str; 2] = ["main", "starter"];

/// What the user currently asks for: free text plus facet toggles.
///
/// The toggles mean different things per facet (see `facets`):
/// - `group`, `length`: include cards with this value;
/// - `zones`: allow cards occupying this zone (off hides them);
/// - `tags`: require this trait (on demands it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub text: String,
    pub group: BTreeMap<String, bool>,
    pub length: BTreeMap<SizeBucket, bool>,
    pub zones: BTreeMap<Zone, bool>,
    pub tags: BTreeMap<Trait, bool>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            text: String::new(),
            group: DEFAULT_GROUPS
                .iter()
                .map(|g| (g.to_string(), true))
                .collect(),
            length: SizeBucket::ALL.iter().map(|b| (*b, true)).collect(),
            zones: Zone::ALL.iter().map(|z| (*z, true)).collect(),
            tags: Trait::ALL.iter().map(|t| (*t, false)).collect(),
        }
    }
}

impl Query {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>, include: bool) -> Self {
        self.group.insert(group.into(), include);
        self
    }

    pub fn with_size(mut self, bucket: SizeBucket, include: bool) -> Self {
        self.length.insert(bucket, include);
        self
    }

    pub fn with_zone(mut self, zone: Zone, allow: bool) -> Self {
        self.zones.insert(zone, allow);
        self
    }

    pub fn with_tag(mut self, tag: Trait, require: bool) -> Self {
        self.tags.insert(tag, require);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_unrestricted() {
        let q = Query::default();
        assert_eq!(q.text, "");
        assert_eq!(q.group.get("main"), Some(&true));
        assert_eq!(q.group.get("starter"), Some(&true));
        assert!(q.length.values().all(|v| *v));
        assert!(q.zones.values().all(|v| *v));
        assert!(q.tags.values().all(|v| !*v));
        assert_eq!(q.tags.len(), 5);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let q: Query = serde_json::from_str(r#"{"text": "shark", "zones": {"midnight": false}}"#)
            .unwrap();
        assert_eq!(q.text, "shark");
        assert_eq!(q.zones.get(&Zone::Midnight), Some(&false));
        assert_eq!(q.zones.get(&Zone::Sunlight), None);
        assert_eq!(q.group.get("main"), Some(&true));
    }
}
