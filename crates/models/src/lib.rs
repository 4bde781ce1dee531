use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Static content directory keyed by category name (e.g. "ui", "ui-legacy")
pub type ContentDirectory = HashMap<String, DirectoryCategory>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryCategory {
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_ordered_groups")]
    #[serde(serialize_with = "serialize_ordered_groups")]
    pub items: Vec<DirectoryGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryGroup {
    pub name: String,
    pub items: Vec<DirectoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub route: String,
    #[serde(default)]
    pub filters: Vec<String>,
}

// Groups are stored as a keyed object in the source document; keep them in
// document order instead of collecting into a HashMap.
fn deserialize_ordered_groups<'de, D>(deserializer: D) -> Result<Vec<DirectoryGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct GroupBody {
        #[serde(default)]
        items: Vec<DirectoryEntry>,
    }

    struct GroupsVisitor;

    impl<'de> Visitor<'de> for GroupsVisitor {
        type Value = Vec<DirectoryGroup>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of group name to group body")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, body)) = map.next_entry::<String, GroupBody>()? {
                groups.push(DirectoryGroup { name, items: body.items });
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(GroupsVisitor)
}

fn serialize_ordered_groups<S>(groups: &Vec<DirectoryGroup>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    #[derive(Serialize)]
    struct GroupBody<'a> {
        items: &'a [DirectoryEntry],
    }

    let mut map = serializer.serialize_map(Some(groups.len()))?;
    for group in groups {
        map.serialize_entry(&group.name, &GroupBody { items: &group.items })?;
    }
    map.end()
}

/// One of the two documentation renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Latest,
    Legacy,
}

impl Variant {
    /// URL prefix under which this variant's pages live
    pub fn prefix(self) -> &'static str {
        match self {
            Variant::Latest => "/ui",
            Variant::Legacy => "/ui-legacy",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Latest => "Latest",
            Variant::Legacy => "Legacy",
        }
    }
}

/// A single switcher link, rebuilt on every resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub title: String,
    pub href: String,
    pub is_active: bool,
}

/// Both switcher links: `left` is always Latest, `right` always Legacy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitcherOptions {
    pub left: OptionDescriptor,
    pub right: OptionDescriptor,
}

impl SwitcherOptions {
    pub fn active(&self) -> Variant {
        if self.right.is_active {
            Variant::Legacy
        } else {
            Variant::Latest
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        [&self.left, &self.right].into_iter()
    }
}
