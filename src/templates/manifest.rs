//! The `package.json` manifest written by every template.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;

pub const MANIFEST_VERSION: &str = "1.0.0";
pub const MANIFEST_LICENSE: &str = "MIT";

/// A package descriptor. Fields serialize in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<IndexMap<String, String>>,
    pub scripts: IndexMap<String, String>,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub dependencies: IndexMap<String, String>,
}

impl Manifest {
    pub fn new<S: Into<String>>(name: S, description: S, main: S, author: S) -> Self {
        Self {
            name: name.into(),
            version: MANIFEST_VERSION.to_string(),
            description: description.into(),
            main: main.into(),
            bin: None,
            scripts: IndexMap::new(),
            keywords: Vec::new(),
            author: author.into(),
            license: MANIFEST_LICENSE.to_string(),
            dependencies: IndexMap::new(),
        }
    }

    pub fn script(mut self, name: &str, command: &str) -> Self {
        self.scripts.insert(name.to_string(), command.to_string());
        self
    }

    /// Maps an executable name to a script path.
    pub fn bin(mut self, name: &str, path: &str) -> Self {
        self.bin.get_or_insert_with(IndexMap::new).insert(name.to_string(), path.to_string());
        self
    }

    pub fn dependency(mut self, name: &str, version: &str) -> Self {
        self.dependencies.insert(name.to_string(), version.to_string());
        self
    }

    /// Pretty printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_sections_are_omitted() {
        let json = Manifest::new("demo", "Demo", "index.js", "").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("bin").is_none());
        assert!(value.get("dependencies").is_none());
        assert_eq!(value["author"], "");
        assert_eq!(value["license"], "MIT");
        assert_eq!(value["version"], "1.0.0");
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_field_order_is_stable() {
        let json = Manifest::new("demo", "Demo", "index.js", "Jane")
            .script("start", "node index.js")
            .bin("demo", "index.js")
            .to_json()
            .unwrap();

        let name = json.find("\"name\"").unwrap();
        let bin = json.find("\"bin\"").unwrap();
        let scripts = json.find("\"scripts\"").unwrap();
        let license = json.find("\"license\"").unwrap();
        assert!(name < bin && bin < scripts && scripts < license);
    }
}
