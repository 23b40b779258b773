// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::api::DynamicObject;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A schema-less Kubernetes object, kept as the raw JSON map it was parsed from.
///
/// Accessors follow the apimachinery convention of treating a missing field
/// and an empty string the same way: both come back as `""`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Unstructured(Map<String, Value>);

impl Unstructured {
    /// Parse a raw resource template. Anything but a JSON object is rejected.
    pub fn from_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }

    pub fn api_version(&self) -> &str {
        string_field(&self.0, "apiVersion")
    }

    pub fn kind(&self) -> &str {
        string_field(&self.0, "kind")
    }

    pub fn name(&self) -> &str {
        self.metadata()
            .map(|m| string_field(m, "name"))
            .unwrap_or_default()
    }

    pub fn generate_name(&self) -> &str {
        self.metadata()
            .map(|m| string_field(m, "generateName"))
            .unwrap_or_default()
    }

    pub fn namespace(&self) -> &str {
        self.metadata()
            .map(|m| string_field(m, "namespace"))
            .unwrap_or_default()
    }

    /// Labels of the object. Fails if `metadata` or `metadata.labels` is not
    /// an object, or if any label value is not a string.
    pub fn labels(&self) -> serde_json::Result<BTreeMap<String, String>> {
        let Some(metadata) = self.0.get("metadata") else {
            return Ok(BTreeMap::new());
        };
        let metadata = as_object(metadata, "metadata")?;
        match metadata.get("labels") {
            None | Some(Value::Null) => Ok(BTreeMap::new()),
            Some(labels) => BTreeMap::deserialize(labels),
        }
    }

    pub fn set_labels(&mut self, labels: BTreeMap<String, String>) -> serde_json::Result<()> {
        let labels = labels
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        self.metadata_mut()?
            .insert("labels".to_string(), Value::Object(labels));
        Ok(())
    }

    fn metadata(&self) -> Option<&Map<String, Value>> {
        self.0.get("metadata").and_then(Value::as_object)
    }

    fn metadata_mut(&mut self) -> serde_json::Result<&mut Map<String, Value>> {
        let metadata = self
            .0
            .entry("metadata")
            .or_insert_with(|| Value::Object(Map::new()));
        metadata
            .as_object_mut()
            .ok_or_else(|| not_an_object("metadata"))
    }
}

impl TryFrom<Unstructured> for DynamicObject {
    type Error = serde_json::Error;

    fn try_from(mut value: Unstructured) -> Result<Self, Self::Error> {
        // DynamicObject requires a metadata field, even an empty one
        value.metadata_mut()?;
        serde_json::from_value(Value::Object(value.0))
    }
}

fn as_object<'a>(value: &'a Value, field: &str) -> serde_json::Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| not_an_object(field))
}

fn not_an_object(field: &str) -> serde_json::Error {
    serde::de::Error::custom(format!("{} must be an object", field))
}

fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> &'a str {
    map.get(key).and_then(Value::as_str).unwrap_or_default()
}
