// This file is part of the terraform-provider-k8s project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use serde::Serialize;
use tf_provider::{AttributePath, Value, ValueString};

use crate::schema::{RenderError, WithYaml};

use super::{ManifestKind, ManifestState};

/// Kubernetes object as it is written in the rendered YAML
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRecord {
    pub api_version: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_yaml::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<serde_yaml::Value>,
}

impl<'a, K: ManifestKind> ManifestState<'a, K> {
    /// `namespace/name` of the object, unknown until both are known
    pub fn identifier(&self) -> ValueString<'a> {
        let metadata = match &self.metadata {
            Value::Value(metadata) => metadata,
            Value::Null => return Value::Null,
            Value::Unknown => return Value::Unknown,
        };
        match (&metadata.namespace, &metadata.name) {
            (Value::Value(namespace), Value::Value(name)) => {
                Value::Value(Cow::Owned(format!("{namespace}/{name}")))
            }
            (Value::Unknown, _) | (_, Value::Unknown) => Value::Unknown,
            _ => Value::Null,
        }
    }

    /// Assemble the object with its constant `apiVersion` and `kind`
    pub fn record(&self) -> Result<ManifestRecord, RenderError> {
        Ok(ManifestRecord {
            api_version: K::API_VERSION,
            kind: K::KIND,
            metadata: self.metadata.to_yaml(&AttributePath::new("metadata"))?,
            spec: self.spec.to_yaml(&AttributePath::new("spec"))?,
        })
    }

    /// Render the object as a YAML document
    pub fn render(&self) -> Result<String, RenderError> {
        let record = self.record()?;
        Ok(serde_yaml::to_string(&record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Metadata;
    use crate::victoriametrics::{VmAlert, VmStaticScrape};

    fn string(value: &str) -> Value<String> {
        Value::Value(value.to_owned())
    }

    fn state<'a, K: ManifestKind>(name: Value<String>, namespace: Value<String>) -> ManifestState<'a, K> {
        ManifestState {
            metadata: Value::Value(Metadata {
                name,
                namespace,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn identifier_joins_namespace_and_name() {
        let state = state::<VmAlert>(string("nm"), string("ns"));
        assert_eq!(state.identifier(), Value::Value(Cow::Borrowed("ns/nm")));
    }

    #[test]
    fn identifier_waits_for_unknown_values() {
        let state = state::<VmAlert>(Value::Unknown, string("ns"));
        assert!(state.identifier().is_unknown());

        let state = ManifestState::<VmAlert> {
            metadata: Value::Unknown,
            ..Default::default()
        };
        assert!(state.identifier().is_unknown());
    }

    #[test]
    fn identifier_of_missing_metadata_is_null() {
        let state = ManifestState::<VmAlert>::default();
        assert!(state.identifier().is_null());
    }

    #[test]
    fn missing_spec_is_omitted() {
        let state = state::<VmStaticScrape>(string("nodes"), string("monitoring"));
        let rendered = state.render().unwrap();
        assert_eq!(
            rendered,
            "apiVersion: operator.victoriametrics.com/v1beta1\n\
             kind: VMStaticScrape\n\
             metadata:\n  name: nodes\n  namespace: monitoring\n"
        );
    }

    #[test]
    fn labels_round_trip() {
        let mut state = state::<VmAlert>(string("alert1"), string("monitoring"));
        if let Value::Value(metadata) = &mut state.metadata {
            metadata.labels = Value::Value(
                [("app", "vmalert"), ("team", "sre")]
                    .into_iter()
                    .map(|(key, value)| (key.to_owned(), string(value)))
                    .collect(),
            );
        }

        let parsed: serde_yaml::Value = serde_yaml::from_str(&state.render().unwrap()).unwrap();
        let labels = parsed["metadata"]["labels"].as_mapping().unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(parsed["metadata"]["labels"]["app"], "vmalert");
        assert_eq!(parsed["metadata"]["labels"]["team"], "sre");
        assert!(parsed.get("spec").is_none());
    }

    #[test]
    fn unknown_metadata_cannot_be_rendered() {
        let state = state::<VmAlert>(string("alert1"), Value::Unknown);
        assert!(matches!(
            state.render(),
            Err(RenderError::Unknown { .. })
        ));
    }
}
