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

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value as Yaml};
use thiserror::Error;
use tf_provider::{AttributePath, Diagnostics, Value};

/// Failure to turn a configuration into a YAML manifest
#[derive(Debug, Error)]
pub enum RenderError {
    /// Terraform has not resolved the value yet
    #[error("the value is not known yet, the manifest cannot be rendered")]
    Unknown { attr_path: AttributePath },

    #[error("failed to serialize the manifest to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RenderError {
    /// Report the error as a single diagnostic
    pub fn report(self, diags: &mut Diagnostics) {
        const SUMMARY: &str = "Failed to render manifest";
        let detail = self.to_string();
        match self {
            RenderError::Unknown { attr_path } => diags.error(SUMMARY, detail, attr_path),
            RenderError::Yaml(_) => diags.error(SUMMARY, detail, AttributePath::new("yaml")),
        }
    }
}

/// Convert a configuration node into its manifest representation.
///
/// `None` means the node is absent from the manifest: null values, empty
/// lists and empty maps are all omitted.
pub trait WithYaml {
    fn to_yaml(&self, attr_path: &AttributePath) -> Result<Option<Yaml>, RenderError>;
}

impl WithYaml for String {
    fn to_yaml(&self, _attr_path: &AttributePath) -> Result<Option<Yaml>, RenderError> {
        Ok(Some(Yaml::String(self.clone())))
    }
}

impl WithYaml for i64 {
    fn to_yaml(&self, _attr_path: &AttributePath) -> Result<Option<Yaml>, RenderError> {
        Ok(Some(Yaml::Number((*self).into())))
    }
}

impl WithYaml for bool {
    fn to_yaml(&self, _attr_path: &AttributePath) -> Result<Option<Yaml>, RenderError> {
        Ok(Some(Yaml::Bool(*self)))
    }
}

impl<T: WithYaml> WithYaml for Value<T> {
    fn to_yaml(&self, attr_path: &AttributePath) -> Result<Option<Yaml>, RenderError> {
        match self {
            Value::Value(value) => value.to_yaml(attr_path),
            Value::Null => Ok(None),
            Value::Unknown => Err(RenderError::Unknown {
                attr_path: attr_path.clone(),
            }),
        }
    }
}

impl<T: WithYaml> WithYaml for Vec<T> {
    fn to_yaml(&self, attr_path: &AttributePath) -> Result<Option<Yaml>, RenderError> {
        if self.is_empty() {
            return Ok(None);
        }
        let mut items = Vec::with_capacity(self.len());
        for (i, item) in self.iter().enumerate() {
            let item_path = attr_path.clone().index(i as i64);
            // Null items keep their position in the list
            items.push(item.to_yaml(&item_path)?.unwrap_or(Yaml::Null));
        }
        Ok(Some(Yaml::Sequence(items)))
    }
}

impl<K, T> WithYaml for BTreeMap<K, T>
where
    K: AsRef<str>,
    T: WithYaml,
{
    fn to_yaml(&self, attr_path: &AttributePath) -> Result<Option<Yaml>, RenderError> {
        if self.is_empty() {
            return Ok(None);
        }
        let mut mapping = Mapping::new();
        for (key, value) in self {
            let key = key.as_ref();
            let value_path = attr_path.clone().key(key.to_owned());
            if let Some(value) = value.to_yaml(&value_path)? {
                mapping.insert(Yaml::String(key.to_owned()), value);
            }
        }
        // Only null entries: the map is as empty as if it was never set
        if mapping.is_empty() {
            return Ok(None);
        }
        Ok(Some(Yaml::Mapping(mapping)))
    }
}
