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

use serde::{Deserialize, Serialize};
use tf_provider::{
    map, Attribute, AttributeConstraint, AttributePath, AttributeType, Block, Description,
    Diagnostics, Schema, Value, ValueString,
};

use crate::schema::{StringMap, Validator, WithAttrType};
use crate::utils::{WithSchema, WithValidate};

use super::ManifestKind;

manifest_object! {
    /// Standard object metadata
    pub struct Metadata {
        /// Unique name of the object within its namespace.
        name: Value<String> => "name", required, [Validator::MinLength(1), Validator::ObjectName];
        /// Namespace the object lives in.
        namespace: Value<String> => "namespace", required, [Validator::MinLength(1), Validator::NamespaceName];
        /// Key/value pairs used to organize and select objects.
        labels: Value<StringMap> => "labels", optional, [Validator::Labels];
        /// Unstructured key/value pairs attached to the object.
        annotations: Value<StringMap> => "annotations", optional, [Validator::Annotations];
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct ManifestState<'a, K: ManifestKind> {
    /// Only part of the schema when `K::WITH_ID` holds
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: ValueString<'a>,
    pub metadata: Value<Metadata>,
    pub spec: Value<K::Spec>,
    pub yaml: ValueString<'a>,
}

impl<'a, K: ManifestKind> WithSchema for ManifestState<'a, K> {
    fn schema() -> Schema {
        let mut attributes = map! {
            "metadata" => Attribute {
                attr_type: Metadata::attr_type(),
                description: Description::plain("Data that helps uniquely identify the object."),
                constraint: AttributeConstraint::Required,
                ..Default::default()
            },
            "spec" => Attribute {
                attr_type: <K::Spec as WithAttrType>::attr_type(),
                description: Description::plain(format!("Desired state of the {}.", K::KIND)),
                constraint: if K::SPEC_REQUIRED {
                    AttributeConstraint::Required
                } else {
                    AttributeConstraint::Optional
                },
                ..Default::default()
            },
            "yaml" => Attribute {
                attr_type: AttributeType::String,
                description: Description::plain("The generated manifest in YAML format."),
                constraint: AttributeConstraint::Computed,
                ..Default::default()
            },
        };
        if K::WITH_ID {
            attributes.insert(
                "id".to_owned(),
                Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain(
                        "Contains the value `metadata.namespace/metadata.name`.",
                    ),
                    constraint: AttributeConstraint::Computed,
                    ..Default::default()
                },
            );
        }

        Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain(K::DESCRIPTION),
                attributes,
                ..Default::default()
            },
        }
    }
}

impl<'a, K: ManifestKind> ManifestState<'a, K> {
    /// Report every declared constraint violated by the configuration
    pub fn validate(&self, diags: &mut Diagnostics) {
        self.metadata
            .validate(diags, AttributePath::new("metadata"));
        self.spec.validate(diags, AttributePath::new("spec"));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::schema::WithAttributes;
    use crate::victoriametrics::{VmAlert, VmAlertmanagerConfig};

    fn assert_computed_only_at_top(attributes: &HashMap<String, Attribute>) {
        for (name, attribute) in attributes {
            assert!(
                !matches!(attribute.constraint, AttributeConstraint::Computed),
                "nested attribute `{name}` must not be computed"
            );
            match &attribute.attr_type {
                AttributeType::AttributeSingle(nested)
                | AttributeType::AttributeList(nested)
                | AttributeType::AttributeMap(nested) => assert_computed_only_at_top(nested),
                _ => (),
            }
        }
    }

    #[test]
    fn schema_without_id() {
        let schema = ManifestState::<VmAlert>::schema();
        let attributes = &schema.block.attributes;
        assert!(!attributes.contains_key("id"));
        assert!(matches!(
            attributes["yaml"].constraint,
            AttributeConstraint::Computed
        ));
        assert!(matches!(
            attributes["metadata"].constraint,
            AttributeConstraint::Required
        ));
        assert!(matches!(
            attributes["spec"].constraint,
            AttributeConstraint::Optional
        ));
    }

    #[test]
    fn schema_with_id() {
        let schema = ManifestState::<VmAlertmanagerConfig>::schema();
        assert!(matches!(
            schema.block.attributes["id"].constraint,
            AttributeConstraint::Computed
        ));
    }

    #[test]
    fn computed_attributes_are_never_supplied() {
        let schema = ManifestState::<VmAlert>::schema();
        for (name, attribute) in &schema.block.attributes {
            let computed = matches!(attribute.constraint, AttributeConstraint::Computed);
            assert_eq!(computed, name == "yaml" || name == "id", "{name}");
        }
        assert_computed_only_at_top(&Metadata::attributes());
        match &schema.block.attributes["spec"].attr_type {
            AttributeType::AttributeSingle(spec) => assert_computed_only_at_top(spec),
            _ => panic!("spec should be a nested attribute"),
        }
    }

    #[test]
    fn metadata_attributes() {
        let attributes = Metadata::attributes();
        assert!(matches!(
            attributes["name"].constraint,
            AttributeConstraint::Required
        ));
        assert!(matches!(
            attributes["namespace"].constraint,
            AttributeConstraint::Required
        ));
        assert!(matches!(
            attributes["labels"].attr_type,
            AttributeType::Map(_)
        ));
        assert!(matches!(
            attributes["annotations"].constraint,
            AttributeConstraint::Optional
        ));
    }

    #[test]
    fn empty_name_reports_one_error() {
        let state = ManifestState::<VmAlert> {
            metadata: Value::Value(Metadata {
                name: Value::Value(String::new()),
                namespace: Value::Value(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut diags = Diagnostics::default();
        state.validate(&mut diags);
        assert_eq!(diags.errors.len(), 2);
        assert_eq!(
            diags.errors[0].attribute,
            AttributePath::new("metadata").attribute("name")
        );
        assert_eq!(
            diags.errors[1].attribute,
            AttributePath::new("metadata").attribute("namespace")
        );
    }
}
