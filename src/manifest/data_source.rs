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

use async_trait::async_trait;
use tracing::debug;

use tf_provider::{DataSource, Diagnostics, Schema, Value, ValueEmpty};

use crate::utils::WithSchema;

use super::{ManifestKind, ManifestState};

#[derive(Debug, Default)]
pub struct ManifestDataSource<K: ManifestKind> {
    pub(super) kind: K,
}

impl<K: ManifestKind> ManifestDataSource<K> {
    pub fn new(kind: K) -> Self {
        Self { kind }
    }
}

#[async_trait]
impl<K> DataSource for ManifestDataSource<K>
where
    K: ManifestKind,
{
    type State<'a> = ManifestState<'a, K>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ManifestState::<K>::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        config.validate(diags);
        debug!(
            kind = ?self.kind,
            errors = diags.errors.len(),
            "validated manifest configuration"
        );

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let mut state = config;

        if K::WITH_ID {
            state.id = state.identifier();
        }

        match state.render() {
            Ok(yaml) => {
                debug!(
                    kind = ?self.kind,
                    id = state.id.as_str(),
                    "rendered manifest"
                );
                state.yaml = Value::Value(Cow::Owned(yaml));
                Some(state)
            }
            Err(err) => {
                debug!(kind = ?self.kind, error = %err, "failed to render manifest");
                err.report(diags);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::manifest::Metadata;
    use crate::victoriametrics::{
        vm_alert::{VmAlertDatasourceSpec, VmAlertSpec},
        vm_alertmanager_config::{Route, VmAlertmanagerConfigSpec},
        VmAlert, VmAlertmanagerConfig,
    };

    fn string(value: &str) -> Value<String> {
        Value::Value(value.to_owned())
    }

    fn metadata(name: &str, namespace: &str) -> Value<Metadata> {
        Value::Value(Metadata {
            name: string(name),
            namespace: string(namespace),
            ..Default::default()
        })
    }

    fn vm_alert<'a>() -> ManifestState<'a, VmAlert> {
        ManifestState {
            metadata: metadata("alert1", "monitoring"),
            spec: Value::Value(VmAlertSpec {
                datasource: Value::Value(VmAlertDatasourceSpec {
                    url: string("http://vmselect:8428"),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn vm_alertmanager_config<'a>() -> ManifestState<'a, VmAlertmanagerConfig> {
        ManifestState {
            metadata: metadata("cfg1", "ns1"),
            spec: Value::Value(VmAlertmanagerConfigSpec {
                route: Value::Value(Route {
                    receiver: string("default"),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn yaml_of<K: ManifestKind>(state: &ManifestState<'_, K>) -> serde_yaml::Value {
        match &state.yaml {
            Value::Value(yaml) => serde_yaml::from_str(yaml).unwrap(),
            _ => panic!("yaml should have been computed"),
        }
    }

    #[tokio::test]
    async fn read_vm_alert() {
        let mut diags = Diagnostics::default();
        let state = ManifestDataSource::new(VmAlert)
            .read(&mut diags, vm_alert(), ValueEmpty::default())
            .await
            .unwrap();
        assert!(diags.errors.is_empty());
        assert!(state.id.is_null());

        let yaml = yaml_of(&state);
        assert_eq!(yaml["apiVersion"], "operator.victoriametrics.com/v1beta1");
        assert_eq!(yaml["kind"], "VMAlert");
        assert_eq!(yaml["metadata"]["name"], "alert1");
        assert_eq!(yaml["metadata"]["namespace"], "monitoring");
        assert_eq!(yaml["spec"]["datasource"]["url"], "http://vmselect:8428");

        let spec = yaml["spec"].as_mapping().unwrap();
        assert_eq!(spec.len(), 1);
        let datasource = yaml["spec"]["datasource"].as_mapping().unwrap();
        assert_eq!(datasource.len(), 1);
        assert!(yaml["metadata"].get("labels").is_none());
    }

    #[tokio::test]
    async fn read_vm_alertmanager_config() {
        let mut diags = Diagnostics::default();
        let state = ManifestDataSource::new(VmAlertmanagerConfig)
            .read(&mut diags, vm_alertmanager_config(), ValueEmpty::default())
            .await
            .unwrap();
        assert!(diags.errors.is_empty());
        assert_eq!(state.id, Value::Value(Cow::Borrowed("ns1/cfg1")));

        let yaml = yaml_of(&state);
        assert_eq!(yaml["kind"], "VMAlertmanagerConfig");
        assert_eq!(yaml["spec"]["route"]["receiver"], "default");
    }

    #[tokio::test]
    async fn read_is_deterministic() {
        let data_source = ManifestDataSource::new(VmAlert);
        let mut diags = Diagnostics::default();
        let mut config = vm_alert();
        if let Value::Value(metadata) = &mut config.metadata {
            metadata.labels = Value::Value(BTreeMap::from([
                ("b".to_owned(), string("2")),
                ("a".to_owned(), string("1")),
            ]));
        }

        let first = data_source
            .read(&mut diags, config.clone(), ValueEmpty::default())
            .await
            .unwrap();
        let second = data_source
            .read(&mut diags, config, ValueEmpty::default())
            .await
            .unwrap();
        assert_eq!(first.yaml, second.yaml);
    }

    #[tokio::test]
    async fn constants_lead_the_manifest() {
        let mut diags = Diagnostics::default();
        let state = ManifestDataSource::new(VmAlert)
            .read(&mut diags, vm_alert(), ValueEmpty::default())
            .await
            .unwrap();
        let Value::Value(yaml) = &state.yaml else {
            panic!("yaml should have been computed");
        };
        assert!(yaml.starts_with(
            "apiVersion: operator.victoriametrics.com/v1beta1\nkind: VMAlert\nmetadata:\n"
        ));
    }

    #[tokio::test]
    async fn read_unknown_value_fails_without_state() {
        let mut config = vm_alert();
        if let Value::Value(spec) = &mut config.spec {
            spec.evaluation_interval = Value::Unknown;
        }

        let mut diags = Diagnostics::default();
        let state = ManifestDataSource::new(VmAlert)
            .read(&mut diags, config, ValueEmpty::default())
            .await;
        assert!(state.is_none());
        assert_eq!(diags.errors.len(), 1);
    }

    #[tokio::test]
    async fn validate_rejects_empty_name() {
        let mut config = vm_alert();
        config.metadata = metadata("", "monitoring");

        let mut diags = Diagnostics::default();
        let result = ManifestDataSource::new(VmAlert)
            .validate(&mut diags, config)
            .await;
        assert!(result.is_none());
        assert_eq!(diags.errors.len(), 1);
    }

    #[tokio::test]
    async fn validate_evaluation_interval() {
        let data_source = ManifestDataSource::new(VmAlert);

        let mut config = vm_alert();
        if let Value::Value(spec) = &mut config.spec {
            spec.evaluation_interval = string("5");
        }
        let mut diags = Diagnostics::default();
        assert!(data_source.validate(&mut diags, config).await.is_none());
        assert_eq!(diags.errors.len(), 1);

        let mut config = vm_alert();
        if let Value::Value(spec) = &mut config.spec {
            spec.evaluation_interval = string("5m");
        }
        let mut diags = Diagnostics::default();
        assert!(data_source.validate(&mut diags, config).await.is_some());
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn schema_is_stable() {
        let data_source = ManifestDataSource::new(VmAlertmanagerConfig);
        let mut diags = Diagnostics::default();
        let schema = data_source.schema(&mut diags).unwrap();
        assert!(schema.block.attributes.contains_key("id"));
        assert!(schema.block.attributes.contains_key("yaml"));
        assert!(diags.errors.is_empty());
    }
}
