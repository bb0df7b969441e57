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

use tf_provider::Value;

use crate::manifest::ManifestKind;
use crate::schema::{StringMap, Validator};

use super::common::{
    BasicAuth, DiscoverySelector, EmbeddedObjectMetadata, EnvVar, Image, LabelSelector,
    LocalObjectReference, OAuth2, ResourceRequirements, SecretKeySelector, Toleration, TlsConfig,
};
use super::{API_VERSION, LOG_FORMATS, LOG_LEVELS};

/// `VMAlert` executes a list of recording and alerting rules against a datasource
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VmAlert;

impl ManifestKind for VmAlert {
    const TYPE_NAME: &'static str = "operator_victoriametrics_com_vm_alert_v1beta1_manifest";
    const API_VERSION: &'static str = API_VERSION;
    const KIND: &'static str = "VMAlert";
    const DESCRIPTION: &'static str =
        "VMAlert executes a list of given alerting or recording rules against configured address.";

    type Spec = VmAlertSpec;
}

manifest_object! {
    /// Datasource the rules are evaluated against
    pub struct VmAlertDatasourceSpec {
        /// Victoria Metrics or VMSelect url, e.g. `http://127.0.0.1:8428`.
        url: Value<String> => "url", required, [Validator::MinLength(1)];
        /// Basic authentication for the datasource.
        basic_auth: Value<BasicAuth> => "basicAuth", optional;
        /// Path to a file with the bearer token.
        bearer_token_file: Value<String> => "bearerTokenFile", optional;
        /// Secret key holding the bearer token.
        bearer_token_secret: Value<SecretKeySelector> => "bearerTokenSecret", optional;
        /// Extra HTTP headers in the form `header:value`.
        headers: Value<Vec<Value<String>>> => "headers", optional;
        /// OAuth2 configuration.
        oauth2: Value<OAuth2> => "OAuth2", optional;
        /// TLS configuration.
        tls_config: Value<TlsConfig> => "tlsConfig", optional;
    }
}

manifest_object! {
    /// Alertmanager that receives the generated alerts
    pub struct VmAlertNotifierSpec {
        /// AlertManager url, e.g. `http://127.0.0.1:9093`.
        url: Value<String> => "url", optional;
        /// Selects VMAlertmanager objects to use as notifiers, mutually exclusive with `url`.
        selector: Value<DiscoverySelector> => "selector", optional;
        /// Basic authentication for the notifier.
        basic_auth: Value<BasicAuth> => "basicAuth", optional;
        /// Path to a file with the bearer token.
        bearer_token_file: Value<String> => "bearerTokenFile", optional;
        /// Secret key holding the bearer token.
        bearer_token_secret: Value<SecretKeySelector> => "bearerTokenSecret", optional;
        /// Extra HTTP headers in the form `header:value`.
        headers: Value<Vec<Value<String>>> => "headers", optional;
        /// OAuth2 configuration.
        oauth2: Value<OAuth2> => "OAuth2", optional;
        /// TLS configuration.
        tls_config: Value<TlsConfig> => "tlsConfig", optional;
    }
}

manifest_object! {
    /// Storage used to restore the alerts state on restart
    pub struct VmAlertRemoteReadSpec {
        /// Victoria Metrics or VMSelect url.
        url: Value<String> => "url", required, [Validator::MinLength(1)];
        /// How far to look back when restoring the state, `1h` by default.
        lookback: Value<String> => "lookback", optional, [Validator::Duration];
        /// Basic authentication for the remote read endpoint.
        basic_auth: Value<BasicAuth> => "basicAuth", optional;
        /// Path to a file with the bearer token.
        bearer_token_file: Value<String> => "bearerTokenFile", optional;
        /// Secret key holding the bearer token.
        bearer_token_secret: Value<SecretKeySelector> => "bearerTokenSecret", optional;
        /// Extra HTTP headers in the form `header:value`.
        headers: Value<Vec<Value<String>>> => "headers", optional;
        /// OAuth2 configuration.
        oauth2: Value<OAuth2> => "OAuth2", optional;
        /// TLS configuration.
        tls_config: Value<TlsConfig> => "tlsConfig", optional;
    }
}

manifest_object! {
    /// Storage receiving the results of recording rules and the alerts state
    pub struct VmAlertRemoteWriteSpec {
        /// Victoria Metrics or VMInsert url.
        url: Value<String> => "url", required, [Validator::MinLength(1)];
        /// Number of concurrent writers, `1` by default.
        concurrency: Value<i64> => "concurrency", optional, [Validator::AtLeast(1)];
        /// How often data is flushed, `5s` by default.
        flush_interval: Value<String> => "flushInterval", optional, [Validator::Duration];
        /// Maximum number of time series sent in a single request.
        max_batch_size: Value<i64> => "maxBatchSize", optional, [Validator::AtLeast(1)];
        /// Maximum number of time series held in memory before being dropped.
        max_queue_size: Value<i64> => "maxQueueSize", optional, [Validator::AtLeast(1)];
        /// Basic authentication for the remote write endpoint.
        basic_auth: Value<BasicAuth> => "basicAuth", optional;
        /// Path to a file with the bearer token.
        bearer_token_file: Value<String> => "bearerTokenFile", optional;
        /// Secret key holding the bearer token.
        bearer_token_secret: Value<SecretKeySelector> => "bearerTokenSecret", optional;
        /// Extra HTTP headers in the form `header:value`.
        headers: Value<Vec<Value<String>>> => "headers", optional;
        /// OAuth2 configuration.
        oauth2: Value<OAuth2> => "OAuth2", optional;
        /// TLS configuration.
        tls_config: Value<TlsConfig> => "tlsConfig", optional;
    }
}

manifest_object! {
    /// Pod disruption budget of the VMAlert pods
    pub struct PodDisruptionBudget {
        /// Number or percentage of pods that must stay available.
        min_available: Value<String> => "minAvailable", optional;
        /// Number or percentage of pods that may be unavailable.
        max_unavailable: Value<String> => "maxUnavailable", optional;
        /// Labels used as the selector of the budget instead of the default ones.
        selector_labels: Value<StringMap> => "selectorLabels", optional, [Validator::Labels];
    }
}

manifest_object! {
    /// Desired state of a VMAlert
    pub struct VmAlertSpec {
        /// Datasource the rules are evaluated against.
        datasource: Value<VmAlertDatasourceSpec> => "datasource", required;
        /// How often the rules are evaluated, e.g. `30s`.
        evaluation_interval: Value<String> => "evaluationInterval", optional, [Validator::Duration];
        /// Labels added to every generated alert and recording.
        external_labels: Value<StringMap> => "externalLabels", optional;
        /// Additional command line flags, without the leading `-`.
        extra_args: Value<StringMap> => "extraArgs", optional;
        /// Additional environment variables of the vmalert container.
        extra_envs: Value<Vec<Value<EnvVar>>> => "extraEnvs", optional;
        /// Image of the vmalert container.
        image: Value<Image> => "image", optional;
        /// Secrets used to pull images from private registries.
        image_pull_secrets: Value<Vec<Value<LocalObjectReference>>> => "imagePullSecrets", optional;
        /// Log format: `default` or `json`.
        log_format: Value<String> => "logFormat", optional, [Validator::OneOf(LOG_FORMATS)];
        /// Log level: `INFO`, `WARN`, `ERROR`, `FATAL` or `PANIC`.
        log_level: Value<String> => "logLevel", optional, [Validator::OneOf(LOG_LEVELS)];
        /// Alertmanager receiving the alerts.
        notifier: Value<VmAlertNotifierSpec> => "notifier", optional;
        /// Several alertmanagers receiving the alerts.
        notifiers: Value<Vec<Value<VmAlertNotifierSpec>>> => "notifiers", optional;
        /// Secret key holding a notifier configuration file, mutually exclusive with `notifiers`.
        notifier_config_ref: Value<SecretKeySelector> => "notifierConfigRef", optional;
        /// Storage used to restore the alerts state.
        remote_read: Value<VmAlertRemoteReadSpec> => "remoteRead", optional;
        /// Storage receiving the recording rule results.
        remote_write: Value<VmAlertRemoteWriteSpec> => "remoteWrite", optional;
        /// Number of pods.
        replica_count: Value<i64> => "replicaCount", optional, [Validator::AtLeast(0)];
        /// Compute resources of the vmalert container.
        resources: Value<ResourceRequirements> => "resources", optional;
        /// Paths to rule files mounted in the container.
        rule_path: Value<Vec<Value<String>>> => "rulePath", optional;
        /// Selects the VMRule objects to evaluate.
        rule_selector: Value<LabelSelector> => "ruleSelector", optional;
        /// Selects the namespaces VMRule objects are discovered in.
        rule_namespace_selector: Value<LabelSelector> => "ruleNamespaceSelector", optional;
        /// Select every VMRule when no selector is given.
        select_all_by_default: Value<bool> => "selectAllByDefault", optional;
        /// ConfigMaps mounted into the pods under `/etc/vm/configs/`.
        config_maps: Value<Vec<Value<String>>> => "configMaps", optional;
        /// Secrets mounted into the pods under `/etc/vm/secrets/`.
        secrets: Value<Vec<Value<String>>> => "secrets", optional;
        /// Metadata added to the pods.
        pod_metadata: Value<EmbeddedObjectMetadata> => "podMetadata", optional;
        /// Pod disruption budget of the pods.
        pod_disruption_budget: Value<PodDisruptionBudget> => "podDisruptionBudget", optional;
        /// Port the vmalert http server listens on.
        port: Value<String> => "port", optional;
        /// Node labels required to schedule the pods.
        node_selector: Value<StringMap> => "nodeSelector", optional;
        /// Tolerations of the pods.
        tolerations: Value<Vec<Value<Toleration>>> => "tolerations", optional;
        /// Priority class of the pods.
        priority_class_name: Value<String> => "priorityClassName", optional;
        /// Scheduler of the pods.
        scheduler_name: Value<String> => "schedulerName", optional;
        /// Runtime class of the pods.
        runtime_class_name: Value<String> => "runtimeClassName", optional;
        /// Service account the pods run as.
        service_account_name: Value<String> => "serviceAccountName", optional;
        /// Use the host network namespace.
        host_network: Value<bool> => "hostNetwork", optional;
        /// DNS policy of the pods.
        dns_policy: Value<String> => "dnsPolicy", optional;
        /// Grace period before the pods are killed, in seconds.
        termination_grace_period_seconds: Value<i64> => "terminationGracePeriodSeconds", optional, [Validator::AtLeast(0)];
        /// Minimum number of seconds a new pod must be ready to be considered available.
        min_ready_seconds: Value<i64> => "minReadySeconds", optional, [Validator::AtLeast(0)];
        /// Number of old ReplicaSets kept for rollbacks.
        revision_history_limit_count: Value<i64> => "revisionHistoryLimitCount", optional, [Validator::AtLeast(0)];
        /// Deployment update strategy: `Recreate` or `RollingUpdate`.
        update_strategy: Value<String> => "updateStrategy", optional, [Validator::OneOf(&["Recreate", "RollingUpdate"])];
        /// Enable the strict security mode of the containers.
        use_strict_security: Value<bool> => "useStrictSecurity", optional;
        /// Stop reconciling the object.
        paused: Value<bool> => "paused", optional;
    }
}

#[cfg(test)]
mod tests {
    use tf_provider::AttributePath;

    use super::*;
    use crate::manifest::{ManifestState, Metadata};
    use crate::schema::WithYaml;
    use crate::utils::WithValidate;

    fn string(value: &str) -> Value<String> {
        Value::Value(value.to_owned())
    }

    fn full_spec() -> VmAlertSpec {
        VmAlertSpec {
            datasource: Value::Value(VmAlertDatasourceSpec {
                url: string("http://vmselect:8481/select/0/prometheus"),
                basic_auth: Value::Value(BasicAuth {
                    username: Value::Value(SecretKeySelector {
                        key: string("username"),
                        name: string("vmselect-auth"),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            evaluation_interval: string("30s"),
            log_level: string("WARN"),
            notifiers: Value::Value(vec![Value::Value(VmAlertNotifierSpec {
                url: string("http://alertmanager:9093"),
                ..Default::default()
            })]),
            remote_write: Value::Value(VmAlertRemoteWriteSpec {
                url: string("http://vminsert:8480/insert/0/prometheus"),
                flush_interval: string("10s"),
                max_batch_size: Value::Value(1000),
                ..Default::default()
            }),
            extra_args: Value::Value(StringMap::from([(
                "rule.maxResolveDuration".to_owned(),
                string("1h"),
            )])),
            replica_count: Value::Value(2),
            ..Default::default()
        }
    }

    #[test]
    fn spec_keys_are_camel_case() {
        let yaml = full_spec()
            .to_yaml(&AttributePath::new("spec"))
            .unwrap()
            .unwrap();
        assert_eq!(
            yaml["datasource"]["basicAuth"]["username"]["name"],
            "vmselect-auth"
        );
        assert_eq!(yaml["evaluationInterval"], "30s");
        assert_eq!(yaml["logLevel"], "WARN");
        assert_eq!(yaml["notifiers"][0]["url"], "http://alertmanager:9093");
        assert_eq!(yaml["remoteWrite"]["flushInterval"], "10s");
        assert_eq!(yaml["remoteWrite"]["maxBatchSize"], 1000);
        assert_eq!(yaml["extraArgs"]["rule.maxResolveDuration"], "1h");
        assert_eq!(yaml["replicaCount"], 2);
        assert!(yaml.get("remoteRead").is_none());
        assert!(yaml.get("notifier").is_none());
    }

    #[test]
    fn rendered_manifest_round_trips() {
        let state = ManifestState::<VmAlert> {
            metadata: Value::Value(Metadata {
                name: string("alert1"),
                namespace: string("monitoring"),
                ..Default::default()
            }),
            spec: Value::Value(full_spec()),
            ..Default::default()
        };
        let rendered = state.render().unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();

        let expected = serde_yaml::Value::Mapping(
            [
                ("apiVersion", serde_yaml::Value::from(API_VERSION)),
                ("kind", serde_yaml::Value::from("VMAlert")),
                (
                    "metadata",
                    state
                        .metadata
                        .to_yaml(&AttributePath::new("metadata"))
                        .unwrap()
                        .unwrap(),
                ),
                (
                    "spec",
                    state
                        .spec
                        .to_yaml(&AttributePath::new("spec"))
                        .unwrap()
                        .unwrap(),
                ),
            ]
            .into_iter()
            .map(|(key, value)| (serde_yaml::Value::from(key), value))
            .collect(),
        );
        assert_eq!(parsed, expected);
    }

    #[test]
    fn invalid_enums_and_durations_are_reported() {
        let spec = VmAlertSpec {
            log_format: string("xml"),
            update_strategy: string("OnDelete"),
            remote_write: Value::Value(VmAlertRemoteWriteSpec {
                url: string("http://vminsert:8480"),
                flush_interval: string("10"),
                ..Default::default()
            }),
            ..full_spec()
        };

        let mut diags = tf_provider::Diagnostics::default();
        spec.validate(&mut diags, AttributePath::new("spec"));
        assert_eq!(diags.errors.len(), 3);
    }

    #[test]
    fn full_spec_is_valid() {
        let mut diags = tf_provider::Diagnostics::default();
        full_spec().validate(&mut diags, AttributePath::new("spec"));
        assert!(diags.errors.is_empty());
    }
}
