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

//! Sub-structures shared by several custom resources

use tf_provider::Value;

use crate::schema::{StringMap, Validator};

pub(crate) const PULL_POLICIES: &[&str] = &["Always", "Never", "IfNotPresent"];
pub(crate) const SELECTOR_OPERATORS: &[&str] = &["In", "NotIn", "Exists", "DoesNotExist"];

manifest_object! {
    /// Selects a key of a Secret.
    pub struct SecretKeySelector {
        /// The key of the secret to select from. Must be a valid secret key.
        key: Value<String> => "key", required;
        /// Name of the referent.
        name: Value<String> => "name", optional;
        /// Specify whether the Secret or its key must be defined.
        optional: Value<bool> => "optional", optional;
    }
}

manifest_object! {
    /// Selects a key from a ConfigMap.
    pub struct ConfigMapKeySelector {
        /// The key to select.
        key: Value<String> => "key", required;
        /// Name of the referent.
        name: Value<String> => "name", optional;
        /// Specify whether the ConfigMap or its key must be defined.
        optional: Value<bool> => "optional", optional;
    }
}

manifest_object! {
    /// Data taken either from a Secret or from a ConfigMap.
    pub struct SecretOrConfigMap {
        /// Secret containing data to use for the targets.
        secret: Value<SecretKeySelector> => "secret", optional;
        /// ConfigMap containing data to use for the targets.
        config_map: Value<ConfigMapKeySelector> => "configMap", optional;
    }
}

manifest_object! {
    /// TLS configuration used by the client.
    pub struct TlsConfig {
        /// Struct containing the CA cert to use for the targets.
        ca: Value<SecretOrConfigMap> => "ca", optional;
        /// Path to the CA cert in the container to use for the targets.
        ca_file: Value<String> => "caFile", optional;
        /// Struct containing the client cert file for the targets.
        cert: Value<SecretOrConfigMap> => "cert", optional;
        /// Path to the client cert file in the container for the targets.
        cert_file: Value<String> => "certFile", optional;
        /// Disable target certificate validation.
        insecure_skip_verify: Value<bool> => "insecureSkipVerify", optional;
        /// Path to the client key file in the container for the targets.
        key_file: Value<String> => "keyFile", optional;
        /// Secret containing the client key file for the targets.
        key_secret: Value<SecretKeySelector> => "keySecret", optional;
        /// Used to verify the hostname for the targets.
        server_name: Value<String> => "serverName", optional;
    }
}

manifest_object! {
    /// Basic authentication credentials.
    pub struct BasicAuth {
        /// The secret in the service scrape namespace that contains the username for authentication.
        username: Value<SecretKeySelector> => "username", optional;
        /// The secret in the service scrape namespace that contains the password for authentication.
        password: Value<SecretKeySelector> => "password", optional;
        /// Path to a file containing the password, mutually exclusive with `password`.
        password_file: Value<String> => "password_file", optional;
    }
}

manifest_object! {
    /// OAuth2 client credentials used to fetch a token for the targets.
    pub struct OAuth2 {
        /// The secret or configmap containing the OAuth2 client id.
        client_id: Value<SecretOrConfigMap> => "client_id", required;
        /// The secret containing the OAuth2 client secret.
        client_secret: Value<SecretKeySelector> => "client_secret", optional;
        /// Path to the file containing the OAuth2 client secret.
        client_secret_file: Value<String> => "client_secret_file", optional;
        /// Parameters to append to the token URL.
        endpoint_params: Value<StringMap> => "endpoint_params", optional;
        /// OAuth2 scopes used for the token request.
        scopes: Value<Vec<Value<String>>> => "scopes", optional;
        /// The URL to fetch the token from.
        token_url: Value<String> => "token_url", required, [Validator::MinLength(1)];
    }
}

manifest_object! {
    /// Authorization header configuration.
    pub struct Authorization {
        /// Type of the authorization, `Bearer` when unset.
        r#type: Value<String> => "type", optional;
        /// Reference to the secret holding the credentials.
        credentials: Value<SecretKeySelector> => "credentials", optional;
        /// File with the credentials.
        credentials_file: Value<String> => "credentials_file", optional;
    }
}

manifest_object! {
    /// HTTP client configuration of a notification integration.
    pub struct HttpConfig {
        /// Basic authentication for the client.
        basic_auth: Value<BasicAuth> => "basic_auth", optional;
        /// The secret's key that contains the bearer token.
        bearer_token_secret: Value<SecretKeySelector> => "bearer_token_secret", optional;
        /// Path to a file containing the bearer token.
        bearer_token_file: Value<String> => "bearer_token_file", optional;
        /// TLS configuration for the client.
        tls_config: Value<TlsConfig> => "tls_config", optional;
        /// Authorization header configuration for the client.
        authorization: Value<Authorization> => "authorization", optional;
        /// OAuth2 client credentials used to fetch a token.
        oauth2: Value<OAuth2> => "oauth2", optional;
        /// Optional proxy URL.
        proxy_url: Value<String> => "proxyURL", optional;
    }
}

manifest_object! {
    /// A selector requirement: a key, an operator and a set of values.
    pub struct LabelSelectorRequirement {
        /// The label key that the selector applies to.
        key: Value<String> => "key", required;
        /// Relationship of the key to the values: `In`, `NotIn`, `Exists` or `DoesNotExist`.
        operator: Value<String> => "operator", required, [Validator::OneOf(SELECTOR_OPERATORS)];
        /// Array of string values, empty for `Exists` and `DoesNotExist`.
        values: Value<Vec<Value<String>>> => "values", optional;
    }
}

manifest_object! {
    /// A label query over a set of resources.
    pub struct LabelSelector {
        /// List of label selector requirements, ANDed together.
        match_expressions: Value<Vec<Value<LabelSelectorRequirement>>> => "matchExpressions", optional;
        /// Map of {key,value} pairs, each one equivalent to an `In` expression.
        match_labels: Value<StringMap> => "matchLabels", optional, [Validator::Labels];
    }
}

manifest_object! {
    /// Selects the namespaces to look into.
    pub struct NamespaceSelector {
        /// Match any namespace.
        any: Value<bool> => "any", optional;
        /// List of namespace names.
        match_names: Value<Vec<Value<String>>> => "matchNames", optional;
    }
}

manifest_object! {
    /// Discovery of objects by namespace and labels.
    pub struct DiscoverySelector {
        /// Namespaces to select objects from.
        namespace_selector: Value<NamespaceSelector> => "namespaceSelector", optional;
        /// Labels the objects must carry.
        label_selector: Value<LabelSelector> => "labelSelector", optional;
    }
}

manifest_object! {
    /// Environment variable present in a container.
    pub struct EnvVar {
        /// Name of the environment variable.
        name: Value<String> => "name", required, [Validator::MinLength(1)];
        /// Value of the environment variable.
        value: Value<String> => "value", optional;
    }
}

manifest_object! {
    /// Container image.
    pub struct Image {
        /// Image repository.
        repository: Value<String> => "repository", optional;
        /// Image tag.
        tag: Value<String> => "tag", optional;
        /// Image pull policy: `Always`, `Never` or `IfNotPresent`.
        pull_policy: Value<String> => "pullPolicy", optional, [Validator::OneOf(PULL_POLICIES)];
    }
}

manifest_object! {
    /// Reference to an object in the same namespace.
    pub struct LocalObjectReference {
        /// Name of the referent.
        name: Value<String> => "name", optional;
    }
}

manifest_object! {
    /// Compute resources required by a container.
    pub struct ResourceRequirements {
        /// Maximum amount of compute resources allowed, e.g. `cpu = "500m"`.
        limits: Value<StringMap> => "limits", optional;
        /// Minimum amount of compute resources required.
        requests: Value<StringMap> => "requests", optional;
    }
}

manifest_object! {
    /// Allows pods to schedule onto nodes with matching taints.
    pub struct Toleration {
        /// Taint key that the toleration applies to.
        key: Value<String> => "key", optional;
        /// Relationship of the key to the value: `Exists` or `Equal`.
        operator: Value<String> => "operator", optional, [Validator::OneOf(&["Exists", "Equal"])];
        /// Taint value the toleration matches to.
        value: Value<String> => "value", optional;
        /// Taint effect to match: `NoSchedule`, `PreferNoSchedule` or `NoExecute`.
        effect: Value<String> => "effect", optional, [Validator::OneOf(&["NoSchedule", "PreferNoSchedule", "NoExecute"])];
        /// Period of time the toleration tolerates the taint, in seconds.
        toleration_seconds: Value<i64> => "tolerationSeconds", optional;
    }
}

manifest_object! {
    /// Metadata added to the generated pods.
    pub struct EmbeddedObjectMetadata {
        /// Name of the pods.
        name: Value<String> => "name", optional;
        /// Labels added to the pods.
        labels: Value<StringMap> => "labels", optional, [Validator::Labels];
        /// Annotations added to the pods.
        annotations: Value<StringMap> => "annotations", optional, [Validator::Annotations];
    }
}

manifest_object! {
    /// Relabeling rule applied to targets or samples.
    pub struct RelabelConfig {
        /// Action to perform based on regex matching, `replace` by default.
        action: Value<String> => "action", optional;
        /// Labels to select values from.
        source_labels: Value<Vec<Value<String>>> => "sourceLabels", optional;
        /// Separator placed between concatenated source label values.
        separator: Value<String> => "separator", optional;
        /// Label to which the resulting value is written in a replace action.
        target_label: Value<String> => "targetLabel", optional;
        /// Regular expression against which the extracted value is matched.
        regex: Value<String> => "regex", optional;
        /// Modulus to take of the hash of the source label values.
        modulus: Value<i64> => "modulus", optional, [Validator::AtLeast(0)];
        /// Replacement value against which a regex replace is performed.
        replacement: Value<String> => "replacement", optional;
        /// Series selector the rule applies to.
        r#if: Value<String> => "if", optional;
    }
}
