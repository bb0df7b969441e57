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
    Authorization, BasicAuth, OAuth2, RelabelConfig, SecretKeySelector, TlsConfig,
};
use super::API_VERSION;

/// `VMStaticScrape` scrapes a fixed list of targets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VmStaticScrape;

impl ManifestKind for VmStaticScrape {
    const TYPE_NAME: &'static str =
        "operator_victoriametrics_com_vm_static_scrape_v1beta1_manifest";
    const API_VERSION: &'static str = API_VERSION;
    const KIND: &'static str = "VMStaticScrape";
    const DESCRIPTION: &'static str =
        "VMStaticScrape defines static targets configuration for scraping.";

    type Spec = VmStaticScrapeSpec;
}

manifest_object! {
    /// Group of statically configured targets
    pub struct TargetEndpoint {
        /// Static addresses to scrape, in the `host:port` form.
        targets: Value<Vec<Value<String>>> => "targets", required, [Validator::MinItems(1)];
        /// Labels added to every sample scraped from the targets.
        labels: Value<StringMap> => "labels", optional, [Validator::Labels];
        /// HTTP path to scrape for metrics, `/metrics` by default.
        path: Value<String> => "path", optional;
        /// Protocol scheme used for the requests.
        scheme: Value<String> => "scheme", optional, [Validator::OneOf(&["http", "https"])];
        /// Optional HTTP URL parameters.
        params: Value<StringMap> => "params", optional;
        /// Interval at which the targets are scraped.
        interval: Value<String> => "interval", optional, [Validator::Duration];
        /// Timeout of a single scrape request.
        scrape_timeout: Value<String> => "scrapeTimeout", optional, [Validator::Duration];
        /// Keep the labels of the scraped samples when they collide with the target labels.
        honor_labels: Value<bool> => "honorLabels", optional;
        /// Keep the timestamps of the scraped samples.
        honor_timestamps: Value<bool> => "honorTimestamps", optional;
        /// Maximum number of samples accepted per scrape.
        sample_limit: Value<i64> => "sampleLimit", optional, [Validator::AtLeast(0)];
        /// Maximum number of unique series accepted per scrape.
        series_limit: Value<i64> => "seriesLimit", optional, [Validator::AtLeast(0)];
        /// Basic authentication for the targets.
        basic_auth: Value<BasicAuth> => "basicAuth", optional;
        /// Path to a file with the bearer token.
        bearer_token_file: Value<String> => "bearerTokenFile", optional;
        /// Secret key holding the bearer token.
        bearer_token_secret: Value<SecretKeySelector> => "bearerTokenSecret", optional;
        /// Authorization header configuration.
        authorization: Value<Authorization> => "authorization", optional;
        /// OAuth2 configuration.
        oauth2: Value<OAuth2> => "oauth2", optional;
        /// TLS configuration.
        tls_config: Value<TlsConfig> => "tlsConfig", optional;
        /// Proxy used to reach the targets.
        proxy_url: Value<String> => "proxyURL", optional;
        /// Relabeling applied to the targets before scraping.
        relabel_configs: Value<Vec<Value<RelabelConfig>>> => "relabelConfigs", optional;
        /// Relabeling applied to the samples before ingestion.
        metric_relabel_configs: Value<Vec<Value<RelabelConfig>>> => "metricRelabelConfigs", optional;
    }
}

manifest_object! {
    /// Desired state of a VMStaticScrape
    pub struct VmStaticScrapeSpec {
        /// Name of the scrape job.
        job_name: Value<String> => "jobName", optional;
        /// Groups of targets to scrape.
        target_endpoints: Value<Vec<Value<TargetEndpoint>>> => "targetEndpoints", required, [Validator::MinItems(1)];
        /// Limit of samples accepted per scrape, applied to every endpoint.
        sample_limit: Value<i64> => "sampleLimit", optional, [Validator::AtLeast(0)];
    }
}
