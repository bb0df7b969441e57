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

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter of the plugin
pub const LOG_ENV: &str = "TF_PROVIDER_K8S_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Filter read from the environment variable `env`, `warn` when unset or invalid
fn env_filter(env: &str) -> EnvFilter {
    EnvFilter::try_from_env(env).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initializes `tracing` logging with options from the environment variable
/// given in the `env` parameter.
///
/// Events are written to stderr: stdout carries the plugin handshake read by
/// Terraform.
pub fn initialize_logging(env: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(env))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
}
