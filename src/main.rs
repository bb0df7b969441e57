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

use anyhow::Result;
use tf_provider::serve;
use tracing::info;

#[macro_use]
mod schema;

mod k8s_provider;
mod logging;
mod manifest;
mod utils;
mod victoriametrics;

use crate::k8s_provider::K8sProvider;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize_logging(logging::LOG_ENV)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting k8s provider");

    serve("k8s", K8sProvider::default()).await
}
