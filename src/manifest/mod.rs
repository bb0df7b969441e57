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

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::schema::{WithAttrType, WithAttributes, WithYaml};
use crate::utils::WithValidate;

mod data_source;
mod read;
mod state;

pub use data_source::ManifestDataSource;
pub use state::{ManifestState, Metadata};

/// Kind of Kubernetes object rendered by a [`ManifestDataSource`]
pub trait ManifestKind: Send + Sync + 'static + Default + Debug + Clone + PartialEq {
    /// Name of the data source, without the provider prefix
    const TYPE_NAME: &'static str;
    const API_VERSION: &'static str;
    const KIND: &'static str;
    const DESCRIPTION: &'static str;
    /// Expose a computed `id` attribute holding `namespace/name`
    const WITH_ID: bool = false;
    const SPEC_REQUIRED: bool = false;

    type Spec: WithAttributes
        + WithAttrType
        + WithYaml
        + WithValidate
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + Clone
        + Debug
        + Default
        + PartialEq;
}
