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

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use tf_provider::{
    data_source::DynamicDataSource, map, resource::DynamicResource, Block, Description,
    Diagnostics, Provider, Schema, ValueEmpty,
};

use crate::{
    manifest::{ManifestDataSource, ManifestKind},
    victoriametrics::{VmAlert, VmAlertmanagerConfig, VmRule, VmStaticScrape},
};

#[derive(Debug, Default, Clone)]
pub struct K8sProvider {}

#[async_trait]
impl Provider for K8sProvider {
    type Config<'a> = ValueEmpty;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                description: Description::plain("k8s"),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, _diags: &mut Diagnostics, _config: Self::Config<'a>) -> Option<()> {
        Some(())
    }

    async fn configure<'a>(
        &self,
        _diags: &mut Diagnostics,
        terraform_version: String,
        _config: Self::Config<'a>,
    ) -> Option<()> {
        debug!(terraform_version = %terraform_version, "configured provider");
        Some(())
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicResource>>> {
        Some(HashMap::new())
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicDataSource>>> {
        Some(map! {
            VmAlert::TYPE_NAME => ManifestDataSource::new(VmAlert),
            VmAlertmanagerConfig::TYPE_NAME => ManifestDataSource::new(VmAlertmanagerConfig),
            VmRule::TYPE_NAME => ManifestDataSource::new(VmRule),
            VmStaticScrape::TYPE_NAME => ManifestDataSource::new(VmStaticScrape),
        })
    }
}
