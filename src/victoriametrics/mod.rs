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

//! Custom resources of the VictoriaMetrics operator

pub mod common;
pub mod vm_alert;
pub mod vm_alertmanager_config;
pub mod vm_rule;
pub mod vm_static_scrape;

pub use vm_alert::VmAlert;
pub use vm_alertmanager_config::VmAlertmanagerConfig;
pub use vm_rule::VmRule;
pub use vm_static_scrape::VmStaticScrape;

pub(crate) const API_VERSION: &str = "operator.victoriametrics.com/v1beta1";

pub(crate) const LOG_FORMATS: &[&str] = &["default", "json"];
pub(crate) const LOG_LEVELS: &[&str] = &["INFO", "WARN", "ERROR", "FATAL", "PANIC"];
