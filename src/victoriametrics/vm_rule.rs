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

use super::API_VERSION;

/// `VMRule` defines alerting and recording rules evaluated by VMAlert
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VmRule;

impl ManifestKind for VmRule {
    const TYPE_NAME: &'static str = "operator_victoriametrics_com_vm_rule_v1beta1_manifest";
    const API_VERSION: &'static str = API_VERSION;
    const KIND: &'static str = "VMRule";
    const DESCRIPTION: &'static str = "VMRule defines rule records for vmalert application.";
    const WITH_ID: bool = true;
    const SPEC_REQUIRED: bool = true;

    type Spec = VmRuleSpec;
}

manifest_object! {
    /// Alerting or recording rule
    pub struct Rule {
        /// Name of the alert, mutually exclusive with `record`.
        alert: Value<String> => "alert", optional;
        /// Name of the time series to record, mutually exclusive with `alert`.
        record: Value<String> => "record", optional;
        /// Query expression evaluated by the rule.
        expr: Value<String> => "expr", required, [Validator::MinLength(1)];
        /// How long the condition must hold before the alert fires.
        r#for: Value<String> => "for", optional, [Validator::Duration];
        /// How long the alert keeps firing after the condition stopped holding.
        keep_firing_for: Value<String> => "keep_firing_for", optional, [Validator::Duration];
        /// Labels added to the alert or record.
        labels: Value<StringMap> => "labels", optional;
        /// Annotations added to the alert.
        annotations: Value<StringMap> => "annotations", optional;
        /// Log the query execution details.
        debug: Value<bool> => "debug", optional;
        /// Number of state updates kept for the rule, `0` disables the limit.
        update_entries_limit: Value<i64> => "update_entries_limit", optional, [Validator::AtLeast(0)];
    }
}

manifest_object! {
    /// Group of rules evaluated together
    pub struct RuleGroup {
        /// Name of the group, unique within the object.
        name: Value<String> => "name", required, [Validator::MinLength(1)];
        /// How often the rules of the group are evaluated.
        interval: Value<String> => "interval", optional, [Validator::Duration];
        /// Maximum number of alerts a single rule may produce, `0` means no limit.
        limit: Value<i64> => "limit", optional, [Validator::AtLeast(0)];
        /// Number of rules evaluated concurrently.
        concurrency: Value<i64> => "concurrency", optional, [Validator::AtLeast(1)];
        /// Datasource type of the rules: `prometheus`, `graphite`, `vlogs`.
        r#type: Value<String> => "type", optional, [Validator::OneOf(&["prometheus", "graphite", "vlogs"])];
        /// Labels added to every rule of the group.
        labels: Value<StringMap> => "labels", optional;
        /// Extra parameters appended to the datasource queries.
        params: Value<StringMap> => "params", optional;
        /// Optional HTTP headers sent with the queries, in the form `header:value`.
        headers: Value<Vec<Value<String>>> => "headers", optional;
        /// Rules of the group.
        rules: Value<Vec<Value<Rule>>> => "rules", required, [Validator::MinItems(1)];
    }
}

manifest_object! {
    /// Desired state of a VMRule
    pub struct VmRuleSpec {
        /// Groups of rules.
        groups: Value<Vec<Value<RuleGroup>>> => "groups", required, [Validator::MinItems(1)];
    }
}

#[cfg(test)]
mod tests {
    use tf_provider::{AttributeConstraint, AttributePath, Diagnostics};

    use super::*;
    use crate::manifest::{ManifestState, Metadata};
    use crate::schema::WithYaml;
    use crate::utils::{WithSchema, WithValidate};

    fn string(value: &str) -> Value<String> {
        Value::Value(value.to_owned())
    }

    fn group(rules: Vec<Value<Rule>>) -> Value<RuleGroup> {
        Value::Value(RuleGroup {
            name: string("availability"),
            interval: string("1m"),
            rules: Value::Value(rules),
            ..Default::default()
        })
    }

    fn instance_down() -> Value<Rule> {
        Value::Value(Rule {
            alert: string("InstanceDown"),
            expr: string("up == 0"),
            r#for: string("5m"),
            labels: Value::Value(StringMap::from([(
                "severity".to_owned(),
                string("critical"),
            )])),
            ..Default::default()
        })
    }

    #[test]
    fn spec_is_required() {
        let schema = ManifestState::<VmRule>::schema();
        assert!(matches!(
            schema.block.attributes["spec"].constraint,
            AttributeConstraint::Required
        ));
        assert!(schema.block.attributes.contains_key("id"));
    }

    #[test]
    fn reserved_words_keep_their_yaml_key() {
        let spec = VmRuleSpec {
            groups: Value::Value(vec![group(vec![instance_down()])]),
        };
        let yaml = spec.to_yaml(&AttributePath::new("spec")).unwrap().unwrap();
        let rule = &yaml["groups"][0]["rules"][0];
        assert_eq!(rule["alert"], "InstanceDown");
        assert_eq!(rule["for"], "5m");
        assert_eq!(rule["labels"]["severity"], "critical");
        assert!(rule.get("record").is_none());
    }

    #[test]
    fn identifier_is_namespace_then_name() {
        let state = ManifestState::<VmRule> {
            metadata: Value::Value(Metadata {
                name: string("node-rules"),
                namespace: string("monitoring"),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(state.identifier().as_str(), "monitoring/node-rules");
    }

    #[test]
    fn empty_groups_and_rules_are_rejected() {
        let mut diags = Diagnostics::default();
        VmRuleSpec {
            groups: Value::Value(vec![]),
        }
        .validate(&mut diags, AttributePath::new("spec"));
        assert_eq!(diags.errors.len(), 1);

        let mut diags = Diagnostics::default();
        VmRuleSpec {
            groups: Value::Value(vec![group(vec![])]),
        }
        .validate(&mut diags, AttributePath::new("spec"));
        assert_eq!(diags.errors.len(), 1);
        assert!(diags.errors[0].summary.contains("`rules`"));
    }

    #[test]
    fn rule_duration_is_checked() {
        let mut rule = instance_down();
        if let Value::Value(rule) = &mut rule {
            rule.r#for = string("five minutes");
        }

        let mut diags = Diagnostics::default();
        VmRuleSpec {
            groups: Value::Value(vec![group(vec![rule])]),
        }
        .validate(&mut diags, AttributePath::new("spec"));
        assert_eq!(diags.errors.len(), 1);
        assert!(diags.errors[0].summary.contains("`for`"));
    }
}
