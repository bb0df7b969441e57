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

//! Kubernetes naming rules.
//!
//! Adapted from apimachinery/pkg/util/validation/validation.go. Every check
//! returns a human readable message on failure so it can be used directly as
//! a diagnostic detail.

use lazy_static::lazy_static;
use regex::Regex;

const RFC_1123_LABEL_MAX_LENGTH: usize = 63;
const RFC_1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
const LABEL_VALUE_MAX_LENGTH: usize = 63;

/// Maximum cumulated size of the keys and values of annotations
pub const ANNOTATIONS_MAX_SIZE: usize = 256 * 1024;

lazy_static! {
    static ref RFC_1123_LABEL_REGEX: Regex =
        Regex::new("^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("failed to compile RFC 1123 label regex");
    static ref RFC_1123_SUBDOMAIN_REGEX: Regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
            .expect("failed to compile RFC 1123 subdomain regex");
    static ref QUALIFIED_NAME_REGEX: Regex =
        Regex::new("^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$")
            .expect("failed to compile qualified name regex");
}

fn check_length(value: &str, max_length: usize) -> Result<(), String> {
    if value.len() > max_length {
        Err(format!(
            "must be no more than {max_length} characters, got {}",
            value.len()
        ))
    } else {
        Ok(())
    }
}

/// DNS label as defined by RFC 1123, used for namespaces
pub fn is_rfc_1123_label(value: &str) -> Result<(), String> {
    check_length(value, RFC_1123_LABEL_MAX_LENGTH)?;
    if RFC_1123_LABEL_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(format!("{value:?} is not a valid RFC 1123 label: it must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character (e.g. \"my-name\")"))
    }
}

/// DNS subdomain as defined by RFC 1123, used for most object names
pub fn is_rfc_1123_subdomain(value: &str) -> Result<(), String> {
    check_length(value, RFC_1123_SUBDOMAIN_MAX_LENGTH)?;
    if RFC_1123_SUBDOMAIN_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(format!("{value:?} is not a valid RFC 1123 subdomain: it must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character (e.g. \"example.com\")"))
    }
}

/// Key of a label or an annotation: `[prefix/]name`
pub fn is_qualified_name(value: &str) -> Result<(), String> {
    let (prefix, name) = match value.split('/').collect::<Vec<_>>()[..] {
        [name] => (None, name),
        [prefix, name] => (Some(prefix), name),
        _ => {
            return Err(format!(
                "{value:?} is not a qualified name: only a single '/' is allowed"
            ))
        }
    };

    if let Some(prefix) = prefix {
        if prefix.is_empty() {
            return Err(format!("{value:?} has an empty prefix"));
        }
        is_rfc_1123_subdomain(prefix).map_err(|err| format!("prefix of {value:?}: {err}"))?;
    }

    if name.is_empty() {
        return Err(format!("{value:?} has an empty name"));
    }
    check_length(name, QUALIFIED_NAME_MAX_LENGTH)
        .map_err(|err| format!("name part of {value:?} {err}"))?;
    if QUALIFIED_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(format!("{value:?} is not a qualified name: the name part must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character (e.g. \"app.kubernetes.io/name\")"))
    }
}

/// Value of a label, possibly empty
pub fn is_label_value(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    check_length(value, LABEL_VALUE_MAX_LENGTH)?;
    if QUALIFIED_NAME_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(format!("{value:?} is not a valid label value: it must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("monitoring")]
    #[case("kube-system")]
    #[case("1-ns-1")]
    fn valid_label(#[case] input: &str) {
        assert!(is_rfc_1123_label(input).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("Monitoring")]
    #[case("ns.with.dots")]
    #[case("-leading")]
    #[case("trailing-")]
    #[case(&"a".repeat(64))]
    fn invalid_label(#[case] input: &str) {
        assert!(is_rfc_1123_label(input).is_err());
    }

    #[rstest]
    #[case("alert1")]
    #[case("vmalert.example.com")]
    #[case(&"a".repeat(253))]
    fn valid_subdomain(#[case] input: &str) {
        assert!(is_rfc_1123_subdomain(input).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("under_score")]
    #[case("double..dot")]
    #[case(&"a".repeat(254))]
    fn invalid_subdomain(#[case] input: &str) {
        assert!(is_rfc_1123_subdomain(input).is_err());
    }

    #[rstest]
    #[case("app")]
    #[case("app.kubernetes.io/name")]
    #[case("Some_Key.v1")]
    fn valid_qualified_name(#[case] input: &str) {
        assert!(is_qualified_name(input).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("/name")]
    #[case("prefix/")]
    #[case("a/b/c")]
    #[case("Invalid_Prefix/name")]
    #[case("name-")]
    #[case(&"a".repeat(64))]
    fn invalid_qualified_name(#[case] input: &str) {
        assert!(is_qualified_name(input).is_err());
    }

    #[rstest]
    #[case("")]
    #[case("v1.2.3")]
    #[case("team_a")]
    fn valid_label_value(#[case] input: &str) {
        assert!(is_label_value(input).is_ok());
    }

    #[rstest]
    #[case("-v1")]
    #[case("with space")]
    #[case(&"a".repeat(64))]
    fn invalid_label_value(#[case] input: &str) {
        assert!(is_label_value(input).is_err());
    }
}
