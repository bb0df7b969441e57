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

use lazy_static::lazy_static;
use regex::Regex;
use tf_provider::Value;

use crate::utils::DisplayJoinable;

use super::{kubernetes, StringMap};

lazy_static! {
    static ref DURATION_REGEX: Regex =
        Regex::new("^[0-9]+(ms|s|m|h)$").expect("failed to compile duration regex");
}

/// Field-level constraint attached to an attribute declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// String of at least this many characters
    MinLength(usize),
    /// List of at least this many items
    MinItems(usize),
    /// Number greater than or equal to this bound
    AtLeast(i64),
    /// String among a fixed set of literals
    OneOf(&'static [&'static str]),
    /// Duration such as `30s` or `1m`
    Duration,
    /// Name of a namespaced object
    ObjectName,
    /// Name of a namespace
    NamespaceName,
    /// Map of labels
    Labels,
    /// Map of annotations
    Annotations,
}

impl Validator {
    fn check_str(&self, value: &str) -> Result<(), String> {
        match *self {
            Validator::MinLength(min) => {
                if value.chars().count() < min {
                    Err(format!(
                        "must be at least {min} characters long, got {:?}",
                        value
                    ))
                } else {
                    Ok(())
                }
            }
            Validator::OneOf(allowed) => {
                if allowed.contains(&value) {
                    Ok(())
                } else {
                    Err(format!(
                        "{value:?} must be one of: {}",
                        allowed.iter().map(|v| format!("`{v}`")).join_with(", ")
                    ))
                }
            }
            Validator::Duration => {
                if DURATION_REGEX.is_match(value) {
                    Ok(())
                } else {
                    Err(format!(
                        "{value:?} is not a duration: expected a number followed by one of `ms`, `s`, `m`, `h` (e.g. \"30s\")"
                    ))
                }
            }
            Validator::ObjectName => kubernetes::is_rfc_1123_subdomain(value),
            Validator::NamespaceName => kubernetes::is_rfc_1123_label(value),
            _ => Err(self.not_applicable("a string")),
        }
    }

    fn check_number(&self, value: i64) -> Result<(), String> {
        match *self {
            Validator::AtLeast(min) => {
                if value < min {
                    Err(format!("must be at least {min}, got {value}"))
                } else {
                    Ok(())
                }
            }
            _ => Err(self.not_applicable("a number")),
        }
    }

    fn check_items(&self, len: usize) -> Result<(), String> {
        match *self {
            Validator::MinItems(min) => {
                if len < min {
                    Err(format!("must contain at least {min} items, got {len}"))
                } else {
                    Ok(())
                }
            }
            _ => Err(self.not_applicable("a list")),
        }
    }

    fn check_map(&self, map: &StringMap) -> Result<(), String> {
        match *self {
            Validator::Labels => {
                let errors = map
                    .iter()
                    .filter_map(|(key, value)| {
                        kubernetes::is_qualified_name(key)
                            .and_then(|()| match value {
                                Value::Value(value) => kubernetes::is_label_value(value),
                                _ => Ok(()),
                            })
                            .err()
                    })
                    .collect::<Vec<_>>();
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors.iter().join_with(", ").to_string())
                }
            }
            Validator::Annotations => {
                let mut size = 0;
                for (key, value) in map {
                    kubernetes::is_qualified_name(key)?;
                    size += key.len();
                    if let Value::Value(value) = value {
                        size += value.len();
                    }
                }
                if size > kubernetes::ANNOTATIONS_MAX_SIZE {
                    Err(format!(
                        "annotations may not exceed {} bytes, got {size}",
                        kubernetes::ANNOTATIONS_MAX_SIZE
                    ))
                } else {
                    Ok(())
                }
            }
            _ => Err(self.not_applicable("a map")),
        }
    }

    fn not_applicable(&self, target: &str) -> String {
        format!("{self:?} cannot validate {target}")
    }
}

/// Node type on which validators can be applied.
///
/// Null and unknown values always pass: required-ness is enforced by
/// Terraform itself and unknown values are checked once they are known.
pub trait Constrained {
    fn check(&self, validator: &Validator) -> Result<(), String>;
}

impl Constrained for Value<String> {
    fn check(&self, validator: &Validator) -> Result<(), String> {
        match self {
            Value::Value(value) => validator.check_str(value),
            _ => Ok(()),
        }
    }
}

impl Constrained for Value<i64> {
    fn check(&self, validator: &Validator) -> Result<(), String> {
        match self {
            Value::Value(value) => validator.check_number(*value),
            _ => Ok(()),
        }
    }
}

impl<T> Constrained for Value<Vec<T>> {
    fn check(&self, validator: &Validator) -> Result<(), String> {
        match self {
            Value::Value(items) => validator.check_items(items.len()),
            _ => Ok(()),
        }
    }
}

impl Constrained for Value<StringMap> {
    fn check(&self, validator: &Validator) -> Result<(), String> {
        match self {
            Value::Value(map) => validator.check_map(map),
            _ => Ok(()),
        }
    }
}
