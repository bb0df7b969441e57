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

use std::cell::RefCell;
use std::collections::BTreeMap;

use tf_provider::{AttributePath, Diagnostics, Schema, Value};

pub(crate) trait WithSchema {
    fn schema() -> Schema;
}

/// Walk a configuration and report every declared constraint it violates
pub trait WithValidate {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath);
}

impl WithValidate for String {
    fn validate(&self, _diags: &mut Diagnostics, _attr_path: AttributePath) {}
}

impl WithValidate for i64 {
    fn validate(&self, _diags: &mut Diagnostics, _attr_path: AttributePath) {}
}

impl WithValidate for bool {
    fn validate(&self, _diags: &mut Diagnostics, _attr_path: AttributePath) {}
}

impl<T: WithValidate> WithValidate for Value<T> {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        // Null and unknown values have nothing to check yet
        if let Value::Value(value) = self {
            value.validate(diags, attr_path);
        }
    }
}

impl<T: WithValidate> WithValidate for Vec<T> {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        for (i, item) in self.iter().enumerate() {
            item.validate(diags, attr_path.clone().index(i as i64));
        }
    }
}

impl<T: WithValidate> WithValidate for BTreeMap<String, T> {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        for (key, item) in self {
            item.validate(diags, attr_path.clone().key(key.clone()));
        }
    }
}

pub struct DisplayJoiner<'a, T, I>
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    iter: RefCell<T>,
    sep: &'a str,
}

pub trait DisplayJoinable {
    type Joiner<'a>;
    fn join_with(self, sep: &str) -> Self::Joiner<'_>;
}

impl<T, I> DisplayJoinable for T
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    type Joiner<'a> = DisplayJoiner<'a, T, I>;

    fn join_with(self, sep: &str) -> Self::Joiner<'_> {
        DisplayJoiner {
            iter: RefCell::new(self),
            sep,
        }
    }
}

impl<'a, T, I> std::fmt::Display for DisplayJoiner<'a, T, I>
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        let mut iter = self.iter.try_borrow_mut().or(Err(std::fmt::Error))?;
        for elt in iter.by_ref() {
            f.write_str(sep)?;
            f.write_fmt(format_args!("{elt}"))?;
            sep = self.sep;
        }
        Ok(())
    }
}
