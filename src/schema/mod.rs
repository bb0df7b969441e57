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

//! Declarative description of manifest objects.
//!
//! A manifest object is declared once with [`manifest_object!`]; the macro
//! derives from that single declaration the Terraform nested attributes, the
//! serde representation exchanged with Terraform, the YAML rendering and the
//! validation walk.

use std::collections::{BTreeMap, HashMap};

use tf_provider::{Attribute, AttributePath, AttributeType, Description, Value};

pub mod kubernetes;
mod render;
mod validators;

pub use render::{RenderError, WithYaml};
pub use validators::{Constrained, Validator};

/// String-keyed map of opaque string values.
///
/// Used both for genuine Kubernetes maps (labels, resource limits) and for
/// loosely structured overrides whose content is only checked by the consumer
/// of the rendered manifest.
pub type StringMap = BTreeMap<String, Value<String>>;

/// Nested object whose attributes are known statically
pub trait WithAttributes {
    fn attributes() -> HashMap<String, Attribute>;
}

/// Terraform type of a configuration node
pub trait WithAttrType {
    fn attr_type() -> AttributeType;

    /// Type of a list whose items are `Self`
    fn list_type() -> AttributeType {
        AttributeType::List(Self::attr_type().into())
    }

    /// Type of a map whose values are `Self`
    fn map_type() -> AttributeType {
        AttributeType::Map(Self::attr_type().into())
    }
}

impl WithAttrType for String {
    fn attr_type() -> AttributeType {
        AttributeType::String
    }
}

impl WithAttrType for i64 {
    fn attr_type() -> AttributeType {
        AttributeType::Number
    }
}

impl WithAttrType for bool {
    fn attr_type() -> AttributeType {
        AttributeType::Bool
    }
}

impl<T: WithAttrType> WithAttrType for Value<T> {
    fn attr_type() -> AttributeType {
        T::attr_type()
    }
    fn list_type() -> AttributeType {
        T::list_type()
    }
    fn map_type() -> AttributeType {
        T::map_type()
    }
}

impl<T: WithAttrType> WithAttrType for Vec<T> {
    fn attr_type() -> AttributeType {
        T::list_type()
    }
}

impl<T: WithAttrType> WithAttrType for BTreeMap<String, T> {
    fn attr_type() -> AttributeType {
        T::map_type()
    }
}

/// Build an attribute description from the lines of a doc comment
pub fn describe(lines: &[&str]) -> Description {
    let content = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Description::plain(content)
}

/// Terraform name of a field: raw identifiers lose their `r#` prefix
pub fn attribute_name(field: &'static str) -> &'static str {
    field.trim_start_matches("r#")
}

/// Path of a field nested under `attr_path`
pub fn child_path(attr_path: &AttributePath, field: &'static str) -> AttributePath {
    attr_path.clone().attribute(attribute_name(field))
}

/// Declare a manifest object.
///
/// Every field is written as
/// `name: Type => "yamlKey", constraint [, [validators...]];`
/// where the constraint is `required` or `optional`. The doc comment of the
/// field becomes the attribute description.
macro_rules! manifest_object {
    (@constraint required) => {
        ::tf_provider::AttributeConstraint::Required
    };
    (@constraint optional) => {
        ::tf_provider::AttributeConstraint::Optional
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident : $ty:ty => $key:literal, $constraint:ident $(, [$($validator:expr),* $(,)?])?;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                pub $field: $ty,
            )*
        }

        impl $crate::schema::WithAttributes for $name {
            fn attributes() -> ::std::collections::HashMap<String, ::tf_provider::Attribute> {
                let mut attributes = ::std::collections::HashMap::new();
                $(
                    attributes.insert(
                        $crate::schema::attribute_name(stringify!($field)).to_owned(),
                        ::tf_provider::Attribute {
                            attr_type: <$ty as $crate::schema::WithAttrType>::attr_type(),
                            description: $crate::schema::describe(&[$($doc),*]),
                            constraint: manifest_object!(@constraint $constraint),
                            ..Default::default()
                        },
                    );
                )*
                attributes
            }
        }

        impl $crate::schema::WithAttrType for $name {
            fn attr_type() -> ::tf_provider::AttributeType {
                ::tf_provider::AttributeType::AttributeSingle(
                    <Self as $crate::schema::WithAttributes>::attributes(),
                )
            }
            fn list_type() -> ::tf_provider::AttributeType {
                ::tf_provider::AttributeType::AttributeList(
                    <Self as $crate::schema::WithAttributes>::attributes(),
                )
            }
            fn map_type() -> ::tf_provider::AttributeType {
                ::tf_provider::AttributeType::AttributeMap(
                    <Self as $crate::schema::WithAttributes>::attributes(),
                )
            }
        }

        impl $crate::schema::WithYaml for $name {
            fn to_yaml(
                &self,
                attr_path: &::tf_provider::AttributePath,
            ) -> Result<Option<::serde_yaml::Value>, $crate::schema::RenderError> {
                #[allow(unused_mut)]
                let mut mapping = ::serde_yaml::Mapping::new();
                $(
                    let field_path = $crate::schema::child_path(attr_path, stringify!($field));
                    if let Some(value) = $crate::schema::WithYaml::to_yaml(&self.$field, &field_path)? {
                        mapping.insert(::serde_yaml::Value::String($key.to_owned()), value);
                    }
                )*
                Ok(Some(::serde_yaml::Value::Mapping(mapping)))
            }
        }

        impl $crate::utils::WithValidate for $name {
            #[allow(unused_variables)]
            fn validate(
                &self,
                diags: &mut ::tf_provider::Diagnostics,
                attr_path: ::tf_provider::AttributePath,
            ) {
                $(
                    let field_path = $crate::schema::child_path(&attr_path, stringify!($field));
                    $(
                        // Only the first failing validator of a field is reported
                        let validators: &[$crate::schema::Validator] = &[$($validator),*];
                        if let Some(detail) = validators.iter().find_map(|validator| {
                            $crate::schema::Constrained::check(&self.$field, validator).err()
                        }) {
                            diags.error(
                                format!(
                                    "Invalid value for `{}`",
                                    $crate::schema::attribute_name(stringify!($field)),
                                ),
                                detail,
                                field_path.clone(),
                            );
                        }
                    )?
                    $crate::utils::WithValidate::validate(&self.$field, diags, field_path);
                )*
            }
        }
    };
}
