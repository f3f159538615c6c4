// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed references between declarations.
//!
//! A [`Token`] is a value that the provisioning tool resolves at deploy time:
//! a plain literal, a `Ref` to another resource, an attribute of another
//! resource, a value exported by another stack, or a join of those.

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

const IMPORT_VALUE_KEY: &str = "Fn::ImportValue";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Ref(String),
    GetAtt {
        logical_id: String,
        attribute: String,
    },
    ImportValue(String),
    Join {
        delimiter: String,
        parts: Vec<Token>,
    },
}

impl Token {
    pub fn literal(value: impl Into<String>) -> Self {
        Token::Literal(value.into())
    }

    pub fn reference(logical_id: impl Into<String>) -> Self {
        Token::Ref(logical_id.into())
    }

    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Token::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }

    pub fn import_value(export_name: impl Into<String>) -> Self {
        Token::ImportValue(export_name.into())
    }

    /// Concatenate tokens with no delimiter.
    pub fn concat(parts: Vec<Token>) -> Self {
        Token::Join {
            delimiter: String::new(),
            parts,
        }
    }

    /// Render the token the way the template expects it.
    pub fn to_json(&self) -> Value {
        match self {
            Token::Literal(value) => Value::String(value.clone()),
            Token::Ref(logical_id) => json!({ "Ref": logical_id }),
            Token::GetAtt {
                logical_id,
                attribute,
            } => json!({ "Fn::GetAtt": [logical_id, attribute] }),
            Token::ImportValue(export_name) => {
                let mut map = Map::new();
                map.insert(IMPORT_VALUE_KEY.to_string(), Value::String(export_name.clone()));
                Value::Object(map)
            }
            Token::Join { delimiter, parts } => {
                let parts: Vec<Value> = parts.iter().map(Token::to_json).collect();
                json!({ "Fn::Join": [delimiter, parts] })
            }
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Collect every export name imported anywhere inside a rendered template fragment.
pub fn collect_imports(value: &Value, imports: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                match (key.as_str(), inner) {
                    (IMPORT_VALUE_KEY, Value::String(export_name)) => {
                        imports.insert(export_name.clone());
                    }
                    _ => collect_imports(inner, imports),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_imports(item, imports);
            }
        }
        _ => {}
    }
}
