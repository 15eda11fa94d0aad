//! JSON schemas of tool parameters.

use schemars::{Schema, json_schema};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy)]
pub(crate) enum ParameterType {
    String,
    Number,
}

impl ParameterType {
    fn as_str(self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
        }
    }
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Parameter {
    pub name: &'static str,
    pub r#type: ParameterType,
    pub required: bool,
    pub description: &'static str,
}

impl Parameter {
    pub const fn required(name: &'static str, r#type: ParameterType, description: &'static str) -> Self {
        Self {
            name,
            r#type,
            required: true,
            description,
        }
    }

    pub const fn optional(name: &'static str, r#type: ParameterType, description: &'static str) -> Self {
        Self {
            name,
            r#type,
            required: false,
            description,
        }
    }
}

pub(crate) const LANGUAGE: Parameter = Parameter::optional(
    "language",
    ParameterType::String,
    "Language code (en, nl, de, etc.). Default: en",
);

/// An object schema with the given parameters, in declaration order.
pub(crate) fn object(parameters: &[Parameter]) -> Schema {
    let mut properties = Map::new();

    for parameter in parameters {
        properties.insert(
            parameter.name.to_string(),
            json!({
                "type": parameter.r#type.as_str(),
                "description": parameter.description,
            }),
        );
    }

    let required: Vec<Value> = parameters
        .iter()
        .filter(|parameter| parameter.required)
        .map(|parameter| Value::from(parameter.name))
        .collect();

    json_schema!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}
