//! Best-effort JSON-Schema skeletons inferred from a sample JSON value.
//!
//! The inference looks at one sample only, so the result is a starting
//! point to edit by hand:
//!
//! * every number becomes `integer`, fractional or not;
//! * strings shaped like `YYYY-MM-DD` or an ISO-8601 date-time get a
//!   `format`;
//! * arrays are described from their first element;
//! * `null` values are dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]+)?(([+-][0-9]{2}:[0-9]{2})|Z)?$",
    )
    .expect("valid date-time regex")
});

/// Value of the `type` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Object,
    String,
    Integer,
    Boolean,
    Array,
    /// Only produced for array items whose first element is a number
    Number,
    /// Items of an empty array
    Undefined,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Object => "object",
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Boolean => "boolean",
            TypeTag::Array => "array",
            TypeTag::Number => "number",
            TypeTag::Undefined => "undefined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    Date,
    DateTime,
}

impl FormatTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Date => "date",
            FormatTag::DateTime => "date-time",
        }
    }

    /// Date wins over date-time; anything else has no format
    pub fn sniff(text: &str) -> Option<Self> {
        if DATE_RE.is_match(text) {
            Some(FormatTag::Date)
        } else if DATE_TIME_RE.is_match(text) {
            Some(FormatTag::DateTime)
        } else {
            None
        }
    }
}

/// Inferred description of one JSON value.
///
/// Serializes to `{ "type", "properties"? , "items"?, "format"? }`.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaDescriptor {
    Scalar {
        type_tag: TypeTag,
        format: Option<FormatTag>,
    },
    Array {
        items: Box<SchemaDescriptor>,
    },
    Object {
        properties: Vec<(String, SchemaDescriptor)>,
    },
}

impl SchemaDescriptor {
    pub fn scalar(type_tag: TypeTag) -> Self {
        SchemaDescriptor::Scalar {
            type_tag,
            format: None,
        }
    }

    pub fn type_tag(&self) -> TypeTag {
        match self {
            SchemaDescriptor::Scalar { type_tag, .. } => *type_tag,
            SchemaDescriptor::Array { .. } => TypeTag::Array,
            SchemaDescriptor::Object { .. } => TypeTag::Object,
        }
    }

    /// Looks up a direct property of an object descriptor
    pub fn property(&self, name: &str) -> Option<&SchemaDescriptor> {
        match self {
            SchemaDescriptor::Object { properties } => properties
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, schema)| schema),
            _ => None,
        }
    }
}

impl Serialize for SchemaDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SchemaDescriptor::Scalar { type_tag, format } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", type_tag.as_str())?;
                if let Some(format) = format {
                    map.serialize_entry("format", format.as_str())?;
                }
                map.end()
            }
            SchemaDescriptor::Array { items } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", TypeTag::Array.as_str())?;
                map.serialize_entry("items", items)?;
                map.end()
            }
            SchemaDescriptor::Object { properties } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", TypeTag::Object.as_str())?;
                map.serialize_entry("properties", &Properties(properties))?;
                map.end()
            }
        }
    }
}

struct Properties<'a>(&'a [(String, SchemaDescriptor)]);

impl Serialize for Properties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, schema) in self.0 {
            map.serialize_entry(key, schema)?;
        }
        map.end()
    }
}

/// Infers an object descriptor for `value`.
///
/// Objects are walked key by key in input order. Arrays are walked as if
/// they were objects keyed by their indices (`"0"`, `"1"`, ...), which is
/// also what happens to an array nested as the first element of another
/// array. A string is walked the same way, one `string` property per UTF-16
/// code unit. Numbers, booleans and null yield an object with no properties.
pub fn infer(value: &Value) -> SchemaDescriptor {
    let properties = match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, value)| infer_property(value).map(|schema| (key.clone(), schema)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                infer_property(value).map(|schema| (index.to_string(), schema))
            })
            .collect(),
        Value::String(text) => (0..text.encode_utf16().count())
            .map(|index| (index.to_string(), SchemaDescriptor::scalar(TypeTag::String)))
            .collect(),
        Value::Number(_) | Value::Bool(_) | Value::Null => Vec::new(),
    };

    SchemaDescriptor::Object { properties }
}

/// `None` means the key is left out of `properties`
fn infer_property(value: &Value) -> Option<SchemaDescriptor> {
    match value {
        Value::String(text) => Some(SchemaDescriptor::Scalar {
            type_tag: TypeTag::String,
            format: FormatTag::sniff(text),
        }),
        Value::Number(_) => Some(SchemaDescriptor::scalar(TypeTag::Integer)),
        Value::Bool(_) => Some(SchemaDescriptor::scalar(TypeTag::Boolean)),
        Value::Array(items) => Some(SchemaDescriptor::Array {
            items: Box::new(infer_items(items.first())),
        }),
        Value::Object(_) => Some(infer(value)),
        Value::Null => None,
    }
}

fn infer_items(first: Option<&Value>) -> SchemaDescriptor {
    match first {
        Some(value @ (Value::Object(_) | Value::Array(_))) => infer(value),
        Some(Value::String(_)) => SchemaDescriptor::scalar(TypeTag::String),
        Some(Value::Number(_)) => SchemaDescriptor::scalar(TypeTag::Number),
        Some(Value::Bool(_)) => SchemaDescriptor::scalar(TypeTag::Boolean),
        // a null first element reports its runtime type name, "object"
        Some(Value::Null) => SchemaDescriptor::scalar(TypeTag::Object),
        None => SchemaDescriptor::scalar(TypeTag::Undefined),
    }
}
