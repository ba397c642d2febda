//! Schema model.
//!
//! Every top-level definition is an object whose properties are a nested
//! [`Schema`]: an inline primitive, a named reference, an array, or a
//! string-keyed map. Serialization emits OpenAPI spelling (`type`, `format`,
//! `$ref`, `items`, `additionalProperties`, `x-kubernetes-list-*`).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::reference::Reference;

/// Vendor extension naming the merge strategy of a list.
pub const LIST_TYPE_EXTENSION: &str = "x-kubernetes-list-type";

/// Vendor extension naming the keys that identify entries of a `map` list.
pub const LIST_MAP_KEYS_EXTENSION: &str = "x-kubernetes-list-map-keys";

// ---------------------------------------------------------------------------
// PrimitiveType
// ---------------------------------------------------------------------------

/// JSON type of an inline primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Integer,
    Number,
    Boolean,
}

impl PrimitiveType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// OpenAPI `format` qualifier of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Int32,
    Int64,
    Float,
    Double,
    Byte,
    DateTime,
}

impl Format {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::Byte => "byte",
            Self::DateTime => "date-time",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ListType
// ---------------------------------------------------------------------------

/// Merge semantics the API server applies to a list during server-side apply
/// and strategic merge patches.
///
/// ```text
/// atomic  the list is replaced as a whole
/// set     entries are unique scalars, merged by value
/// map     entries are objects, merged by the list-map keys
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListType {
    Atomic,
    Set,
    Map,
}

impl ListType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Atomic => "atomic",
            Self::Set => "set",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// A nested property schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    Primitive {
        ty: PrimitiveType,
        format: Option<Format>,
    },
    Ref {
        /// Fully-qualified name of the referenced definition.
        type_name: String,
        reference: Reference,
    },
    Array {
        items: Box<Schema>,
        list_type: Option<ListType>,
        list_map_keys: Vec<String>,
    },
    Map {
        values: Box<Schema>,
    },
}

impl Schema {
    #[must_use]
    pub const fn string() -> Self {
        Self::Primitive {
            ty: PrimitiveType::String,
            format: None,
        }
    }

    #[must_use]
    pub const fn boolean() -> Self {
        Self::Primitive {
            ty: PrimitiveType::Boolean,
            format: None,
        }
    }

    #[must_use]
    pub const fn int32() -> Self {
        Self::Primitive {
            ty: PrimitiveType::Integer,
            format: Some(Format::Int32),
        }
    }

    /// Reference to `type_name`, resolved through `reference`.
    pub fn reference(reference: &dyn Fn(&str) -> Reference, type_name: &str) -> Self {
        Self::Ref {
            type_name: type_name.to_string(),
            reference: reference(type_name),
        }
    }

    #[must_use]
    pub fn array_of(items: Self) -> Self {
        Self::Array {
            items: Box::new(items),
            list_type: None,
            list_map_keys: Vec::new(),
        }
    }

    #[must_use]
    pub fn map_of(values: Self) -> Self {
        Self::Map {
            values: Box::new(values),
        }
    }

    /// Set the list type of an array. Other variants are returned unchanged.
    #[must_use]
    pub fn list_type(mut self, list: ListType) -> Self {
        if let Self::Array { list_type, .. } = &mut self {
            *list_type = Some(list);
        }
        self
    }

    /// Mark an array as a `map` list keyed by `keys`.
    #[must_use]
    pub fn list_map(mut self, keys: &[&str]) -> Self {
        if let Self::Array {
            list_type,
            list_map_keys,
            ..
        } = &mut self
        {
            *list_type = Some(ListType::Map);
            *list_map_keys = keys.iter().map(ToString::to_string).collect();
        }
        self
    }

    /// Collect the type names referenced anywhere inside this schema.
    pub fn collect_references<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Self::Primitive { .. } => {}
            Self::Ref { type_name, .. } => {
                out.insert(type_name.as_str());
            }
            Self::Array { items, .. } => items.collect_references(out),
            Self::Map { values } => values.collect_references(out),
        }
    }

    fn write_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        match self {
            Self::Primitive { ty, format } => {
                map.serialize_entry("type", ty.as_str())?;
                if let Some(format) = format {
                    map.serialize_entry("format", format.as_str())?;
                }
            }
            Self::Ref { reference, .. } => {
                map.serialize_entry("$ref", reference.as_str())?;
            }
            Self::Array {
                items,
                list_type,
                list_map_keys,
            } => {
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items.as_ref())?;
                if let Some(list_type) = list_type {
                    map.serialize_entry(LIST_TYPE_EXTENSION, list_type.as_str())?;
                }
                if !list_map_keys.is_empty() {
                    map.serialize_entry(LIST_MAP_KEYS_EXTENSION, list_map_keys)?;
                }
            }
            Self::Map { values } => {
                map.serialize_entry("type", "object")?;
                map.serialize_entry("additionalProperties", values.as_ref())?;
            }
        }
        Ok(())
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.write_entries(&mut map)?;
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// A named property of an object definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub description: Option<String>,
    pub schema: Schema,
}

impl From<Schema> for Property {
    fn from(schema: Schema) -> Self {
        Self {
            description: None,
            schema,
        }
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        self.schema.write_entries(&mut map)?;
        map.end()
    }
}

// ---------------------------------------------------------------------------
// ObjectSchema / OpenApiDefinition
// ---------------------------------------------------------------------------

/// The object schema of a top-level definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    pub description: String,
    pub properties: BTreeMap<String, Property>,
    pub required: Vec<String>,
}

impl ObjectSchema {
    /// Type names referenced by any property.
    #[must_use]
    pub fn references(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        for property in self.properties.values() {
            property.schema.collect_references(&mut out);
        }
        out
    }
}

impl Serialize for ObjectSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("description", &self.description)?;
        map.serialize_entry("type", "object")?;
        map.serialize_entry("properties", &self.properties)?;
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        map.end()
    }
}

/// A published definition: its schema plus the type names it depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct OpenApiDefinition {
    pub schema: ObjectSchema,
    pub dependencies: Vec<String>,
}
