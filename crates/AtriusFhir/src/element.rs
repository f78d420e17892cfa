// --- Internal Visitor for Element Object Deserialization ---

use std::marker::PhantomData;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeStruct;

/// Internal visitor struct for deserializing Element objects from JSON maps.
///
/// Handles the object form of a primitive (`{"id": .., "extension": [..], "value": ..}`).
struct ElementObjectVisitor<V, E>(PhantomData<(V, E)>);

impl<'de, V, E> Visitor<'de> for ElementObjectVisitor<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Element<V, E>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an Element object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut id: Option<String> = None;
        let mut extension: Option<Vec<E>> = None;
        let mut value: Option<V> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => {
                    if id.is_some() {
                        return Err(de::Error::duplicate_field("id"));
                    }
                    id = Some(map.next_value()?);
                }
                "extension" => {
                    if extension.is_some() {
                        return Err(de::Error::duplicate_field("extension"));
                    }
                    extension = Some(map.next_value()?);
                }
                "value" => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = map.next_value()?;
                }
                // Ignore any unknown fields encountered
                _ => {
                    let _ = map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        Ok(Element {
            id,
            extension,
            value,
        })
    }
}

/// Generic element container supporting FHIR's extension mechanism.
///
/// In FHIR, primitive elements can carry an `id` and `extension`s next to their
/// value. This container is the shape behind the `Code`, `Uri`, `FhirString` and
/// `Boolean` aliases used by the datatypes and by the generated code systems.
///
/// # Type Parameters
///
/// * `V` - The value type (e.g., `String`, `bool`)
/// * `E` - The extension type (typically [`crate::Extension`])
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_lib::{Code, Element};
///
/// let code: Code = Element::from_value("final".to_string());
/// assert_eq!(code.value.as_deref(), Some("final"));
/// assert!(!code.is_empty());
/// ```
///
/// # Serialization Behavior
///
/// - If only `value` is present: serializes as the primitive value directly
/// - If `id` or `extension` are present: serializes as an object with all fields
/// - If everything is `None`: serializes as `null`
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Element<V, E> {
    /// Optional element identifier for referencing within the resource
    pub id: Option<String>,
    /// Optional extensions providing additional metadata
    pub extension: Option<Vec<E>>,
    /// The actual primitive value
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Element {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    /// Wraps a bare primitive value with no `id` or extensions.
    pub fn from_value(value: V) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }

    /// Extensions as a slice, empty when none are present.
    pub fn extensions(&self) -> &[E] {
        self.extension.as_deref().unwrap_or(&[])
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Element::from_value(value)
    }
}

impl<'de, V, E> Deserialize<'de> for Element<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Primitives, objects and null all land here
        struct AnyValueVisitor<V, E>(PhantomData<(V, E)>);

        impl<V, E> AnyValueVisitor<V, E> {
            fn wrap<Er>(value: Result<V, Er>) -> Result<Element<V, E>, Er> {
                value.map(Element::from_value)
            }
        }

        impl<'de, V, E> Visitor<'de> for AnyValueVisitor<V, E>
        where
            V: Deserialize<'de>,
            E: Deserialize<'de>,
        {
            type Value = Element<V, E>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter
                    .write_str("a primitive value (string, number, boolean), an object, or null")
            }

            fn visit_bool<Er>(self, v: bool) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Self::wrap(V::deserialize(de::value::BoolDeserializer::new(v)))
            }

            fn visit_i64<Er>(self, v: i64) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Self::wrap(V::deserialize(de::value::I64Deserializer::new(v)))
            }

            fn visit_u64<Er>(self, v: u64) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Self::wrap(V::deserialize(de::value::U64Deserializer::new(v)))
            }

            fn visit_f64<Er>(self, v: f64) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Self::wrap(V::deserialize(de::value::F64Deserializer::new(v)))
            }

            fn visit_str<Er>(self, v: &str) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Self::wrap(V::deserialize(de::value::StrDeserializer::new(v)))
            }

            fn visit_string<Er>(self, v: String) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Self::wrap(V::deserialize(de::value::StringDeserializer::new(v)))
            }

            fn visit_borrowed_str<Er>(self, v: &'de str) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Self::wrap(V::deserialize(de::value::BorrowedStrDeserializer::new(v)))
            }

            fn visit_none<Er>(self) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Ok(Element::default())
            }

            fn visit_unit<Er>(self) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Ok(Element::default())
            }

            fn visit_some<De>(self, deserializer: De) -> Result<Self::Value, De::Error>
            where
                De: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let map_deserializer = de::value::MapAccessDeserializer::new(map);
                map_deserializer.deserialize_map(ElementObjectVisitor(PhantomData))
            }

            // We don't expect sequences for a single Element
            fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
            }
        }

        deserializer.deserialize_any(AnyValueVisitor(PhantomData))
    }
}

impl<V, E> Serialize for Element<V, E>
where
    V: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // If id and extension are None, serialize value directly (or null)
        if self.id.is_none() && self.extension.is_none() {
            return match &self.value {
                Some(val) => val.serialize(serializer),
                None => serializer.serialize_none(),
            };
        }

        let len = usize::from(self.id.is_some())
            + usize::from(self.extension.is_some())
            + usize::from(self.value.is_some());

        let mut state = serializer.serialize_struct("Element", len)?;
        if let Some(id) = &self.id {
            state.serialize_field("id", id)?;
        }
        if let Some(extension) = &self.extension {
            state.serialize_field("extension", extension)?;
        }
        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Text = Element<String, serde_json::Value>;

    #[test]
    fn bare_value_serializes_as_primitive() {
        let el: Text = Element::from_value("hello".to_string());
        assert_eq!(serde_json::to_value(&el).unwrap(), json!("hello"));
    }

    #[test]
    fn extended_value_serializes_as_object() {
        let el: Text = Element {
            id: Some("a1".to_string()),
            extension: None,
            value: Some("hello".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&el).unwrap(),
            json!({"id": "a1", "value": "hello"})
        );
    }

    #[test]
    fn deserializes_primitive_object_and_null() {
        let bare: Text = serde_json::from_value(json!("x")).unwrap();
        assert_eq!(bare.value.as_deref(), Some("x"));

        let obj: Text = serde_json::from_value(json!({"id": "i", "value": "y", "other": 1})).unwrap();
        assert_eq!(obj.id.as_deref(), Some("i"));
        assert_eq!(obj.value.as_deref(), Some("y"));

        let null: Text = serde_json::from_value(json!(null)).unwrap();
        assert!(null.is_empty());
    }

    #[test]
    fn rejects_arrays_and_duplicate_fields() {
        assert!(serde_json::from_value::<Text>(json!(["a"])).is_err());
        assert!(serde_json::from_str::<Text>(r#"{"id":"a","id":"b"}"#).is_err());
    }
}
