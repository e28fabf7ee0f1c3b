//! Standard [`Schema`] implementations.

use gatecall_core::{Schema, SchemaError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

/// A serde-backed schema: the payload is valid iff it deserializes into `T`.
pub struct Typed<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    /// Create a schema for `T`.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Schema for Typed<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    type Data = T;

    fn parse(&self, raw: &Value) -> Result<T, SchemaError> {
        serde_json::from_value(raw.clone()).map_err(SchemaError::from)
    }
}

/// A schema that accepts any payload and passes it through untyped.
pub struct AcceptAll;

impl Schema for AcceptAll {
    type Data = Value;

    fn parse(&self, raw: &Value) -> Result<Value, SchemaError> {
        Ok(raw.clone())
    }
}

/// A schema backed by a validation closure.
pub struct SchemaFn<F, D> {
    parse: F,
    _marker: PhantomData<fn() -> D>,
}

impl<F, D> SchemaFn<F, D>
where
    F: Fn(&Value) -> Result<D, SchemaError> + Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    /// Create a schema from a closure.
    pub fn new(parse: F) -> Self {
        Self {
            parse,
            _marker: PhantomData,
        }
    }
}

impl<F, D> Schema for SchemaFn<F, D>
where
    F: Fn(&Value) -> Result<D, SchemaError> + Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    type Data = D;

    fn parse(&self, raw: &Value) -> Result<D, SchemaError> {
        (self.parse)(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{AcceptAll, SchemaFn, Typed};
    use gatecall_core::{Schema, SchemaError};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Rename {
        id: u64,
        name: String,
    }

    #[test]
    fn typed_accepts_matching_payload() {
        let schema = Typed::<Rename>::new();
        let data = schema.parse(&json!({"id": 7, "name": "doc"})).unwrap();
        assert_eq!(
            data,
            Rename {
                id: 7,
                name: "doc".into()
            }
        );
    }

    #[test]
    fn typed_rejects_wrong_shape() {
        let schema = Typed::<Rename>::new();
        assert!(schema.parse(&json!({"id": "seven"})).is_err());
    }

    #[test]
    fn accept_all_passes_through() {
        let raw = json!([1, 2, 3]);
        assert_eq!(AcceptAll.parse(&raw).unwrap(), raw);
    }

    #[test]
    fn schema_fn_runs_closure() {
        let schema = SchemaFn::new(|raw| {
            raw.as_u64()
                .ok_or_else(|| SchemaError::new("expected an unsigned integer"))
        });
        assert_eq!(schema.parse(&json!(5)).unwrap(), 5);
        assert!(schema.parse(&json!("five")).is_err());
    }
}
