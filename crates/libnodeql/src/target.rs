use crate::DecodeError;
use crate::DecodePath;
use crate::NodeType;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type WriteFn<T> = dyn Fn(&mut T, &Value, &mut DecodePath) -> Result<(), DecodeError>
    + Send
    + Sync;

/// A write-slot on a result type `T`, fixed when a schema is declared and
/// bound to a concrete value of `T` during decode.
///
/// A target is either a *scalar* (any [`DeserializeOwned`] value) or a
/// *nested object* (another [`NodeType`], which brings its own sub-selection
/// and decode steps along). Either kind can be required or optional.
///
/// Optional targets are only written when their key is present with a
/// non-`null` value; otherwise the attribute keeps whatever
/// [`Default`] gave it.
pub struct Target<T> {
    expected: &'static str,
    optional: bool,
    selection: Option<&'static str>,
    write: Arc<WriteFn<T>>,
}
impl<T: 'static> Target<T> {
    /// A required scalar attribute.
    pub fn value<V, F>(setter: F) -> Self
    where
        V: DeserializeOwned + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        Self::scalar(setter, /* optional = */ false)
    }

    /// An optional scalar attribute. The setter only runs when the key is
    /// present and non-`null`.
    pub fn optional_value<V, F>(setter: F) -> Self
    where
        V: DeserializeOwned + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        Self::scalar(setter, /* optional = */ true)
    }

    /// A required attribute holding another [`NodeType`]. The nested type's
    /// own fragment becomes this field's sub-selection and its decode steps
    /// run directly against this field's value.
    pub fn object<N, F>(setter: F) -> Self
    where
        N: NodeType,
        F: Fn(&mut T, N) + Send + Sync + 'static,
    {
        Self::nested_object(setter, /* optional = */ false)
    }

    /// Like [`Target::object`], but a missing or `null` value leaves the
    /// attribute unset instead of failing the decode.
    pub fn optional_object<N, F>(setter: F) -> Self
    where
        N: NodeType,
        F: Fn(&mut T, N) + Send + Sync + 'static,
    {
        Self::nested_object(setter, /* optional = */ true)
    }

    /// An attribute holding every element of a JSON array, each decoded
    /// as `N`. A single failing element fails the whole list.
    pub(crate) fn list<N, F>(setter: F) -> Self
    where
        N: NodeType,
        F: Fn(&mut T, Vec<N>) + Send + Sync + 'static,
    {
        let tree = N::query_tree();
        Self {
            expected: std::any::type_name::<Vec<N>>(),
            optional: false,
            selection: Some(tree.fragment()),
            write: Arc::new(move |
                target: &mut T,
                value: &Value,
                path: &mut DecodePath,
            | {
                let Value::Array(elements) = value else {
                    return Err(DecodeError::type_mismatch(
                        format!("[{}]", tree.type_name()),
                        value,
                        path,
                    ));
                };

                let mut items = Vec::with_capacity(elements.len());
                for (idx, element) in elements.iter().enumerate() {
                    path.push_index(idx);
                    let item = tree.decode_object_at(element, path);
                    path.pop();
                    items.push(item?);
                }
                setter(target, items);
                Ok(())
            }),
        }
    }

    fn nested_object<N, F>(setter: F, optional: bool) -> Self
    where
        N: NodeType,
        F: Fn(&mut T, N) + Send + Sync + 'static,
    {
        let tree = N::query_tree();
        Self {
            expected: tree.type_name(),
            optional,
            selection: Some(tree.fragment()),
            write: Arc::new(move |
                target: &mut T,
                value: &Value,
                path: &mut DecodePath,
            | {
                setter(target, tree.decode_object_at(value, path)?);
                Ok(())
            }),
        }
    }

    fn scalar<V, F>(setter: F, optional: bool) -> Self
    where
        V: DeserializeOwned + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let expected = std::any::type_name::<V>();
        Self {
            expected,
            optional,
            selection: None,
            write: Arc::new(move |
                target: &mut T,
                value: &Value,
                path: &mut DecodePath,
            | {
                let decoded = V::deserialize(value).map_err(|err| {
                    DecodeError::TypeMismatch {
                        detail: err.to_string(),
                        expected: expected.to_string(),
                        path: path.clone(),
                    }
                })?;
                setter(target, decoded);
                Ok(())
            }),
        }
    }
}
impl<T> Target<T> {
    /// The declared type this target decodes into, for diagnostics.
    pub fn expected_type(&self) -> &'static str {
        self.expected
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The sub-selection a nested-object target contributes to its field's
    /// fragment (the nested type's whole tree fragment). `None` for scalars.
    pub fn selection(&self) -> Option<&'static str> {
        self.selection
    }

    pub(crate) fn write(
        &self,
        target: &mut T,
        value: &Value,
        path: &mut DecodePath,
    ) -> Result<(), DecodeError> {
        (self.write)(target, value, path)
    }
}
impl<T> Clone for Target<T> {
    fn clone(&self) -> Self {
        Self {
            expected: self.expected,
            optional: self.optional,
            selection: self.selection,
            write: Arc::clone(&self.write),
        }
    }
}
impl<T> fmt::Debug for Target<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("expected", &self.expected)
            .field("optional", &self.optional)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
