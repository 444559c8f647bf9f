//! The schema units a [`QueryTree`](crate::QueryTree) is assembled from.
//!
//! Every node computes its query fragment and its decode steps eagerly, in
//! the same constructor, from the same children.

mod field;
mod field_list;
mod filtered_field;
mod if_type;
mod nested_field;

pub use field::Field;
pub use field_list::FieldList;
pub use filtered_field::FilteredField;
pub use if_type::IfType;
pub use nested_field::NestedField;

use crate::DecodeStep;
use crate::NodeType;
use crate::Target;

/// One entry of a type's schema description.
#[derive(Debug)]
pub enum Node<T> {
    /// `name` or `name { <nested type's fragment> }`, written to a target.
    Field(Field<T>),

    /// `name(first: k) { nodes { ... } }`: the first page of a connection.
    FieldList(FieldList<T>),

    /// `name(name: "lit") { ... }`: an argument-filtered field that may
    /// match nothing.
    FilteredField(FilteredField<T>),

    /// `... on TypeName { ... }`: selects type-specific sub-fields without
    /// adding a level to the response.
    IfType(IfType<T>),

    /// `name { ... }`: a container whose children write into the same
    /// result value.
    NestedField(NestedField<T>),
}
impl<T: 'static> Node<T> {
    /// See [`Field`].
    pub fn field(name: impl Into<String>, target: Target<T>) -> Self {
        Self::Field(Field::new(name, target))
    }

    /// See [`FieldList`].
    pub fn field_list<N, F>(name: impl Into<String>, first: u32, setter: F) -> Self
    where
        N: NodeType,
        F: Fn(&mut T, Vec<N>) + Send + Sync + 'static,
    {
        Self::FieldList(FieldList::new(name, first, Target::list(setter)))
    }

    /// See [`FilteredField`].
    pub fn filtered_field<N, F>(
        name: impl Into<String>,
        filter: impl Into<String>,
        setter: F,
    ) -> Self
    where
        N: NodeType,
        F: Fn(&mut T, N) + Send + Sync + 'static,
    {
        Self::FilteredField(FilteredField::new(
            name,
            filter,
            Target::optional_object(setter),
        ))
    }

    /// See [`IfType`].
    pub fn if_type(type_name: impl Into<String>, children: Vec<Node<T>>) -> Self {
        Self::IfType(IfType::new(type_name, children))
    }

    /// See [`NestedField`].
    pub fn nested(name: impl Into<String>, children: Vec<Node<T>>) -> Self {
        Self::NestedField(NestedField::new(name, children))
    }
}
impl<T> Node<T> {
    /// This node's children, in declaration order. Leaf fields and the
    /// object-valued variants have none; their sub-selection comes from
    /// the nested type.
    pub fn children(&self) -> &[Node<T>] {
        match self {
            Self::IfType(if_type) => if_type.children(),
            Self::NestedField(nested) => nested.children(),
            Self::Field(_)
                | Self::FieldList(_)
                | Self::FilteredField(_) => &[],
        }
    }

    /// The decode steps this node contributes to its parent's list.
    ///
    /// Every variant except [`Node::IfType`] contributes exactly one step
    /// keyed by its wire name; an `IfType` contributes its children's steps
    /// unwrapped.
    pub fn decode_steps(&self) -> &[DecodeStep<T>] {
        match self {
            Self::Field(field) => std::slice::from_ref(field.decode_step()),
            Self::FieldList(list) => std::slice::from_ref(list.decode_step()),
            Self::FilteredField(filtered) => std::slice::from_ref(filtered.decode_step()),
            Self::IfType(if_type) => if_type.decode_steps(),
            Self::NestedField(nested) => std::slice::from_ref(nested.decode_step()),
        }
    }

    /// This node's query fragment. Always a complete selection, safe to
    /// splice between a parent's braces.
    pub fn fragment(&self) -> &str {
        match self {
            Self::Field(field) => field.fragment(),
            Self::FieldList(list) => list.fragment(),
            Self::FilteredField(filtered) => filtered.fragment(),
            Self::IfType(if_type) => if_type.fragment(),
            Self::NestedField(nested) => nested.fragment(),
        }
    }

    /// The wire name of the field this node selects; `None` for
    /// [`Node::IfType`], which names a type instead.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Field(field) => Some(field.name()),
            Self::FieldList(list) => Some(list.name()),
            Self::FilteredField(filtered) => Some(filtered.name()),
            Self::IfType(_) => None,
            Self::NestedField(nested) => Some(nested.name()),
        }
    }
}
