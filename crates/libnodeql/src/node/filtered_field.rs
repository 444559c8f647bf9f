use crate::DecodeStep;
use crate::Target;
use crate::graphql_literal;

/// A field narrowed by a `name` argument: `name(name: "lit") { <item> }`.
///
/// The filter may match nothing, so the target is always optional: a
/// missing (or `null`) field leaves it unset rather than failing.
#[derive(Debug)]
pub struct FilteredField<T> {
    decode_step: DecodeStep<T>,
    filter: String,
    fragment: String,
    name: String,
    target: Target<T>,
}
impl<T> FilteredField<T> {
    /// `target` must be an optional object target; see
    /// [`Node::filtered_field`](crate::Node::filtered_field).
    pub(crate) fn new(
        name: impl Into<String>,
        filter: impl Into<String>,
        target: Target<T>,
    ) -> Self {
        debug_assert!(target.is_optional());
        let name = name.into();
        let filter = filter.into();
        let fragment = format!(
            "{name}(name: {}) {}",
            graphql_literal::string_value(&filter),
            graphql_literal::selection_set(target.selection()),
        );

        Self {
            decode_step: DecodeStep::terminal(&name, target.clone()),
            filter,
            fragment,
            name,
            target,
        }
    }

    pub fn decode_step(&self) -> &DecodeStep<T> {
        &self.decode_step
    }

    /// The literal passed as the `name` argument.
    pub fn filter(&self) -> &str {
        self.filter.as_str()
    }

    pub fn fragment(&self) -> &str {
        self.fragment.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn target(&self) -> &Target<T> {
        &self.target
    }
}
