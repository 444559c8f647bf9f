use crate::DecodeStep;
use crate::Target;
use crate::graphql_literal;

/// The key a connection exposes its items under.
pub(crate) const CONNECTION_NODES_KEY: &str = "nodes";

/// The first page of a connection: `name(first: k) { nodes { <item> } }`.
///
/// Decoding descends through `name` and then `nodes`, and decodes every
/// element of the array found there as the item type. Only the first page
/// is ever requested; `pageInfo` and cursors are not selected.
#[derive(Debug)]
pub struct FieldList<T> {
    decode_step: DecodeStep<T>,
    first: u32,
    fragment: String,
    name: String,
    target: Target<T>,
}
impl<T> FieldList<T> {
    /// `target` must be a list target; see
    /// [`Node::field_list`](crate::Node::field_list).
    pub(crate) fn new(
        name: impl Into<String>,
        first: u32,
        target: Target<T>,
    ) -> Self {
        let name = name.into();
        let item_selection = graphql_literal::selection_set(target.selection());
        let fragment = format!(
            "{name}(first: {first}) {}",
            graphql_literal::selection_set([
                format!("{CONNECTION_NODES_KEY} {item_selection}").as_str(),
            ]),
        );
        let decode_step = DecodeStep::container(&name, vec![
            DecodeStep::terminal(CONNECTION_NODES_KEY, target.clone()),
        ]);

        Self {
            decode_step,
            first,
            fragment,
            name,
            target,
        }
    }

    pub fn decode_step(&self) -> &DecodeStep<T> {
        &self.decode_step
    }

    /// The page size requested with the `first` argument.
    pub fn first(&self) -> u32 {
        self.first
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
