use crate::DecodeStep;
use crate::Target;
use crate::graphql_literal;

/// Selects a single field and writes its value to a [`Target`].
///
/// With a scalar target the fragment is just the field's name. With an
/// object target (see [`Target::object`]) the nested type's whole fragment
/// becomes the sub-selection, and decoding hands the field's value straight
/// to the nested type's own decode steps.
#[derive(Debug)]
pub struct Field<T> {
    decode_step: DecodeStep<T>,
    fragment: String,
    name: String,
    target: Target<T>,
}
impl<T> Field<T> {
    pub fn new(name: impl Into<String>, target: Target<T>) -> Self {
        let name = name.into();
        let fragment = match target.selection() {
            Some(selection) => format!(
                "{name} {}",
                graphql_literal::selection_set([selection]),
            ),
            None => name.clone(),
        };

        Self {
            decode_step: DecodeStep::terminal(&name, target.clone()),
            fragment,
            name,
            target,
        }
    }

    pub fn decode_step(&self) -> &DecodeStep<T> {
        &self.decode_step
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
