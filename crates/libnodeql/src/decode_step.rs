use crate::Target;

/// One unit of a decode plan: the JSON key to read, and what to do with the
/// value found there.
#[derive(Debug)]
pub struct DecodeStep<T> {
    pub(crate) action: DecodeAction<T>,
    pub(crate) key: String,
    pub(crate) optional: bool,
}
impl<T> DecodeStep<T> {
    /// A step that descends into `key` and applies `steps` there.
    ///
    /// The step is optional iff every step beneath it is optional: a
    /// container has no attribute of its own, so its absence only matters
    /// when something below it was required.
    pub(crate) fn container(key: &str, steps: Vec<DecodeStep<T>>) -> Self {
        Self {
            optional: steps.iter().all(DecodeStep::is_optional),
            action: DecodeAction::Nested(steps),
            key: key.to_string(),
        }
    }

    /// A step that writes the value under `key` into `target`.
    pub(crate) fn terminal(key: &str, target: Target<T>) -> Self {
        Self {
            optional: target.is_optional(),
            action: DecodeAction::Write(target),
            key: key.to_string(),
        }
    }

    pub fn action(&self) -> &DecodeAction<T> {
        &self.action
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// The steps nested directly under this one (empty for terminal steps).
    pub fn nested_steps(&self) -> &[DecodeStep<T>] {
        match &self.action {
            DecodeAction::Nested(steps) => steps.as_slice(),
            DecodeAction::Write(_) => &[],
        }
    }
}
impl<T> Clone for DecodeStep<T> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            key: self.key.clone(),
            optional: self.optional,
        }
    }
}

#[derive(Debug)]
pub enum DecodeAction<T> {
    /// Recurse into the found value with another list of steps.
    Nested(Vec<DecodeStep<T>>),

    /// Decode the found value into a target attribute.
    Write(Target<T>),
}
impl<T> Clone for DecodeAction<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Nested(steps) => Self::Nested(steps.clone()),
            Self::Write(target) => Self::Write(target.clone()),
        }
    }
}
