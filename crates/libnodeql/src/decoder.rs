use crate::DecodeAction;
use crate::DecodeError;
use crate::DecodePath;
use crate::DecodeStep;
use crate::ResponseError;
use serde_json::Value;

/// Keys wrapping every node-lookup response: `{"data": {"node": {...}}}`.
const ENVELOPE_KEYS: [&str; 2] = ["data", "node"];

/// Apply `steps` to the JSON object `object`, writing into `target`.
///
/// `path` locates `object` within the response and is restored to that
/// same location before returning (including on error).
pub(crate) fn apply_steps<T>(
    steps: &[DecodeStep<T>],
    target: &mut T,
    object: &Value,
    path: &mut DecodePath,
) -> Result<(), DecodeError> {
    let Value::Object(fields) = object else {
        return Err(DecodeError::type_mismatch("object", object, path));
    };

    for step in steps {
        let value = match fields.get(step.key()) {
            None | Some(Value::Null) if step.is_optional() => {
                log::trace!(
                    "Optional key `{}` absent at `{path}`; leaving it unset.",
                    step.key(),
                );
                continue;
            },

            None => return Err(DecodeError::MissingRequiredKey {
                key: step.key().to_string(),
                path: path.clone(),
            }),

            Some(value) => value,
        };

        path.push_key(step.key());
        log::trace!("Decoding `{path}`.");
        let result = match step.action() {
            DecodeAction::Nested(nested_steps) =>
                apply_steps(nested_steps, target, value, path),

            DecodeAction::Write(write_target) =>
                write_target.write(target, value, path),
        };
        path.pop();
        result?;
    }

    Ok(())
}

/// Consume the `data` and `node` envelope keys of a top-level response,
/// returning the looked-up node's object.
pub(crate) fn unwrap_envelope<'response>(
    response: &'response Value,
    path: &mut DecodePath,
) -> Result<&'response Value, DecodeError> {
    let mut current = response;
    for key in ENVELOPE_KEYS {
        current = match current.get(key) {
            Some(value) if !value.is_null() => value,
            _ => return Err(DecodeError::EnvelopeMismatch {
                errors: ResponseError::all_from_response(response),
                missing: key,
            }),
        };
        path.push_key(key);
    }
    Ok(current)
}
