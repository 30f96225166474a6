use std::borrow::Cow;

#[mfg_derive::mfg_error]
pub enum ScopedIdError {
    #[error("Id '{id}' belongs to model '{found}', expected '{expected}'{}", format_context(.context))]
    Foreign {
        id: String,
        expected: String,
        found: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("Malformed scoped id '{id}'{}", format_context(.context))]
    Malformed { id: String, context: Option<Cow<'static, str>> },
}

/// Guards option ids against leaking across models.
///
/// Option ids are local to one model's SUPER-BOM. They may travel either bare
/// (`perf-0-Xa3`) or qualified with the owning model id (`models:sp250:perf-0-Xa3`).
/// The scope is everything before the last colon, unless the whole id is already known
/// locally (see [`ScopedId::verify_known`]).
#[derive(Debug)]
pub struct ScopedId;

impl ScopedId {
    /// Returns the local part of `id` when it may be resolved against `model_id`.
    ///
    /// Bare ids are accepted as-is.
    ///
    /// # Errors
    /// [`ScopedIdError::Foreign`] when the id is qualified with another model id,
    /// [`ScopedIdError::Malformed`] when either part of a qualified id is empty.
    pub fn verify<'a>(id: &'a str, model_id: &str) -> Result<&'a str, ScopedIdError> {
        let Some((scope, local)) = id.rsplit_once(':') else {
            return Ok(id);
        };

        if scope.is_empty() || local.is_empty() {
            return Err(ScopedIdError::Malformed {
                id: id.to_owned(),
                context: Some("Expected '<modelId>:<localId>'".into()),
            });
        }

        if scope != model_id {
            return Err(ScopedIdError::Foreign {
                id: id.to_owned(),
                expected: model_id.to_owned(),
                found: scope.to_owned(),
                context: None,
            });
        }

        Ok(local)
    }

    /// Like [`ScopedId::verify`], but an id that `is_local` recognizes as a whole is
    /// returned unsplit, so authored local ids containing `:` stay selectable.
    ///
    /// # Errors
    /// Same as [`ScopedId::verify`] for ids `is_local` rejects.
    pub fn verify_known<'a>(
        id: &'a str,
        model_id: &str,
        is_local: impl FnOnce(&str) -> bool,
    ) -> Result<&'a str, ScopedIdError> {
        if is_local(id) {
            return Ok(id);
        }
        Self::verify(id, model_id)
    }

    /// Qualifies a local id with its owning model.
    #[must_use]
    pub fn qualify(model_id: &str, local_id: &str) -> String {
        format!("{model_id}:{local_id}")
    }
}
