// File: src/pipeline.rs
// Purpose: Submitted form data -> form struct -> validation -> accepted output or context

use crate::form_context::FormContext;
use crate::form_data::FormData;
use crate::forms::{validate_form, BankForm};
use crate::store::UserStore;
use crate::validation::{FieldErrors, Validation};
use anyhow::Result;

/// Key for errors that belong to the whole submission
pub const FORM_ERROR_KEY: &str = "_form";

/// Outcome of processing a submission
#[derive(Debug)]
pub enum Processed<T> {
    Accepted(T),
    /// Errors plus the submitted values, passwords removed
    Rejected(FormContext),
}

impl<T> Processed<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Processed::Accepted(_))
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Processed::Accepted(output) => Some(output),
            Processed::Rejected(_) => None,
        }
    }

    pub fn rejected(self) -> Option<FormContext> {
        match self {
            Processed::Accepted(_) => None,
            Processed::Rejected(context) => Some(context),
        }
    }
}

/// Deserialize and validate a submission as form `F`
///
/// Example:
/// ```ignore
/// let data = FormData::from_urlencoded(&body);
/// match process::<LoginForm>(&data, &store).await? {
///     Processed::Accepted(attempt) => sign_in(attempt),
///     Processed::Rejected(context) => render_login(context),
/// }
/// ```
pub async fn process<F: BankForm>(
    data: &FormData,
    store: &dyn UserStore,
) -> Result<Processed<F::Output>> {
    match data.parse::<F>() {
        Ok(form) => submit(&form, data, store).await,
        Err(e) => {
            tracing::debug!(form = F::NAME, error = %e, "unparsable submission");
            let mut errors = FieldErrors::new();
            errors.add(FORM_ERROR_KEY, format!("Failed to parse form data: {}", e));
            Ok(Processed::Rejected(FormContext::new(
                errors,
                data.display_values(),
            )))
        }
    }
}

/// Validate an already-built form, echoing `data` back when it is rejected
pub async fn submit<F: BankForm>(
    form: &F,
    data: &FormData,
    store: &dyn UserStore,
) -> Result<Processed<F::Output>> {
    match validate_form(form, store).await? {
        Validation::Valid(output) => Ok(Processed::Accepted(output)),
        Validation::Invalid(errors) => {
            tracing::debug!(
                form = F::NAME,
                fields = ?errors.fields(),
                "submission rejected"
            );
            Ok(Processed::Rejected(FormContext::new(
                errors,
                data.display_values(),
            )))
        }
    }
}
