// File: src/routes.rs
// Purpose: Handlers for each form endpoint

use crate::error::ErrorResponse;
use crate::extract::Submission;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tellerform::{
    process, submit, BankForm, ConfirmTransferForm, Processed, TransferForm, TransferRequest,
    UserEditForm,
};

/// 200 with the cleaned data, or 422 with errors and echoed values
fn respond<T: Serialize>(outcome: Processed<T>) -> Result<Response, ErrorResponse> {
    match outcome {
        Processed::Accepted(data) => {
            let data = serde_json::to_value(data)?;
            Ok(Json(json!({ "status": "ok", "data": data })).into_response())
        }
        Processed::Rejected(context) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "status": "invalid",
                "errors": context.errors,
                "values": context.values,
            })),
        )
            .into_response()),
    }
}

/// A validated transfer plus the hidden fields for its confirmation page
fn transfer_with_confirmation(outcome: Processed<TransferRequest>) -> Processed<serde_json::Value> {
    match outcome {
        Processed::Accepted(request) => Processed::Accepted(json!({
            "confirm": request.confirmation(),
            "transfer": request,
        })),
        Processed::Rejected(context) => Processed::Rejected(context),
    }
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "store": state.store.name() }))
}

/// Handler for forms that need nothing beyond the submitted fields
pub async fn validate<F>(
    State(state): State<AppState>,
    Submission(data): Submission,
) -> Result<Response, ErrorResponse>
where
    F: BankForm + 'static,
    F::Output: Serialize,
{
    let outcome = process::<F>(&data, state.store.as_ref()).await?;
    respond(outcome)
}

pub async fn transfer(
    State(state): State<AppState>,
    Submission(data): Submission,
) -> Result<Response, ErrorResponse> {
    let outcome = process::<TransferForm>(&data, state.store.as_ref()).await?;
    respond(transfer_with_confirmation(outcome))
}

/// The confirmation fields came back from the client, so every transfer
/// rule runs again.
pub async fn confirm_transfer(
    State(state): State<AppState>,
    Submission(data): Submission,
) -> Result<Response, ErrorResponse> {
    let confirm: ConfirmTransferForm = data.parse()?;
    let form = TransferForm::from(confirm);

    let outcome = submit(&form, &data, state.store.as_ref()).await?;
    respond(outcome)
}

pub async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Submission(data): Submission,
) -> Result<Response, ErrorResponse> {
    let Some(user) = state.store.find_by_id(id).await? else {
        return Err(ErrorResponse::not_found(format!("No user with id {id}")));
    };

    let form: UserEditForm = data.parse()?;
    let form = form.with_original_email(user.email);

    let outcome = submit(&form, &data, state.store.as_ref()).await?;
    respond(outcome)
}
