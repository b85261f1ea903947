use actix_web::{web, HttpResponse};
use quote_form::relay::SubmissionPayload;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{errors::ApiError, submission_app_container::SubmissionAppContainer};

#[derive(Deserialize)]
struct CreateSubmissionRequest {
    form: Option<Value>,
    #[serde(rename = "submissionData")]
    submission_data: Option<Value>,
}

impl TryFrom<CreateSubmissionRequest> for SubmissionPayload {
    type Error = ApiError;

    fn try_from(value: CreateSubmissionRequest) -> Result<Self, Self::Error> {
        match (value.form, value.submission_data) {
            (Some(form), Some(submission_data)) => Ok(SubmissionPayload {
                form,
                submission_data,
            }),
            _ => Err(ApiError::MissingFields),
        }
    }
}

async fn create_submission(
    data: web::Json<CreateSubmissionRequest>,
    app: web::Data<SubmissionAppContainer>,
) -> Result<HttpResponse, ApiError> {
    let payload: SubmissionPayload = data.into_inner().try_into()?;

    let submission = app
        .get_relay()
        .forward(payload)
        .await
        .map_err(|error| ApiError::SubmissionFailed(error.into()))?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "submission": submission })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/form-submissions")
            .service(web::resource("").route(web::post().to(create_submission))),
    );
}
