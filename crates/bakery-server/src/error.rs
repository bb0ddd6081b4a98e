use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bakery_core::error::BakeryError;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses. Wraps an `anyhow::Error` so route
/// handlers can use `?` on anything; the status code is derived from the
/// underlying `BakeryError` when there is one.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Validation failures carry the offending fields so an editor can
        // highlight them; everything else is a plain error message.
        if let Some(BakeryError::Validation(errors)) = self.0.downcast_ref::<BakeryError>() {
            let body = serde_json::json!({
                "error": self.0.to_string(),
                "fields": errors.0,
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<BakeryError>() {
            match e {
                BakeryError::OrderNotFound(_) => StatusCode::NOT_FOUND,
                BakeryError::NotInitialized
                | BakeryError::InvalidOrderId(_)
                | BakeryError::InvalidOrderState(_)
                | BakeryError::InvalidSortField(_)
                | BakeryError::InvalidSortDirection(_) => StatusCode::BAD_REQUEST,
                BakeryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                BakeryError::Io(_) | BakeryError::Yaml(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: BakeryError) -> StatusCode {
        AppError(err.into()).into_response().status()
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(status_of(BakeryError::OrderNotFound(7)), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_input_maps_to_400() {
        assert_eq!(
            status_of(BakeryError::InvalidOrderId("abc".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(BakeryError::InvalidSortField("price".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(BakeryError::NotInitialized), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_maps_to_422() {
        use bakery_core::validate::{FieldViolation, ValidationErrors};
        let err = BakeryError::Validation(ValidationErrors(vec![FieldViolation {
            field: "customer.full_name".into(),
            message: "must not be empty".into(),
        }]));
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn plain_anyhow_maps_to_500() {
        let response = AppError(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
