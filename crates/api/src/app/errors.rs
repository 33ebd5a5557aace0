use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use movies_core::DomainError;
use movies_infra::{AggregateError, ServiceError};

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        ServiceError::Domain(DomainError::NotFound(msg)) => {
            json_error(StatusCode::NOT_FOUND, "not_found", msg)
        }
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "store operation failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "storage backend failure",
            )
        }
    }
}

pub fn aggregate_error_to_response(err: AggregateError) -> axum::response::Response {
    match err {
        AggregateError::NotFound { .. } => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        AggregateError::Remote(e) => {
            json_error(StatusCode::BAD_GATEWAY, "upstream_error", e.public_message())
        }
    }
}

/// Malformed JSON body or query string.
pub fn bad_request(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use movies_infra::external::{Peer, RemoteError, RemoteErrorKind};
    use movies_infra::StoreError;

    use super::*;

    #[test]
    fn domain_errors_map_to_client_statuses() {
        let res = service_error_to_response(DomainError::validation("movieInfo.name must be present").into());
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = service_error_to_response(DomainError::not_found("nope").into());
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failure_is_internal() {
        let res = service_error_to_response(StoreError::Backend("connection reset".into()).into());
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn peer_failure_is_bad_gateway() {
        let err = AggregateError::Remote(RemoteError::new(Peer::Reviews, RemoteErrorKind::Timeout));
        assert_eq!(aggregate_error_to_response(err).status(), StatusCode::BAD_GATEWAY);

        let err = AggregateError::NotFound { movie_id: "zzz".into() };
        assert_eq!(aggregate_error_to_response(err).status(), StatusCode::NOT_FOUND);
    }
}
