// src/api/routes.rs
use actix_web::{error, web, HttpRequest, HttpResponse};
use super::handlers;
use crate::models::ErrorResponse;

/// Requirements have no length cap, so the body limit only guards against
/// lengths that cannot be buffered at all.
pub const MAX_BODY_BYTES: usize = usize::MAX;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config(MAX_BODY_BYTES))
        .route("/health", web::get().to(handlers::health_check))
        .route("/generate-testcases", web::post().to(handlers::generate_testcases));
}

pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

/// Rejects bad request bodies with a JSON error before any handler runs.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let (mut builder, kind) = match &err {
        error::JsonPayloadError::Deserialize(e) if e.is_data() => {
            (HttpResponse::UnprocessableEntity(), "validation")
        }
        error::JsonPayloadError::ContentType => (HttpResponse::UnsupportedMediaType(), "validation"),
        error::JsonPayloadError::Overflow { .. } | error::JsonPayloadError::OverflowKnownLength { .. } => {
            (HttpResponse::PayloadTooLarge(), "payload_too_large")
        }
        _ => (HttpResponse::BadRequest(), "validation"),
    };

    log::warn!("Rejected request body: {}", detail);

    let response = builder.json(ErrorResponse {
        error: detail,
        kind: kind.to_string(),
    });
    error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[::core::prelude::v1::test]
    fn test_overflow_maps_to_payload_too_large() {
        let req = test::TestRequest::default().to_http_request();

        for err in [
            error::JsonPayloadError::Overflow { limit: 16 },
            error::JsonPayloadError::OverflowKnownLength { length: 32, limit: 16 },
        ] {
            let resp = json_error_handler(err, &req).error_response();
            assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        }
    }

    #[::core::prelude::v1::test]
    fn test_content_type_maps_to_unsupported_media_type() {
        let req = test::TestRequest::default().to_http_request();
        let resp = json_error_handler(error::JsonPayloadError::ContentType, &req).error_response();
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
