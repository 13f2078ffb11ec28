// src/api/handlers/testcases.rs
use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;
use crate::api::AppState;
use crate::config::OutputMode;
use crate::errors::GenError;
use crate::models::{parse_test_cases, ErrorResponse, RequirementRequest, TestCasesResponse};

/// POST /generate-testcases
pub async fn generate_testcases(
    state: web::Data<AppState>,
    req: web::Json<RequirementRequest>,
) -> Result<HttpResponse> {
    let request_id = Uuid::new_v4();
    let requirement = req.into_inner().requirement;

    log::info!("🎯 [{}] Generating test cases ({} chars of requirement)", request_id, requirement.len());

    let output = match state.generator.generate_test_cases(&requirement).await {
        Ok(output) => output,
        Err(e) => {
            log::error!("❌ [{}] Generation failed: {}", request_id, e);
            return Ok(error_response(&e));
        }
    };

    let parsed_test_cases = match state.config.output_mode {
        OutputMode::Passthrough => None,
        OutputMode::Validate => match parse_test_cases(&output) {
            Ok(cases) => Some(cases),
            Err(e) => {
                log::error!("❌ [{}] Output rejected: {}", request_id, e);
                return Ok(error_response(&e));
            }
        },
    };

    Ok(HttpResponse::Ok().json(TestCasesResponse {
        test_cases: output,
        parsed_test_cases,
    }))
}

fn error_response(e: &GenError) -> HttpResponse {
    // Provider error bodies can echo parts of the API key; those stay in the log.
    let error = match e {
        GenError::Authentication { status, .. } => {
            format!("Provider rejected credentials (status {})", status)
        }
        GenError::RateLimited { .. } => "Provider rate limit exceeded".to_string(),
        GenError::Api { status, .. } => format!("Provider request failed with status {}", status),
        _ => e.to_string(),
    };
    let body = ErrorResponse {
        error,
        kind: e.kind().to_string(),
    };

    match e {
        GenError::Authentication { .. } | GenError::Config(_) => {
            HttpResponse::InternalServerError().json(body)
        }
        GenError::RateLimited { .. } => HttpResponse::ServiceUnavailable().json(body),
        GenError::Transport(_) if e.is_timeout() => HttpResponse::GatewayTimeout().json(body),
        GenError::Transport(_)
        | GenError::Api { .. }
        | GenError::MalformedResponse(_)
        | GenError::InvalidOutput(_) => HttpResponse::BadGateway().json(body),
    }
}
