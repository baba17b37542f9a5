// src/shared/api/api_key.rs
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// Optional `X-API-Key` header on the public API.
///
/// The key is accepted but not enforced: extraction never fails, with or
/// without the header. Kept as an extractor so enforcement would be a local
/// change to this file.
#[derive(Debug, Clone)]
pub struct ApiKey(pub Option<String>);

impl FromRequest for ApiKey {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let key = req
            .headers()
            .get("X-API-Key")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        ready(Ok(ApiKey(key)))
    }
}
