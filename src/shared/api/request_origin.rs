// src/shared/api/request_origin.rs
use actix_web::http::header;
use actix_web::{dev::Payload, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

/// How a management request reached us.
///
/// The dashboard submits with `X-Requested-With: XMLHttpRequest` and expects
/// a structured JSON body; a plain browser navigation expects a redirect back
/// to the entity's manage page. The header is the only signal — content
/// negotiation is not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOrigin {
    Ajax,
    Navigation,
}

impl RequestOrigin {
    pub fn from_request_sync(req: &HttpRequest) -> Self {
        let is_ajax = req
            .headers()
            .get("X-Requested-With")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
            .unwrap_or(false);

        if is_ajax {
            RequestOrigin::Ajax
        } else {
            RequestOrigin::Navigation
        }
    }

    pub fn is_ajax(self) -> bool {
        matches!(self, RequestOrigin::Ajax)
    }
}

impl FromRequest for RequestOrigin {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(RequestOrigin::from_request_sync(req)))
    }
}

/// `303 See Other` back to a manage page for navigation-origin submissions.
pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
