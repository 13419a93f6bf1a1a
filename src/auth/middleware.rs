use actix_web::http::header::Header;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use std::future::Future;
use std::pin::Pin;

use crate::auth::jwt::Claims;
use crate::auth::session::SessionStore;
use crate::error::ApiError;

/// Extractor for routes that only the signed-in admin may call.
pub struct AdminSession(pub Claims);

impl FromRequest for AdminSession {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let token = Authorization::<Bearer>::parse(&req)
                .map_err(|_| ApiError::unauthorized("Missing or malformed Authorization header"))?
                .into_scheme()
                .token()
                .to_string();

            // 2. Get the session store from app data.
            let sessions = req
                .app_data::<web::Data<SessionStore>>()
                .ok_or_else(|| ApiError::Store("Session store not configured".to_string()))?;

            // 3. Validate signature, expiry and revocation.
            let claims = sessions.verify(&token).await?;

            Ok(AdminSession(claims))
        })
    }
}
