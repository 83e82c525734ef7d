pub mod auth;
pub mod message;
pub mod shift;
pub mod view;
pub use auth::*;
pub use message::Message;
pub use shift::*;
pub use view::ViewState;

use crate::models::ShiftTiming;
use crate::session::ShiftDraft;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            Message,
            LoginInfo,
            LoginResponse,
            ViewState,
            ShiftDraft,
            ShiftTiming,
            SubmitShiftInfo,
            SubmitShiftResponse,
            ShiftRecord,
            ShiftTable,
        ),
    ),
    modifiers(&SecurityAddon)
)]
/// Captures OpenAPI schemas and canned responses defined in the DTO module
pub struct OpenApiSchemas;

pub struct SecurityAddon;
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components: &mut utoipa::openapi::Components = openapi.components.as_mut().unwrap(); // we can unwrap safely since there already is components registered.
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}
