//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{MockMediaLookup, MockMediaSearch};
use crate::inbound::http::routes::api_scope;
use crate::inbound::http::state::HttpState;

/// Wrap a pair of mocked driving ports in handler state.
pub fn mock_state(search: MockMediaSearch, lookup: MockMediaLookup) -> HttpState {
    HttpState::new(Arc::new(search), Arc::new(lookup))
}

/// Build an app serving the full `/api/v1` scope over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(api_scope())
}
