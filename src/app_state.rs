use std::sync::Arc;

use utoipa::openapi::OpenApi;

/// Immutable per-process state shared by every handler of one service.
#[derive(Clone)]
pub struct AppState {
    pub service_name: Arc<str>,
    pub api_doc: Arc<OpenApi>,
}

pub fn build_app_state(service_name: &str, api_doc: OpenApi) -> AppState {
    AppState {
        service_name: Arc::from(service_name),
        api_doc: Arc::new(api_doc),
    }
}
