//! OpenAPI documents, one per service, generated from the `#[utoipa::path]`
//! annotations on the controllers.

use utoipa::OpenApi;

use crate::api::controller::{account, customer, system};
use crate::api::dto::account_dto::{AccountResponse, HelloResponse};
use crate::api::dto::customer_dto::EmptyResponse;
use crate::api::dto::system_dto::{ErrorResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fiber Example API",
        version = "1.0",
        description = "This is a sample swagger for Fiber",
        terms_of_service = "http://swagger.io/terms/",
        contact(name = "API Support", email = "fiber@swagger.io"),
        license(name = "Apache 2.0", url = "http://www.apache.org/licenses/LICENSE-2.0.html"),
    ),
    servers((url = "http://localhost:3000")),
    paths(account::hello, account::show_account),
    components(schemas(HelloResponse, AccountResponse, ErrorResponse))
)]
pub struct AccountApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer Example API",
        version = "1.0",
        description = "Customer endpoints with auto-generated documentation",
        license(name = "Apache 2.0", url = "http://www.apache.org/licenses/LICENSE-2.0.html"),
    ),
    servers((url = "http://localhost:8080")),
    paths(
        system::healthcheck,
        customer::list_customers,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::delete_customer,
    ),
    components(schemas(EmptyResponse, HealthResponse, ErrorResponse))
)]
pub struct CustomerApiDoc;
