use std::process::ExitCode;

use swagger_recipes::core::config::Service;

#[tokio::main]
async fn main() -> ExitCode {
    swagger_recipes::server::launch(Service::Customer).await
}
