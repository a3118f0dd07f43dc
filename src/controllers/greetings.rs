use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::data::greeting::GreetingMessage;

const ROOT_GREETING: &str = "Hello almal";
const NSARG_GREETING: &str = "Hello NSARG";

pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, Json(GreetingMessage::new(ROOT_GREETING)))
}

pub async fn nsarg() -> impl IntoResponse {
    (StatusCode::OK, Json(GreetingMessage::new(NSARG_GREETING)))
}

pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
