use axum::http::StatusCode;

pub async fn root() -> &'static str {
    "Welcome to the root!"
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
