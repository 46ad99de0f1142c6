use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into an HTML error page
pub fn error_to_response(err: ServerError) -> Response {
    html_error_response(err.status(), &err.to_string())
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let page = crate::templates::error_page(status, message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
