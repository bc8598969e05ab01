use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::response::status::NoContent;
use rocket::{options, Request, Response};

/// Adds permissive CORS headers so the browser UI can be served from a
/// different origin than the API.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, PUT, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
    }
}

/// Answers preflight requests for every API path.
#[options("/<_..>")]
pub fn preflight() -> NoContent {
    NoContent
}
