#![forbid(unsafe_code)]

use poem::Request;
use poem_openapi::{ OpenApi, payload::{Json, PlainText}, Object, param::Path, ApiResponse };

use crate::utils::roster::{Roster, UserRecord};
use crate::utils::roster_utils::{self, RequestDebug};

// ***************************************************************************
//                          Request/Response Definitions
// ***************************************************************************
pub struct GetUserApi {
    roster: &'static Roster,
}

impl GetUserApi {
    /// The roster handle comes from the composition root; the endpoint never
    /// owns or mutates the data it searches.
    pub fn new(roster: &'static Roster) -> Self {
        Self {roster}
    }
}

struct ReqGetUser
{
    name: String,
}

#[derive(Object, Debug)]
pub struct RespGetUser
{
    fname: String,
    lname: String,
}

// Implement the debug record trait for logging.
impl RequestDebug for ReqGetUser {
    type Req = ReqGetUser;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(64);
        s.push_str("  Request parameters:");
        s.push_str("\n    name: ");
        s.push_str(&self.name);
        s
    }
}

// ------------------- HTTP Status Codes -------------------
#[derive(ApiResponse)]
enum UserResponse {
    #[oai(status = 200)]
    Http200(Json<RespGetUser>),
    #[oai(status = 404)]
    Http404(PlainText<String>),
}

fn make_http_200(resp: RespGetUser) -> UserResponse {
    UserResponse::Http200(Json(resp))
}
fn make_http_404() -> UserResponse {
    // Fixed plain text body, no JSON wrapper.  Clients match on these bytes.
    UserResponse::Http404(PlainText("No user found".to_string()))
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl GetUserApi {
    #[oai(path = "/user/:name", method = "get")]
    async fn get_user_api(&self, http_req: &Request, name: Path<String>) -> UserResponse {
        // The path segment arrives here already url-decoded by the framework.
        let req = ReqGetUser {name: name.0};
        self.process(http_req, &req)
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl GetUserApi {
    /// Process the request.
    fn process(&self, http_req: &Request, req: &ReqGetUser) -> UserResponse {
        // Conditional logging depending on log level.
        roster_utils::debug_request(http_req, req);

        // A miss is a normal outcome: no record matches the name under
        // case-insensitive comparison after a full scan of the roster.
        match self.roster.find_user(&req.name) {
            Some(user) => make_http_200(RespGetUser::new(user)),
            None => make_http_404(),
        }
    }
}

impl RespGetUser {
    /// Create a new response from a roster record.
    fn new(user: &UserRecord) -> Self {
        Self {fname: user.first_name.clone(), lname: user.last_name.clone()}
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    use super::GetUserApi;
    use crate::utils::roster::Roster;

    lazy_static! {
        static ref TEST_ROSTER: Roster = Roster::standard();
    }

    fn test_client() -> TestClient<poem::Route> {
        let api = OpenApiService::new(GetUserApi::new(&TEST_ROSTER), "test", "0.1.0");
        TestClient::new(poem::Route::new().nest("/", api))
    }

    #[tokio::test]
    async fn get_user_exact_case() {
        let cli = test_client();

        let resp = cli.get("/user/Bob").send().await;
        resp.assert_status_is_ok();

        let json = resp.json().await;
        let user = json.value().object();
        user.get("fname").assert_string("Bob");
        user.get("lname").assert_string("Newby");
    }

    #[tokio::test]
    async fn get_user_folds_case() {
        let cli = test_client();

        let resp = cli.get("/user/jim").send().await;
        resp.assert_status_is_ok();

        let json = resp.json().await;
        let user = json.value().object();
        user.get("fname").assert_string("Jim");
        user.get("lname").assert_string("Hopper");
    }

    #[tokio::test]
    async fn get_user_mixed_case() {
        let cli = test_client();

        let resp = cli.get("/user/DuStIn").send().await;
        resp.assert_status_is_ok();

        let json = resp.json().await;
        let user = json.value().object();
        user.get("lname").assert_string("Henderson");
    }

    #[tokio::test]
    async fn get_user_not_found() {
        let cli = test_client();

        let resp = cli.get("/user/not%20found").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_text("No user found").await;
    }

    #[tokio::test]
    async fn get_user_unknown_name() {
        let cli = test_client();

        let resp = cli.get("/user/Bailey").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_text("No user found").await;
    }
}
