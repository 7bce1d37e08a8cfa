use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use wasm_bindgen::JsCast;

use guest_portal_common::{
    error::GpError,
    request::{NewRequest, Request as ServiceRequest, RequestUpdate},
    user::{Credentials, Employee, LoginResponse, Registration, Session},
};

use crate::storage;

/// Base url of the request tracking REST API
pub const DEFAULT_API_URL: &str = "/api";

/// Api handle for the endpoints that do not require an authenticated session
#[derive(Clone, Copy)]
pub struct UnauthorizedApi {
    url: &'static str,
}

impl UnauthorizedApi {
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    /// Submit a guest registration. The payload is validated locally first so
    /// an incomplete form never issues a network call.
    /// # Errors
    /// This function will return an error if a field is empty, the call fails
    /// or the server rejects the registration
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        registration.validate()?;
        let url = format!("{}/register/", self.url);
        let response = Request::post(&url).json(registration)?.send().await?;
        parse_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Exchange credentials for a [Session]. A 2xx response that is missing a
    /// token or carries an unrecognized role is rejected before any session
    /// state can be produced.
    /// # Errors
    /// This function will return an error if the call fails, the credentials
    /// are rejected or the response body is incomplete
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let url = format!("{}/login/", self.url);
        let response = Request::post(&url).json(credentials)?.send().await?;
        let login = parse_response::<LoginResponse>(response).await?;
        Ok(login.into_session()?)
    }
}

/// Api handle for the endpoints that expect a bearer token. The session is
/// optional to mirror a tab where storage was cleared mid-flight; calls are
/// still attempted and the server's rejection is surfaced as [Error::Api].
#[derive(Clone)]
pub struct AuthorizedApi {
    url: &'static str,
    session: Option<Session>,
}

impl AuthorizedApi {
    pub const fn new(url: &'static str, session: Option<Session>) -> Self {
        Self { url, session }
    }

    /// Build a handle from whatever session is currently persisted
    pub fn load(url: &'static str) -> Self {
        Self::new(url, storage::load_session())
    }

    /// Best-effort server side session invalidation. Callers are expected to
    /// clear local state regardless of the outcome.
    /// # Errors
    /// This function will return an error if the call fails or the server
    /// rejects the logout
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/logout/", self.url);
        self.send::<serde_json::Value>(Request::post(&url)).await?;
        Ok(())
    }

    ///
    pub async fn create_request(&self, request: &NewRequest) -> Result<()> {
        let url = format!("{}/requests/create/", self.url);
        self.send::<serde_json::Value>(Request::post(&url).json(request)?)
            .await?;
        Ok(())
    }

    /// Fetch the requests visible to the current user. The server scopes the
    /// list by role so guests see their own requests and employees see their
    /// assigned ones.
    /// # Errors
    /// This function will return an error if the call fails or the server
    /// rejects the request
    pub async fn list_requests(&self) -> Result<Vec<ServiceRequest>> {
        let url = format!("{}/requests/list/", self.url);
        self.send(Request::get(&url)).await
    }

    ///
    pub async fn update_request(&self, id: i64, update: &RequestUpdate) -> Result<()> {
        let url = format!("{}/requests/{}/edit/", self.url, id);
        self.send::<serde_json::Value>(Request::patch(&url).json(update)?)
            .await?;
        Ok(())
    }

    ///
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let url = format!("{}/employees/", self.url);
        self.send(Request::get(&url)).await
    }

    fn token(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.access_token.as_str())
    }

    async fn send<T>(&self, request: Request) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut request = request;
        for (name, value) in request_headers(self.token(), csrf_token().as_deref()) {
            request = request.header(name, &value);
        }
        let response = request.send().await?;
        parse_response(response).await
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("API error\n{0}")]
    Api(String),
    #[error(transparent)]
    Data(#[from] GpError),
}

/// Error body shapes used by the server. Login failures use `detail`, every
/// other endpoint uses `error`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<String>,
}

/// Header set attached to every authenticated call. The bearer token is only
/// attached when one is held; the CSRF header is attached whenever the cookie
/// is present, even without a token.
fn request_headers(token: Option<&str>, csrf_token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_owned())];
    if let Some(token) = token {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    if let Some(csrf_token) = csrf_token {
        headers.push(("X-CSRFToken", csrf_token.to_owned()));
    }
    headers
}

/// Extract the `csrftoken` value from a raw cookie header string
fn parse_csrf_cookie(cookies: &str) -> Option<&str> {
    cookies
        .split(';')
        .map(str::trim_start)
        .find_map(|cookie| cookie.strip_prefix("csrftoken="))
}

/// Read the server issued CSRF token from the document cookie, if any
fn csrf_token() -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    parse_csrf_cookie(&cookies).map(str::to_owned)
}

/// Pull a displayable message out of a non-2xx response body. Known error
/// body shapes yield the server's message, anything else yields the raw text.
fn error_message(body: String) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
        if let Some(message) = parsed.error.or(parsed.detail) {
            return message;
        }
    }
    body
}

async fn parse_response<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(Error::Api(error_message(response.text().await?)))
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::{error_message, parse_csrf_cookie, request_headers};

    #[rstest]
    #[case::only_cookie("csrftoken=abc123", Some("abc123"))]
    #[case::middle("sessionid=xyz; csrftoken=abc123; theme=dark", Some("abc123"))]
    #[case::no_space_after_semicolon("sessionid=xyz;csrftoken=abc123", Some("abc123"))]
    #[case::absent("sessionid=xyz; theme=dark", None)]
    #[case::empty("", None)]
    #[case::value_prefix_only("mycsrftoken=abc123", None)]
    fn parse_csrf_cookie_should_find_token(#[case] cookies: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_csrf_cookie(cookies), expected);
    }

    #[test]
    fn request_headers_should_always_contain_content_type() {
        let headers = request_headers(None, None);

        assert_eq!(headers, vec![("Content-Type", "application/json".to_owned())]);
    }

    #[test]
    fn request_headers_should_attach_bearer_token_when_present() {
        let headers = request_headers(Some("token-1"), None);

        assert!(headers.contains(&("Authorization", "Bearer token-1".to_owned())));
    }

    #[test]
    fn request_headers_should_attach_csrf_without_token() {
        let headers = request_headers(None, Some("abc123"));

        assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
        assert!(headers.contains(&("X-CSRFToken", "abc123".to_owned())));
    }

    #[rstest]
    #[case::error_field(r#"{"error": "Invalid employee ID"}"#, "Invalid employee ID")]
    #[case::detail_field(r#"{"detail": "Invalid credentials"}"#, "Invalid credentials")]
    #[case::unknown_shape(r#"{"message": "nope"}"#, r#"{"message": "nope"}"#)]
    #[case::plain_text("<h1>Server Error (500)</h1>", "<h1>Server Error (500)</h1>")]
    fn error_message_should_prefer_server_message(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(error_message(body.to_owned()), expected);
    }
}
