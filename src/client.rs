//! Authenticated access to the story spoiler backend
//!
//! [`login`] trades credentials for a [`Session`]; [`StoryClient`] then
//! carries the session's bearer token on every call it makes. Each call
//! returns the raw [`ResponseEnvelope`] and leaves judging it to the caller.

use std::fmt;
use std::time::Instant;

use awc::{Client, SendClientRequest};

use crate::config::{BackendConfig, CredentialsConfig};
use crate::endpoints;
use crate::errors::Error;
use crate::requests::{LoginRequest, StoryInput};
use crate::responses::{Authenticated, ResponseEnvelope};
use crate::tls;

/// Base URL plus the bearer token obtained at login
#[derive(Clone)]
pub struct Session {
    backend: BackendConfig,
    token: String,
}

impl Session {
    pub fn new(backend: BackendConfig, token: impl Into<String>) -> Self {
        Self {
            backend,
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.backend.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn url(&self, path: &str) -> String {
        self.backend.url(path)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.backend.base_url)
            .field("token", &"********")
            .finish()
    }
}

/// Obtain a bearer token from the authentication endpoint
///
/// Fail if:
/// - the endpoint is unreachable
/// - the status is not a success
/// - the body has no non-empty `accessToken`
#[tracing::instrument(skip_all, fields(username = %credentials.username))]
pub async fn login(
    backend: &BackendConfig,
    credentials: &CredentialsConfig,
) -> Result<Session, Error> {
    let start = Instant::now();
    let url = backend.url(endpoints::AUTHENTICATION);
    let request = http_client(None)
        .post(&url)
        .send_json(&LoginRequest::from(credentials));

    let envelope = execute(request, &url, backend.body_limit)
        .await
        .map_err(|e| Error::Login(e.to_string()))?;

    if !envelope.status.is_success() {
        return Err(Error::Login(format!("authentication endpoint answered {}", envelope)));
    }

    let authenticated = envelope
        .json::<Authenticated>()
        .map_err(|_| Error::Login("response has no accessToken".to_string()))?;

    if authenticated.access_token.is_empty() {
        return Err(Error::Login("accessToken is empty".to_string()));
    }

    tracing::info!("Authenticated in {:?}", start.elapsed());

    Ok(Session::new(backend.clone(), authenticated.access_token))
}

/// HTTP client bound to one session
pub struct StoryClient {
    http: Client,
    session: Session,
}

impl StoryClient {
    pub fn new(session: Session) -> Self {
        let http = http_client(Some(session.token()));

        Self { http, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `POST /api/Story/Create`
    pub async fn create(&self, input: &StoryInput) -> Result<ResponseEnvelope, Error> {
        let url = self.session.url(endpoints::CREATE);
        let request = self.http.post(&url).send_json(input);

        execute(request, &url, self.session.backend.body_limit).await
    }

    /// `PUT /api/Story/Edit/{id}`
    pub async fn edit(&self, id: &str, input: &StoryInput) -> Result<ResponseEnvelope, Error> {
        let url = self.session.url(&endpoints::with_id(endpoints::EDIT, id));
        let request = self.http.put(&url).send_json(input);

        execute(request, &url, self.session.backend.body_limit).await
    }

    /// `GET /api/Story/All`
    pub async fn all(&self) -> Result<ResponseEnvelope, Error> {
        let url = self.session.url(endpoints::ALL);
        let request = self.http.get(&url).send();

        execute(request, &url, self.session.backend.body_limit).await
    }

    /// `DELETE /api/Story/Delete/{id}`
    pub async fn delete(&self, id: &str) -> Result<ResponseEnvelope, Error> {
        let url = self.session.url(&endpoints::with_id(endpoints::DELETE, id));
        let request = self.http.delete(&url).send();

        execute(request, &url, self.session.backend.body_limit).await
    }
}

fn http_client(token: Option<&str>) -> Client {
    tls::install_crypto_provider();

    let builder = Client::builder();
    match token {
        Some(token) => builder.bearer_auth(token).finish(),
        None => builder.finish(),
    }
}

async fn execute(
    request: SendClientRequest,
    url: &str,
    body_limit: usize,
) -> Result<ResponseEnvelope, Error> {
    let mut response = request.await.map_err(|e| Error::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status();
    let body = response
        .body()
        .limit(body_limit)
        .await
        .map_err(|e| Error::Body(e.to_string()))?;

    tracing::debug!(%url, %status, bytes = body.len(), "Received response");

    Ok(ResponseEnvelope::new(status, &body))
}
