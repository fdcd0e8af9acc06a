//! In-process stand-in for the story spoiler service
//!
//! Answers the same paths, statuses and messages as the real backend so the
//! suite can be exercised without network access. State lives in memory and
//! disappears with the server.

use std::collections::HashSet;
use std::io;
use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web::web::{Data, Json, Path, ServiceConfig};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, delete, get, post, put};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::config::{BackendConfig, CredentialsConfig};
use crate::requests::LoginRequest;
use crate::responses::Authenticated;
use crate::scenarios::messages;

/// A story as the fake backend stores and lists it
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
}

#[derive(Default)]
struct State {
    tokens: HashSet<String>,
    stories: Vec<StoryRecord>,
    refuse_create: bool,
    plain_text_errors: bool,
}

pub struct Store {
    credentials: CredentialsConfig,
    state: Mutex<State>,
}

impl Store {
    fn new(credentials: CredentialsConfig) -> Self {
        Self {
            credentials,
            state: Mutex::new(State::default()),
        }
    }

    async fn authorized(&self, req: &HttpRequest) -> bool {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match token {
            Some(token) => self.state.lock().await.tokens.contains(token),
            None => false,
        }
    }
}

fn random_id() -> String {
    format!("{:032x}", rand::random::<u128>())
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().finish()
}

fn text(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

pub fn route(app: &mut ServiceConfig) {
    app.service(authenticate);
    app.service(create);
    app.service(edit);
    app.service(all);
    app.service(remove);
}

#[post("/api/User/Authentication")]
async fn authenticate(store: Data<Store>, Json(request): Json<LoginRequest>) -> HttpResponse {
    if request.username != store.credentials.username
        || request.password != store.credentials.password
    {
        return HttpResponse::Unauthorized().json(json!({ "msg": "Invalid username or password!" }));
    }

    let token = random_id();
    store.state.lock().await.tokens.insert(token.clone());

    HttpResponse::Ok().json(Authenticated {
        access_token: token,
    })
}

#[post("/api/Story/Create")]
async fn create(req: HttpRequest, store: Data<Store>, Json(body): Json<Value>) -> HttpResponse {
    if !store.authorized(&req).await {
        return unauthorized();
    }

    let title = text(&body, "Title").unwrap_or_default();
    let description = text(&body, "Description").unwrap_or_default();
    let mut state = store.state.lock().await;

    if title.is_empty() || description.is_empty() {
        if state.plain_text_errors {
            return HttpResponse::BadRequest()
                .content_type("text/plain")
                .body("Bad Request");
        }
        return HttpResponse::BadRequest().json(json!({
            "errors": { "Title": ["The Title field is required."], "Description": ["The Description field is required."] }
        }));
    }

    if state.refuse_create {
        if state.plain_text_errors {
            return HttpResponse::InternalServerError()
                .content_type("text/html")
                .body("<h1>Internal Server Error</h1>");
        }
        return HttpResponse::InternalServerError().json(json!({ "msg": "Unable to create this story spoiler!" }));
    }

    let id = random_id();
    state.stories.push(StoryRecord {
        id: id.clone(),
        title,
        description,
        url: text(&body, "Url"),
    });

    HttpResponse::Created().json(json!({ "msg": "Successfully created!", "storyId": id }))
}

#[put("/api/Story/Edit/{id}")]
async fn edit(
    req: HttpRequest,
    store: Data<Store>,
    id: Path<String>,
    Json(body): Json<Value>,
) -> HttpResponse {
    if !store.authorized(&req).await {
        return unauthorized();
    }

    let mut state = store.state.lock().await;
    let Some(story) = state.stories.iter_mut().find(|story| story.id == *id) else {
        return HttpResponse::NotFound().json(json!({ "msg": messages::NO_SPOILERS }));
    };

    if let Some(title) = text(&body, "Title") {
        story.title = title;
    }
    if let Some(description) = text(&body, "Description") {
        story.description = description;
    }
    story.url = text(&body, "Url");

    HttpResponse::Ok().json(json!({ "msg": messages::EDITED }))
}

#[get("/api/Story/All")]
async fn all(req: HttpRequest, store: Data<Store>) -> HttpResponse {
    if !store.authorized(&req).await {
        return unauthorized();
    }

    let state = store.state.lock().await;

    HttpResponse::Ok().json(&state.stories)
}

#[delete("/api/Story/Delete/{id}")]
async fn remove(req: HttpRequest, store: Data<Store>, id: Path<String>) -> HttpResponse {
    if !store.authorized(&req).await {
        return unauthorized();
    }

    let mut state = store.state.lock().await;
    let before = state.stories.len();
    state.stories.retain(|story| story.id != *id);

    if state.stories.len() == before {
        return HttpResponse::BadRequest().json(json!({ "msg": messages::UNABLE_TO_DELETE }));
    }

    HttpResponse::Ok().json(json!({ "msg": messages::DELETED }))
}

/// Running fake backend bound to an ephemeral local port
///
/// Must be started from inside an actix system, e.g. `#[actix_web::test]`.
pub struct FakeBackend {
    addr: SocketAddr,
    handle: ServerHandle,
    store: Data<Store>,
}

impl FakeBackend {
    pub fn start(credentials: CredentialsConfig) -> io::Result<Self> {
        crate::tls::install_crypto_provider();

        let store = Data::new(Store::new(credentials));
        let data = store.clone();

        let server = HttpServer::new(move || App::new().app_data(data.clone()).configure(route))
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))?;

        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "no bound address"))?;

        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        tracing::debug!(%addr, "Fake backend listening");

        Ok(Self {
            addr,
            handle,
            store,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.url(),
            ..BackendConfig::default()
        }
    }

    /// Make subsequent creates answer 500
    pub async fn refuse_creates(&self, refuse: bool) {
        self.store.state.lock().await.refuse_create = refuse;
    }

    /// Make create errors answer with a non-JSON body
    pub async fn plain_text_errors(&self, plain: bool) {
        self.store.state.lock().await.plain_text_errors = plain;
    }

    pub async fn stories(&self) -> Vec<StoryRecord> {
        self.store.state.lock().await.stories.clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
