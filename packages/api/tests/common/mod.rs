//! In-memory stand-in for the recipe backend, served through wiremock.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{json, Value};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use api::ApiClient;

pub const TOKEN: &str = "test-token";

#[derive(Default)]
struct State {
    recipes: Vec<Value>,
    next_id: u64,
}

/// Stateful fake that implements the recipe and auth endpoints under `/api`.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    pub async fn start() -> (MockServer, FakeBackend) {
        let server = MockServer::start().await;
        let backend = FakeBackend::default();
        Mock::given(path_regex(r"^/api/"))
            .respond_with(backend.clone())
            .mount(&server)
            .await;
        (server, backend)
    }

    /// Insert a record directly, bypassing the HTTP surface.
    pub fn seed(&self, mut recipe: Value) -> String {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.next_id += 1;
        let id = state.next_id;
        recipe["id"] = json!(id);
        if recipe.get("is_favorite").is_none() {
            recipe["is_favorite"] = json!(false);
        }
        if recipe.get("rating").is_none() {
            recipe["rating"] = json!(0);
        }
        state.recipes.push(recipe);
        id.to_string()
    }

    fn authorized(request: &Request) -> bool {
        request
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == format!("Bearer {TOKEN}"))
    }

    fn list(state: &State, request: &Request) -> ResponseTemplate {
        let mut matches: Vec<&Value> = state.recipes.iter().collect();
        for (key, value) in request.url.query_pairs() {
            match key.as_ref() {
                "search" => {
                    let needle = value.to_lowercase();
                    matches.retain(|r| {
                        r["title"]
                            .as_str()
                            .is_some_and(|t| t.to_lowercase().contains(&needle))
                    });
                }
                "category" => matches.retain(|r| r["category"] == json!(value.as_ref())),
                "favorite" if value == "true" => matches.retain(|r| r["is_favorite"] == json!(true)),
                _ => {}
            }
        }
        ResponseTemplate::new(200).set_body_json(matches)
    }
}

fn position(state: &State, id: &str) -> Option<usize> {
    state.recipes.iter().position(|r| r["id"].to_string() == id)
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "error": message }))
}

impl Respond for FakeBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let path = request.url.path().trim_start_matches("/api");
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        let method = request.method.as_str();

        if segments.first() == Some(&"auth") {
            let body: Value = request.body_json().unwrap_or(Value::Null);
            return match (method, segments.get(1)) {
                ("POST", Some(&"login")) if body["password"] == json!("secret") => {
                    ResponseTemplate::new(200).set_body_json(json!({
                        "token": TOKEN,
                        "user": { "id": 1, "name": "Ada", "email": body["email"] }
                    }))
                }
                ("POST", Some(&"login")) => error(401, "Invalid credentials"),
                ("POST", Some(&"register")) if body["email"] == json!("taken@example.com") => {
                    error(400, "User already exists")
                }
                ("POST", Some(&"register")) => ResponseTemplate::new(201).set_body_json(json!({
                    "token": TOKEN,
                    "user": { "id": 2, "name": body["name"], "email": body["email"] }
                })),
                _ => error(404, "Unknown route"),
            };
        }

        if !Self::authorized(request) {
            return error(401, "No token provided");
        }

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        match (method, segments.as_slice()) {
            ("GET", ["recipes"]) => Self::list(&state, request),
            ("POST", ["recipes"]) => {
                let mut body: Value = match request.body_json() {
                    Ok(body) => body,
                    Err(_) => return error(400, "Invalid JSON"),
                };
                if body["title"].as_str().unwrap_or_default().is_empty() {
                    return error(400, "Title, ingredients and steps are required");
                }
                state.next_id += 1;
                body["id"] = json!(state.next_id);
                body["is_favorite"] = json!(false);
                body["rating"] = json!(0);
                state.recipes.push(body.clone());
                ResponseTemplate::new(201).set_body_json(body)
            }
            ("GET", ["recipes", id]) => match position(&state, *id) {
                Some(i) => ResponseTemplate::new(200).set_body_json(&state.recipes[i]),
                None => error(404, "Recipe not found"),
            },
            ("PUT", ["recipes", id]) => match position(&state, *id) {
                Some(i) => {
                    let body: Value = request.body_json().unwrap_or(Value::Null);
                    // keys left out of the body keep their stored value
                    if let (Some(record), Some(fields)) =
                        (state.recipes[i].as_object_mut(), body.as_object())
                    {
                        for (key, value) in fields.iter().filter(|(key, _)| *key != "id") {
                            record.insert(key.clone(), value.clone());
                        }
                    }
                    ResponseTemplate::new(200).set_body_json(&state.recipes[i])
                }
                None => error(404, "Recipe not found"),
            },
            ("PATCH", ["recipes", id, "favorite"]) => match position(&state, *id) {
                Some(i) => {
                    let flipped = !state.recipes[i]["is_favorite"].as_bool().unwrap_or(false);
                    state.recipes[i]["is_favorite"] = json!(flipped);
                    ResponseTemplate::new(200).set_body_json(&state.recipes[i])
                }
                None => error(404, "Recipe not found"),
            },
            ("DELETE", ["recipes", id]) => match position(&state, *id) {
                Some(i) => {
                    state.recipes.remove(i);
                    ResponseTemplate::new(204)
                }
                None => error(404, "Recipe not found"),
            },
            _ => error(404, "Unknown route"),
        }
    }
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri())).with_credential(Some(TOKEN.to_string()))
}
