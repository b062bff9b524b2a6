#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::Value;
use sqlx::SqlitePool;
use sticky_notes::notes::{Note, NoteInput, NoteService, SqliteNoteStore};
use sticky_notes::{AppState, app::router::build_router};
use tower::ServiceExt;

pub struct TestApp {
    app: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response is not valid utf-8 text")
    }

    pub fn json(&self) -> Value {
        if self.body.is_empty() {
            return Value::Null;
        }
        serde_json::from_slice(&self.body).expect("response is not valid json")
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    pub fn session_cookie(&self) -> String {
        let set_cookie = self
            .headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("response did not set a session cookie");
        set_cookie
            .split(';')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

pub fn service(pool: &SqlitePool) -> NoteService<SqliteNoteStore> {
    NoteService::new(SqliteNoteStore::new(pool.clone()))
}

pub async fn seed_note(pool: &SqlitePool, title: &str, content: &str) -> Note {
    service(pool)
        .create_note(&NoteInput::new(title, content))
        .await
        .expect("failed to seed note")
}

pub async fn count_notes(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM notes")
        .fetch_one(pool)
        .await
        .expect("failed to count notes")
}

impl TestApp {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            app: build_router(AppState::new(db)),
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None).await
    }

    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> (StatusCode, String) {
        let req = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .expect("failed to build request");
        let res = self.send(req).await;
        (res.status, res.text())
    }

    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let res = self.get(path).await;
        (res.status, res.text())
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let res = self.get(path).await;
        (res.status, res.json())
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self.send_json(Method::POST, path, body).await;
        (res.status, res.json())
    }

    pub async fn put_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self.send_json(Method::PUT, path, body).await;
        (res.status, res.json())
    }

    pub async fn delete_json(&self, path: &str) -> (StatusCode, Value) {
        let res = self.request(Method::DELETE, path, None).await;
        (res.status, res.json())
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(fields).expect("failed to encode form");
        self.request(
            Method::POST,
            path,
            Some(("application/x-www-form-urlencoded", body.into_bytes())),
        )
        .await
    }

    async fn send_json(&self, method: Method, path: &str, body: Value) -> TestResponse {
        let bytes = serde_json::to_vec(&body).expect("failed to serialize request body");
        self.request(method, path, Some(("application/json", bytes)))
            .await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<(&str, Vec<u8>)>,
    ) -> TestResponse {
        let mut req_builder = Request::builder().method(method).uri(path);

        let body = match body {
            Some((content_type, bytes)) => {
                req_builder = req_builder.header(header::CONTENT_TYPE, content_type);
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        let req = req_builder.body(body).expect("failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("failed to read response body");

        TestResponse {
            status,
            headers,
            body: bytes.to_vec(),
        }
    }
}
