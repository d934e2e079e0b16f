#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use atelier_api::config::ServerConfig;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_content::ContentStore;
use atelier_core::locale::Locale;
use atelier_core::messages::Messages;
use atelier_notify::ContactNotifier;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` rooted at `root`.
pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        content_dir: root.join("content"),
        public_dir: root.join("public"),
        messages_dir: root.join("messages"),
        contact_recipient: None,
    }
}

/// Build the full application router over the Content Store at
/// `{root}/content`, with an optional contact notifier.
pub fn build_test_app(root: &Path, notifier: Option<Arc<dyn ContactNotifier>>) -> Router {
    let config = test_config(root);
    let messages = Messages::new()
        .with_json(
            Locale::En,
            r#"{"projects":{"filters":{"flat":"Apartment"}}}"#,
        )
        .unwrap();

    let state = AppState {
        content: ContentStore::filesystem(&config.content_dir),
        messages: Arc::new(messages),
        notifier,
    };

    build_app_router(state, &config)
}

pub fn write(root: &Path, rel: &str, contents: &str) {
    let path: PathBuf = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

pub const SITE_JSON: &str = r#"{
    "studioName": "Estudio Norte",
    "address": "Calle Mayor 1",
    "city": "Marbella",
    "phone": "+34 952 000 000",
    "email": "hola@estudionorte.es",
    "instagram": "https://instagram.com/estudionorte",
    "seoTitle": "Estudio Norte",
    "seoDescription": "Arquitectura e interiorismo"
}"#;

pub const ABOUT_JSON: &str = r#"{"text":"Somos un estudio","textEn":"We are a studio"}"#;

pub fn project_json(title: &str, category: &str, order: i64) -> String {
    format!(
        r#"{{"title":"{title}","category":"{category}","location":"Marbella","year":2022,
            "description":"Descripción","descriptionEn":"Description","order":{order},
            "mainImage":"portada.jpg","gallery":["01.jpg"]}}"#
    )
}

/// Lay out a complete Content Store under `{root}/content`.
pub fn seed_content(root: &Path) {
    write(root, "content/settings/site.json", SITE_JSON);
    write(root, "content/settings/about.json", ABOUT_JSON);
    write(
        root,
        "content/projects/villa-azul/data.json",
        &project_json("Villa Azul", "villa", 2),
    );
    write(
        root,
        "content/projects/piso-centro/data.json",
        &project_json("Piso Centro", "flat", 1),
    );
    write(
        root,
        "content/projects/barco/data.json",
        &project_json("Barco", "yacht", 4),
    );
    write(
        root,
        "content/projects/casa-campo/data.json",
        &project_json("Casa Campo", "country-house", 3),
    );
    write(root, "content/projects/en-curso/portada.jpg", "");
    write(
        root,
        "content/press/press.json",
        r#"[
            {"id":"old","publication":"El País","title":{"es":"Viejo","en":"Old"},
             "excerpt":{"es":"e","en":"e"},"date":"2021-06","image":"/press/old.jpg",
             "url":"https://example.com/old","projectSlug":"desaparecido"},
            {"id":"new","publication":"AD","title":{"es":"Nuevo","en":"New"},
             "excerpt":{"es":"e","en":"e"},"date":"2024-02","image":"/press/new.jpg",
             "url":"https://example.com/new","projectSlug":"villa-azul"}
        ]"#,
    );
    write(root, "public/projects/villa-azul/portada.jpg", "jpeg-bytes");
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
