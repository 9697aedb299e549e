use std::path::Path;
use std::sync::Arc;

use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::task::JoinHandle;

use timegrid::config::ServerConfig;
use timegrid::server::{AppState, create_router};
use timegrid::store::{SqliteStore, Store};

pub const ADMIN_EMAIL: &str = "admin@school.test";
pub const ADMIN_PASSWORD: &str = "admin-secret";

pub struct TestServer {
    pub temp_dir: TempDir,
    pub base_url: String,
    pub admin_token: String,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Starts a server with default config and a registered admin.
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    pub async fn start_with(configure: impl FnOnce(&mut ServerConfig)) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut config = ServerConfig::from_data_dir(temp_dir.path()).expect("load config");
        configure(&mut config);

        let store = SqliteStore::new(config.db_path()).expect("open store");
        store.initialize().expect("initialize store");

        let state = Arc::new(AppState::new(Arc::new(store), &config).expect("build state"));
        let app = create_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let port = listener.local_addr().expect("local addr").port();
        let base_url = format!("http://127.0.0.1:{port}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        // Redirects are asserted on, not followed.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("build client");

        Self::wait_for_ready(&client, &base_url).await;

        let mut server = Self {
            temp_dir,
            base_url,
            admin_token: String::new(),
            client,
            handle,
        };

        if config.allow_admin_registration {
            server.admin_token = server.register_admin().await;
        }

        server
    }

    async fn wait_for_ready(client: &reqwest::Client, base_url: &str) {
        for _ in 0..50 {
            if client
                .get(format!("{base_url}/health"))
                .send()
                .await
                .is_ok()
            {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        panic!("Server did not become ready");
    }

    async fn register_admin(&self) -> String {
        let resp = self
            .client
            .post(self.url("/api/v1/auth/admin-register"))
            .json(&json!({
                "email": ADMIN_EMAIL,
                "full_name": "Head Admin",
                "password": ADMIN_PASSWORD,
                "confirm_password": ADMIN_PASSWORD,
            }))
            .send()
            .await
            .expect("register admin");
        assert_eq!(resp.status(), 201, "admin registration failed");

        let body: Value = resp.json().await.expect("parse body");
        body["data"]["token"]
            .as_str()
            .expect("token in response")
            .to_string()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> String {
        let resp = self
            .client
            .post(self.url("/api/v1/auth/sign-in"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("sign in");
        assert_eq!(resp.status(), 200, "sign in failed for {email}");

        let body: Value = resp.json().await.expect("parse body");
        body["data"]["token"]
            .as_str()
            .expect("token in response")
            .to_string()
    }

    /// POST as admin and return the `data` of a 201 response.
    pub async fn admin_create(&self, path: &str, body: Value) -> Value {
        let resp = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.admin_token)
            .json(&body)
            .send()
            .await
            .expect("admin create");
        let status = resp.status();
        let body: Value = resp.json().await.expect("parse body");
        assert_eq!(status, 201, "create {path} failed: {body}");
        body["data"].clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
