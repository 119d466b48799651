use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

const READY_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

/// Spawn the compiled server once per test binary and wait until /health
/// answers. A degraded answer (503, no database) still counts as up so the
/// liveness and 401 tests can run without one.
pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| spawn_server().expect("failed to spawn server binary"));

    let client = reqwest::Client::new();
    let health_url = format!("{}/health", server.base_url);
    let deadline = Instant::now() + READY_TIMEOUT;

    while Instant::now() < deadline {
        if let Ok(resp) = client.get(&health_url).send().await {
            if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                return Ok(server);
            }
        }
        tokio::time::sleep(Duration::from_millis(150)).await;
    }

    anyhow::bail!(
        "server did not become ready on {} within {:?}",
        server.base_url,
        READY_TIMEOUT
    )
}

fn spawn_server() -> Result<TestServer> {
    // Unused port per test binary for isolation; debug profile binary keeps
    // startup fast. The child inherits the environment so it picks up
    // DATABASE_URL and JWT_SECRET from .env like a normal run.
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;

    let child = Command::new("target/debug/scribe-api")
        .env("SCRIBE_API_PORT", port.to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .context("failed to spawn server binary")?;

    Ok(TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        child,
    })
}

/// Flow tests need a real database; skip them when none is configured
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Unique email per test run so re-runs do not collide on the unique index
#[allow(dead_code)]
pub fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}+{}@example.com", prefix, nanos)
}
