use std::net::SocketAddr;
use std::sync::Arc;

use sluggish::{Response, Router, server};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let router = Router::new();

    router
        .get("/", |_ctx| Response::text("hello"))
        .expect("register /");

    router
        .get("/users/:id", |ctx| {
            Response::json(&serde_json::json!({
                "id": ctx.param("id").unwrap_or(""),
            }))
        })
        .expect("register /users/:id");

    router
        .post("/users/:id", |ctx| {
            Response::text(format!("updated {}", ctx.param("id").unwrap_or("")))
        })
        .expect("register POST /users/:id");

    let addr: SocketAddr = ([127, 0, 0, 1], 3000).into();
    server::listen(Arc::new(router), addr).await
}
