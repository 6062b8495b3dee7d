//! Listen entrypoint: glue between the router core and a hyper/tokio host
//! HTTP layer. Everything here is translation — method and path in,
//! status/content-type/body out — with no routing logic of its own.

use std::convert::Infallible;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::method::HttpMethod;
use crate::router::Router;

type HostResponse = hyper::Response<Full<Bytes>>;

/// Binds `addr` and serves HTTP/1 connections forever, delegating every
/// request to [`Router::dispatch`]. Accept-loop errors end the loop;
/// per-connection errors are logged and the connection dropped.
pub async fn listen(router: Arc<Router>, addr: SocketAddr) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, routes = router.route_count(), "listening");

    loop {
        let (stream, peer) = listener.accept().await?;
        let router = Arc::clone(&router);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let router = Arc::clone(&router);
                async move { Ok::<_, Infallible>(respond(&router, req)) }
            });

            if let Err(err) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                tracing::warn!(error = %err, %peer, "error serving connection");
            }
        });
    }
}

fn respond(router: &Router, req: Request<Incoming>) -> HostResponse {
    let Some(method) = HttpMethod::from_token(req.method().as_str()) else {
        // verbs outside the routable set get the method-not-allowed status
        return error_response(router, 405);
    };

    match router.dispatch(method, req.uri().path()) {
        Ok(response) => {
            build_response(response.status, response.content_type, response.body)
        }
        Err(err) => error_response(router, err.status()),
    }
}

fn error_response(router: &Router, status: u16) -> HostResponse {
    build_response(status, router.config().error_content_type, Vec::new())
}

fn build_response(status: u16, content_type: &str, body: Vec<u8>) -> HostResponse {
    let mut response = hyper::Response::new(Full::new(Bytes::from(body)));

    *response.status_mut() =
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if let Ok(value) = HeaderValue::from_str(content_type) {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }

    response
}
