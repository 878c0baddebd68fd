//! Local HTTP endpoint shared by the integration tests.
//!
//! Each endpoint runs on its own tokio runtime and answers every request
//! with a fixed status and body, recording what it received.

#![allow(dead_code)]

use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::StatusCode;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::header::CONTENT_TYPE;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use trafikverket_lib::Settings;
use trafikverket_lib::TrafikverketClient;

/// What the endpoint saw.
#[derive(Debug)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct MockEndpoint {
    pub url: String,
    pub requests: mpsc::UnboundedReceiver<Captured>,
    // Keeps the server alive for the duration of the test
    _runtime: Runtime,
}

impl MockEndpoint {
    pub fn start(status: StatusCode, body: &'static str) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to build runtime");
        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .expect("Failed to bind mock endpoint");
        let addr = listener.local_addr().expect("No local address");
        let (tx, rx) = mpsc::unbounded_channel();

        runtime.spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req: hyper::Request<Incoming>| {
                        let tx = tx.clone();
                        async move {
                            let method = req.method().to_string();
                            let path = req.uri().path().to_string();
                            let content_type = req
                                .headers()
                                .get(CONTENT_TYPE)
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            let bytes = req.into_body().collect().await?.to_bytes();
                            let _ = tx.send(Captured {
                                method,
                                path,
                                content_type,
                                body: String::from_utf8_lossy(&bytes).into_owned(),
                            });

                            Ok::<_, hyper::Error>(
                                hyper::Response::builder()
                                    .status(status)
                                    .header(CONTENT_TYPE, "application/json")
                                    .body(Full::new(Bytes::from_static(body.as_bytes())))
                                    .expect("Failed to build response"),
                            )
                        }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self {
            url: format!("http://{}/v2/data.json", addr),
            requests: rx,
            _runtime: runtime,
        }
    }

    pub fn client(&self, settings: Settings) -> TrafikverketClient {
        TrafikverketClient::builder()
            .api_key("KEY")
            .endpoint(&self.url)
            .settings(settings)
            .build()
            .expect("Failed to build client")
    }

    pub fn received(&mut self) -> Captured {
        self.requests.try_recv().expect("Endpoint saw no request")
    }
}
