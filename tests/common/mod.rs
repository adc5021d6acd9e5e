use std::net::SocketAddr;
use std::sync::Arc;

use coursework::resource::{self, Course, ResourceHandlers};
use coursework::store::{Collection, MemoryCollection};
use coursework::{Router, Server, health};
use tokio::sync::oneshot;

/// A server on an ephemeral port, stopped when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    stop: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::with_collection(Arc::new(MemoryCollection::<Course>::new("courses"))).await
    }

    pub async fn with_collection(collection: Arc<dyn Collection<Course>>) -> Self {
        let app = resource::mount(Router::new(), ResourceHandlers::new(collection));
        let app = health::mount(app);

        let server = Server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = server.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();
        tokio::spawn(async move {
            server
                .serve_with_shutdown(app, async {
                    let _ = stopped.await;
                })
                .await
                .unwrap();
        });

        Self { addr, stop: Some(stop) }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}
