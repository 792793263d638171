use reactorcore::{Handled, Handler, ReactorGroup, Request, Response, StatusCode};

struct Counting;

impl Handler<()> for Counting {
    async fn handle(&self, _: &mut (), _: &Request, resp: &mut Response) -> Handled {
        resp.status(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .body("Hello from a worker group reactor!")
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Binds 4 independent listeners to the same address via SO_REUSEPORT,
    // one per reactor, all sharing one shutdown signal.
    let group = ReactorGroup::builder("127.0.0.1:8080".parse().unwrap(), 4)
        .handler(Counting)
        .build();

    let shutdown = group.shutdown_handle();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        shutdown.store(true, std::sync::atomic::Ordering::Release);
    });

    group.launch().await;
}
