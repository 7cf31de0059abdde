//! Concurrent dispatch against a shared route table.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_keep_their_params() {
    let addr: SocketAddr = "127.0.0.1:28291".parse().unwrap();
    let shutdown = common::start_server(addr, param_router::app::routes()).await;

    let concurrency = 20;
    let requests_per_task = 50;
    let client = reqwest::Client::new();
    let start = Instant::now();

    let mut handles = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let mut ok = 0;
            for i in 0..requests_per_task {
                let url = format!("http://{}/users/{}/addresses/{}", addr, task, i);
                let res = client.get(url).send().await.unwrap();
                assert_eq!(res.status(), 200);
                let body = res.text().await.unwrap();
                assert_eq!(body, format!("retrieve user {}'s address {}\n", task, i));
                ok += 1;
            }
            ok
        }));
    }

    let mut total = 0;
    for handle in handles {
        total += handle.await.unwrap();
    }
    let elapsed = start.elapsed();

    assert_eq!(total, concurrency * requests_per_task);
    println!(
        "{} requests in {:?} ({:.0} req/s)",
        total,
        elapsed,
        total as f64 / elapsed.as_secs_f64()
    );
    assert!(elapsed < Duration::from_secs(60));

    shutdown.trigger();
}
