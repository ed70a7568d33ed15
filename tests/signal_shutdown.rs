//! Runs the built `account-server` binary, interrupts it with SIGINT and
//! checks that it exits cleanly and stops accepting connections.
#![cfg(unix)]

use std::net::SocketAddr;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::Duration;

use tokio::net::{TcpListener, TcpStream};
use tokio::time::{sleep, Instant};

/// Helper: reserve a free loopback port for the child process.
async fn free_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Helper: poll `/` until the server answers.
async fn wait_until_ready(addr: SocketAddr) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Ok(res) = reqwest::get(format!("http://{}/", addr)).await {
            if res.status().is_success() {
                return;
            }
        }
        assert!(Instant::now() < deadline, "server on {} never became ready", addr);
        sleep(Duration::from_millis(50)).await;
    }
}

/// Helper: wait for the child to exit without blocking the runtime.
async fn wait_for_exit(child: &mut Child) -> ExitStatus {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            panic!("server did not exit after SIGINT");
        }
        sleep(Duration::from_millis(50)).await;
    }
}

#[tokio::test]
async fn sigint_drains_and_exits_successfully() {
    let addr = free_addr().await;

    let mut child = Command::new(env!("CARGO_BIN_EXE_account-server"))
        .env("ACCOUNT_SERVER_ADDR", addr.to_string())
        .env("RUST_LOG", "warn")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start account-server");

    wait_until_ready(addr).await;

    let res = reqwest::get(format!("http://{}/accounts/42", addr))
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), r#"{"id":42}"#);

    let sent = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .expect("failed to run kill");
    assert!(sent.success());

    let status = wait_for_exit(&mut child).await;
    assert!(status.success(), "unexpected exit status {:?}", status);
    assert!(TcpStream::connect(addr).await.is_err());
}
