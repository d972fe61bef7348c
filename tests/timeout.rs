use std::future::pending;
use std::io;

use tutor::prelude::*;
use tutor::task::sleep;
use tutor::time::{Duration, Instant};

#[tutor::test]
async fn timeout_expires() -> anyhow::Result<()> {
    let res = pending::<()>().timeout(Duration::from_millis(5)).await;
    assert_eq!(res.unwrap_err().kind(), io::ErrorKind::TimedOut);
    Ok(())
}

#[tutor::test]
async fn timeout_passes_the_value_through_in_time() -> anyhow::Result<()> {
    let res = sleep(Duration::from_millis(5))
        .timeout(Duration::from_millis(100))
        .await;
    assert!(res.is_ok());
    Ok(())
}

#[tutor::test]
async fn delay_withholds_a_ready_value() -> anyhow::Result<()> {
    let start = Instant::now();
    let value = async { 42 }.delay(Duration::from_millis(5)).await;
    assert_eq!(value, 42);
    assert!(start.elapsed() >= Duration::from_millis(5));
    Ok(())
}
