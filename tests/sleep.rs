use std::error::Error;
use tutor::task::{sleep, sleep_until};
use tutor::time::{Duration, Instant};

#[tutor::test]
async fn just_sleep() -> Result<(), Box<dyn Error>> {
    sleep(Duration::from_millis(10)).await;
    Ok(())
}

#[tutor::test]
async fn sleep_has_a_lower_bound() -> Result<(), Box<dyn Error>> {
    let dur = Duration::from_millis(5);
    let start = Instant::now();
    sleep(dur).await;
    assert!(start.elapsed() >= dur);
    Ok(())
}

#[tutor::test]
async fn sleep_is_not_immediately_ready() {
    let polled = futures_lite::future::poll_once(sleep(Duration::from_secs(1))).await;
    assert!(polled.is_none());
}

#[tutor::test]
async fn sleep_until_a_deadline_in_the_past() -> Result<(), Box<dyn Error>> {
    // An already-expired deadline resolves on the first poll.
    sleep_until(Instant::now()).await;
    Ok(())
}

#[tutor::test]
async fn timers_run_in_sequence() -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    sleep(Duration::from_millis(5)).await;
    sleep(Duration::from_millis(5)).await;
    assert!(start.elapsed() >= Duration::from_millis(10));
    Ok(())
}
