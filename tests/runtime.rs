use tutor::runtime::block_on;

#[test]
fn block_on_returns_the_future_output() {
    assert_eq!(block_on(async { 6 * 7 }), 42);
}

#[test]
#[should_panic(expected = "cannot tutor::runtime::block_on inside an existing block_on")]
fn nested_block_on_panics() {
    block_on(async {
        block_on(async {});
    });
}

#[test]
#[should_panic(expected = "within a tutor runtime")]
fn reactor_requires_a_running_event_loop() {
    let _ = tutor::runtime::Reactor::current();
}

#[test]
#[should_panic(expected = "can never be woken")]
fn pending_future_without_timers_is_a_deadlock() {
    block_on(std::future::pending::<()>());
}
