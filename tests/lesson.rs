use std::process::Command;

use futures_concurrency::future::Join;
use tutor::lesson::demonstrate_concept;

#[tutor::test]
async fn returns_the_expected_result() {
    assert_eq!(demonstrate_concept().await, "Expected Result");
}

#[tutor::test]
async fn repeated_runs_are_identical() {
    let first = demonstrate_concept().await;
    let second = demonstrate_concept().await;
    assert_eq!(first, second);
    assert_eq!(second, "Expected Result");
}

#[tutor::test]
async fn concurrent_runs_do_not_interfere() {
    let (first, second) = (demonstrate_concept(), demonstrate_concept()).join().await;
    assert_eq!(first, "Expected Result");
    assert_eq!(second, "Expected Result");
}

#[test]
fn lesson_binary_prints_the_result() {
    let output = Command::new(env!("CARGO_BIN_EXE_lesson"))
        .output()
        .expect("failed to run the lesson binary");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Expected Result\n"
    );
}

#[test]
fn lesson_binary_output_does_not_accumulate_state() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_lesson"))
            .output()
            .expect("failed to run the lesson binary")
    };
    assert_eq!(run().stdout, run().stdout);
}
