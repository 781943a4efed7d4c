// tests/events.rs

use std::error::Error;

use tokio::sync::mpsc;

use seqrun::engine::{Sequence, StepEvent};
use seqrun::task::BoxTask;
use seqrun_test_utils::builders::{failing_task, value_task};
use seqrun_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn drain(rx: &mut mpsc::UnboundedReceiver<StepEvent>) -> Vec<StepEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn successful_run_emits_started_completed_pairs_in_order() -> TestResult {
    init_tracing();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let tasks: Vec<BoxTask<u32, String>> = vec![value_task(1), value_task(2)];

    let results = Sequence::new(tasks).with_events(tx).run().await?;
    assert_eq!(results, vec![1, 2]);

    assert_eq!(
        drain(&mut rx),
        vec![
            StepEvent::Started { step: 0 },
            StepEvent::Completed { step: 0 },
            StepEvent::Started { step: 1 },
            StepEvent::Completed { step: 1 },
        ]
    );
    Ok(())
}

#[tokio::test]
async fn failed_step_emits_failed_and_nothing_after() {
    init_tracing();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let tasks: Vec<BoxTask<u32, String>> = vec![
        value_task(1),
        failing_task("boom".to_string()),
        value_task(3),
    ];

    let cause = Sequence::new(tasks)
        .with_events(tx)
        .run()
        .await
        .unwrap_err();
    assert_eq!(cause, "boom");

    assert_eq!(
        drain(&mut rx),
        vec![
            StepEvent::Started { step: 0 },
            StepEvent::Completed { step: 0 },
            StepEvent::Started { step: 1 },
            StepEvent::Failed { step: 1 },
        ]
    );
}

#[tokio::test]
async fn dropped_receiver_does_not_disturb_the_run() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);

    let tasks: Vec<BoxTask<u32, String>> = vec![value_task(1), value_task(2)];
    let results = Sequence::new(tasks).with_events(tx).run().await?;
    assert_eq!(results, vec![1, 2]);
    Ok(())
}
