use std::time::Duration;

use folio::ui::core::{Action, TaskManager};

#[tokio::test(start_paused = true)]
async fn test_delayed_action_arrives_after_delay() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_delayed(Duration::from_secs(5), Action::ClearSubmitMessage(7));
    assert_eq!(manager.task_count(), 1);

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert!(rx.try_recv().is_err());

    let action = rx.recv().await.unwrap();
    assert!(matches!(action, Action::ClearSubmitMessage(7)));

    tokio::task::yield_now().await;
    manager.cleanup_finished_tasks();
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_all_tasks() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_delayed(Duration::from_secs(1), Action::Quit);
    manager.spawn_delayed(Duration::from_secs(2), Action::Quit);
    assert_eq!(manager.task_count(), 2);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(rx.try_recv().is_err());
}
