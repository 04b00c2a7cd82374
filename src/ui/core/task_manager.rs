use super::actions::Action;
use crate::contact::{ClientError, FormSubmission, RelayClient};
use crate::ui::error_boundary::UiError;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// Overlay name used in boundary errors
const SUBMISSIONS_OVERLAY: &str = "Submissions";

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
}

/// Runs relay calls and delayed UI actions off the event loop. Results come
/// back as [`Action`]s on the channel returned by [`TaskManager::new`].
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
            },
        );
        task_id
    }

    /// Submit the contact form in the background
    pub fn spawn_contact_submit(&mut self, client: RelayClient, submission: FormSubmission) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let outcome = client
                .submit_contact(&submission.name, &submission.email, &submission.message)
                .await;
            let _ = action_sender.send(Action::ContactSubmitted(outcome));
        });

        self.track(handle, "Contact submission".to_string())
    }

    /// Load the submission log for the admin overlay
    pub fn spawn_submissions_fetch(&mut self, client: RelayClient) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match client.fetch_submissions().await {
                Ok(list) => Action::SubmissionsLoaded(list),
                Err(ClientError::Timeout) => Action::SubmissionsFailed(UiError::LoadTimeout {
                    overlay: SUBMISSIONS_OVERLAY,
                }),
                Err(e) => Action::SubmissionsFailed(UiError::LoadFailed {
                    overlay: SUBMISSIONS_OVERLAY,
                    reason: e.to_string(),
                }),
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, "Fetch submissions".to_string())
    }

    /// Post `action` after `delay`
    pub fn spawn_delayed(&mut self, delay: Duration, action: Action) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Delayed {:?}", action);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = action_sender.send(action);
        });

        self.track(handle, description)
    }

    /// Drop finished tasks and return their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }
        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
