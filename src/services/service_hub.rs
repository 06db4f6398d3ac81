//! ServiceHub - Background Service Management
//!
//! Owns a tokio runtime on its own thread and runs network work there,
//! reporting results to the UI as `AppEvent`s.

use gpui::Global;

use crate::eventing::app_event::AppEvent;
use crate::services::members_api;
use crate::state::log_state::LogLevel;

/// Commands that can be sent to services
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Fetch the member list from the given URL
    FetchMembers { url: String },
}

/// ServiceHub manages all background services
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to services
    command_tx: flume::Sender<ServiceCommand>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its worker thread
    pub fn new(event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();

        Self::start_command_handler(command_rx, event_tx.clone());

        Self {
            event_tx,
            command_tx,
        }
    }

    /// Start the command handler thread
    fn start_command_handler(
        command_rx: flume::Receiver<ServiceCommand>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        let spawned = std::thread::Builder::new()
            .name("service-hub".to_string())
            .spawn(move || {
                let rt = match tokio::runtime::Builder::new_multi_thread()
                    .worker_threads(1)
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to create tokio runtime");
                        let _ = event_tx.send(AppEvent::error(format!(
                            "Failed to start background services: {err}"
                        )));
                        drain_without_runtime(command_rx, event_tx);
                        return;
                    }
                };

                rt.block_on(async move {
                    let client = match members_api::build_client() {
                        Ok(client) => Some(client),
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to build HTTP client");
                            None
                        }
                    };

                    while let Ok(cmd) = command_rx.recv_async().await {
                        match cmd {
                            ServiceCommand::FetchMembers { url } => {
                                handle_fetch(client.as_ref(), &url, &event_tx).await;
                            }
                        }
                    }
                    tracing::debug!("Service command channel closed");
                });
            });

        if let Err(err) = spawned {
            tracing::error!(error = %err, "Failed to spawn service thread");
        }
    }

    /// Send a command to the services
    pub fn send(&self, cmd: ServiceCommand) {
        if self.command_tx.send(cmd).is_err() {
            tracing::warn!("Service thread is gone; command dropped");
        }
    }

    /// Request the member list
    pub fn fetch_members(&self, url: impl Into<String>) {
        self.send(ServiceCommand::FetchMembers { url: url.into() });
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

async fn handle_fetch(client: Option<&reqwest::Client>, url: &str, event_tx: &flume::Sender<AppEvent>) {
    let Some(client) = client else {
        let _ = event_tx.send(AppEvent::error("HTTP client unavailable; members not loaded"));
        let _ = event_tx.send(AppEvent::MembersFetchFailed);
        return;
    };

    let _ = event_tx.send(AppEvent::info(format!("Loading members from {url}")));

    match members_api::fetch_members(client, url).await {
        Ok(members) => {
            let loaded = if members.is_empty() {
                AppEvent::log(LogLevel::Warn, "Member list is empty")
            } else {
                AppEvent::info(format!("Loaded {} members", members.len()))
            };
            let _ = event_tx.send(loaded);
            let _ = event_tx.send(AppEvent::MembersLoaded { members });
        }
        Err(err) => {
            tracing::error!(error = %err, "Error fetching members");
            let _ = event_tx.send(AppEvent::error(format!("Error fetching members: {err}")));
            let _ = event_tx.send(AppEvent::MembersFetchFailed);
        }
    }
}

/// Fail every request when no runtime could be built
fn drain_without_runtime(command_rx: flume::Receiver<ServiceCommand>, event_tx: flume::Sender<AppEvent>) {
    while let Ok(cmd) = command_rx.recv() {
        match cmd {
            ServiceCommand::FetchMembers { .. } => {
                let _ = event_tx.send(AppEvent::MembersFetchFailed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn serve(response: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members.json"))
            .respond_with(response)
            .mount(&server)
            .await;
        server
    }

    /// Collect events up to and including the fetch outcome
    async fn events_until_outcome(event_rx: &flume::Receiver<AppEvent>) -> Vec<AppEvent> {
        let mut events = Vec::new();
        loop {
            let event = tokio::time::timeout(Duration::from_secs(5), event_rx.recv_async())
                .await
                .expect("fetch outcome in time")
                .expect("hub alive");
            let done = !matches!(event, AppEvent::Log { .. });
            events.push(event);
            if done {
                return events;
            }
        }
    }

    #[tokio::test]
    async fn server_error_reports_failure() {
        let server = serve(ResponseTemplate::new(500)).await;
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        let hub = ServiceHub::new(event_tx);

        hub.fetch_members(format!("{}/members.json", server.uri()));

        let events = events_until_outcome(&event_rx).await;
        assert!(matches!(events.last(), Some(AppEvent::MembersFetchFailed)));
        assert!(events.iter().any(|e| matches!(
            e,
            AppEvent::Log { level: LogLevel::Error, .. }
        )));
    }

    #[tokio::test]
    async fn members_are_delivered() {
        let body = r#"[{"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}]"#;
        let server = serve(ResponseTemplate::new(200).set_body_raw(body, "application/json")).await;
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        let hub = ServiceHub::new(event_tx);

        hub.fetch_members(format!("{}/members.json", server.uri()));

        let events = events_until_outcome(&event_rx).await;
        match events.last() {
            Some(AppEvent::MembersLoaded { members }) => {
                assert_eq!(members.len(), 1);
                assert_eq!(members[0].name, "Aaron Miles");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_list_is_logged_as_warning() {
        let server = serve(ResponseTemplate::new(200).set_body_raw("[]", "application/json")).await;
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        let hub = ServiceHub::new(event_tx);

        hub.fetch_members(format!("{}/members.json", server.uri()));

        let events = events_until_outcome(&event_rx).await;
        assert!(matches!(events.last(), Some(AppEvent::MembersLoaded { members }) if members.is_empty()));
        assert!(events.iter().any(|e| matches!(
            e,
            AppEvent::Log { level: LogLevel::Warn, .. }
        )));
    }
}
