//! Intake controller
//!
//! Orchestrates validation, the staged progress animation, report building
//! and notifications for one session at a time.
//!
//! The controller runs as a single task that owns all session state.
//! Hosts talk to it through an [`IntakeHandle`]; commands are queued and
//! handled one after another, so a new file always supersedes the previous
//! session before anything of it is painted.

use crate::application::dto::{IntakeEvent, IntakeOptions, IntakePhase, IntakeSnapshot};
use crate::application::notifications::{Notification, NotificationCenter, NotificationKind};
use crate::domain::entities::{ExportDocument, FileCandidate, ProgressStep, Report, UploadedFile};
use crate::domain::repositories::Clock;
use crate::domain::services::{
    CancelHandle, FileValidator, ProgressSimulator, ReportBuilder, SimulationOutcome, cancel_pair,
};
use crate::error::{IntakeError, Result};
use crate::presentation::report::{ReportRenderer, ScreenReport};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Stream of events emitted by a running controller
pub type IntakeEvents = mpsc::UnboundedReceiver<IntakeEvent>;

enum Command {
    Submit {
        files: Vec<FileCandidate>,
        reply: oneshot::Sender<Result<u64>>,
    },
    Reset,
    Export(oneshot::Sender<Option<ExportDocument>>),
    Report(oneshot::Sender<Option<Report>>),
    Notify(Notification),
    Dismiss(NotificationKind),
    Snapshot(oneshot::Sender<IntakeSnapshot>),
}

/// Messages from a session's progress task back to the controller
enum SessionSignal {
    Step { session: u64, step: ProgressStep },
    Finished { session: u64, outcome: SimulationOutcome },
}

struct Session {
    id: u64,
    file: UploadedFile,
    cancel: CancelHandle,
    task: Option<JoinHandle<()>>,
    progress: Option<ProgressStep>,
    report: Option<Report>,
    screen: Option<ScreenReport>,
}

impl Session {
    fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Cloneable front door to a running controller
#[derive(Clone)]
pub struct IntakeHandle {
    commands: mpsc::Sender<Command>,
}

impl IntakeHandle {
    async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| IntakeError::ControllerClosed)
    }

    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.send(make(tx)).await?;
        rx.await.map_err(|_| IntakeError::ControllerClosed)
    }

    /// Offers a single file; returns the new session id when accepted
    pub async fn submit(&self, candidate: FileCandidate) -> Result<u64> {
        self.submit_batch(vec![candidate]).await
    }

    /// Offers a drop or picker selection; only the first file is considered
    pub async fn submit_batch(&self, files: Vec<FileCandidate>) -> Result<u64> {
        self.request(|reply| Command::Submit { files, reply })
            .await?
    }

    /// Drops the active session and returns to idle
    pub async fn reset(&self) -> Result<()> {
        self.send(Command::Reset).await
    }

    /// Plain-text export of the presented report, if one is presented
    pub async fn export(&self) -> Result<Option<ExportDocument>> {
        self.request(Command::Export).await
    }

    /// The presented report, if any
    pub async fn report(&self) -> Result<Option<Report>> {
        self.request(Command::Report).await
    }

    /// Shows a host-originated notification
    pub async fn notify(&self, notification: Notification) -> Result<()> {
        self.send(Command::Notify(notification)).await
    }

    pub async fn dismiss(&self, kind: NotificationKind) -> Result<()> {
        self.send(Command::Dismiss(kind)).await
    }

    pub async fn snapshot(&self) -> Result<IntakeSnapshot> {
        self.request(Command::Snapshot).await
    }
}

/// Owner of the single active analysis session
pub struct IntakeController {
    validator: FileValidator,
    simulator: ProgressSimulator,
    builder: ReportBuilder,
    renderer: ReportRenderer,
    clock: Arc<dyn Clock>,
    notifications: NotificationCenter,
    events: mpsc::UnboundedSender<IntakeEvent>,
    signals: mpsc::UnboundedSender<SessionSignal>,
    phase: IntakePhase,
    session: Option<Session>,
    next_session: u64,
}

impl IntakeController {
    /// Starts a controller on the current tokio runtime
    ///
    /// The controller stops once every handle has been dropped.
    pub fn spawn(options: IntakeOptions, clock: Arc<dyn Clock>) -> (IntakeHandle, IntakeEvents) {
        let (command_tx, command_rx) = mpsc::channel(options.command_capacity.max(1));
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();

        let controller = Self {
            validator: FileValidator::new(),
            simulator: ProgressSimulator::new(options.step_delay),
            builder: ReportBuilder::new(options.score_policy).with_score(options.score),
            renderer: ReportRenderer,
            clock,
            notifications: NotificationCenter::new(options.notification_ttl),
            events: event_tx,
            signals: signal_tx,
            phase: IntakePhase::Idle,
            session: None,
            next_session: 1,
        };

        tokio::spawn(controller.run(command_rx, signal_rx));

        (
            IntakeHandle {
                commands: command_tx,
            },
            event_rx,
        )
    }

    async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        mut signals: mpsc::UnboundedReceiver<SessionSignal>,
    ) {
        tracing::debug!("intake controller started");

        loop {
            let deadline = self.notifications.next_deadline();

            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                Some(signal) = signals.recv() => self.on_signal(signal),
                _ = sleep_until(deadline) => self.expire_notifications(),
            }
        }

        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        tracing::debug!("intake controller stopped");
    }

    fn emit(&self, event: IntakeEvent) {
        // A host that stopped listening is not an error.
        let _ = self.events.send(event);
    }

    fn set_phase(&mut self, phase: IntakePhase) {
        if self.phase != phase {
            tracing::debug!(from = %self.phase, to = %phase, "phase change");
            self.phase = phase;
            self.emit(IntakeEvent::PhaseChanged { phase });
        }
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Submit { files, reply } => {
                let _ = reply.send(self.submit(files));
            }
            Command::Reset => self.reset(),
            Command::Export(reply) => {
                let _ = reply.send(self.export());
            }
            Command::Report(reply) => {
                let report = self.session.as_ref().and_then(|s| s.report.clone());
                let _ = reply.send(report);
            }
            Command::Notify(notification) => self.show_notification(notification),
            Command::Dismiss(kind) => {
                if self.notifications.dismiss(kind).is_some() {
                    self.emit(IntakeEvent::NotificationCleared { kind });
                }
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(self.snapshot());
            }
        }
    }

    fn submit(&mut self, files: Vec<FileCandidate>) -> Result<u64> {
        let resume = self.phase;
        self.set_phase(IntakePhase::Validating);

        let file = match self.validator.validate_first(files, self.clock.as_ref()) {
            Ok(file) => file,
            Err(err) => {
                tracing::info!(error = %err, "file rejected");
                self.show_notification(Notification::error(err.user_message()));
                // A rejected file leaves any running session untouched.
                self.set_phase(if self.session.is_some() {
                    resume
                } else {
                    IntakePhase::Idle
                });
                return Err(err);
            }
        };

        if let Some(mut previous) = self.session.take() {
            tracing::info!(session = previous.id, "superseding session");
            previous.stop();
        }

        let id = self.next_session;
        self.next_session += 1;

        tracing::info!(
            session = id,
            name = file.name(),
            size = file.size_bytes(),
            "analysis started"
        );

        let info = self.renderer.file_info(&file);
        let (cancel, signal) = cancel_pair();
        let simulator = self.simulator.clone();
        let signals = self.signals.clone();

        let task = tokio::spawn(async move {
            let outcome = simulator
                .run(&signal, |step| {
                    let _ = signals.send(SessionSignal::Step { session: id, step });
                })
                .await;
            let _ = signals.send(SessionSignal::Finished {
                session: id,
                outcome,
            });
        });

        self.session = Some(Session {
            id,
            file,
            cancel,
            task: Some(task),
            progress: None,
            report: None,
            screen: None,
        });

        self.set_phase(IntakePhase::Analyzing);
        self.emit(IntakeEvent::FileAccepted { session: id, info });
        Ok(id)
    }

    fn on_signal(&mut self, signal: SessionSignal) {
        let current = self.session.as_ref().map(|s| s.id);

        match signal {
            SessionSignal::Step { session, step } if Some(session) == current => {
                if let Some(active) = self.session.as_mut() {
                    active.progress = Some(step);
                }
                self.emit(IntakeEvent::Progress { session, step });
            }
            SessionSignal::Finished {
                session,
                outcome: SimulationOutcome::Completed,
            } if Some(session) == current => self.present(),
            SessionSignal::Step { session, .. } | SessionSignal::Finished { session, .. } => {
                tracing::trace!(session, "dropping signal from stale session");
            }
        }
    }

    fn present(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.task = None;
        let report = self.builder.build(&session.file, self.clock.as_ref());
        let screen = self.renderer.render_on_screen(&report);
        let id = session.id;
        let name = session.file.name().to_string();

        session.report = Some(report);
        session.screen = Some(screen.clone());

        tracing::info!(session = id, "analysis complete");
        self.set_phase(IntakePhase::Presenting);
        self.emit(IntakeEvent::Results {
            session: id,
            screen,
        });
        self.show_notification(Notification::success(format!("{name} analyzed successfully.")));
    }

    fn reset(&mut self) {
        if let Some(mut session) = self.session.take() {
            tracing::info!(session = session.id, "session reset");
            session.stop();
        }
        self.set_phase(IntakePhase::Idle);
        self.emit(IntakeEvent::Reset);
    }

    fn export(&self) -> Option<ExportDocument> {
        let report = self.session.as_ref()?.report.as_ref()?;
        let document = self.renderer.text_document(report, &self.clock.now());
        tracing::info!(
            file = %document.file_name,
            bytes = document.len(),
            "report exported"
        );
        Some(document)
    }

    fn show_notification(&mut self, notification: Notification) {
        self.notifications.show(notification.clone(), Instant::now());
        self.emit(IntakeEvent::Notified { notification });
    }

    fn expire_notifications(&mut self) {
        for notification in self.notifications.expire(Instant::now()) {
            self.emit(IntakeEvent::NotificationCleared {
                kind: notification.kind,
            });
        }
    }

    fn snapshot(&self) -> IntakeSnapshot {
        let session = self.session.as_ref();
        IntakeSnapshot {
            phase: self.phase,
            session: session.map(|s| s.id),
            file: session.map(|s| s.file.clone()),
            progress: session.and_then(|s| s.progress),
            screen: session.and_then(|s| s.screen.clone()),
            notifications: self.notifications.visible(),
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
