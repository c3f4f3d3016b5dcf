//! The upload state machine.
//!
//! All mutable UI state lives in one [`UploadController`] instance: the
//! pending set, the busy flag, the single error slot, and the latest result
//! set. Event handlers translate DOM interactions into [`UploadEvent`]
//! values and feed them through [`UploadController::apply`]; rendering is a
//! pure function of the controller's fields. The controller never touches
//! the network itself — when a submission is accepted it hands the files
//! back as a [`Transition::StartSubmission`], and the component layer
//! reports the settled request back as [`UploadEvent::ResponseReceived`].
//!
//! Generic over the file handle so the whole lifecycle is testable on the
//! host without a rendering surface.

use crate::intake::PendingSet;
use crate::services::upload::ResultRow;
use crate::types::{CandidateFile, SubmitError, UiError};

/// User interactions and request settlements, as explicit events.
#[derive(Debug)]
pub enum UploadEvent<H> {
    /// Files arrived from the picker or a drop.
    FilesChosen(Vec<CandidateFile<H>>),
    /// The remove button of the pending row at `index` was clicked.
    FileRemoved(usize),
    /// The form was submitted.
    SubmitRequested,
    /// The in-flight request settled, successfully or not.
    ResponseReceived(Result<Vec<ResultRow>, SubmitError>),
}

/// Side effect the component layer must carry out after an event.
#[derive(Debug)]
pub enum Transition<H> {
    /// Nothing to do beyond re-rendering.
    None,
    /// Issue the HTTP request for these files, then dispatch
    /// [`UploadEvent::ResponseReceived`] with the outcome.
    StartSubmission(Vec<CandidateFile<H>>),
}

/// Stateful façade over the drop surface, the pending set, and the
/// submission/result cycle.
#[derive(Clone, Debug, Default)]
pub struct UploadController<H> {
    pending: PendingSet<H>,
    busy: bool,
    error: Option<UiError>,
    results: Option<Vec<ResultRow>>,
}

impl<H: Clone> UploadController<H> {
    pub fn new() -> Self {
        UploadController {
            pending: PendingSet::new(),
            busy: false,
            error: None,
            results: None,
        }
    }

    /// Files currently awaiting submission, in arrival order.
    pub fn pending(&self) -> &[CandidateFile<H>] {
        self.pending.files()
    }

    /// True strictly while one submission request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The single user-visible error slot.
    pub fn error(&self) -> Option<&UiError> {
        self.error.as_ref()
    }

    /// The latest batch of per-file outcomes, replacing any prior batch.
    pub fn results(&self) -> Option<&[ResultRow]> {
        self.results.as_deref()
    }

    /// Advance the state machine by one event.
    ///
    /// The pending set is locked while a submission is in flight: selection
    /// and removal events arriving during that window are rejected no-ops.
    pub fn apply(&mut self, event: UploadEvent<H>) -> Transition<H> {
        match event {
            UploadEvent::FilesChosen(batch) => {
                if self.busy {
                    log::warn!("file selection ignored while a submission is in flight");
                    return Transition::None;
                }
                let outcome = self.pending.add(batch);
                // Single error slot: only the last rejection of the batch
                // stays visible; an all-accepted batch clears stale errors.
                self.error = outcome
                    .rejected
                    .into_iter()
                    .last()
                    .map(|(_, err)| UiError::Validation(err));
                Transition::None
            }
            UploadEvent::FileRemoved(index) => {
                if self.busy {
                    log::warn!("file removal ignored while a submission is in flight");
                    return Transition::None;
                }
                if let Err(e) = self.pending.remove_at(index) {
                    // Broken wiring, not user error: report loudly, keep the
                    // error slot for the user-facing channel.
                    log::error!("{}", e);
                }
                Transition::None
            }
            UploadEvent::SubmitRequested => {
                if self.busy {
                    log::warn!("submit ignored while a submission is in flight");
                    return Transition::None;
                }
                if self.pending.is_empty() {
                    self.error = Some(UiError::Submission(SubmitError::NoFilesSelected));
                    return Transition::None;
                }
                self.busy = true;
                self.error = None;
                self.results = None;
                Transition::StartSubmission(self.pending.files().to_vec())
            }
            UploadEvent::ResponseReceived(outcome) => {
                self.busy = false;
                match outcome {
                    Ok(rows) => {
                        self.pending.clear();
                        self.results = Some(rows);
                    }
                    Err(err) => {
                        // Pending files stay put so the user can retry.
                        self.error = Some(UiError::Submission(err));
                    }
                }
                Transition::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size_bytes: u64) -> CandidateFile<()> {
        CandidateFile { name: name.to_string(), size_bytes, handle: () }
    }

    fn converted(name: &str) -> ResultRow {
        ResultRow::Converted {
            original_filename: name.to_string(),
            pages: 1,
            processing_time: 0.5,
            output_filename: format!("{}.out", name),
        }
    }

    #[test]
    fn submit_with_empty_set_fails_locally_without_a_request() {
        let mut c: UploadController<()> = UploadController::new();
        let transition = c.apply(UploadEvent::SubmitRequested);
        assert!(matches!(transition, Transition::None));
        assert_eq!(
            c.error(),
            Some(&UiError::Submission(SubmitError::NoFilesSelected))
        );
        assert!(!c.is_busy());
    }

    #[test]
    fn accepted_submit_sets_busy_and_hands_back_the_files() {
        let mut c = UploadController::new();
        c.apply(UploadEvent::FilesChosen(vec![file("a.pdf", 10), file("b.png", 20)]));
        assert!(!c.is_busy());

        let transition = c.apply(UploadEvent::SubmitRequested);
        let Transition::StartSubmission(files) = transition else {
            panic!("expected a submission to start");
        };
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "a.pdf");
        assert!(c.is_busy());
        assert!(c.error().is_none());
    }

    #[test]
    fn submit_clears_stale_error_and_results() {
        let mut c = UploadController::new();
        // Leave a validation error and a result set behind.
        c.apply(UploadEvent::FilesChosen(vec![file("a.pdf", 10)]));
        c.apply(UploadEvent::SubmitRequested);
        c.apply(UploadEvent::ResponseReceived(Ok(vec![converted("a.pdf")])));
        c.apply(UploadEvent::FilesChosen(vec![file("b.doc", 10), file("c.pdf", 10)]));
        assert!(c.error().is_some());
        assert!(c.results().is_some());

        c.apply(UploadEvent::SubmitRequested);
        assert!(c.error().is_none());
        assert!(c.results().is_none());
        assert!(c.is_busy());
    }

    #[test]
    fn successful_settlement_clears_pending_and_replaces_results() {
        let mut c = UploadController::new();
        c.apply(UploadEvent::FilesChosen(vec![file("a.pdf", 10)]));
        c.apply(UploadEvent::SubmitRequested);
        assert!(c.is_busy());

        c.apply(UploadEvent::ResponseReceived(Ok(vec![converted("a.pdf")])));
        assert!(!c.is_busy());
        assert!(c.pending().is_empty());
        assert_eq!(c.results().map(<[_]>::len), Some(1));
    }

    #[test]
    fn failed_settlement_keeps_pending_and_surfaces_the_error() {
        let mut c = UploadController::new();
        c.apply(UploadEvent::FilesChosen(vec![file("a.pdf", 10)]));
        c.apply(UploadEvent::SubmitRequested);

        c.apply(UploadEvent::ResponseReceived(Err(SubmitError::Server {
            status: 500,
            message: "All files failed to process".to_string(),
        })));
        assert!(!c.is_busy());
        assert_eq!(c.pending().len(), 1);
        assert_eq!(
            c.error().map(ToString::to_string).as_deref(),
            Some("All files failed to process")
        );
        assert!(c.results().is_none());
    }

    #[test]
    fn pending_set_is_locked_while_busy() {
        let mut c = UploadController::new();
        c.apply(UploadEvent::FilesChosen(vec![file("a.pdf", 10)]));
        c.apply(UploadEvent::SubmitRequested);

        c.apply(UploadEvent::FilesChosen(vec![file("b.png", 20)]));
        c.apply(UploadEvent::FileRemoved(0));
        assert_eq!(c.pending().len(), 1);
        assert_eq!(c.pending()[0].name, "a.pdf");

        // A second submit during the window is also a no-op.
        assert!(matches!(c.apply(UploadEvent::SubmitRequested), Transition::None));
        assert!(c.is_busy());
    }

    #[test]
    fn only_the_last_rejection_of_a_batch_is_visible() {
        let mut c = UploadController::new();
        c.apply(UploadEvent::FilesChosen(vec![
            file("a.doc", 10),
            file("b.xls", 10),
            file("c.pdf", 10),
        ]));
        let message = c.error().map(ToString::to_string).unwrap();
        assert!(message.contains("b.xls"));
        assert_eq!(c.pending().len(), 1);
    }

    #[test]
    fn all_accepted_batch_clears_a_stale_validation_error() {
        let mut c = UploadController::new();
        c.apply(UploadEvent::FilesChosen(vec![file("a.doc", 10)]));
        assert!(c.error().is_some());
        c.apply(UploadEvent::FilesChosen(vec![file("b.pdf", 10)]));
        assert!(c.error().is_none());
    }

    #[test]
    fn removal_misuse_leaves_state_intact() {
        let mut c = UploadController::new();
        c.apply(UploadEvent::FilesChosen(vec![file("a.pdf", 10)]));
        c.apply(UploadEvent::FileRemoved(7));
        assert_eq!(c.pending().len(), 1);
        assert!(c.error().is_none());
    }

    #[test]
    fn busy_flag_spans_exactly_the_request_window() {
        let mut c = UploadController::new();
        assert!(!c.is_busy());

        c.apply(UploadEvent::FilesChosen(vec![file("a.pdf", 10)]));
        assert!(!c.is_busy());

        c.apply(UploadEvent::SubmitRequested);
        assert!(c.is_busy());

        c.apply(UploadEvent::ResponseReceived(Err(SubmitError::Network(
            "connection reset".to_string(),
        ))));
        assert!(!c.is_busy());

        // And again for the success path.
        c.apply(UploadEvent::SubmitRequested);
        assert!(c.is_busy());
        c.apply(UploadEvent::ResponseReceived(Ok(vec![converted("a.pdf")])));
        assert!(!c.is_busy());
    }
}
