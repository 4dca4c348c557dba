//! # Mutation Dialog
//!
//! The create/update form state machine. It owns the draft for its open
//! lifetime, validates locally before any network call, and on success
//! closes, resets, and asks the owning list to resynchronize through an
//! injected refresh callback. It never mutates list state directly.

use std::future::Future;

use crate::api::error::ApiResult;
use crate::models::drafts::Draft;
use crate::models::records::Ack;

/// What a submit attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// A previous submit is still in flight; nothing was sent
    Busy,
    /// Local validation failed; nothing was sent
    Invalid(String),
    /// The mutation succeeded; the dialog closed and the list was asked to
    /// refresh
    Saved(String),
    /// The mutation failed; the dialog stays open with the draft intact
    Failed(String),
}

/// A stateful create/update form bound to one draft type
pub struct MutationDialog<D: Draft> {
    draft: D,
    open: bool,
    busy: bool,
    on_saved: Option<Box<dyn FnMut() + Send>>,
}

impl<D: Draft> MutationDialog<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            open: false,
            busy: false,
            on_saved: None,
        }
    }

    /// Install the refresh callback invoked after a successful submit
    pub fn on_saved(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_saved = Some(Box::new(callback));
        self
    }

    /// Open with a fresh default draft (create dialogs)
    pub fn open(&mut self) {
        self.draft = D::default();
        self.open = true;
    }

    /// Open prefilled from an existing record (update dialogs)
    pub fn open_with(&mut self, draft: D) {
        self.draft = draft;
        self.open = true;
    }

    /// Close and discard the draft
    pub fn close(&mut self) {
        self.open = false;
        self.draft = D::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a submit is in flight; drivers disable form controls
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Validate and submit the draft through the supplied repository
    /// operation
    pub async fn submit<F, Fut>(&mut self, send: F) -> DialogOutcome
    where
        F: FnOnce(D) -> Fut,
        Fut: Future<Output = ApiResult<Ack>>,
    {
        if self.busy {
            return DialogOutcome::Busy;
        }
        if let Err(err) = self.draft.validate() {
            return DialogOutcome::Invalid(err.to_string());
        }

        self.busy = true;
        let result = send(self.draft.clone()).await;
        self.busy = false;

        match result {
            Ok(ack) => {
                self.open = false;
                self.draft = D::default();
                if let Some(callback) = self.on_saved.as_mut() {
                    callback();
                }
                DialogOutcome::Saved(ack.message)
            }
            Err(err) => {
                tracing::warn!(%err, "mutation failed");
                DialogOutcome::Failed(err.to_string())
            }
        }
    }
}

impl<D: Draft> Default for MutationDialog<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::models::drafts::FaqDraft;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn faq_draft() -> FaqDraft {
        FaqDraft {
            question: "How do I buy tickets?".to_string(),
            answer: "Online.".to_string(),
        }
    }

    #[tokio::test]
    async fn invalid_draft_should_never_reach_the_network() {
        let sent = Arc::new(AtomicUsize::new(0));
        let sent_in_op = Arc::clone(&sent);

        let mut dialog: MutationDialog<FaqDraft> = MutationDialog::new();
        dialog.open();
        // question left empty

        let outcome = dialog
            .submit(|_draft| async move {
                sent_in_op.fetch_add(1, Ordering::SeqCst);
                Ok(Ack {
                    message: "created".to_string(),
                })
            })
            .await;

        assert_eq!(
            outcome,
            DialogOutcome::Invalid("Question is required".to_string())
        );
        assert_eq!(sent.load(Ordering::SeqCst), 0, "zero network calls");
        assert!(dialog.is_open());
    }

    #[tokio::test]
    async fn successful_submit_should_close_reset_and_invoke_refresh() {
        let refreshed = Arc::new(AtomicUsize::new(0));
        let refreshed_in_cb = Arc::clone(&refreshed);

        let mut dialog: MutationDialog<FaqDraft> =
            MutationDialog::new().on_saved(move || {
                refreshed_in_cb.fetch_add(1, Ordering::SeqCst);
            });
        dialog.open();
        *dialog.draft_mut() = faq_draft();

        let outcome = dialog
            .submit(|_draft| async {
                Ok(Ack {
                    message: "FAQ created successfully".to_string(),
                })
            })
            .await;

        assert_eq!(
            outcome,
            DialogOutcome::Saved("FAQ created successfully".to_string())
        );
        assert!(!dialog.is_open());
        assert_eq!(dialog.draft(), &FaqDraft::default(), "draft reset");
        assert_eq!(refreshed.load(Ordering::SeqCst), 1, "list asked to refresh");
        assert!(!dialog.is_busy());
    }

    #[tokio::test]
    async fn failed_submit_should_keep_the_dialog_open_with_the_draft_intact() {
        let mut dialog: MutationDialog<FaqDraft> = MutationDialog::new();
        dialog.open();
        *dialog.draft_mut() = faq_draft();

        let outcome = dialog
            .submit(|_draft| async {
                Err(ApiError::RequestFailed {
                    status: 422,
                    message: "question already exists".to_string(),
                })
            })
            .await;

        assert_eq!(
            outcome,
            DialogOutcome::Failed("question already exists".to_string())
        );
        assert!(dialog.is_open(), "user can correct and resubmit");
        assert_eq!(dialog.draft(), &faq_draft());
        assert!(!dialog.is_busy());
    }

    #[tokio::test]
    async fn submitted_draft_should_carry_current_toggle_state() {
        // Regression guard: some upstream dialogs sent hardcoded defaults
        // instead of the form's current toggles.
        use crate::models::drafts::{Attachment, NewBanner};
        use bytes::Bytes;

        let mut dialog: MutationDialog<NewBanner> = MutationDialog::new();
        dialog.open();
        *dialog.draft_mut() = NewBanner {
            title: "Summer Fest".to_string(),
            event_id: "e1".to_string(),
            image: Some(Attachment::new(
                "b.png",
                "image/png",
                Bytes::from_static(b"png"),
            )),
            is_featured: true,
            is_active: false,
        };

        let outcome = dialog
            .submit(|draft| async move {
                assert!(draft.is_featured, "featured toggle must survive submit");
                assert!(!draft.is_active, "active toggle must survive submit");
                Ok(Ack {
                    message: "Banner created successfully".to_string(),
                })
            })
            .await;

        assert!(matches!(outcome, DialogOutcome::Saved(_)));
    }

    #[tokio::test]
    async fn close_should_discard_the_draft() {
        let mut dialog: MutationDialog<FaqDraft> = MutationDialog::new();
        dialog.open();
        *dialog.draft_mut() = faq_draft();
        dialog.close();
        assert_eq!(dialog.draft(), &FaqDraft::default());
        assert!(!dialog.is_open());
    }
}
