//! Modal dialog state machine shared by the funds and add-trader forms.
//!
//! ```text
//! Closed --open--> Open --submit--> Submitting --ok--> Closed
//!                  ^  |                  |
//!                  |  +--cancel--> Closed |
//!                  +------error-----------+
//! ```
//!
//! The draft lives inside the `Open`/`Submitting` variants, so closing a
//! modal always discards it and reopening starts from an empty draft.

use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal<D> {
    #[default]
    Closed,
    Open {
        draft: D,
        /// Last validation or submit failure, shown inside the modal.
        error: Option<String>,
    },
    Submitting {
        draft: D,
    },
}

/// Why a submit did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    NotOpen,
    AlreadySubmitting,
    /// The draft failed validation; the modal stays open.
    Invalid(ValidationError),
}

impl fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitBlocked::NotOpen => write!(f, "Form is not open"),
            SubmitBlocked::AlreadySubmitting => write!(f, "Already submitting"),
            SubmitBlocked::Invalid(reason) => write!(f, "{}", reason),
        }
    }
}

impl<D: Default + Clone> Modal<D> {
    /// Open with an empty draft. No-op when already open or submitting.
    pub fn open(&mut self) {
        if matches!(self, Modal::Closed) {
            *self = Modal::Open {
                draft: D::default(),
                error: None,
            };
        }
    }

    /// Close and drop the draft. Only an `Open` modal can be cancelled.
    pub fn cancel(&mut self) -> bool {
        if matches!(self, Modal::Open { .. }) {
            *self = Modal::Closed;
            true
        } else {
            false
        }
    }

    /// Draft for editing. `None` unless `Open`.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            Modal::Open { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Modal::Open { draft, .. } | Modal::Submitting { draft } => Some(draft),
            Modal::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Modal::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Validate the draft and move to `Submitting`.
    ///
    /// A validation failure keeps the modal `Open` with the reason attached.
    pub fn begin_submit<V, E, F>(&mut self, validate: F) -> Result<V, SubmitBlocked>
    where
        F: FnOnce(&D) -> Result<V, E>,
        E: Into<ValidationError>,
    {
        match self {
            Modal::Closed => Err(SubmitBlocked::NotOpen),
            Modal::Submitting { .. } => Err(SubmitBlocked::AlreadySubmitting),
            Modal::Open { draft, error } => match validate(draft) {
                Ok(value) => {
                    let draft = std::mem::take(draft);
                    *self = Modal::Submitting { draft };
                    Ok(value)
                }
                Err(e) => {
                    let reason = e.into();
                    *error = Some(reason.to_string());
                    Err(SubmitBlocked::Invalid(reason))
                }
            },
        }
    }

    /// Submit succeeded: close and drop the draft.
    pub fn finish_ok(&mut self) {
        if matches!(self, Modal::Submitting { .. }) {
            *self = Modal::Closed;
        }
    }

    /// Submit failed: back to `Open` with the draft kept for correction.
    pub fn finish_err(&mut self, reason: impl Into<String>) {
        if let Modal::Submitting { draft } = self {
            let draft = std::mem::take(draft);
            *self = Modal::Open {
                draft,
                error: Some(reason.into()),
            };
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Modal::Submitting { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Modal::Closed)
    }
}
