//! Admin content management: editor form state, validation, and visitor review intake.
//!
//! Forms hold raw text exactly as typed. Edits are expressed as actions and
//! folded into a fresh form value, so the editor state can be replayed and
//! tested without any UI attached.

mod casino_form;
mod errors;
mod expert_form;
mod review_submission;

pub use casino_form::{
    slugify, CasinoDraft, CasinoForm, CasinoFormAction, ListField, TextField,
    EARLIEST_ESTABLISHED_YEAR,
};
pub use errors::{FieldError, FormErrors};
pub use expert_form::{CategoryInput, ExpertReviewDraft, ExpertReviewForm, ExpertReviewFormAction};
pub use review_submission::{ReviewSubmission, MAX_USER_RATING, MIN_USER_RATING};
