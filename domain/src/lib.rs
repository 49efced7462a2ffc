//! # Contact Form Domain
//!
//! Contains all business logic for the contact form, independent of any UI
//! framework.
//!
//! ## Module Organization
//!
//! - **validation**: Field rules for both form variants and their user-facing messages
//! - **age**: Date of birth parsing and whole-year age derivation
//! - **attachment**: Attachment allow-list checks and single-file staging
//! - **form**: The form state machine (fields, derived values, submission lifecycle)
//! - **countdown**: Success presenter countdown that returns the form to idle
//! - **submission**: Submission transport seam and the simulated transport
//! - **notify**: Notification seam for success/error toasts
//! - **clock**: Time source seam so "today" and "now" are injectable
//! - **config**: Loading and checking configuration overrides
//!
//! ## Business Rules
//!
//! - Names are 2-50 characters once trimmed; the extended variant allows letters and spaces only
//! - Emails must look like `local@domain.tld`
//! - Messages are 10-500 characters and input is truncated at the maximum
//! - Dates of birth are required on the extended variant and cannot be in the future
//! - At most one attachment is staged; disallowed or oversized files are never staged
//! - A submit issued while a submission is in flight is rejected, never queued

pub mod age;
pub mod attachment;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod form;
pub mod notify;
pub mod submission;
pub mod validation;

pub use age::*;
pub use attachment::*;
pub use clock::*;
pub use config::*;
pub use countdown::*;
pub use form::*;
pub use notify::*;
pub use submission::*;
pub use validation::*;
