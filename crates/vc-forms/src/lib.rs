#![forbid(unsafe_code)]

//! Forms for the VClasses site.
//!
//! Two forms are offered: the "Get in touch" [`ContactForm`] and the
//! course enrollment [`CheckoutForm`]. Both validate locally and report
//! errors as catalog message keys, so the renderer shows them in the
//! page's language. Submissions are logged, never sent anywhere.
//!
//! # Example
//!
//! ```
//! use vc_forms::{Acknowledgment, CheckoutForm, FormState, MemorySink};
//!
//! let mut form: FormState<CheckoutForm> = FormState::new();
//! form.values_mut().name = "Mona".into();
//! form.values_mut().phone = "01098765432".into();
//! form.values_mut().email = "mona@example.com".into();
//!
//! let mut sink = MemorySink::new();
//! let ack = form.submit_to(&mut sink);
//! assert_eq!(ack, Acknowledgment::Success { message_key: "course.successMessage" });
//! assert_eq!(sink.submissions().len(), 1);
//! ```

pub mod checkout;
pub mod contact;
pub mod error;
pub mod form;
pub mod rules;

pub use checkout::{CheckoutForm, PaymentMethod};
pub use contact::{ContactForm, MAX_EMAIL_LEN};
pub use error::{FieldError, SubmitError, ValidationErrorKind};
pub use form::{Acknowledgment, Form, FormState, LogSink, MemorySink, SubmissionSink};
pub use rules::{EmailRule, Rule, check_field};
