//! Lead-capture form status machine.
//!
//! `LeadForm<S>` only exposes the transitions allowed from `S`:
//!
//! - `Idle` / `Failed` -> `Loading` through [`LeadForm::begin`] or [`LeadForm::submit`]
//! - `Loading` -> `Succeeded` | `Failed` through [`LeadForm::finish`]
//! - `Succeeded` -> `Idle` through [`LeadForm::send_another`]
//!
//! Every transition is mirrored on a watch channel as a [`FormStatus`] so a UI
//! can bind the submit control to [`FormStatus::submit_disabled`].

use std::marker::PhantomData;

use strum::Display;
use tokio::sync::watch;

use crate::{Field, FormKind, LeadEndpoint, LeadSubmission, Role, SubmitError};

pub const ERROR_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    pub fn submit_disabled(&self) -> bool {
        matches!(self, FormStatus::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),
}

#[derive(Debug)]
pub struct Idle;

#[derive(Debug)]
pub struct Loading;

#[derive(Debug)]
pub struct Succeeded;

#[derive(Debug)]
pub struct Failed;

/// States in which inputs are bound and a submit may start.
pub trait Editable {}

impl Editable for Idle {}
impl Editable for Failed {}

#[derive(Default, Clone, Debug, PartialEq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub role: Option<Role>,
    pub message: String,
}

impl LeadFields {
    fn missing_field(&self, kind: FormKind) -> Option<Field> {
        kind.required_fields()
            .iter()
            .copied()
            .find(|field| match field {
                Field::Email => self.email.trim().is_empty(),
                Field::Role => self.role.is_none(),
                Field::Message => self.message.trim().is_empty(),
            })
    }

    /// Inputs are trimmed here, the relay forwards what it receives.
    fn to_submission(&self, kind: FormKind) -> LeadSubmission {
        match kind {
            FormKind::JoinUs => LeadSubmission::new(self.email.trim()),
            FormKind::Contact => LeadSubmission {
                email: self.email.trim().to_owned(),
                name: Some(self.name.trim().to_owned()),
                organization: Some(self.organization.trim().to_owned()),
                role: self.role.map(|role| role.to_string()),
                message: Some(self.message.trim().to_owned()),
            },
        }
        .normalized()
    }
}

#[derive(Debug)]
pub struct LeadForm<S = Idle> {
    kind: FormKind,
    fields: LeadFields,
    status: watch::Sender<FormStatus>,
    _state: PhantomData<S>,
}

/// Terminal outcome of one submit attempt.
#[derive(Debug)]
pub enum Submitted {
    Success(LeadForm<Succeeded>),
    Failed(LeadForm<Failed>),
}

impl Submitted {
    pub fn status(&self) -> FormStatus {
        match self {
            Submitted::Success(form) => form.status(),
            Submitted::Failed(form) => form.status(),
        }
    }
}

impl<S> LeadForm<S> {
    fn into_state<T>(self, status: FormStatus, fields: LeadFields) -> LeadForm<T> {
        self.status.send_replace(status);

        LeadForm {
            kind: self.kind,
            fields,
            status: self.status,
            _state: PhantomData,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        *self.status.borrow()
    }

    pub fn watch(&self) -> watch::Receiver<FormStatus> {
        self.status.subscribe()
    }
}

impl LeadForm<Idle> {
    pub fn new(kind: FormKind) -> Self {
        let (status, _) = watch::channel(FormStatus::Idle);

        Self {
            kind,
            fields: LeadFields::default(),
            status,
            _state: PhantomData,
        }
    }

    pub fn join_us() -> Self {
        Self::new(FormKind::JoinUs)
    }

    pub fn contact() -> Self {
        Self::new(FormKind::Contact)
    }
}

impl<S: Editable> LeadForm<S> {
    pub fn fields_mut(&mut self) -> &mut LeadFields {
        &mut self.fields
    }

    /// Moves to `Loading` and hands out the payload to send.
    ///
    /// A missing required field leaves the form untouched.
    #[allow(clippy::result_large_err)]
    pub fn begin(self) -> Result<(LeadForm<Loading>, LeadSubmission), (Self, FormError)> {
        if let Some(field) = self.fields.missing_field(self.kind) {
            return Err((self, FormError::MissingField(field)));
        }

        let submission = self.fields.to_submission(self.kind);
        let fields = self.fields.clone();

        Ok((self.into_state(FormStatus::Loading, fields), submission))
    }

    /// Runs one full submit attempt against `endpoint`.
    #[allow(clippy::result_large_err)]
    pub async fn submit<E>(self, endpoint: &E) -> Result<Submitted, (Self, FormError)>
    where
        E: LeadEndpoint + ?Sized,
    {
        let (loading, submission) = self.begin()?;
        let outcome = endpoint.submit(&submission).await;

        Ok(loading.finish(outcome))
    }
}

impl LeadForm<Loading> {
    pub fn finish(self, outcome: Result<(), SubmitError>) -> Submitted {
        match outcome {
            Ok(()) => Submitted::Success(self.into_state(FormStatus::Success, LeadFields::default())),
            Err(err) => {
                tracing::warn!(kind = %self.kind, error = %err, "lead submission failed");

                let fields = self.fields.clone();
                Submitted::Failed(self.into_state(FormStatus::Error, fields))
            }
        }
    }
}

impl LeadForm<Succeeded> {
    pub fn send_another(self) -> LeadForm<Idle> {
        self.into_state(FormStatus::Idle, LeadFields::default())
    }
}

impl LeadForm<Failed> {
    pub fn error_message(&self) -> &'static str {
        ERROR_MESSAGE
    }
}
