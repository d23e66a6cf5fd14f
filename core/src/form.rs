//! State behind the breakdown form: what the user has typed and toggled,
//! whether a request is outstanding, and the last result or error.

use crate::model::{Framework, GenerationRequest, Length, Section, Tone, ValidationError};

pub const EMPTY_PROBLEM_MESSAGE: &str = "Please enter a problem to break down.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a problem to break down.")]
    EmptyProblem,
    #[error("a breakdown is already in progress")]
    Busy,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub problem: String,
    toggles: Vec<(Framework, bool)>,
    pub tone: Tone,
    pub length: Length,
    loading: bool,
    result: Option<Vec<Section>>,
    error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            problem: String::new(),
            toggles: enum_iterator::all::<Framework>()
                .map(|f| (f, f.enabled_by_default()))
                .collect(),
            tone: Tone::default(),
            length: Length::default(),
            loading: false,
            result: None,
            error: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_problem(&mut self, problem: impl Into<String>) {
        self.problem = problem.into();
    }

    pub fn toggle(&mut self, framework: Framework) {
        if let Some((_, on)) = self.toggles.iter_mut().find(|(f, _)| *f == framework) {
            *on = !*on;
        }
    }

    pub fn is_selected(&self, framework: Framework) -> bool {
        self.toggles
            .iter()
            .any(|(f, on)| *f == framework && *on)
    }

    /// Selected frameworks in declaration order.
    pub fn selected_frameworks(&self) -> Vec<Framework> {
        self.toggles
            .iter()
            .filter(|(_, on)| *on)
            .map(|(f, _)| *f)
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn result(&self) -> Option<&[Section]> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates the form and, on success, enters the loading state and
    /// returns the request to send. A blank problem never leaves the form.
    pub fn submit(&mut self) -> Result<GenerationRequest, FormError> {
        if self.loading {
            return Err(FormError::Busy);
        }
        self.error = None;

        let request = GenerationRequest::new(
            &self.problem,
            self.selected_frameworks(),
            self.tone,
            self.length,
        )
        // tone, length and toggles are typed, so only the problem can fail
        .map_err(|_: ValidationError| FormError::EmptyProblem);

        match request {
            Ok(request) => {
                self.loading = true;
                self.result = None;
                Ok(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Records the outcome of the outstanding request and leaves loading.
    pub fn complete(&mut self, outcome: Result<Vec<Section>, String>) {
        self.loading = false;
        match outcome {
            Ok(sections) => self.result = Some(sections),
            Err(message) => self.error = Some(message),
        }
    }
}
