use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};

/// A named problem-structuring technique the model is asked to apply.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    Sequence,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Framework {
    Mece,
    Swot,
    FiveWhys,
    FirstPrinciples,
    Porter,
}

impl Framework {
    /// Used when the caller selects nothing. Porter is left out on purpose.
    pub const DEFAULT_SET: [Framework; 4] = [
        Framework::Mece,
        Framework::Swot,
        Framework::FiveWhys,
        Framework::FirstPrinciples,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Mece => "MECE",
            Framework::Swot => "SWOT",
            Framework::FiveWhys => "5-Whys",
            Framework::FirstPrinciples => "First Principles",
            Framework::Porter => "Porter's 5 Forces",
        }
    }

    /// Initial toggle state on the form.
    pub fn enabled_by_default(&self) -> bool {
        matches!(
            self,
            Framework::Mece | Framework::Swot | Framework::FirstPrinciples
        )
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    Sequence,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    #[default]
    Practical,
    Consulting,
    Empathetic,
    Concise,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Practical => "Practical & actionable",
            Tone::Consulting => "Consulting / Structured",
            Tone::Empathetic => "Empathetic & coaching",
            Tone::Concise => "Short bullet points",
        }
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    Sequence,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Length {
    #[default]
    Concise,
    Detailed,
}

impl Length {
    pub fn label(&self) -> &'static str {
        match self {
            Length::Concise => "Concise",
            Length::Detailed => "Detailed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing problem")]
    MissingProblem,
    #[error("unknown framework: {0}")]
    UnknownFramework(String),
    #[error("unknown tone: {0}")]
    UnknownTone(String),
    #[error("unknown length: {0}")]
    UnknownLength(String),
}

/// A validated breakdown request. Built once per submission and consumed by
/// the prompt composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    problem: String,
    frameworks: Vec<Framework>,
    pub tone: Tone,
    pub length: Length,
}

impl GenerationRequest {
    /// Trims the problem and rejects it if nothing is left. Duplicate
    /// frameworks are dropped, keeping the first occurrence.
    pub fn new(
        problem: &str,
        frameworks: impl IntoIterator<Item = Framework>,
        tone: Tone,
        length: Length,
    ) -> Result<Self, ValidationError> {
        let problem = problem.trim();
        if problem.is_empty() {
            return Err(ValidationError::MissingProblem);
        }

        let mut selected = Vec::new();
        for framework in frameworks {
            if !selected.contains(&framework) {
                selected.push(framework);
            }
        }

        Ok(Self {
            problem: problem.to_string(),
            frameworks: selected,
            tone,
            length,
        })
    }

    /// Builds a request from raw wire strings. Unknown identifiers are
    /// rejected instead of being passed through to the model.
    pub fn parse<S: AsRef<str>>(
        problem: &str,
        frameworks: &[S],
        tone: Option<&str>,
        length: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let frameworks = frameworks
            .iter()
            .map(|id| {
                let id = id.as_ref();
                Framework::from_str(id).map_err(|_| ValidationError::UnknownFramework(id.into()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let tone = match tone {
            Some(t) => Tone::from_str(t).map_err(|_| ValidationError::UnknownTone(t.into()))?,
            None => Tone::default(),
        };
        let length = match length {
            Some(l) => Length::from_str(l).map_err(|_| ValidationError::UnknownLength(l.into()))?,
            None => Length::default(),
        };

        Self::new(problem, frameworks, tone, length)
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// The frameworks as selected, possibly empty.
    pub fn frameworks(&self) -> &[Framework] {
        &self.frameworks
    }

    /// The frameworks the prompt will name: the selection, or the default
    /// set when nothing was selected.
    pub fn effective_frameworks(&self) -> &[Framework] {
        if self.frameworks.is_empty() {
            &Framework::DEFAULT_SET
        } else {
            &self.frameworks
        }
    }
}

/// One titled, rendered chunk of the model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub outputs: Vec<Section>,
}
