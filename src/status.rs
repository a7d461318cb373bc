pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We will get back to you soon.";
pub const REJECTED_MESSAGE: &str =
    "Error sending message. Please try again or contact us directly.";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Connection error. Please check your internet and try again.";

/// Outcome of the most recent submission attempt on one form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success(String),
    Failure(String),
}

impl SubmissionStatus {
    pub fn success() -> Self {
        Self::Success(SUCCESS_MESSAGE.into())
    }

    pub fn rejected() -> Self {
        Self::Failure(REJECTED_MESSAGE.into())
    }

    pub fn connection_error() -> Self {
        Self::Failure(CONNECTION_ERROR_MESSAGE.into())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(message) | Self::Failure(message) => Some(message),
            Self::Idle | Self::Sending => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn classes(&self) -> [&'static str; 2] {
        match self {
            Tone::Success => ["bg-green-50", "text-green-700"],
            Tone::Error => ["bg-red-50", "text-red-700"],
        }
    }
}

/// What the status container should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRegion {
    pub visible: bool,
    pub tone: Option<Tone>,
    pub text: String,
}

impl StatusRegion {
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(3);
        if !self.visible {
            classes.push("hidden");
        }
        if let Some(tone) = self.tone {
            classes.extend(tone.classes());
        }
        classes
    }
}

impl From<&SubmissionStatus> for StatusRegion {
    fn from(status: &SubmissionStatus) -> Self {
        let tone = match status {
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
            SubmissionStatus::Success(_) => Some(Tone::Success),
            SubmissionStatus::Failure(_) => Some(Tone::Error),
        };
        Self {
            visible: tone.is_some(),
            tone,
            text: status.message().unwrap_or_default().to_string(),
        }
    }
}

/// The submit button: disabled and relabelled while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerControl {
    pub enabled: bool,
    pub label: String,
}

impl TriggerControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            enabled: true,
            label: label.into(),
        }
    }
}
