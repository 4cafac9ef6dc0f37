//! Log lines are built from a user-supplied template such as
//! `[{DateTime}] {LogType} {UserName}: {Message}`. The template is parsed once into
//! segments so rendering never rescans text, including text that came from a message.

/// Closed set of known substitution tokens; anything else passes through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    DateTime,
    LogType,
    UserName,
    Message,
}

impl Placeholder {
    /// Name between the braces; also the config key that enables the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateTime => "DateTime",
            Self::LogType => "LogType",
            Self::UserName => "UserName",
            Self::Message => "Message",
        }
    }

    /// The full token as written in a template, braces included.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::DateTime => "{DateTime}",
            Self::LogType => "{LogType}",
            Self::UserName => "{UserName}",
            Self::Message => "{Message}",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::DateTime,
        Self::LogType,
        Self::UserName,
        Self::Message,
    ];
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators, unknown `{names}` and stray braces are copied as-is.
    Literal(String),
    /// Known tokens are substituted at render time.
    Placeholder(Placeholder),
}

/// Pre-parsed template: parse once, render many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Single left-to-right scan. A `{` starts a placeholder only when the text from that
    /// point begins with one of the four tokens, so `{{Message}` yields `{` followed by the
    /// message placeholder.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(ch) = rest.chars().next() {
            if ch == '{'
                && let Some(ph) = Self::match_placeholder(rest)
            {
                if !literal.is_empty() {
                    segments.push(FormatSegment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(FormatSegment::Placeholder(ph));
                rest = &rest[ph.token().len()..];
                continue;
            }

            literal.push(ch);
            rest = &rest[ch.len_utf8()..];
        }

        if !literal.is_empty() {
            segments.push(FormatSegment::Literal(literal));
        }

        Self { segments }
    }

    fn match_placeholder(text: &str) -> Option<Placeholder> {
        Placeholder::ALL
            .iter()
            .copied()
            .find(|ph| text.starts_with(ph.token()))
    }

    /// Tests and diagnostics need direct access to verify parse results.
    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Whether the template mentions `placeholder` at least once.
    #[must_use]
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| *s == FormatSegment::Placeholder(placeholder))
    }

    /// Substitutes values into the segments. No whitespace cleanup happens here; see
    /// [`finish_line`] for that.
    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::DateTime => &values.date_time,
                        Placeholder::LogType => &values.log_type,
                        Placeholder::UserName => &values.user_name,
                        Placeholder::Message => &values.message,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(crate::config::FALLBACK_FORMAT)
    }
}

/// Typed value bag, one field per placeholder. Disabled fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatValues {
    pub date_time: String,
    pub log_type: String,
    pub user_name: String,
    pub message: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn date_time(mut self, date_time: impl Into<String>) -> Self {
        self.date_time = date_time.into();
        self
    }

    /// Expects the already bracketed label, e.g. `[Info]`.
    #[must_use]
    pub fn log_type(mut self, log_type: impl Into<String>) -> Self {
        self.log_type = log_type.into();
        self
    }

    #[must_use]
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Cleans up the gaps left by disabled fields: every non-overlapping pair of spaces becomes
/// one space in a single pass (three spaces end up as two), then surrounding whitespace is
/// trimmed.
#[must_use]
pub fn finish_line(rendered: &str) -> String {
    rendered.replace("  ", " ").trim().to_string()
}
