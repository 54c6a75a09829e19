//! Line templates such as `{prefix} {level} {date} {caller} {msg}`, parsed once when the
//! logger is configured and rendered for every record.

/// Closed set of substitution tokens. Anything else inside braces is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Prefix,
    Level,
    Date,
    /// `file:line`, in the long or short form the flags ask for.
    Caller,
    File,
    Line,
    Msg,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Level => "level",
            Self::Date => "date",
            Self::Caller => "caller",
            Self::File => "file",
            Self::Line => "line",
            Self::Msg => "msg",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Prefix,
        Self::Level,
        Self::Date,
        Self::Caller,
        Self::File,
        Self::Line,
        Self::Msg,
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Pre-parsed template: parse once, render many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Turns `"{level} {msg}"` into a segment list.
    ///
    /// # Errors
    /// [`crate::Error::Template`] when a brace is left open, a name is unknown,
    /// or the template has no `{msg}`.
    pub fn parse(template: &str) -> Result<Self, crate::Error> {
        let mut segments = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(FormatSegment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                return Err(crate::Error::Template(format!(
                    "unclosed '{{' in \"{template}\""
                )));
            };
            let name = &after[..close];
            let ph = Placeholder::from_name(name).ok_or_else(|| {
                crate::Error::Template(format!("unknown placeholder {{{name}}}"))
            })?;
            segments.push(FormatSegment::Placeholder(ph));
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(FormatSegment::Literal(rest.to_string()));
        }

        let template = Self { segments };
        if !template.contains(Placeholder::Msg) {
            return Err(crate::Error::Template(
                "template must contain {msg}".to_string(),
            ));
        }
        Ok(template)
    }

    /// `{prefix} {level} {date} {caller} {msg}`, built directly so it can never fail.
    #[must_use]
    pub fn standard() -> Self {
        let sep = || FormatSegment::Literal(" ".to_string());
        Self {
            segments: vec![
                FormatSegment::Placeholder(Placeholder::Prefix),
                sep(),
                FormatSegment::Placeholder(Placeholder::Level),
                sep(),
                FormatSegment::Placeholder(Placeholder::Date),
                sep(),
                FormatSegment::Placeholder(Placeholder::Caller),
                sep(),
                FormatSegment::Placeholder(Placeholder::Msg),
            ],
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    #[must_use]
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| *s == FormatSegment::Placeholder(placeholder))
    }

    /// Appends the rendered template to `out`.
    ///
    /// A placeholder that renders empty also drops a whitespace-only literal right after it,
    /// so turning off the date or caller doesn't leave double spaces behind.
    pub fn render_into(&self, out: &mut String, values: &FormatValues<'_>) {
        let mut skip_separator = false;

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => {
                    if !(skip_separator && s.trim().is_empty()) {
                        out.push_str(s);
                    }
                    skip_separator = false;
                }
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Prefix => values.prefix,
                        Placeholder::Level => values.level,
                        Placeholder::Date => values.date,
                        Placeholder::Caller => values.caller,
                        Placeholder::File => values.file,
                        Placeholder::Line => values.line,
                        Placeholder::Msg => values.msg,
                    };
                    skip_separator = value.is_empty();
                    out.push_str(value);
                }
            }
        }
    }

    #[must_use]
    pub fn render(&self, values: &FormatValues<'_>) -> String {
        let mut out = String::new();
        self.render_into(&mut out, values);
        out
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => f.write_str(s)?,
                FormatSegment::Placeholder(ph) => write!(f, "{{{}}}", ph.as_str())?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for FormatTemplate {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Borrowed values for one render. Empty fields are treated as "not shown".
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatValues<'a> {
    pub prefix: &'a str,
    pub level: &'a str,
    pub date: &'a str,
    pub caller: &'a str,
    pub file: &'a str,
    pub line: &'a str,
    pub msg: &'a str,
}

impl<'a> FormatValues<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub const fn level(mut self, level: &'a str) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn date(mut self, date: &'a str) -> Self {
        self.date = date;
        self
    }

    /// `caller` is the combined `file:line`; `file` and `line` feed the separate placeholders.
    #[must_use]
    pub const fn caller(mut self, caller: &'a str, file: &'a str, line: &'a str) -> Self {
        self.caller = caller;
        self.file = file;
        self.line = line;
        self
    }

    #[must_use]
    pub const fn msg(mut self, msg: &'a str) -> Self {
        self.msg = msg;
        self
    }
}

