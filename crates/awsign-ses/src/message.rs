//! Email message model.

/// Charset SES assumes when none is given, and the one the text helper sets.
pub const UTF_8: &str = "UTF-8";

/// A piece of text with an optional charset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    /// The text itself.
    pub data: String,
    /// Its charset, such as `UTF-8` or `ISO-8859-1`.
    pub charset: Option<String>,
}

impl Content {
    /// Create content with no charset.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            charset: None,
        }
    }

    /// Create UTF-8 content.
    pub fn utf8(data: impl Into<String>) -> Self {
        Self::new(data).charset(UTF_8)
    }

    /// Set the charset.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }
}

/// Message body. Either part may be omitted, but SES requires at least one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    /// Plain text part.
    pub text: Option<Content>,
    /// HTML part.
    pub html: Option<Content>,
}

/// A formatted message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Subject line.
    pub subject: Option<Content>,
    /// Body parts.
    pub body: Body,
}

impl Message {
    /// A message with a UTF-8 subject and plain text body.
    ///
    /// # Examples
    ///
    /// ```
    /// use awsign_ses::Message;
    ///
    /// let message = Message::text("Hello", "Hi there");
    /// assert_eq!(message.subject.unwrap().charset.as_deref(), Some("UTF-8"));
    /// assert!(message.body.html.is_none());
    /// ```
    pub fn text(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: Some(Content::utf8(subject)),
            body: Body {
                text: Some(Content::utf8(body)),
                html: None,
            },
        }
    }

    /// Add an HTML part.
    #[must_use]
    pub fn html(mut self, html: Content) -> Self {
        self.body.html = Some(html);
        self
    }
}

/// Recipients of a formatted message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Destination {
    /// `To:` recipients.
    pub to: Vec<String>,
    /// `Cc:` recipients.
    pub cc: Vec<String>,
    /// `Bcc:` recipients.
    pub bcc: Vec<String>,
}

impl Destination {
    /// A destination with a single `To:` recipient.
    pub fn to(address: impl Into<String>) -> Self {
        Self {
            to: vec![address.into()],
            ..Self::default()
        }
    }

    /// Whether there is no recipient at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty()
    }
}
