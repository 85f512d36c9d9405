use email_address::EmailAddress;
use crate::models::{PhotoSubmission, ValidatedPhoto};

pub const MAX_TITLE_LENGTH: usize = 25;
pub const MAX_AUTHOR_LENGTH: usize = 50;
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["gif", "jpg", "png"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title length should be {MAX_TITLE_LENGTH} characters or less.")]
    TitleTooLong,
    #[error("Author length should be {MAX_AUTHOR_LENGTH} characters or less.")]
    AuthorTooLong,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Wrong input!")]
    MissingInput,
    #[error("Invalid file format. Only gif, jpg, and png are allowed.")]
    InvalidFileFormat,
}

/// Checks run in a fixed order and the first failure is reported.
pub fn validate_submission(submission: &PhotoSubmission) -> Result<ValidatedPhoto, ValidationError> {
    let title = submission.title.as_deref().unwrap_or_default();
    let author = submission.author.as_deref().unwrap_or_default();
    let email = submission.email.as_deref().unwrap_or_default();
    let file_name = submission.file_name.as_deref().unwrap_or_default();

    if title.chars().count() > MAX_TITLE_LENGTH { return Err(ValidationError::TitleTooLong); }
    if author.chars().count() > MAX_AUTHOR_LENGTH { return Err(ValidationError::AuthorTooLong); }
    if !is_valid_email(email) { return Err(ValidationError::InvalidEmail); }

    if [title, author, email, file_name].iter().any(|field| field.is_empty()) {
        return Err(ValidationError::MissingInput);
    }

    let extension = file_extension(file_name);
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::InvalidFileFormat);
    }

    Ok(ValidatedPhoto {
        title: escape_html(title),
        author: escape_html(author),
        email: escape_html(email),
        extension,
    })
}

/// Lowercased text after the last '.' of the final path segment. A name
/// without a dot yields the whole name.
pub fn file_extension(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    base.rsplit('.').next().unwrap_or(base).to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace() || c == '<' || c == '>') {
        return false;
    }

    let has_tld = email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(host, tld)| !host.is_empty() && tld.len() >= 2);

    has_tld && EmailAddress::is_valid(email)
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
