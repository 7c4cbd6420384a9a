/// Composes the outbound email for a contact-form submission
use crate::constants::{EMAIL_FOOTER, SUBJECT_PREFIX};
use crate::models::{OutboundEmail, ProviderConfig, SubmissionInput};
use crate::utils::sanitization::{escape_html, newlines_to_br};

/// Builds the email sent to the configured inbox
///
/// The submitter's address becomes `reply_to` so that replies go back to the
/// person who filled in the form rather than to the sending address.
pub fn compose(submission: &SubmissionInput, config: &ProviderConfig) -> OutboundEmail {
    OutboundEmail::builder()
        .from(config.from_address.as_str())
        .to(vec![config.to_address.clone()])
        .subject(format!("{}{}", SUBJECT_PREFIX, submission.subject))
        .reply_to(submission.reply_to_email.as_str())
        .html(render_html(submission))
        .build()
}

/// Renders the HTML body; every submitted field is escaped
pub fn render_html(submission: &SubmissionInput) -> String {
    format!(
        "<h1>New Contact Form Submission</h1>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email (Reply-To):</strong> {email}</p>\n\
         <p><strong>Subject:</strong> {subject}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{message}</p>\n\
         <hr>\n\
         <p><em>{footer}</em></p>\n",
        name = escape_html(&submission.name),
        email = escape_html(&submission.reply_to_email),
        subject = escape_html(&submission.subject),
        message = newlines_to_br(&escape_html(&submission.message)),
        footer = EMAIL_FOOTER,
    )
}
