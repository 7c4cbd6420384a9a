/// Application constants
///
/// Environment variable names, provider endpoints and the fixed
/// caller-facing messages of the relay.
// ============================================================================
// Environment Variables
// ============================================================================
/// Resend API key credential
pub const ENV_API_KEY: &str = "RESEND_API_KEY";

/// Address that receives contact-form submissions
pub const ENV_TO_EMAIL: &str = "CONTACT_FORM_TO_EMAIL";

/// Verified sender address used as `from`
pub const ENV_FROM_EMAIL: &str = "CONTACT_FORM_FROM_EMAIL";

/// Optional override for the provider base URL
pub const ENV_API_URL: &str = "RESEND_API_URL";

// ============================================================================
// Provider
// ============================================================================

/// Default Resend API base URL
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Resend send-email path
pub const RESEND_EMAILS_PATH: &str = "/emails";

// ============================================================================
// Email Content
// ============================================================================

/// Prefix prepended to the submitted subject
pub const SUBJECT_PREFIX: &str = "New Contact Form Submission: ";

/// Footer line appended to every relayed message
pub const EMAIL_FOOTER: &str =
    "This email was sent from the contact form on the Crystron Technologies website.";

// ============================================================================
// Response Messages
// ============================================================================

pub const MSG_SUCCESS: &str = "Thank you! Your message has been sent successfully.";

pub const MSG_MISSING_FIELDS: &str = "Oops! All fields are required.";

pub const MSG_CONFIG_ERROR: &str =
    "Server configuration error. Please contact support if this issue persists.";

pub const MSG_UNEXPECTED_ERROR: &str =
    "Something went wrong on our end. Failed to send your message.";

/// Prefix for provider-reported failures; the provider message follows
pub const MSG_PROVIDER_ERROR_PREFIX: &str = "Failed to send message. Service error: ";

/// The only method the relay accepts
pub const ALLOWED_METHOD: &str = "POST";
