//! Message-box placeholder keyed by the selected contact type.

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod tests;

pub const DEFAULT_PLACEHOLDER: &str = "Tell us about your project or partnership goals...";

/// Placeholder for the message field after the contact-type select changes.
/// Unknown and empty values get the default prompt.
#[must_use]
pub fn message_placeholder(contact_type: &str) -> &'static str {
    match contact_type {
        "partnership" => "Tell us about your company and how you'd like to partner with Robotic Concrete...",
        "demo" => "What type of project would you like to see demonstrated? When would be a good time?",
        "info" => "What specific information are you looking for? Any particular projects or services?",
        "consultation" => "Describe your project needs and timeline for a free consultation...",
        _ => DEFAULT_PLACEHOLDER,
    }
}
