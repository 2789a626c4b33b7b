//! Canned chat answers keyed by keyword.
//!
//! Not wired into the chat send path: a failed request always produces
//! [`super::chat::APOLOGY_MESSAGE`]. Hosts that want an offline answer can
//! call [`fallback_response`] themselves.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;

/// Answer used when no keyword matches.
pub const DEFAULT_FALLBACK: &str = "That's a great question! Let me connect you with our team for detailed \
     information. Please use the contact form below or reach out to us directly.";

/// Keyword → answer, checked in order. The first key contained in the
/// lowercased message wins.
pub const FALLBACK_RESPONSES: &[(&str, &str)] = &[
    (
        "services",
        "We offer 3D concrete printing for residential and commercial builds, custom architectural \
         elements, and on-site robotic printing partnerships.",
    ),
    (
        "cost",
        "Pricing depends on project size, design complexity, and site conditions. Share a few details \
         through the contact form and we'll prepare an estimate.",
    ),
    (
        "price",
        "Pricing depends on project size, design complexity, and site conditions. Share a few details \
         through the contact form and we'll prepare an estimate.",
    ),
    (
        "time",
        "Printing a typical structure's walls takes days rather than weeks. Overall timelines depend on \
         permitting and finishing work.",
    ),
    (
        "material",
        "We print with engineered concrete mixes designed for layer bonding, strength, and durability.",
    ),
    (
        "sustainab",
        "Printing places material only where it's needed, which cuts waste and lowers the carbon \
         footprint of a build.",
    ),
    (
        "partner",
        "We partner with developers, architects, and contractors. Choose \"Partnership\" in the contact \
         form and tell us about your company.",
    ),
    (
        "demo",
        "We'd love to show you the robot in action. Request a demo through the contact form and we'll \
         find a time.",
    ),
];

/// Look up a canned answer for `message`.
#[must_use]
pub fn fallback_response(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    FALLBACK_RESPONSES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(DEFAULT_FALLBACK, |(_, answer)| *answer)
}
