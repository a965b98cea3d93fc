//! Static service constants for the contact relay.

/// Form relay endpoint (web3forms).
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Public access key identifying this site to the relay.
pub const RELAY_ACCESS_KEY: &str = "fa917ce1-31bc-4c87-ac0d-bcf16aca9fc3";

/// Fixed subject line attached to every relayed message.
pub const RELAY_SUBJECT: &str = "New Contact Form Submission from Gemify";
