//! User-facing texts. The site is Norwegian only.

/// Shown when any required field is empty.
pub const MISSING_REQUIRED: &str = "Vennligst fyll ut alle obligatoriske felter.";

/// Shown when the phone number fails the Norwegian format check.
pub const INVALID_PHONE: &str = "Vennligst oppgi et gyldig norsk telefonnummer.";

/// Shown when a non-empty email is malformed.
pub const INVALID_EMAIL: &str = "Vennligst oppgi en gyldig e-postadresse.";

/// Shown after the submission collaborator acknowledged the form.
pub const SUBMIT_SUCCESS: &str = "Takk for din henvendelse! Jeg tar kontakt snart.";

/// Shown when the submission collaborator failed.
pub const SUBMIT_FAILURE: &str = "Beklager, noe gikk galt. Prøv igjen eller ring oss direkte.";

/// Submit button label while a submission is in flight.
pub const SENDING_LABEL: &str = "Sender...";

/// Accessible label of the status message close button.
pub const DISMISS_LABEL: &str = "Lukk";
