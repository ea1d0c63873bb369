//! Greek/English UI strings.

use serde::{Deserialize, Serialize};

/// Display language. Greek is the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "el")]
    Greek,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Greek => "el",
            Language::English => "en",
        }
    }

    /// Label shown on the toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Greek => "EL",
            Language::English => "EN",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Greek => Language::English,
            Language::English => Language::Greek,
        }
    }

    /// Looks up a UI string in this language.
    pub fn text(&self, key: Text) -> &'static str {
        let (el, en) = key.translations();
        match self {
            Language::Greek => el,
            Language::English => en,
        }
    }
}

/// Keys for every translated UI string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    HeroBadge,
    HeroTitleLine1,
    HeroTitleLine2,
    HeroSubtitle,
    HeroCta,
    StatDestinations,
    StatHubs,
    StatSupportHours,
    NavContact,
    ReducedMotion,
    ContactTitle,
    ContactIntro,
    FieldName,
    FieldEmail,
    FieldSubject,
    FieldMessage,
    PlaceholderName,
    PlaceholderEmail,
    PlaceholderMessage,
    SubjectDefault,
    Submit,
    Sending,
    SuccessTitle,
    SuccessBody,
    ErrorGeneric,
    ErrorNotConfigured,
    ErrorRequired,
    ErrorInvalidEmail,
    Close,
}

impl Text {
    /// (Greek, English) pair.
    fn translations(&self) -> (&'static str, &'static str) {
        match self {
            Text::HeroBadge => ("Μετακινήσεις σε όλη την Ελλάδα", "Rides across Greece"),
            Text::HeroTitleLine1 => ("Ταξιδέψτε έξυπνα,", "Travel smart,"),
            Text::HeroTitleLine2 => ("από πόλη σε νησί.", "from city to island."),
            Text::HeroSubtitle => (
                "Κλείστε ταξί και μεταφορές σε πόλεις, λιμάνια και νησιά με μία εφαρμογή.",
                "Book taxis and transfers across cities, ports and islands with one app.",
            ),
            Text::HeroCta => ("Επικοινωνήστε μαζί μας", "Get in touch"),
            Text::StatDestinations => ("Προορισμοί", "Destinations"),
            Text::StatHubs => ("Κεντρικοί κόμβοι", "Major hubs"),
            Text::StatSupportHours => ("Ώρες εξυπηρέτησης", "Support hours"),
            Text::NavContact => ("Επικοινωνία", "Contact"),
            Text::ReducedMotion => ("Μειωμένη κίνηση", "Reduced motion"),
            Text::ContactTitle => ("Επικοινωνία", "Contact us"),
            Text::ContactIntro => (
                "Στείλτε μας μήνυμα και θα σας απαντήσουμε σύντομα.",
                "Send us a message and we will get back to you soon.",
            ),
            Text::FieldName => ("Όνομα", "Name"),
            Text::FieldEmail => ("Email", "Email"),
            Text::FieldSubject => ("Θέμα", "Subject"),
            Text::FieldMessage => ("Μήνυμα", "Message"),
            Text::PlaceholderName => ("Το όνομά σας", "Your name"),
            Text::PlaceholderEmail => ("email@example.com", "email@example.com"),
            Text::PlaceholderMessage => ("Πώς μπορούμε να βοηθήσουμε;", "How can we help?"),
            Text::SubjectDefault => ("Γενική Απορία", "General inquiry"),
            Text::Submit => ("Αποστολή", "Send"),
            Text::Sending => ("Αποστολή...", "Sending..."),
            Text::SuccessTitle => ("Ευχαριστούμε!", "Thank you!"),
            Text::SuccessBody => (
                "Το μήνυμά σας εστάλη επιτυχώς!",
                "Your message was sent successfully!",
            ),
            Text::ErrorGeneric => (
                "Κάτι πήγε στραβά. Παρακαλώ δοκιμάστε ξανά.",
                "Something went wrong. Please try again.",
            ),
            Text::ErrorNotConfigured => (
                "Η φόρμα δεν έχει συνδεθεί ακόμα. Δοκιμάστε αργότερα.",
                "Form not yet connected. Please try again later.",
            ),
            Text::ErrorRequired => (
                "Συμπληρώστε όλα τα υποχρεωτικά πεδία.",
                "Please fill in all required fields.",
            ),
            Text::ErrorInvalidEmail => ("Μη έγκυρη διεύθυνση email.", "Invalid email address."),
            Text::Close => ("Κλείσιμο", "Close"),
        }
    }
}
