//! Domain models shared between the selector and the presenter. These types
//! stay light-weight data holders so the other layers can focus on querying
//! and formatting logic.

/// A single display-ready piece of content. Constructed fresh from one
/// database row (or two adjacent poem lines) per invocation and discarded
/// after printing; it carries no identity beyond the print call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Ready-to-print body: a quote, a hadith, or a pre-joined poem couplet.
    pub text: String,
    /// Attribution, possibly translated to the canonical Arabic compiler name
    /// for hadith rows.
    pub author: String,
    /// Category label for display: a wisdom tag, a poet era, or the fixed
    /// hadith label.
    pub sub: String,
}

impl Content {
    /// Whether the category label marks this as prophetic hadith. The
    /// presenter switches the attribution color on this.
    pub fn is_hadith(&self) -> bool {
        self.sub.contains("حديث") || self.sub.contains("Hadith")
    }
}

/// Which logical table/predicate the selector queries. The unresolved "show
/// me anything" CLI path picks one of these at random before the selector
/// ever runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Poems,
    Quotes,
    Hadith,
}

impl Mode {
    /// Every concrete mode, in the order the random draw samples them.
    pub const ALL: [Mode; 3] = [Mode::Poems, Mode::Quotes, Mode::Hadith];
}
