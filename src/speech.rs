//! Speeches, the unit of input of every feature.
use crate::annotation::Document;

/// Role of the speaker in the plenary session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Ordinary,
    DeputySpeaker,
    Speaker,
}

impl Role {
    /// Guess the role from the free-form speech header.
    ///
    /// "varapuhemies" (deputy speaker) has to be checked first since it contains "puhemies".
    pub fn from_header(header: &str) -> Self {
        let header = header.to_lowercase();
        if header.contains("varapuhemies") {
            Role::DeputySpeaker
        } else if header.contains("puhemies") {
            Role::Speaker
        } else {
            Role::Ordinary
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> u8 {
        match role {
            Role::Ordinary => 0,
            Role::DeputySpeaker => 1,
            Role::Speaker => 2,
        }
    }
}

/// A single speech, with its cleaned/lemmatized versions and its eventual annotation.
#[derive(Debug, Clone, Default)]
pub struct Speech {
    pub id: String,
    pub year: Option<i32>,
    pub role: Role,
    pub speaker: Option<String>,
    pub content: Option<String>,
    pub clean_content: Option<String>,
    pub lemmatized_content: Option<String>,
    pub annotation: Option<Document>,
}

impl Speech {
    pub fn new(id: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            id: id.into(),
            year,
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_clean_content(mut self, clean_content: impl Into<String>) -> Self {
        self.clean_content = Some(clean_content.into());
        self
    }

    pub fn with_lemmatized_content(mut self, lemmatized_content: impl Into<String>) -> Self {
        self.lemmatized_content = Some(lemmatized_content.into());
        self
    }

    pub fn with_annotation(mut self, annotation: Document) -> Self {
        self.annotation = Some(annotation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn roles() {
        assert_eq!(Role::from_header("Ed. Virtanen /kesk"), Role::Ordinary);
        assert_eq!(Role::from_header("Puhemies Paavo Lipponen"), Role::Speaker);
        assert_eq!(
            Role::from_header("Ensimmäinen varapuhemies Tarja Filatov"),
            Role::DeputySpeaker
        );
        assert_eq!(Role::from_header("VARAPUHEMIES"), Role::DeputySpeaker);
    }

    #[test]
    fn role_codes() {
        assert_eq!(u8::from(Role::Ordinary), 0);
        assert_eq!(u8::from(Role::DeputySpeaker), 1);
        assert_eq!(u8::from(Role::Speaker), 2);
    }
}
