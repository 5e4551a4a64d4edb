// src/site_content.rs
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};

/// A string carried in both supported locales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub de: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, de: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            de: de.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::De => &self.de,
        }
    }
}

/// Flat record of strings a detail modal displays. Resolved from a content
/// record for one locale at the moment the modal opens; it is not updated if
/// the locale changes while the modal stays open.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalPayload {
    pub category: String,
    pub title: String,
    pub location: String,
    pub result: String,
    pub description: String,
    pub quote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub category: LocalizedText,
    pub title: LocalizedText,
    pub location: LocalizedText,
    pub result: LocalizedText,
    pub description: LocalizedText,
    #[serde(default)]
    pub quote: Option<LocalizedText>,
}

impl Achievement {
    pub fn payload(&self, locale: Locale) -> ModalPayload {
        ModalPayload {
            category: self.category.get(locale).to_string(),
            title: self.title.get(locale).to_string(),
            location: self.location.get(locale).to_string(),
            result: self.result.get(locale).to_string(),
            description: self.description.get(locale).to_string(),
            quote: self.quote.as_ref().map(|q| q.get(locale).to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub field: LocalizedText,
    pub location: LocalizedText,
    pub role: LocalizedText,
    pub description: LocalizedText,
    #[serde(default)]
    pub quote: Option<LocalizedText>,
}

impl Partner {
    pub fn payload(&self, locale: Locale) -> ModalPayload {
        ModalPayload {
            category: self.field.get(locale).to_string(),
            title: self.name.clone(),
            location: self.location.get(locale).to_string(),
            result: self.role.get(locale).to_string(),
            description: self.description.get(locale).to_string(),
            quote: self.quote.as_ref().map(|q| q.get(locale).to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub text: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSection {
    pub number: u8,
    pub years: String,
    pub title: LocalizedText,
    pub summary: LocalizedText,
    pub milestones: Vec<Milestone>,
}

/// Everything the sections render, fetched once at startup from
/// public/content/site.json.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub timeline: Vec<TimelineSection>,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn achievement(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn partner(&self, id: &str) -> Option<&Partner> {
        self.partners.iter().find(|p| p.id == id)
    }

    pub fn section(&self, number: u8) -> Option<&TimelineSection> {
        self.timeline.iter().find(|s| s.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::SECTION_COUNT;

    const SITE_JSON: &str = include_str!("../public/content/site.json");

    fn sample() -> SiteContent {
        SiteContent::from_json(SITE_JSON).expect("shipped site.json must parse")
    }

    #[test]
    fn shipped_content_parses() {
        let content = sample();
        assert!(!content.achievements.is_empty());
        assert!(!content.partners.is_empty());
        assert_eq!(content.timeline.len(), SECTION_COUNT as usize);
    }

    #[test]
    fn timeline_sections_are_numbered_in_order() {
        let content = sample();
        for (idx, section) in content.timeline.iter().enumerate() {
            assert_eq!(section.number as usize, idx + 1);
            assert!(!section.milestones.is_empty());
        }
        assert!(content.section(2).is_some());
        assert!(content.section(SECTION_COUNT + 1).is_none());
    }

    #[test]
    fn achievement_payload_resolves_one_locale() {
        let achievement = Achievement {
            id: "test".into(),
            category: LocalizedText::new("Championship", "Meisterschaft"),
            title: LocalizedText::new("Title", "Titel"),
            location: LocalizedText::new("Nice, France", "Nizza, Frankreich"),
            result: LocalizedText::new("2nd place", "2. Platz"),
            description: LocalizedText::new("Long day.", "Langer Tag."),
            quote: None,
        };
        let payload = achievement.payload(Locale::De);
        assert_eq!(payload.category, "Meisterschaft");
        assert_eq!(payload.result, "2. Platz");
        assert_eq!(payload.quote, None);
    }

    #[test]
    fn partner_payload_keeps_the_name_verbatim() {
        let content = sample();
        let partner = &content.partners[0];
        let en = partner.payload(Locale::En);
        let de = partner.payload(Locale::De);
        assert_eq!(en.title, partner.name);
        assert_eq!(de.title, partner.name);
    }

    #[test]
    fn lookup_by_unknown_id_is_none() {
        let content = sample();
        assert!(content.achievement("nope").is_none());
        assert!(content.partner("nope").is_none());
    }
}
