use serde::{Deserialize, Serialize};

use super::Language;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Catering,
    Decoration,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Catering => "catering",
            ServiceCategory::Decoration => "decoration",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "catering" => Some(ServiceCategory::Catering),
            "decoration" => Some(ServiceCategory::Decoration),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: String,
    pub category: ServiceCategory,
    pub title: String,
    pub title_hi: String,
    pub description: String,
    pub description_hi: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_hi: Option<Vec<String>>,
}

/// A service rendered in a single language, as the storefront lists it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocalizedService<'a> {
    pub id: &'a str,
    pub category: ServiceCategory,
    pub title: &'a str,
    pub description: &'a str,
    pub images: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<&'a [String]>,
}

impl ServiceItem {
    pub fn localized(&self, lang: Language) -> LocalizedService<'_> {
        LocalizedService {
            id: &self.id,
            category: self.category,
            title: self.localized_title(lang),
            description: self.localized_description(lang),
            images: &self.images,
            menu: self.localized_menu(lang),
        }
    }

    pub fn localized_title(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.title,
            Language::Hi => &self.title_hi,
        }
    }

    pub fn localized_description(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.description,
            Language::Hi => &self.description_hi,
        }
    }

    pub fn localized_menu(&self, lang: Language) -> Option<&[String]> {
        match lang {
            Language::En => self.menu.as_deref(),
            Language::Hi => self.menu_hi.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoration_item_omits_menu() {
        let item = ServiceItem {
            id: "dec-9".to_string(),
            category: ServiceCategory::Decoration,
            title: "Stage".to_string(),
            title_hi: "स्टेज".to_string(),
            description: "Stage setup".to_string(),
            description_hi: "स्टेज सेटअप".to_string(),
            images: vec![],
            menu: None,
            menu_hi: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "decoration");
        assert_eq!(json["titleHi"], "स्टेज");
        assert!(json.get("menu").is_none());
        assert!(json.get("menuHi").is_none());
        assert_eq!(item.localized_title(Language::Hi), "स्टेज");
        assert!(item.localized_menu(Language::En).is_none());

        let hindi = serde_json::to_value(item.localized(Language::Hi)).unwrap();
        assert_eq!(hindi["title"], "स्टेज");
        assert_eq!(hindi["description"], "स्टेज सेटअप");
        assert!(hindi.get("menu").is_none());
    }

    #[test]
    fn test_localized_picks_menu_for_language() {
        let item = ServiceItem {
            id: "cat-9".to_string(),
            category: ServiceCategory::Catering,
            title: "Feast".to_string(),
            title_hi: "भोज".to_string(),
            description: "Local dishes".to_string(),
            description_hi: "स्थानीय व्यंजन".to_string(),
            images: vec!["a.jpg".to_string()],
            menu: Some(vec!["Kheer".to_string()]),
            menu_hi: Some(vec!["खीर".to_string()]),
        };
        let english = item.localized(Language::En);
        assert_eq!(english.title, "Feast");
        assert_eq!(english.menu, Some(&["Kheer".to_string()][..]));
        assert_eq!(item.localized(Language::Hi).menu, Some(&["खीर".to_string()][..]));
        assert_eq!(english.images, &["a.jpg".to_string()][..]);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(ServiceCategory::parse("Catering"), Some(ServiceCategory::Catering));
        assert_eq!(ServiceCategory::parse("decoration"), Some(ServiceCategory::Decoration));
        assert_eq!(ServiceCategory::parse("music"), None);
    }
}
