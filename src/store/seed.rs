use crate::models::{ServiceCategory, ServiceItem};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?q=80&w=800&auto=format&fit=crop")
}

/// Catalog written to storage the first time the service store is opened.
pub fn default_catalog() -> Vec<ServiceItem> {
    vec![
        ServiceItem {
            id: "cat-1".to_string(),
            category: ServiceCategory::Catering,
            title: "Wedding Catering".to_string(),
            title_hi: "शादी खान-पान".to_string(),
            description: "Traditional Pahadi and multi-cuisine experience with a focus on hygiene and presentation.".to_string(),
            description_hi: "स्वच्छता और प्रस्तुति पर ध्यान देने के साथ पारंपरिक पहाड़ी और बहु-व्यंजन अनुभव।".to_string(),
            images: vec![
                unsplash("1555244162-803834f70033"),
                unsplash("1533143708019-ea5cfa80213e"),
                unsplash("1544124499-58ec52cf37ee"),
                unsplash("1519225421980-715cb0215aed"),
            ],
            menu: Some(strings(&[
                "Kumaoni Raita",
                "Bhatt ki Churkani",
                "Paneer Butter Masala",
                "Jhangora ki Kheer",
            ])),
            menu_hi: Some(strings(&[
                "कुमाऊँनी रायता",
                "भट्ट की चुड़कानी",
                "पनीर बटर मसाला",
                "झंगोरा की खीर",
            ])),
        },
        ServiceItem {
            id: "cat-2".to_string(),
            category: ServiceCategory::Catering,
            title: "Reception & Event Buffet".to_string(),
            title_hi: "रिसेप्शन और इवेंट बुफे".to_string(),
            description: "Modern global buffet featuring live counters, mocktails, and gourmet appetizers.".to_string(),
            description_hi: "लाइव काउंटर, मॉकटेल और गॉरमेट ऐपेटाइज़र के साथ आधुनिक ग्लोबल बुफे।".to_string(),
            images: vec![
                unsplash("1467003909585-2f8a72700288"),
                unsplash("1551135049-8a33b5883817"),
                unsplash("1504674900247-0877df9cc836"),
                unsplash("1543007630-9710e4a00a20"),
            ],
            menu: Some(strings(&[
                "Grilled Starters",
                "Exotic Salads",
                "Fusion Pasta",
                "Ice Cream Sundae Bar",
            ])),
            menu_hi: Some(strings(&[
                "ग्रिल्ड स्टार्टर्स",
                "विदेशी सलाद",
                "फ्यूजन पास्ता",
                "आइसक्रीम संडे बार",
            ])),
        },
        ServiceItem {
            id: "dec-1".to_string(),
            category: ServiceCategory::Decoration,
            title: "Royal Stage Decoration".to_string(),
            title_hi: "शाही स्टेज सजावट".to_string(),
            description: "Elegant stage setup with gold accents, rich fabrics, and majestic floral arrangements.".to_string(),
            description_hi: "सोने के लहजे, समृद्ध कपड़ों और आलीशान फूलों की व्यवस्था के साथ सुंदर स्टेज सेटअप।".to_string(),
            images: vec![
                unsplash("1519741497674-611481863552"),
                unsplash("1515934751635-c81c6bc9a2d8"),
                unsplash("1520854221256-17451cc331bf"),
                unsplash("1561912734-77436329486c"),
            ],
            menu: None,
            menu_hi: None,
        },
        ServiceItem {
            id: "dec-2".to_string(),
            category: ServiceCategory::Decoration,
            title: "Floral & Entrance Theme".to_string(),
            title_hi: "फ्लोरल और प्रवेश द्वार थीम".to_string(),
            description: "Breathtaking floral pathways and grand entrances that leave a lasting impression.".to_string(),
            description_hi: "शानदार फूलों के रास्ते और भव्य प्रवेश द्वार जो एक स्थायी प्रभाव छोड़ते हैं।".to_string(),
            images: vec![
                unsplash("1513151233558-d860c5398176"),
                unsplash("1522673607200-164883eecd4c"),
                unsplash("1533777857889-4be7c70b33f7"),
                unsplash("1525268771113-32d9e9021a97"),
            ],
            menu: None,
            menu_hi: None,
        },
        ServiceItem {
            id: "dec-3".to_string(),
            category: ServiceCategory::Decoration,
            title: "Tent & Lighting Decor".to_string(),
            title_hi: "टेंट और लाइटिंग सजावट".to_string(),
            description: "Magical lighting setups and grand tenting structures for outdoor night celebrations.".to_string(),
            description_hi: "बाहरी रात के समारोहों के लिए जादुई लाइटिंग सेटअप और भव्य टेंटिंग संरचनाएं।".to_string(),
            images: vec![
                unsplash("1532712938310-34cb3982ef74"),
                unsplash("1527529482837-4698179dc6ce"),
                unsplash("1511795409834-ef04bbd61622"),
                unsplash("1469334031218-e382a71b716b"),
            ],
            menu: None,
            menu_hi: None,
        },
    ]
}
