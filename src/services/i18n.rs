use std::collections::BTreeMap;

use crate::models::Language;

/// (key, English, Hindi)
const STRINGS: &[(&str, &str, &str)] = &[
    ("welcome", "Welcome to Devbhoomi", "देवभूमि में आपका स्वागत है"),
    ("tagline", "Making Your Special Day Unforgettable", "आपके विशेष दिन को यादगार बनाना"),
    ("selectLanguage", "Choose Your Language", "अपनी भाषा चुनें"),
    ("catering", "Catering Services", "खान-पान सेवाएं"),
    ("decoration", "Wedding Decoration", "शादी की सजावट"),
    ("bookNow", "Book Now", "अभी बुक करें"),
    ("contactUs", "Contact Us", "संपर्क करें"),
    ("fullName", "Full Name", "पूरा नाम"),
    ("mobile", "Mobile Number", "मोबाइल नंबर"),
    ("eventType", "Event Type", "कार्यक्रम का प्रकार"),
    ("eventDate", "Event Date", "कार्यक्रम की तिथि"),
    ("location", "Event Location", "कार्यक्रम का स्थान"),
    ("guests", "Number of Guests", "मेहमानों की संख्या"),
    ("notes", "Additional Notes", "अतिरिक्त निर्देश"),
    ("submit", "Submit Request", "अनुरोध भेजें"),
    ("success", "Thank You! We have received your request.", "धन्यवाद! हमें आपका अनुरोध प्राप्त हो गया है।"),
    ("whatsapp", "WhatsApp Us", "व्हाट्सएप करें"),
    ("call", "Call Us", "कॉल करें"),
    ("adminLogin", "Admin Login", "एडमिन लॉगिन"),
    ("login", "Login", "लॉगिन"),
    ("password", "Password", "पासवर्ड"),
    ("dashboard", "Admin Dashboard", "एडमिन डैशबोर्ड"),
    ("logout", "Logout", "लॉगआउट"),
    ("servicesRequired", "Services Required", "आवश्यक सेवाएं"),
    ("veg", "Veg", "शाकाहारी"),
    ("nonVeg", "Non-Veg", "माँसाहारी"),
    ("viewMenu", "View Menu", "मेन्यू देखें"),
    ("stageDecoration", "Stage Decoration", "स्टेज सजावट"),
    ("tentLighting", "Tent & Lighting", "टेंट और लाइटिंग"),
    ("floral", "Floral Decoration", "फूलों की सजावट"),
    ("theme", "Theme Wedding", "थीम वेडिंग"),
    ("address", "Haldwani, Uttarakhand, India", "हल्द्वानी, उत्तराखंड, भारत"),
];

fn pick(lang: Language, en: &'static str, hi: &'static str) -> &'static str {
    match lang {
        Language::En => en,
        Language::Hi => hi,
    }
}

pub fn translate(lang: Language, key: &str) -> Option<&'static str> {
    STRINGS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, hi)| pick(lang, en, hi))
}

pub fn table(lang: Language) -> BTreeMap<&'static str, &'static str> {
    STRINGS
        .iter()
        .map(|(k, en, hi)| (*k, pick(lang, en, hi)))
        .collect()
}
