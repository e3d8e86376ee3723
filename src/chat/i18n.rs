use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Hi];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
        }
    }

    /// BCP 47 locale used for speech synthesis and recognition.
    pub fn locale(self) -> &'static str {
        match self {
            Lang::En => "en-IN",
            Lang::Hi => "hi-IN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Hi => "हिंदी",
        }
    }

    /// Pick the display language: a valid stored choice wins, otherwise Hindi
    /// when the system locale is Hindi, otherwise English.
    pub fn detect(stored: Option<&str>, system_locale: Option<&str>) -> Lang {
        if let Some(lang) = stored.and_then(|s| s.parse::<Lang>().ok()) {
            return lang;
        }
        match system_locale {
            Some(locale) if locale.to_lowercase().starts_with("hi") => Lang::Hi,
            _ => Lang::En,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "hi" => Ok(Lang::Hi),
            _ => Err(AdvisorError::ParseError(format!(
                "Unsupported language: '{s}'. Use en or hi"
            ))),
        }
    }
}

/// UI message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppName,
    Tagline,
    Intro,
    Greeting,
    EnterData,
    ChatWithAi,
    Speak,
    Stop,
    Send,
    UploadImage,
    Recommendations,
    Offline,
    Online,
    Sync,
    SoilType,
    Rainfall,
    Temperature,
    Ph,
    Acreage,
    Irrigation,
    Budget,
    PreviousCrop,
    Yes,
    No,
    EnterMessage,
    Yield,
    Profit,
    Sustainability,
    CropSuggestion,
}

impl MessageKey {
    pub const ALL: [MessageKey; 29] = [
        MessageKey::AppName,
        MessageKey::Tagline,
        MessageKey::Intro,
        MessageKey::Greeting,
        MessageKey::EnterData,
        MessageKey::ChatWithAi,
        MessageKey::Speak,
        MessageKey::Stop,
        MessageKey::Send,
        MessageKey::UploadImage,
        MessageKey::Recommendations,
        MessageKey::Offline,
        MessageKey::Online,
        MessageKey::Sync,
        MessageKey::SoilType,
        MessageKey::Rainfall,
        MessageKey::Temperature,
        MessageKey::Ph,
        MessageKey::Acreage,
        MessageKey::Irrigation,
        MessageKey::Budget,
        MessageKey::PreviousCrop,
        MessageKey::Yes,
        MessageKey::No,
        MessageKey::EnterMessage,
        MessageKey::Yield,
        MessageKey::Profit,
        MessageKey::Sustainability,
        MessageKey::CropSuggestion,
    ];

    /// Stable snake_case identifier, as exposed by the web API.
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::AppName => "app_name",
            MessageKey::Tagline => "tagline",
            MessageKey::Intro => "intro",
            MessageKey::Greeting => "greeting",
            MessageKey::EnterData => "enter_data",
            MessageKey::ChatWithAi => "chat_with_ai",
            MessageKey::Speak => "speak",
            MessageKey::Stop => "stop",
            MessageKey::Send => "send",
            MessageKey::UploadImage => "upload_image",
            MessageKey::Recommendations => "recommendations",
            MessageKey::Offline => "offline",
            MessageKey::Online => "online",
            MessageKey::Sync => "sync",
            MessageKey::SoilType => "soil_type",
            MessageKey::Rainfall => "rainfall",
            MessageKey::Temperature => "temperature",
            MessageKey::Ph => "ph",
            MessageKey::Acreage => "acreage",
            MessageKey::Irrigation => "irrigation",
            MessageKey::Budget => "budget",
            MessageKey::PreviousCrop => "previous_crop",
            MessageKey::Yes => "yes",
            MessageKey::No => "no",
            MessageKey::EnterMessage => "enter_message",
            MessageKey::Yield => "yield",
            MessageKey::Profit => "profit",
            MessageKey::Sustainability => "sustainability",
            MessageKey::CropSuggestion => "crop_suggestion",
        }
    }

    fn texts(self) -> (&'static str, &'static str) {
        match self {
            MessageKey::AppName => ("KrishiAI", "कृषिAI"),
            MessageKey::Tagline => (
                "AI-powered crop advisor for higher income and sustainable farming",
                "एआई आधारित फसल सलाहकार – आय बढ़ाएँ और टिकाऊ खेती करें",
            ),
            MessageKey::Intro => (
                "Works offline. Choose language, enter data or ask questions, and get personalized crop advice.",
                "एप्प ऑफलाइन में भी चलता है। अपनी भाषा चुनें, डाटा भरें या सवाल पूछें, और व्यक्तिगत फसल सलाह पाएँ।",
            ),
            MessageKey::Greeting => (
                "Hello! Ask any farming question or speak/type below.",
                "नमस्ते! खेती से जुड़े सवाल पूछें या नीचे बोलें/लिखें।",
            ),
            MessageKey::EnterData => ("Enter Farm Data", "खेत का डाटा भरें"),
            MessageKey::ChatWithAi => ("Ask KrishiAI", "कृषिAI से पूछें"),
            MessageKey::Speak => ("Speak", "बोलें"),
            MessageKey::Stop => ("Stop", "रोकें"),
            MessageKey::Send => ("Send", "भेजें"),
            MessageKey::UploadImage => ("Leaf/Soil Image", "पत्ती/मिट्टी की फोटो"),
            MessageKey::Recommendations => ("Recommendations", "सुझाव"),
            MessageKey::Offline => ("Offline", "ऑफलाइन"),
            MessageKey::Online => ("Online", "ऑनलाइन"),
            MessageKey::Sync => ("Sync", "सिंक"),
            MessageKey::SoilType => ("Soil Type", "मिट्टी का प्रकार"),
            MessageKey::Rainfall => ("Rainfall (mm)", "वर्षा (मिमी)"),
            MessageKey::Temperature => ("Temperature (°C)", "तापमान (°C)"),
            MessageKey::Ph => ("Soil pH", "मिट्टी का pH"),
            MessageKey::Acreage => ("Acreage (ha)", "क्षेत्रफल (हे.)"),
            MessageKey::Irrigation => ("Irrigation", "सिंचाई"),
            MessageKey::Budget => ("Budget (₹/ha)", "बजट (₹/हे.)"),
            MessageKey::PreviousCrop => ("Previous Crop", "पिछली फसल"),
            MessageKey::Yes => ("Yes", "हाँ"),
            MessageKey::No => ("No", "नहीं"),
            MessageKey::EnterMessage => ("Type your question…", "अपना सवाल लिखें…"),
            MessageKey::Yield => ("Yield", "उत्पादन"),
            MessageKey::Profit => ("Profit", "मुनाफ़ा"),
            MessageKey::Sustainability => ("Sustainability", "सस्टेनेबिलिटी"),
            MessageKey::CropSuggestion => ("Crop suggestion", "फसल सुझाव"),
        }
    }
}

/// Translate a message key.
pub fn t(key: MessageKey, lang: Lang) -> &'static str {
    let (en, hi) = key.texts();
    match lang {
        Lang::En => en,
        Lang::Hi => hi,
    }
}

/// Every message for one language, keyed by message id.
pub fn catalog(lang: Lang) -> BTreeMap<&'static str, &'static str> {
    MessageKey::ALL
        .iter()
        .map(|key| (key.id(), t(*key, lang)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_codes_and_locales() {
        assert_eq!(Lang::En.code(), "en");
        assert_eq!(Lang::Hi.code(), "hi");
        assert_eq!(Lang::En.locale(), "en-IN");
        assert_eq!(Lang::Hi.locale(), "hi-IN");
        assert_eq!(Lang::Hi.to_string(), "hi");
    }

    #[test]
    fn test_lang_from_str() {
        assert_eq!("HI".parse::<Lang>().unwrap(), Lang::Hi);
        assert_eq!("en".parse::<Lang>().unwrap(), Lang::En);
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn test_detect_prefers_stored() {
        assert_eq!(Lang::detect(Some("hi"), Some("en-US")), Lang::Hi);
        assert_eq!(Lang::detect(Some("en"), Some("hi-IN")), Lang::En);
    }

    #[test]
    fn test_detect_ignores_invalid_stored() {
        assert_eq!(Lang::detect(Some("xx"), Some("hi_IN.UTF-8")), Lang::Hi);
        assert_eq!(Lang::detect(Some("xx"), None), Lang::En);
    }

    #[test]
    fn test_detect_from_system_locale() {
        assert_eq!(Lang::detect(None, Some("HI-in")), Lang::Hi);
        assert_eq!(Lang::detect(None, Some("en_GB.UTF-8")), Lang::En);
        assert_eq!(Lang::detect(None, None), Lang::En);
    }

    #[test]
    fn test_t_translates() {
        assert_eq!(t(MessageKey::Send, Lang::En), "Send");
        assert_eq!(t(MessageKey::Send, Lang::Hi), "भेजें");
        assert_eq!(t(MessageKey::Profit, Lang::Hi), "मुनाफ़ा");
    }

    #[test]
    fn test_catalog_complete_and_unique() {
        let en = catalog(Lang::En);
        let hi = catalog(Lang::Hi);
        assert_eq!(en.len(), MessageKey::ALL.len());
        assert_eq!(hi.len(), MessageKey::ALL.len());
        assert_eq!(en["previous_crop"], "Previous Crop");
        assert!(hi.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_lang_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Lang::Hi).unwrap(), "\"hi\"");
        let lang: Lang = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Lang::En);
    }
}
