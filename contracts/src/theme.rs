const WEB_DEVELOPMENT: &str = "linear-gradient(135deg, #000024 0%, #00024D 50%, #1A1A2E 100%)";
const PAID_ADS: &str = "linear-gradient(135deg, #1A1A2E 0%, #2F3A8F 50%, #4A9FFF 100%)";
const FULL_STACK_MARKETING: &str = "linear-gradient(135deg, #000036 0%, #1D274F 50%, #3C5BA9 100%)";
const SOCIAL_MEDIA: &str = "linear-gradient(135deg, #18002F 0%, #3F1C7F 50%, #8B48FF 100%)";

/// Hero background for a case study detail page.
pub fn hero_gradient(category: &str) -> &'static str {
    match category {
        "Paid Ads" => PAID_ADS,
        "Full Stack Marketing" => FULL_STACK_MARKETING,
        "Social Media" => SOCIAL_MEDIA,
        _ => WEB_DEVELOPMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_uses_default_gradient() {
        assert_eq!(hero_gradient("Print"), hero_gradient("Web Development"));
        assert_ne!(hero_gradient("Paid Ads"), hero_gradient("Social Media"));
    }
}
