/// Icons available for result highlights. Content refers to them by key;
/// keys that are not in the table render [`ResultIcon::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultIcon {
    TrendingUp,
    Users,
    DollarSign,
    Star,
    Target,
    ShoppingCart,
    Eye,
    Default,
}

impl ResultIcon {
    pub fn resolve(key: &str) -> Self {
        match key {
            "TrendingUp" => Self::TrendingUp,
            "Users" => Self::Users,
            "DollarSign" => Self::DollarSign,
            "Star" => Self::Star,
            "Target" => Self::Target,
            "ShoppingCart" => Self::ShoppingCart,
            "Eye" => Self::Eye,
            _ => Self::Default,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::TrendingUp => "📈",
            Self::Users => "👥",
            Self::DollarSign => "💲",
            Self::Star => "⭐",
            Self::Target => "🎯",
            Self::ShoppingCart => "🛒",
            Self::Eye => "👁️",
            Self::Default => "✨",
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            Self::TrendingUp => "Growth",
            Self::Users => "Audience",
            Self::DollarSign => "Revenue",
            Self::Star => "Rating",
            Self::Target => "Targeting",
            Self::ShoppingCart => "Sales",
            Self::Eye => "Reach",
            Self::Default => "Result",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::portfolio;

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(ResultIcon::resolve("Rocket"), ResultIcon::Default);
        assert_eq!(ResultIcon::resolve(""), ResultIcon::Default);
        assert_eq!(ResultIcon::resolve("trendingup"), ResultIcon::Default);
    }

    #[test]
    fn test_authored_icon_keys_resolve() {
        for record in portfolio().get_all() {
            for result in &record.results {
                assert_ne!(
                    ResultIcon::resolve(&result.icon_key),
                    ResultIcon::Default,
                    "{} uses unknown icon {}",
                    record.slug,
                    result.icon_key
                );
            }
        }
    }
}
