//! Exact-match route table.
//!
//! Paths map to pages by plain string equality: no parameters, no nesting,
//! no trailing-slash normalization. Anything unmatched renders the home
//! composite view; there is no 404 page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every view the site router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    PrivacyPolicy,
    TermsOfService,
    Security,
    About,
    Contact,
    Integrations,
    CookiePolicy,
    Blog,
    CaseStudies,
    Careers,
    Status,
    Documentation,
    DoNotSell,
    SignIn,
    SignUp,
    Artists,
    Labels,
    Promoters,
    Community,
    Academy,
    DiscoveryEngine,
    AnalyticsDashboard,
    GeofencingSegmentation,
    CampaignOrchestration,
    AudienceContacts,
}

/// Ordered path table. The first match wins, although paths are unique.
pub const ROUTES: &[(&str, Page)] = &[
    ("/", Page::Home),
    ("/privacy-policy", Page::PrivacyPolicy),
    ("/terms-of-service", Page::TermsOfService),
    ("/security", Page::Security),
    ("/about", Page::About),
    ("/contact", Page::Contact),
    ("/integrations", Page::Integrations),
    ("/cookie-policy", Page::CookiePolicy),
    ("/blog", Page::Blog),
    ("/case-studies", Page::CaseStudies),
    ("/careers", Page::Careers),
    ("/status", Page::Status),
    ("/documentation", Page::Documentation),
    ("/do-not-sell", Page::DoNotSell),
    ("/sign-in", Page::SignIn),
    ("/sign-up", Page::SignUp),
    ("/artists", Page::Artists),
    ("/labels", Page::Labels),
    ("/promoters", Page::Promoters),
    ("/community", Page::Community),
    ("/academy", Page::Academy),
    ("/features/discovery-engine", Page::DiscoveryEngine),
    ("/features/analytics-dashboard", Page::AnalyticsDashboard),
    ("/features/geofencing-segmentation", Page::GeofencingSegmentation),
    ("/features/campaign-orchestration", Page::CampaignOrchestration),
    ("/audience/contacts", Page::AudienceContacts),
];

/// Map a pathname to its page, falling back to `Page::Home`.
pub fn resolve(path: &str) -> Page {
    ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map_or(Page::Home, |(_, page)| *page)
}

impl Page {
    /// Canonical path for this page.
    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, page)| *page == self)
            .map_or("/", |(route, _)| route)
    }

    /// Document title suffix shown in the browser tab.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Music marketing that finds your fans",
            Self::PrivacyPolicy => "Privacy Policy",
            Self::TermsOfService => "Terms of Service",
            Self::Security => "Security",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Integrations => "Integrations",
            Self::CookiePolicy => "Cookie Policy",
            Self::Blog => "Blog",
            Self::CaseStudies => "Case Studies",
            Self::Careers => "Careers",
            Self::Status => "System Status",
            Self::Documentation => "Documentation",
            Self::DoNotSell => "Do Not Sell My Personal Information",
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::Artists => "For Artists",
            Self::Labels => "For Labels",
            Self::Promoters => "For Promoters",
            Self::Community => "Community",
            Self::Academy => "Academy",
            Self::DiscoveryEngine => "Discovery Engine",
            Self::AnalyticsDashboard => "Analytics Dashboard",
            Self::GeofencingSegmentation => "Geofencing & Segmentation",
            Self::CampaignOrchestration => "Campaign Orchestration",
            Self::AudienceContacts => "Audience Contacts",
        }
    }
}
