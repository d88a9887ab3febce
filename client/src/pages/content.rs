//! Static copy for the single-template marketing pages.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::router::routes::Page;

#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct PageContent {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
    pub cta: Option<CallToAction>,
}

const fn section(heading: &'static str, body: &'static str, bullets: &'static [&'static str]) -> Section {
    Section { heading, body, bullets }
}

const START_FREE: Option<CallToAction> = Some(CallToAction { label: "Start free", href: "/sign-up" });
const SEE_PRICING: Option<CallToAction> = Some(CallToAction { label: "See pricing", href: "/#pricing" });
const TALK_TO_US: Option<CallToAction> = Some(CallToAction { label: "Talk to us", href: "/contact" });

/// Copy for pages rendered by `MarketingPage`; `None` for pages with their
/// own layout (home, auth forms, dashboard).
pub fn content_for(page: Page) -> Option<&'static PageContent> {
    let content = match page {
        Page::PrivacyPolicy => &PRIVACY_POLICY,
        Page::TermsOfService => &TERMS_OF_SERVICE,
        Page::Security => &SECURITY,
        Page::About => &ABOUT,
        Page::Contact => &CONTACT,
        Page::Integrations => &INTEGRATIONS,
        Page::CookiePolicy => &COOKIE_POLICY,
        Page::Blog => &BLOG,
        Page::CaseStudies => &CASE_STUDIES,
        Page::Careers => &CAREERS,
        Page::Status => &STATUS,
        Page::Documentation => &DOCUMENTATION,
        Page::DoNotSell => &DO_NOT_SELL,
        Page::Artists => &ARTISTS,
        Page::Labels => &LABELS,
        Page::Promoters => &PROMOTERS,
        Page::Community => &COMMUNITY,
        Page::Academy => &ACADEMY,
        Page::DiscoveryEngine => &DISCOVERY_ENGINE,
        Page::AnalyticsDashboard => &ANALYTICS_DASHBOARD,
        Page::GeofencingSegmentation => &GEOFENCING_SEGMENTATION,
        Page::CampaignOrchestration => &CAMPAIGN_ORCHESTRATION,
        Page::Home | Page::SignIn | Page::SignUp | Page::AudienceContacts => return None,
    };
    Some(content)
}

static PRIVACY_POLICY: PageContent = PageContent {
    eyebrow: "Legal",
    title: "Privacy Policy",
    intro: "How Wreckshop collects, uses and protects information about artists, teams and the fans they reach.",
    sections: &[
        section(
            "Information we collect",
            "Account details you give us, data from platforms you connect, and contacts your fans submit through capture links.",
            &["Account and billing details", "Connected platform statistics", "Fan contact details with consent records"],
        ),
        section(
            "How we use it",
            "To run campaigns you configure, report on performance and keep the service secure. We do not sell fan data.",
            &[],
        ),
        section(
            "Your choices",
            "You can export or delete your data at any time, and fans can withdraw consent from every message we send.",
            &[],
        ),
    ],
    cta: Some(CallToAction { label: "Privacy requests", href: "/do-not-sell" }),
};

static TERMS_OF_SERVICE: PageContent = PageContent {
    eyebrow: "Legal",
    title: "Terms of Service",
    intro: "The agreement between you and Wreckshop when you use the platform.",
    sections: &[
        section(
            "Using the service",
            "You are responsible for the content you send and for having consent to contact every fan on your lists.",
            &[],
        ),
        section(
            "Plans and billing",
            "Paid plans renew monthly or annually until cancelled. Downgrades take effect at the end of the billing period.",
            &[],
        ),
        section(
            "Acceptable use",
            "No spam, no purchased lists, no impersonation of other artists.",
            &["Honor opt-outs immediately", "Identify yourself in every message", "Respect platform rate limits"],
        ),
    ],
    cta: None,
};

static SECURITY: PageContent = PageContent {
    eyebrow: "Trust",
    title: "Security at Wreckshop",
    intro: "Fan data is the most valuable thing an artist owns. We treat it that way.",
    sections: &[
        section(
            "Infrastructure",
            "Encrypted in transit and at rest, isolated per workspace, backed up daily.",
            &["TLS everywhere", "AES-256 storage encryption", "Least-privilege access for staff"],
        ),
        section(
            "Responsible disclosure",
            "Found a vulnerability? Email security@wreckshop.app and we will respond within two business days.",
            &[],
        ),
    ],
    cta: TALK_TO_US,
};

static ABOUT: PageContent = PageContent {
    eyebrow: "Company",
    title: "Built by people who have worked the merch table",
    intro: "Wreckshop started in Houston with one goal: let independent artists own the relationship with their fans.",
    sections: &[
        section(
            "Why we exist",
            "Streaming platforms own the audience data. We help artists turn listeners into contacts they can reach directly.",
            &[],
        ),
        section(
            "What we value",
            "Consent first, artist first, and tools that save a tour manager an afternoon.",
            &["Fans opt in, always", "Artists keep their data", "Ship small, ship often"],
        ),
    ],
    cta: Some(CallToAction { label: "Join the team", href: "/careers" }),
};

static CONTACT: PageContent = PageContent {
    eyebrow: "Company",
    title: "Contact us",
    intro: "Questions about plans, partnerships or your account? We read everything.",
    sections: &[
        section("Sales", "Labels and agencies managing multiple rosters can reach sales@wreckshop.app.", &[]),
        section("Support", "Existing customers get help at support@wreckshop.app, usually within a day.", &[]),
        section("Press", "Interview and media requests go to press@wreckshop.app.", &[]),
    ],
    cta: None,
};

static INTEGRATIONS: PageContent = PageContent {
    eyebrow: "Product",
    title: "Connect the platforms your fans already use",
    intro: "Pull listening, follower and engagement data into one audience graph.",
    sections: &[
        section(
            "Streaming and social",
            "Sync audiences and engagement signals from the services where fans discover you.",
            &["Spotify", "Instagram", "TikTok", "YouTube"],
        ),
        section(
            "Owned channels",
            "Send from your own sender identity over email and SMS, with consent tracked per contact.",
            &["Email", "SMS"],
        ),
    ],
    cta: START_FREE,
};

static COOKIE_POLICY: PageContent = PageContent {
    eyebrow: "Legal",
    title: "Cookie Policy",
    intro: "What cookies we use on this site and how to change your choices.",
    sections: &[
        section(
            "Categories",
            "Necessary cookies keep the site working. Everything else is opt-in.",
            &["Necessary: sign-in and security", "Analytics: anonymous usage", "Marketing: campaign attribution", "Functional: remembered preferences"],
        ),
        section(
            "Changing your choice",
            "Use the Cookie settings link in the footer at any time to reopen the consent banner.",
            &[],
        ),
    ],
    cta: None,
};

static BLOG: PageContent = PageContent {
    eyebrow: "Resources",
    title: "The Wreckshop blog",
    intro: "Playbooks for release weeks, tour announcements and growing a direct fan list.",
    sections: &[
        section("Pre-save campaigns that convert", "Turning a pre-save link into an email list you keep after release day.", &[]),
        section("Routing a tour with listener data", "Using city-level streaming data to pick markets before booking.", &[]),
        section("SMS without the spam", "Frequency, timing and consent rules that keep fans subscribed.", &[]),
    ],
    cta: None,
};

static CASE_STUDIES: PageContent = PageContent {
    eyebrow: "Resources",
    title: "Case studies",
    intro: "How artists, labels and promoters use Wreckshop to sell out rooms and move records.",
    sections: &[
        section(
            "Independent artist",
            "Grew a direct list from zero to 12,000 contacts over one album cycle with a single capture link in bio.",
            &[],
        ),
        section(
            "Regional promoter",
            "Geofenced a presale to fans within 50 miles and sold out a 1,500-cap room in four hours.",
            &[],
        ),
    ],
    cta: START_FREE,
};

static CAREERS: PageContent = PageContent {
    eyebrow: "Company",
    title: "Careers",
    intro: "Help build the fan platform artists actually own.",
    sections: &[
        section("Open roles", "We hire across engineering, design and artist success.", &["Senior Rust engineer", "Product designer", "Artist success lead"]),
        section("How we work", "Remote-first, async by default, with quarterly in-person weeks in Houston.", &[]),
    ],
    cta: TALK_TO_US,
};

static STATUS: PageContent = PageContent {
    eyebrow: "Trust",
    title: "System status",
    intro: "Current availability of Wreckshop services.",
    sections: &[
        section(
            "All systems operational",
            "Incidents and scheduled maintenance are announced here and by email to workspace owners.",
            &["Web app", "Campaign delivery", "Capture links", "Platform sync"],
        ),
    ],
    cta: None,
};

static DOCUMENTATION: PageContent = PageContent {
    eyebrow: "Resources",
    title: "Documentation",
    intro: "Guides for setting up your workspace, connecting platforms and sending your first campaign.",
    sections: &[
        section(
            "Getting started",
            "Create a workspace, connect a platform, and publish a capture link in under ten minutes.",
            &["Workspace setup", "Connecting Spotify", "Your first capture link"],
        ),
        section("Audience API", "Read and write contacts and capture links over a JSON REST API.", &[]),
    ],
    cta: None,
};

static DO_NOT_SELL: PageContent = PageContent {
    eyebrow: "Legal",
    title: "Do Not Sell My Personal Information",
    intro: "Wreckshop does not sell personal information. You can still ask us to limit how your data is shared.",
    sections: &[
        section(
            "Making a request",
            "Email privacy@wreckshop.app from the address you want covered. We confirm within 45 days.",
            &[],
        ),
    ],
    cta: None,
};

static ARTISTS: PageContent = PageContent {
    eyebrow: "Solutions",
    title: "For artists",
    intro: "Own your audience. Turn streams and follows into fans you can reach on release day.",
    sections: &[
        section(
            "Grow a direct list",
            "One capture link for your bio, stories and shows collects emails and phone numbers with consent.",
            &[],
        ),
        section(
            "Announce with confidence",
            "Send release and tour news by email and SMS, targeted by city and listening history.",
            &["Release reminders", "Ticket presales", "Merch drops"],
        ),
    ],
    cta: START_FREE,
};

static LABELS: PageContent = PageContent {
    eyebrow: "Solutions",
    title: "For labels",
    intro: "One workspace for the whole roster, with audience insight across every artist.",
    sections: &[
        section("Roster view", "Compare growth, engagement and list size across artists at a glance.", &[]),
        section(
            "Shared campaigns",
            "Cross-promote releases to overlapping audiences without double-messaging fans.",
            &["Per-artist consent", "Frequency caps", "Team roles"],
        ),
    ],
    cta: TALK_TO_US,
};

static PROMOTERS: PageContent = PageContent {
    eyebrow: "Solutions",
    title: "For promoters",
    intro: "Fill rooms with fans who already listen to the lineup.",
    sections: &[
        section(
            "Target by place",
            "Reach listeners around the venue with geofenced presales and day-of reminders.",
            &[],
        ),
        section("Measure every show", "Track ticket clicks and redemptions per campaign and per market.", &[]),
    ],
    cta: SEE_PRICING,
};

static COMMUNITY: PageContent = PageContent {
    eyebrow: "Resources",
    title: "Community",
    intro: "Trade notes with other artists, managers and promoters building direct fan relationships.",
    sections: &[
        section("Office hours", "Monthly live sessions with the Wreckshop team and guest managers.", &[]),
        section("Discord", "Share campaigns, ask questions and find collaborators.", &[]),
    ],
    cta: START_FREE,
};

static ACADEMY: PageContent = PageContent {
    eyebrow: "Resources",
    title: "Wreckshop Academy",
    intro: "Short courses on fan marketing, from first capture link to a full release plan.",
    sections: &[
        section(
            "Courses",
            "Each course is under an hour and ends with a campaign you can launch.",
            &["Owned audience fundamentals", "Release week playbook", "Touring with data"],
        ),
    ],
    cta: START_FREE,
};

static DISCOVERY_ENGINE: PageContent = PageContent {
    eyebrow: "Features",
    title: "Discovery engine",
    intro: "Find the listeners most likely to become fans, using signals from the platforms you connect.",
    sections: &[
        section(
            "Signals that matter",
            "Saves, repeat listens, playlist adds and follows are weighted into one engagement score.",
            &[],
        ),
        section(
            "Lookalike audiences",
            "Surface listeners of similar artists in the markets you care about.",
            &["Genre and taste matching", "City-level reach", "Refreshes daily"],
        ),
    ],
    cta: SEE_PRICING,
};

static ANALYTICS_DASHBOARD: PageContent = PageContent {
    eyebrow: "Features",
    title: "Analytics dashboard",
    intro: "Every platform, list and campaign in one view.",
    sections: &[
        section(
            "Growth over time",
            "Follower, listener and contact growth side by side, by platform and by city.",
            &[],
        ),
        section(
            "Campaign results",
            "Opens, clicks, opt-outs and attributed ticket sales for every send.",
            &["Email and SMS", "A/B comparisons", "CSV export"],
        ),
    ],
    cta: SEE_PRICING,
};

static GEOFENCING_SEGMENTATION: PageContent = PageContent {
    eyebrow: "Features",
    title: "Geofencing & segmentation",
    intro: "Build audiences by place, taste and engagement, then message exactly the fans who care.",
    sections: &[
        section(
            "Draw the map",
            "Target a radius around a venue or a list of cities, and combine it with listening behavior.",
            &[],
        ),
        section(
            "Saved segments",
            "Segments update as fans join, so recurring campaigns always reach the current audience.",
            &["Tag filters", "Consent-aware", "Reusable across campaigns"],
        ),
    ],
    cta: SEE_PRICING,
};

static CAMPAIGN_ORCHESTRATION: PageContent = PageContent {
    eyebrow: "Features",
    title: "Campaign orchestration",
    intro: "Plan release and tour moments as journeys that run themselves.",
    sections: &[
        section(
            "Journeys",
            "Chain emails, texts and waits around a release date, with branches for fans who already engaged.",
            &[],
        ),
        section(
            "Guardrails",
            "Quiet hours, frequency caps and compliance checks run before anything is sent.",
            &["Pre-send review", "Consent checks", "Send-time optimization"],
        ),
    ],
    cta: SEE_PRICING,
};
