use crate::Route;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // backend dev server
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // served from the same origin
}

pub struct SocialLinks {
    pub twitter: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

pub struct SiteConfig {
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub primary_cta_url: &'static str,
    pub demo_url: &'static str,
    pub contact_email: &'static str,
    pub social: SocialLinks,
    pub navigation: &'static [(&'static str, Route)],
}

pub const SITE: SiteConfig = SiteConfig {
    site_name: "Example Co.",
    tagline: "Lead → Booking Autopilot",
    description: "Automated lead qualification and booking system that converts visitors into confirmed calls",
    primary_cta_url: "https://calendly.com/example-co/discovery-call",
    demo_url: "https://demo.example-co.com",
    contact_email: "hello@example-co.com",
    social: SocialLinks {
        twitter: "https://twitter.com/example-co",
        linkedin: "https://linkedin.com/company/example-co",
        github: "https://github.com/example-co",
    },
    navigation: &[
        ("Home", Route::Home),
        ("Pricing", Route::Pricing),
        ("Demo", Route::Demo),
        ("FAQ", Route::Faq),
    ],
};

// How long toast notifications stay on screen.
pub const TOAST_DURATION_MS: u32 = 5_000;
