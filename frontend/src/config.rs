//! Site-wide settings. Links can be overridden at build time, e.g.
//! `FOCUS_CHECKOUT_URL=https://staging.example/checkout trunk build`.

const DEFAULT_CHECKOUT_URL: &str = "https://espace.focus-business.com/checkout";
const DEFAULT_COMMUNITY_URL: &str = "https://discord.gg/Z8qWfPyYMY";
const DEFAULT_CLIENT_AREA_URL: &str = "https://espace.focus-business.com/";

/// How long each showcase step stays active before the next one takes over.
pub const ROTATION_PERIOD_MS: u32 = 4_500;

/// Scrolling down hides the navbar only once the page is past this offset.
pub const NAV_DEAD_ZONE_PX: f64 = 80.0;

pub fn get_checkout_url() -> &'static str {
    option_env!("FOCUS_CHECKOUT_URL").unwrap_or(DEFAULT_CHECKOUT_URL)
}

pub fn get_community_url() -> &'static str {
    option_env!("FOCUS_COMMUNITY_URL").unwrap_or(DEFAULT_COMMUNITY_URL)
}

pub fn get_client_area_url() -> &'static str {
    option_env!("FOCUS_CLIENT_AREA_URL").unwrap_or(DEFAULT_CLIENT_AREA_URL)
}

/// Rotation period in seconds, for the CSS progress animation.
pub fn rotation_period_secs() -> f64 {
    f64::from(ROTATION_PERIOD_MS) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_absolute_https() {
        for url in [get_checkout_url(), get_community_url(), get_client_area_url()] {
            assert!(url.starts_with("https://"), "{url} is not https");
        }
    }

    #[test]
    fn rotation_period_matches_css_duration() {
        assert_eq!(rotation_period_secs(), 4.5);
    }
}
