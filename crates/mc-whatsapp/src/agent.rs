use regex::Regex;
use std::sync::LazyLock;

static MOBILE_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile agent pattern")
});

/// Rough phone/tablet detection from `navigator.userAgent`.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_AGENT.is_match(user_agent)
}
