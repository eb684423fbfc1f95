//! Names of flags on external configuration surfaces.
//!
//! Generated env files and bundler defines depend on these strings byte for byte.

use folio_domain::constants::{BUILD_DEFINE_PREFIX, BUILD_DEFINE_SUFFIX, ENV_VAR_PREFIX};
use folio_kernel::naming::upper_snake;

/// `themeSwitcher` -> `PUBLIC_FEATURE_THEME_SWITCHER`.
#[must_use]
pub fn env_var_name(flag_name: &str) -> String {
    format!("{ENV_VAR_PREFIX}{}", upper_snake(flag_name))
}

/// `gtm` -> `__FEATURE_GTM__`.
#[must_use]
pub fn build_define_name(flag_name: &str) -> String {
    format!("{BUILD_DEFINE_PREFIX}{}{BUILD_DEFINE_SUFFIX}", upper_snake(flag_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_names() {
        assert_eq!(env_var_name("themeSwitcher"), "PUBLIC_FEATURE_THEME_SWITCHER");
        assert_eq!(env_var_name("gtm"), "PUBLIC_FEATURE_GTM");
        assert_eq!(env_var_name("fundamentalDashboard"), "PUBLIC_FEATURE_FUNDAMENTAL_DASHBOARD");
    }

    #[test]
    fn build_define_names() {
        assert_eq!(build_define_name("gtm"), "__FEATURE_GTM__");
        assert_eq!(build_define_name("themeSwitcher"), "__FEATURE_THEME_SWITCHER__");
    }
}
