//! Case conversion used by generated configuration surfaces.

/// Converts a camelCase identifier to UPPER_SNAKE_CASE.
///
/// An underscore is inserted before every uppercase letter that is not the first
/// character, then the whole name is uppercased. Runs of capitals are split letter by
/// letter (`apiURL` becomes `API_U_R_L`); digits and existing underscores pass through.
#[must_use]
pub fn upper_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + name.len() / 2);
    for (i, ch) in name.chars().enumerate() {
        if i > 0 && ch.is_uppercase() {
            out.push('_');
        }
        out.extend(ch.to_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_camel_case() {
        assert_eq!(upper_snake("themeSwitcher"), "THEME_SWITCHER");
        assert_eq!(upper_snake("gtm"), "GTM");
        assert_eq!(upper_snake("calculatorAdvanced"), "CALCULATOR_ADVANCED");
        assert_eq!(upper_snake("apiURL"), "API_U_R_L");
        assert_eq!(upper_snake("Leading"), "LEADING");
        assert_eq!(upper_snake("v2Charts"), "V2_CHARTS");
        assert_eq!(upper_snake(""), "");
    }

    proptest! {
        #[test]
        fn output_has_no_lowercase(name in "[a-z][a-zA-Z0-9]{0,24}") {
            let out = upper_snake(&name);
            prop_assert!(!out.chars().any(|c| c.is_ascii_lowercase()));
        }

        #[test]
        fn one_underscore_per_inner_capital(name in "[a-z][a-zA-Z0-9]{0,24}") {
            let capitals = name.chars().skip(1).filter(char::is_ascii_uppercase).count();
            prop_assert_eq!(upper_snake(&name).len(), name.len() + capitals);
        }

        #[test]
        fn removing_underscores_recovers_uppercased_input(name in "[a-z][a-zA-Z0-9]{0,24}") {
            prop_assert_eq!(upper_snake(&name).replace('_', ""), name.to_ascii_uppercase());
        }
    }
}
