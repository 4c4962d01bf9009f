//! String transformation utilities for code generation

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case and space-separated input.
///
/// # Examples
/// ```
/// use pathgen::core::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("roleName"), "role_name");
/// assert_eq!(to_snake_case("role-name"), "role_name");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            // Word boundary on a lower -> upper transition
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase();
        } else if (ch == '-' || ch == '_' || ch == ' ') && !result.is_empty() && !result.ends_with('_')
        {
            result.push('_');
            prev_is_lowercase = false;
        } else {
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a string to UpperCamelCase.
///
/// The input is normalized through [`to_snake_case`] first.
///
/// # Examples
/// ```
/// use pathgen::core::utils::to_proper_case;
///
/// assert_eq!(to_proper_case("name"), "Name");
/// assert_eq!(to_proper_case("role_name"), "RoleName");
/// assert_eq!(to_proper_case(""), "");
/// ```
pub fn to_proper_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("findPetsByStatus"), "find_pets_by_status");
        assert_eq!(to_snake_case("FindPetsByStatus"), "find_pets_by_status");
        assert_eq!(to_snake_case("role-name"), "role_name");
        assert_eq!(to_snake_case("role__name"), "role_name");
        assert_eq!(to_snake_case("HTTPResponse"), "httpresponse");
        assert_eq!(to_snake_case("_leading"), "leading");
    }

    #[test]
    fn test_to_proper_case() {
        assert_eq!(to_proper_case("name"), "Name");
        assert_eq!(to_proper_case("rolename"), "Rolename");
        assert_eq!(to_proper_case("role_name"), "RoleName");
        assert_eq!(to_proper_case("version2"), "Version2");
        assert_eq!(to_proper_case(""), "");
    }
}
