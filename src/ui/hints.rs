//! Remediation hints shown when no database tarballs are available.

use std::path::Path;

/// Warning shown when no version of `flavor` is installed.
pub fn no_tarballs_found(flavor: &str) -> String {
    format!(
        "No tarballs for flavor {} were found in your environment",
        flavor
    )
}

/// Pointer to the generated prerequisites script.
pub fn read_instructions(prerequisites: &Path) -> String {
    format!("Please read instructions in {}", prerequisites.display())
}

/// Suggestion shown after an unknown recipe name.
pub fn list_recipes() -> &'static str {
    "Run `dbcookbook list` to see available recipes."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tarballs_names_flavor() {
        assert_eq!(
            no_tarballs_found("percona"),
            "No tarballs for flavor percona were found in your environment"
        );
    }

    #[test]
    fn read_instructions_names_path() {
        let hint = read_instructions(Path::new("recipes/prerequisites.sh"));
        assert_eq!(hint, "Please read instructions in recipes/prerequisites.sh");
    }

    #[test]
    fn list_recipes_hint() {
        assert!(list_recipes().contains("dbcookbook list"));
    }
}
