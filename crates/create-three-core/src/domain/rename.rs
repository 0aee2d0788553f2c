//! Source-name to destination-name table for template files.
//!
//! Package managers strip `.gitignore` on publish, so templates ship it as
//! `_gitignore`. New exceptions are a table edit.

pub static RENAME_TABLE: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

/// Destination name for a top-level template entry.
pub fn renamed(name: &str) -> &str {
    RENAME_TABLE
        .iter()
        .find_map(|(from, to)| (*from == name).then_some(*to))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gitignore_is_renamed() {
        assert_eq!(renamed("_gitignore"), ".gitignore");
    }

    #[test]
    fn other_names_pass_through() {
        for name in ["index.html", ".gitignore", "gitignore", "_gitignore.bak", "_npmrc"] {
            assert_eq!(renamed(name), name);
        }
    }

    #[test]
    fn table_is_not_chained() {
        for (_, to) in RENAME_TABLE {
            assert_eq!(renamed(to), *to, "{to} would be renamed twice");
        }
    }
}
