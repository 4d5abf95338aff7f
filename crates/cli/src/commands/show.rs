//! Show command handler.

use analyze_catalog::{render_preview, show_component};
use analyze_core::{AppConfig, AppError, AppResult};
use std::num::IntErrorKind;

/// Preview one component by catalog index
#[derive(Debug)]
pub struct ShowCommand {
    /// Index exactly as typed
    pub index: String,
}

impl ShowCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<String> {
        tracing::info!("Executing show command for index {:?}", self.index);

        let index = parse_index(&self.index)?;
        let preview = show_component(&config.workspace, index, config.preview_chars)?;

        Ok(render_preview(&preview))
    }
}

/// Decimal integer with optional sign, surrounding whitespace, and single `_`
/// between digits. Integers too large for `i64` are valid but out of range.
fn parse_index(raw: &str) -> AppResult<i64> {
    let malformed = || AppError::MalformedIndex(raw.to_string());
    let digits = strip_digit_separators(raw.trim()).ok_or_else(malformed)?;

    digits.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => AppError::InvalidIndex(i64::MAX),
        IntErrorKind::NegOverflow => AppError::InvalidIndex(i64::MIN),
        _ => malformed(),
    })
}

/// Drop `_` separators, rejecting any that do not sit between two digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut prev_digit = false;

    while let Some(ch) = chars.next() {
        if ch == '_' {
            let next_digit = chars.peek().is_some_and(|c| c.is_ascii_digit());
            if !(prev_digit && next_digit) {
                return None;
            }
            prev_digit = false;
            continue;
        }
        prev_digit = ch.is_ascii_digit();
        out.push(ch);
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyze_core::config::ConfigOverrides;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir) -> AppConfig {
        AppConfig::default().with_overrides(ConfigOverrides {
            workspace: Some(dir.path().to_path_buf()),
            ..Default::default()
        })
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("3").unwrap(), 3);
        assert_eq!(parse_index(" 07 ").unwrap(), 7);
        assert_eq!(parse_index("-1").unwrap(), -1);
        assert!(matches!(
            parse_index("abc"),
            Err(AppError::MalformedIndex(_))
        ));
        assert!(matches!(parse_index("1.5"), Err(AppError::MalformedIndex(_))));
        assert!(matches!(parse_index(""), Err(AppError::MalformedIndex(_))));
    }

    #[test]
    fn test_parse_index_digit_separators() {
        assert_eq!(parse_index("1_0").unwrap(), 10);
        assert_eq!(parse_index("-2_1").unwrap(), -21);
        for bad in ["_1", "1_", "1__0", "-_1", "_"] {
            assert!(
                matches!(parse_index(bad), Err(AppError::MalformedIndex(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_parse_index_huge_values_are_out_of_range() {
        assert!(matches!(
            parse_index("99999999999999999999"),
            Err(AppError::InvalidIndex(i64::MAX))
        ));
        assert!(matches!(
            parse_index("-99999999999999999999"),
            Err(AppError::InvalidIndex(i64::MIN))
        ));
    }

    #[test]
    fn test_show_existing_component() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("09_locking_system.txt"), "lock_rec_lock").unwrap();

        let out = ShowCommand {
            index: "10".to_string(),
        }
        .execute(&config_for(&temp_dir))
        .unwrap();

        assert!(out.contains("COMPONENT: 09_locking_system.txt\n"));
        assert!(out.contains("\nlock_rec_lock\n"));
        assert!(out.ends_with("... (truncated, total size: 13 bytes)\n"));
    }

    #[test]
    fn test_show_uses_configured_preview_length() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("18_utilities.txt"), "abcdefghij").unwrap();

        let mut config = config_for(&temp_dir);
        config.preview_chars = 4;
        let out = ShowCommand {
            index: "19".to_string(),
        }
        .execute(&config)
        .unwrap();

        assert!(out.contains("\nabcd\n\n... (truncated, total size: 10 bytes)\n"));
    }

    #[test]
    fn test_show_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir);

        let run = |index: &str| {
            ShowCommand {
                index: index.to_string(),
            }
            .execute(&config)
            .unwrap_err()
            .to_string()
        };

        assert_eq!(run("abc"), "Please provide a valid component index!");
        assert_eq!(run("-1"), "Invalid component index!");
        assert_eq!(run("22"), "Invalid component index!");
        assert_eq!(run("99999999999999999999"), "Invalid component index!");
        assert_eq!(run("0"), "File 00_COMPONENT_OVERVIEW.txt not found!");
    }
}
