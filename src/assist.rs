use crate::error::Result;
use tracing::{info, warn};

/// An external text-cleanup service. Implementations receive lines and are
/// expected to return exactly one cleaned line per input line.
pub trait LineCleaner {
    fn clean(&self, lines: &[String]) -> Result<Vec<String>>;
}

/// Run `cleaner` over `lines`, keeping the originals when it returns a
/// different number of lines. Cleaner errors are returned as-is.
pub fn cleanup_with_fallback(cleaner: &dyn LineCleaner, lines: &[String]) -> Result<Vec<String>> {
    if lines.is_empty() {
        return Ok(Vec::new());
    }
    let cleaned = cleaner.clean(lines)?;
    if cleaned.len() != lines.len() {
        warn!(
            target: "assist",
            "Cleanup returned {} line(s) for {} input line(s); keeping the originals",
            cleaned.len(),
            lines.len()
        );
        return Ok(lines.to_vec());
    }
    info!(target: "assist", "Cleaned {} line(s)", cleaned.len());
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;

    struct Upper;

    impl LineCleaner for Upper {
        fn clean(&self, lines: &[String]) -> Result<Vec<String>> {
            Ok(lines.iter().map(|l| l.to_uppercase()).collect())
        }
    }

    struct Dropper;

    impl LineCleaner for Dropper {
        fn clean(&self, lines: &[String]) -> Result<Vec<String>> {
            Ok(lines.iter().skip(1).cloned().collect())
        }
    }

    struct Failing;

    impl LineCleaner for Failing {
        fn clean(&self, _lines: &[String]) -> Result<Vec<String>> {
            Err(ToolError::Assistant("quota exceeded".to_string()))
        }
    }

    fn lines() -> Vec<String> {
        vec!["a b".to_string(), "c".to_string()]
    }

    #[test]
    fn test_matching_cardinality_is_used() {
        assert_eq!(cleanup_with_fallback(&Upper, &lines()).unwrap(), vec!["A B", "C"]);
    }

    #[test]
    fn test_mismatched_cardinality_keeps_originals() {
        assert_eq!(cleanup_with_fallback(&Dropper, &lines()).unwrap(), lines());
    }

    #[test]
    fn test_cleaner_error_propagates() {
        assert!(matches!(
            cleanup_with_fallback(&Failing, &lines()),
            Err(ToolError::Assistant(_))
        ));
    }

    #[test]
    fn test_empty_input_skips_cleaner() {
        assert!(cleanup_with_fallback(&Failing, &[]).unwrap().is_empty());
    }
}
