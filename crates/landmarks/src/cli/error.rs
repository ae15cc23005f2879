//! User-facing CLI errors, rendered as text on stderr or as JSON with `--json`.

use std::fmt;
use std::path::Path;

/// A CLI failure with an optional explanation and "TRY:" hints
#[derive(Debug)]
pub struct HelpfulError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Data file does not exist
    pub fn data_not_found(path: &Path) -> Self {
        Self {
            message: format!("Data file not found: {}", path.display()),
            context: Some("The --data path (or default_data in config.toml) does not exist".into()),
            suggestions: vec![
                format!("TRY: Check that the file exists: ls -la {}", path.display()),
                "TRY: Omit --data to use the built-in sample landmarks".into(),
            ],
        }
    }

    /// Data file is not a landmark array or export snapshot
    pub fn invalid_data(path: &Path, cause: &dyn fmt::Display) -> Self {
        Self {
            message: format!("Invalid landmark file: {}", path.display()),
            context: Some(format!("Parse error: {}", cause)),
            suggestions: vec![
                "TRY: Provide a JSON array of landmark objects".into(),
                "TRY: Or a file written by 'landmarks export'".into(),
            ],
        }
    }

    /// Coordinate outside its valid range
    pub fn coordinate_out_of_range(name: &str, value: f64, min: f64, max: f64) -> Self {
        Self {
            message: format!("{} out of range: {}", name, value),
            context: Some(format!("{} must be between {} and {}", name, min, max)),
            suggestions: Vec::new(),
        }
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR: {}", self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\nCONTEXT: {}", ctx)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\n\n  {}", self.suggestions.join("\n  "))?;
        }
        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

/// Emit `{"error": ...}` on stdout for commands running with `--json`.
pub fn print_json_error(err: &anyhow::Error) {
    let payload = match err.downcast_ref::<HelpfulError>() {
        Some(helpful) => serde_json::json!({
            "error": helpful.message,
            "context": helpful.context,
            "suggestions": helpful.suggestions,
        }),
        None => serde_json::json!({ "error": format!("{:#}", err) }),
    };
    match serde_json::to_string_pretty(&payload) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{{\"error\": \"unprintable error\"}}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_helpful_error_display() {
        let err = HelpfulError::new("Invalid radius: -1").with_suggestion("TRY: --radius 5");
        assert_eq!(err.to_string(), "ERROR: Invalid radius: -1\n\n  TRY: --radius 5");

        let err = HelpfulError::coordinate_out_of_range("longitude", 200.0, -180.0, 180.0);
        assert_eq!(
            err.to_string(),
            "ERROR: longitude out of range: 200\nCONTEXT: longitude must be between -180 and 180"
        );
    }

    #[test]
    fn test_data_not_found() {
        let err = HelpfulError::data_not_found(&PathBuf::from("/nonexistent/landmarks.json"));
        assert!(err.message.contains("/nonexistent/landmarks.json"));
        assert!(!err.suggestions.is_empty());
    }

    #[test]
    fn test_coordinate_out_of_range() {
        let err = HelpfulError::coordinate_out_of_range("latitude", 95.0, -90.0, 90.0);
        assert_eq!(err.message, "latitude out of range: 95");
        assert_eq!(err.context.as_deref(), Some("latitude must be between -90 and 90"));
    }
}
