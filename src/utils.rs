// src/utils.rs
use web_sys::window;

/// Get the base URL for the application
/// This handles both local development and GitHub Pages deployment
pub fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(location) = window.location().pathname() {
            // Check if we're on GitHub Pages (path starts with /portfolio-site/)
            if location.starts_with("/portfolio-site/") {
                return "/portfolio-site".to_string();
            }
        }
    }
    // Local development - no base path needed
    String::new()
}

/// Build a resource URL with the correct base path
pub fn resource_url(path: &str) -> String {
    let base = get_base_url();
    let clean_path = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{}", clean_path)
    } else {
        format!("{}/{}", base, clean_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_formatting() {
        // Note: These tests won't actually detect the window location
        // They're mainly for documentation of expected behavior

        // With leading slash
        let url1 = resource_url("/public/content/site.json");
        assert!(url1.contains("public/content/site.json"));

        // Without leading slash
        let url2 = resource_url("public/content/site.json");
        assert!(url2.contains("public/content/site.json"));
    }
}
