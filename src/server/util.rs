use serde::Serialize;

pub(super) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// JSON for embedding in an inline `<script>` block.
///
/// `</` is written as `<\/` so a string value can never close the script
/// element early.
pub(super) fn script_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(e) => {
            tracing::error!(error = %e, "cannot serialize page state");
            "null".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn script_json_cannot_close_the_tag() {
        let json = script_json(&"</script><script>alert(1)</script>");
        assert!(!json.contains("</"));
        assert!(json.contains("<\\/script>"));
    }
}
