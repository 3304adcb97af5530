use gmail_extract::sanitize_html;

#[test]
fn test_removes_script_with_content() {
    let html = "<p>before</p><script>alert('x')</script><p>after</p>";
    let clean = sanitize_html(html);

    assert_eq!(clean, "<p>before</p><p>after</p>");
}

#[test]
fn test_removes_script_case_insensitive() {
    let html = "<SCRIPT type=\"text/javascript\">steal()</SCRIPT>ok";
    assert_eq!(sanitize_html(html), "ok");
}

#[test]
fn test_removes_inline_event_handlers() {
    let html = r#"<img src="x.png" onerror="alert(1)">"#;
    let clean = sanitize_html(html);

    assert!(!clean.contains("onerror"));
    assert!(clean.contains("x.png"));
}

#[test]
fn test_removes_javascript_protocol() {
    let html = r#"<a href="javascript:alert(1)">link</a>"#;
    let clean = sanitize_html(html);

    assert!(!clean.to_lowercase().contains("javascript:"));
    assert!(clean.contains("link"));
}

#[test]
fn test_removes_dangerous_tags_keeps_content() {
    let html = "<form action=\"/steal\"><input name=\"q\"><button>Send</button></form>";
    let clean = sanitize_html(html);

    assert!(!clean.contains("<form"));
    assert!(!clean.contains("<input"));
    assert!(!clean.contains("<button"));
    assert!(clean.contains("Send"));
}

#[test]
fn test_plain_markup_untouched() {
    let html = "<h1>Title</h1><p>Body with <b>bold</b> text.</p>";
    assert_eq!(sanitize_html(html), html);
}
