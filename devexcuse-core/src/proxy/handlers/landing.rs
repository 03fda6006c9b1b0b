use crate::conf::RateLimitConfig;

/// HTML served at `/`.
pub fn landing_page(rate_limit: &RateLimitConfig) -> String {
    let window = rate_limit.window_label();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>DevExcuse API</title>
</head>
<body>
  <h2>🤖 Welcome to DevExcuse API</h2>
  <p>Try endpoints like:</p>
  <ul>
    <li>/excuse</li>
    <li>/excuse?count=3</li>
    <li>/excuse?category=AI</li>
    <li>/excuse?count=3&amp;category=backend</li>
    <li>/excuse/devil</li>
    <li>/categories</li>
    <li>/search?q=cache</li>
    <li>/stats</li>
  </ul>
  <p><strong>Rate Limits:</strong></p>
  <ul>
    <li>General: {general} requests per {window}</li>
    <li>Search: {search} requests per {window}</li>
  </ul>
</body>
</html>
"#,
        general = rate_limit.general_max,
        search = rate_limit.search_max,
    )
}
