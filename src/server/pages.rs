use crate::document::escape_text;

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>Article to PDF Converter</title>
<style>
body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
.form-group { margin-bottom: 15px; }
input, button { padding: 5px; margin: 5px 0; }
input[type="url"], input[type="text"] { width: 300px; }
</style>
</head>
<body>
<h1>Article to PDF Converter</h1>
<form method="GET" action="/">
<div class="form-group">
<label>Article URL:<br>
<input type="url" name="url" required placeholder="https://example.com/article">
</label>
</div>
<div class="form-group">
<label>Author Name:<br>
<input type="text" name="author" placeholder="John Doe">
</label>
</div>
<button type="submit">Convert to PDF</button>
</form>
</body>
</html>
"#;

pub fn form_page() -> &'static str {
    FORM_PAGE
}

/// Failure page; `message` is escaped before it is embedded.
pub fn error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>Error</title>\n</head>\n<body>\n<h1>Error</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to converter</a></p>\n</body>\n</html>\n",
        escape_text(message)
    )
}
