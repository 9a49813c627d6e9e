#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use folio::composer::compose;
use folio::extractor::extract;
use folio::transform::transform;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);
    let base = Url::parse("https://example.com/article").unwrap();

    // Extraction may reject the input, but no stage should ever panic
    if let Ok(mut article) = extract(&html, &base) {
        let report = transform(&mut article.content, base.as_str()).unwrap();
        for (position, footnote) in report.footnotes.iter().enumerate() {
            assert_eq!(footnote.index, position + 1);
        }
        let _ = compose(&article, "Fuzz");
    }
});
