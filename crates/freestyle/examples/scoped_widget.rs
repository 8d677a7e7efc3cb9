//! Scope a widget's stylesheet and inject it into a document.
//!
//! Run with: cargo run -p freestyle --example scoped_widget

use freestyle::prelude::*;

const WIDGET_CSS: &str = r#"
/* Widget chrome */
button, .imitation-button {
  background-color: #333;
  color: #fff;
  padding: 10px 30px;
}

h1.title, h2 {
  margin: 20px auto; // centered
}
"#;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let freestyle = Freestyle::new();
    println!("freestyle {}", freestyle.version());

    let list = css_to_style_list(WIDGET_CSS);
    println!("Style list: {}", list.to_json().unwrap_or_default());

    let object = style_list_to_plain_object(&list, true);
    println!("Plain object: {}", object.to_json().unwrap_or_default());

    let scoped = freestyle.scoped_css_or_sentinel(WIDGET_CSS, "#widget", false);
    println!("Scoped:\n{}", scoped);

    let mut document = MemoryDocument::new();
    match freestyle.inject_css(&mut document, &uglify(&scoped), Some("widget-style"), None) {
        Ok(_) => println!("Document: {}", document.to_html()),
        Err(err) => eprintln!("Injection failed: {}", err),
    }

    // Reported through tracing, returned as a comment.
    println!("{}", freestyle.scoped_css_or_sentinel(WIDGET_CSS, "", false));
}
