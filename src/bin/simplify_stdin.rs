//! Simple CLI that reads HTML bytes from stdin and outputs JSON to stdout.

use page_simplifier::simplify_bytes;
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    title: Option<String>,
    main_content: String,
    error: Option<String>,
}

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = match simplify_bytes(&html) {
        Ok(page) => Output {
            main_content: page.content_text(),
            title: Some(page.title).filter(|t| !t.is_empty()),
            error: None,
        },
        Err(err) => Output {
            title: None,
            main_content: String::new(),
            error: Some(err.to_string()),
        },
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
