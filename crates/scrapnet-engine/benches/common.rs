// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use scrapnet_engine::Page;

#[allow(dead_code)]
pub fn generate_lines(size: usize) -> Vec<String> {
    let base = [
        "Paragraph with [a link] and #tag in it.",
        " [* bold] [/ italic [nested]] `code` [$ x^2]",
        "[https://example.com Example site] [https://gyazo.com/abc]",
        "> quoted line with [another link]",
        "code:main.rs",
        " fn main() { let v = [1, 2]; }",
        "[/project/page] [alice.icon] 「引用」#日本語",
    ];
    base.iter()
        .cycle()
        .take(base.len() * size)
        .map(|s| s.to_string())
        .collect()
}

/// `pages` pages named `Page N`, each linking to the next `fanout` pages.
#[allow(dead_code)]
pub fn generate_pages(pages: usize, fanout: usize) -> Vec<Page> {
    (0..pages)
        .map(|i| {
            let mut lines = vec![format!("Page {i}")];
            for j in 1..=fanout {
                lines.push(format!("see [Page {}] and #topic{}", (i + j) % pages, j % 7));
            }
            Page::new(format!("Page {i}"), lines)
        })
        .collect()
}
