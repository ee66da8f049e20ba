//! End-to-end rendering tests over whole documents.
//!
//! The sample article under `tests/fixtures/article.md` exercises every
//! block type the renderer knows.

use notedown::markdown::{Heading, render_markdown, slugify};
use notedown::site::render_toc;

const ARTICLE: &str = include_str!("fixtures/article.md");

fn heading(level: u8, text: &str, id: &str) -> Heading {
    Heading {
        level,
        text: text.to_string(),
        id: id.to_string(),
    }
}

// ============================================================================
// Sample Article
// ============================================================================

#[test]
fn test_article_headings() {
    let result = render_markdown(ARTICLE);
    assert_eq!(
        result.headings,
        vec![
            heading(1, "有馬記念 2023 振り返り", "有馬記念-2023-振り返り"),
            heading(2, "予想の要点", "予想の要点"),
            heading(2, "結果", "結果"),
            heading(3, "配当メモ", "配当メモ"),
        ]
    );
    assert!(result.html.starts_with(
        r#"<h1 id="有馬記念-2023-振り返り" data-heading-id="有馬記念-2023-振り返り">有馬記念 2023 振り返り</h1>"#
    ));
}

#[test]
fn test_article_inline_formatting() {
    let html = render_markdown(ARTICLE).html;
    assert!(html.contains(
        concat!(
            "<p>今年の<strong>グランプリ</strong>は<code>ドウデュース</code>が制した。",
            r#"詳しい結果は<a href="https://www.jra.go.jp/" target="_blank" rel="noopener noreferrer">JRA</a>を参照。</p>"#,
        )
    ));
    assert!(html.contains("<li>中山の内回りは<em>器用さ</em>が必要</li>"));
    assert!(html.contains("<li>馬場は<s>重</s>良</li>"));
}

#[test]
fn test_article_lists() {
    let html = render_markdown(ARTICLE).html;
    assert!(html.contains("<ol><li>先行力のある馬を重視</li>"));
    // Mixed unordered markers stay in one list.
    assert!(html.contains(
        "<ul><li>本命: ドウデュース</li><li>対抗: スターズオンアース</li><li>穴: タイトルホルダー</li></ul>"
    ));
    assert!(html.contains(r#"<ol start="4"><li>次走の狙い</li><li>来年への課題</li></ol>"#));
}

#[test]
fn test_article_quotes_and_rule() {
    let html = render_markdown(ARTICLE).html;
    assert!(html.contains(
        "<blockquote>直線の短い中山では、位置取りがすべて。</blockquote><blockquote>反省点は後述。</blockquote><hr />"
    ));
}

#[test]
fn test_article_table() {
    let html = render_markdown(ARTICLE).html;
    assert!(html.contains(concat!(
        r#"<div class="c-article__table"><table><thead><tr>"#,
        r#"<th style="text-align: center;">着順</th><th>馬名</th><th style="text-align: right;">オッズ</th>"#,
        "</tr></thead><tbody>",
        r#"<tr><td style="text-align: center;">1</td><td>ドウデュース</td><td style="text-align: right;">5.8</td></tr>"#,
    )));
    assert_eq!(html.matches("<tr>").count(), 4);
}

#[test]
fn test_article_code_block_keeps_blank_line() {
    let html = render_markdown(ARTICLE).html;
    assert!(html.contains(
        "<pre><code class=\"language-text\" data-lang=\"text\">単勝 580円\n馬連 2,330円\n\n3連単 27,830円</code></pre>"
    ));
}

#[test]
fn test_article_script_escaped() {
    let html = render_markdown(ARTICLE).html;
    assert!(!html.contains("<script>"));
    assert!(html.ends_with(r#"<p>&lt;script&gt;alert("x")&lt;/script&gt;</p>"#));
}

#[test]
fn test_article_toc() {
    let result = render_markdown(ARTICLE);
    let toc = render_toc(&result.headings);
    assert_eq!(toc.matches("<li>").count(), 4);
    assert!(toc.contains(r##"<a href="#配当メモ" data-heading-level="3">配当メモ</a>"##));
}

#[test]
fn test_crlf_article_renders_identically() {
    let crlf = ARTICLE.replace('\n', "\r\n");
    assert_eq!(render_markdown(&crlf), render_markdown(ARTICLE));
}

// ============================================================================
// Documented Behaviour
// ============================================================================

#[test]
fn test_heading_with_formatting() {
    let result = render_markdown("## Hello *World*");
    assert_eq!(
        result.html,
        r#"<h2 id="hello-world" data-heading-id="hello-world">Hello <em>World</em></h2>"#
    );
    assert_eq!(result.headings, vec![heading(2, "Hello *World*", "hello-world")]);
}

#[test]
fn test_ordinal_correction() {
    let html = render_markdown("1. a\n3. b\n4. c").html;
    assert_eq!(
        html,
        r#"<ol><li>a</li><li value="3">b</li><li value="4">c</li></ol>"#
    );
}

#[test]
fn test_code_span_shields_emphasis() {
    let html = render_markdown("`**x**` and **y**").html;
    assert_eq!(html, "<p><code>**x**</code> and <strong>y</strong></p>");
}

#[test]
fn test_table_without_body() {
    let html = render_markdown("| a | b |\n| --- | :-: |").html;
    assert_eq!(
        html,
        r#"<div class="c-article__table"><table><thead><tr><th>a</th><th style="text-align: center;">b</th></tr></thead><tbody></tbody></table></div>"#
    );
}

#[test]
fn test_list_kind_switch() {
    let html = render_markdown("- a\n1. b").html;
    assert_eq!(html, "<ul><li>a</li></ul><ol><li>b</li></ol>");
}

#[test]
fn test_fence_with_blank_line() {
    let html = render_markdown("```js\nlet a;\n\nlet b;\n```").html;
    assert_eq!(
        html,
        "<pre><code class=\"language-js\" data-lang=\"js\">let a;\n\nlet b;</code></pre>"
    );
}

#[test]
fn test_empty_document() {
    let result = render_markdown("");
    assert!(result.html.is_empty());
    assert!(result.headings.is_empty());
}

#[test]
fn test_heading_slug_matches_slugify() {
    let text = "Ｇ１ Ｒａｃｅｓ 2024";
    let result = render_markdown(&format!("### {text}"));
    assert_eq!(result.headings[0].id, slugify(text));
    assert_eq!(result.headings[0].id, "g1-races-2024");
}
