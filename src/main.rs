//! notedown - Markdown rendering for a static blog

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use notedown::markdown::render_markdown;
use notedown::site::{
    DirSource, DocumentCache, SiteConfig, SortOrder, load_article, load_category_page,
    parse_post_param, render_toc,
};
use notedown::util::decode_text;

#[derive(Parser)]
#[command(name = "notedown")]
#[command(version, about = "Render blog Markdown and assemble pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    notedown render post.md              Print the article HTML
    notedown toc post.md                 Print table of contents items
    notedown post picks/arima --root .   Assemble an article page as JSON
    notedown list picks --tag G1         List a category filtered by tag
    notedown list picks --order oldest   List a category oldest first")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a Markdown file (`-` for stdin) to HTML
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print HTML and headings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the table of contents items of a Markdown file
    Toc {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Assemble the article page for CATEGORY/SLUG
    Post {
        #[arg(value_name = "CATEGORY/SLUG")]
        post: String,

        #[command(flatten)]
        site: SiteArgs,

        /// Print the whole page as JSON instead of the body HTML
        #[arg(long)]
        json: bool,
    },

    /// List the posts of a category
    List {
        #[arg(value_name = "CATEGORY")]
        category: String,

        #[command(flatten)]
        site: SiteArgs,

        /// Listing order: newest or oldest
        #[arg(long, value_name = "ORDER", default_value = "newest")]
        order: SortOrder,

        /// Only posts with this tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
}

#[derive(clap::Args)]
struct SiteArgs {
    /// Site directory holding data/ and content/
    #[arg(long, env = "NOTEDOWN_ROOT", default_value = ".")]
    root: PathBuf,

    /// Root path that generated URLs are relative to
    #[arg(long, default_value = ".")]
    root_path: String,
}

impl SiteArgs {
    fn open(&self) -> (DocumentCache<DirSource>, SiteConfig) {
        let cache = DocumentCache::new(DirSource::new(&self.root));
        let config = SiteConfig::new().with_root_path(self.root_path.as_str());
        (cache, config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render { file, json } => render(&file, json),
        Command::Toc { file } => toc(&file),
        Command::Post { post, site, json } => post_page(&post, &site, json),
        Command::List {
            category,
            site,
            order,
            tags,
        } => list(&category, &site, order, tags),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: &Path) -> Result<String, String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| format!("reading stdin: {e}"))?;
        buf
    } else {
        std::fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?
    };
    Ok(decode_text(&bytes).into_owned())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

fn render(path: &Path, json: bool) -> Result<(), String> {
    let result = render_markdown(&read_input(path)?);
    if json {
        println!("{}", to_json(&result)?);
    } else {
        println!("{}", result.html);
    }
    Ok(())
}

fn toc(path: &Path) -> Result<(), String> {
    let result = render_markdown(&read_input(path)?);
    println!("{}", render_toc(&result.headings));
    Ok(())
}

fn post_page(post: &str, site: &SiteArgs, json: bool) -> Result<(), String> {
    let param = parse_post_param(post).ok_or_else(|| format!("expected CATEGORY/SLUG, got {post:?}"))?;
    let (mut cache, config) = site.open();
    let article = load_article(&mut cache, &config, &param).map_err(|e| e.to_string())?;

    if json {
        println!("{}", to_json(&article)?);
    } else {
        println!("{}", article.html);
    }
    Ok(())
}

fn list(category: &str, site: &SiteArgs, order: SortOrder, tags: Vec<String>) -> Result<(), String> {
    let (mut cache, config) = site.open();
    let active: HashSet<String> = tags.into_iter().collect();
    let page = load_category_page(&mut cache, &config, category, order, &active)
        .map_err(|e| e.to_string())?;

    println!("{} ({} posts)", page.category_name, page.cards.len());
    if !page.tags.is_empty() {
        println!("Tags: {}", page.tags.join(", "));
    }
    for card in &page.cards {
        println!("{}  {}  {}", card.date_label, card.title, card.url);
    }
    Ok(())
}
