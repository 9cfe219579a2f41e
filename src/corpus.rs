//! Link graphs from a directory of HTML pages.
//!
//! Every `*.html` file directly inside the directory is a page named after
//! its file name; its outlinks are the `href` targets of its anchors that
//! name another page of the same directory.

use crate::{Error, LinkGraph, Result};
use regex::Regex;
use std::{collections::BTreeSet, fs, path::Path, sync::LazyLock};

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex")
});

/// `href` targets of all anchors in `contents`.
pub fn extract_links(contents: &str) -> BTreeSet<String> {
    ANCHOR
        .captures_iter(contents)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn crawl(dir: impl AsRef<Path>) -> Result<LinkGraph<String>> {
    let dir = dir.as_ref();
    let mut pages = vec![];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            log::warn!("skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path())?;
        let links = extract_links(&contents);
        log::debug!("{name}: {} links", links.len());
        pages.push((name, links));
    }
    if pages.is_empty() {
        return Err(Error::Corpus(format!(
            "no .html pages in {}",
            dir.display()
        )));
    }
    log::info!("crawled {} pages from {}", pages.len(), dir.display());
    LinkGraph::new(pages)
}
