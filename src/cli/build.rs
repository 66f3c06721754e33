//! Sitemap building.
//!
//! Writes `index.xml` plus one file per page of every registered source:
//!
//! ```text
//! public/
//! ├── index.xml       <sitemapindex>
//! ├── news.xml        page 1
//! ├── news.2.xml      page 2
//! └── videos.xml
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use newsmap::log;
use newsmap::sitemap::xml::{self, NewsPublication, minify_xml};
use newsmap::sitemap::{Assembler, INDEX_FILE, page_file_name};

/// Render every page of every source plus the index into `output_dir`.
///
/// Returns the number of files written. Fails before writing anything if two
/// documents would share a file name.
pub fn build_sitemaps(
    assembler: &Assembler<'_>,
    publication: &NewsPublication,
    output_dir: &Path,
    minify: bool,
) -> Result<usize> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let index = assembler.render_index();

    let mut file_names = HashSet::from([INDEX_FILE.to_string()]);
    for entry in &index {
        for page in 1..=entry.source.num_pages() {
            let file_name = page_file_name(&entry.name, page);
            if !file_names.insert(file_name.clone()) {
                bail!("source `{}` page {} would overwrite {}", entry.name, page, file_name);
            }
        }
    }

    let mut written = 0;

    for entry in &index {
        for page in 1..=entry.source.num_pages() {
            let rendered = assembler.render_source(&entry.name, page)?;
            let count = rendered.entries.len();
            let file_name = page_file_name(&entry.name, page);

            let content = xml::render_urlset(rendered, publication);
            write_xml(&output_dir.join(&file_name), &content, minify)?;
            log!("build"; "{} ({} entries)", file_name, count);
            written += 1;
        }
    }

    let content = xml::render_index(&index, assembler.site());
    write_xml(&output_dir.join(INDEX_FILE), &content, minify)?;
    log!("build"; "{} ({} sources)", INDEX_FILE, index.len());

    Ok(written + 1)
}

fn write_xml(path: &Path, content: &str, minify: bool) -> Result<()> {
    let content = minify_xml(content, minify);
    fs::write(path, content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))
}
