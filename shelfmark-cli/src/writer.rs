//! Atom feed rendering of catalog pages
//!
//! Each [`CatalogPage`] becomes one OPDS 1.2 navigation or acquisition feed,
//! written under the output directory at the page's file name. Links inside
//! a feed are relative to the feed's own location.

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use shelfmark_core::{CatalogEntry, CatalogPage, ContentEntry, LinkKind, PagePersistence};
use std::fs;
use std::io::{self, Cursor};
use std::path::PathBuf;

// XML Namespaces
const NS_ATOM: &str = "http://www.w3.org/2005/Atom";
const NS_DC: &str = "http://purl.org/dc/terms/";
const NS_OPDS: &str = "http://opds-spec.org/2010/catalog";

/// Link relations
pub mod rel {
    pub const SELF: &str = "self";
    pub const START: &str = "start";
    pub const UP: &str = "up";
    pub const SUBSECTION: &str = "subsection";
    pub const NEXT: &str = "next";
    pub const ACQUISITION: &str = "http://opds-spec.org/acquisition";
    pub const THUMBNAIL: &str = "http://opds-spec.org/image/thumbnail";
}

/// MIME types
pub mod mime {
    pub const NAVIGATION: &str = "application/atom+xml;profile=opds-catalog;kind=navigation";
    pub const ACQUISITION: &str = "application/atom+xml;profile=opds-catalog;kind=acquisition";
    pub const EPUB: &str = "application/epub+zip";
    pub const PDF: &str = "application/pdf";
    pub const OCTET_STREAM: &str = "application/octet-stream";
    pub const PNG: &str = "image/png";
}

/// Path of `target` as seen from the directory holding `from`
///
/// Both are relative to the catalog root.
pub fn relative_href(from: &str, target: &str) -> String {
    if target.is_empty() || target.starts_with('/') || target.contains("://") {
        return target.to_string();
    }
    let depth = from.matches('/').count();
    format!("{}{}", "../".repeat(depth), target)
}

/// MIME type of a book file, by extension
fn book_mime(path: &str) -> &'static str {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("epub") => mime::EPUB,
        Some("pdf") => mime::PDF,
        _ => mime::OCTET_STREAM,
    }
}

/// Render a catalog page to Atom XML
pub fn render_page(page: &CatalogPage, updated: DateTime<Utc>) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let updated = updated.to_rfc3339();

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut feed_elem = BytesStart::new("feed");
    feed_elem.push_attribute(("xmlns", NS_ATOM));
    feed_elem.push_attribute(("xmlns:dc", NS_DC));
    feed_elem.push_attribute(("xmlns:opds", NS_OPDS));
    writer.write_event(Event::Start(feed_elem))?;

    write_text_element(&mut writer, "id", &page.urn)?;
    write_text_element(&mut writer, "title", &page.title)?;
    write_text_element(&mut writer, "updated", &updated)?;

    let kind = if page.content().any(|e| e.link_kind == LinkKind::Acquisition) {
        mime::ACQUISITION
    } else {
        mime::NAVIGATION
    };
    let own = relative_href(&page.file, &page.file);
    write_link(&mut writer, rel::SELF, &own, kind, None)?;

    // the path that leads here: root first, direct parent last
    let start = page.breadcrumbs.iter().next();
    let up = page.breadcrumbs.last();
    if let Some(start) = start {
        let href = relative_href(&page.file, &start.link);
        write_link(&mut writer, rel::START, &href, mime::NAVIGATION, Some(&start.title))?;
    }
    if let Some(up) = up {
        let href = relative_href(&page.file, &up.link);
        write_link(&mut writer, rel::UP, &href, mime::NAVIGATION, Some(&up.title))?;
    }
    if let Some(next) = page.next_link() {
        let href = relative_href(&page.file, &next.link);
        write_link(&mut writer, rel::NEXT, &href, kind, Some(&next.title))?;
    }

    for entry in &page.entries {
        match entry {
            CatalogEntry::Content(content) => {
                write_content_entry(&mut writer, page, content, &updated)?
            }
            CatalogEntry::Next(next) => {
                writer.write_event(Event::Start(BytesStart::new("entry")))?;
                write_text_element(&mut writer, "id", &format!("{}:next", page.urn))?;
                write_text_element(&mut writer, "title", &next.title)?;
                write_text_element(&mut writer, "updated", &updated)?;
                let href = relative_href(&page.file, &next.link);
                write_link(&mut writer, rel::NEXT, &href, kind, None)?;
                writer.write_event(Event::End(BytesEnd::new("entry")))?;
            }
        }
    }

    writer.write_event(Event::End(BytesEnd::new("feed")))?;

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result).unwrap_or_default())
}

/// Write a simple text element
fn write_text_element<W: io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_link<W: io::Write>(
    writer: &mut Writer<W>,
    rel: &str,
    href: &str,
    media_type: &str,
    title: Option<&str>,
) -> Result<(), quick_xml::Error> {
    let mut elem = BytesStart::new("link");
    elem.push_attribute(("rel", rel));
    elem.push_attribute(("href", href));
    elem.push_attribute(("type", media_type));
    if let Some(title) = title {
        elem.push_attribute(("title", title));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_content_entry<W: io::Write>(
    writer: &mut Writer<W>,
    page: &CatalogPage,
    entry: &ContentEntry,
    updated: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("entry")))?;
    write_text_element(writer, "id", &entry.urn)?;
    write_text_element(writer, "title", &entry.title)?;
    write_text_element(writer, "updated", updated)?;

    if let Some(ref summary) = entry.summary {
        let mut elem = BytesStart::new("content");
        elem.push_attribute(("type", "text"));
        writer.write_event(Event::Start(elem))?;
        writer.write_event(Event::Text(BytesText::new(summary)))?;
        writer.write_event(Event::End(BytesEnd::new("content")))?;
    }

    let href = relative_href(&page.file, &entry.link);
    match entry.link_kind {
        LinkKind::Navigation => {
            write_link(writer, rel::SUBSECTION, &href, mime::NAVIGATION, None)?;
        }
        LinkKind::AcquisitionFeed => {
            write_link(writer, rel::SUBSECTION, &href, mime::ACQUISITION, None)?;
        }
        LinkKind::Acquisition => {
            write_link(writer, rel::ACQUISITION, &href, book_mime(&entry.link), None)?;
        }
    }
    if let Some(ref icon) = entry.icon {
        let href = relative_href(&page.file, icon);
        write_link(writer, rel::THUMBNAIL, &href, mime::PNG, None)?;
    }

    writer.write_event(Event::End(BytesEnd::new("entry")))?;
    Ok(())
}

/// Writes every page as an Atom file below `root`
pub struct AtomPages {
    root: PathBuf,
    updated: DateTime<Utc>,
    dry_run: bool,
    written: usize,
}

impl AtomPages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            updated: Utc::now(),
            dry_run: false,
            written: 0,
        }
    }

    /// Render pages without touching the file system
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Number of pages rendered so far
    pub fn written(&self) -> usize {
        self.written
    }
}

impl PagePersistence for AtomPages {
    fn write_page(&mut self, page: &CatalogPage) -> io::Result<()> {
        let xml = render_page(page, self.updated)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        self.written += 1;
        if self.dry_run {
            tracing::debug!(file = %page.file, "Rendered page (dry run)");
            return Ok(());
        }

        let path = self.root.join(&page.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, xml)?;
        tracing::debug!(file = %page.file, entries = page.entries.len(), "Wrote page");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfmark_core::{Breadcrumbs, NextLink};

    fn sample_page() -> CatalogPage {
        CatalogPage {
            file: "series/series_7_Page_1.xml".to_string(),
            title: "Discworld".to_string(),
            urn: "urn:shelfmark:series:series:7".to_string(),
            breadcrumbs: Breadcrumbs::new()
                .append("Series", "series_Page_1.xml")
                .append("Series starting with D", "series_D_Page_1.xml"),
            entries: vec![
                CatalogEntry::Content(ContentEntry {
                    title: "1 - The Colour of Magic".to_string(),
                    urn: "urn:shelfmark:book:3".to_string(),
                    link: "books/colour.epub".to_string(),
                    link_kind: LinkKind::Acquisition,
                    summary: Some("Terry Pratchett".to_string()),
                    icon: None,
                }),
                CatalogEntry::Next(NextLink {
                    title: "Last page".to_string(),
                    link: "series/series_7_Page_2.xml".to_string(),
                }),
            ],
            page_number: 1,
            page_count: 2,
        }
    }

    #[test]
    fn test_relative_href() {
        assert_eq!(relative_href("series_Page_1.xml", "series_B_Page_1.xml"), "series_B_Page_1.xml");
        assert_eq!(
            relative_href("series/series_1_Page_1.xml", "series_Page_1.xml"),
            "../series_Page_1.xml"
        );
        assert_eq!(relative_href("a/b/c.xml", "http://x/y"), "http://x/y");
        assert_eq!(relative_href("a/b.xml", ""), "");
        assert_eq!(relative_href("a/b.xml", "/srv/book.epub"), "/srv/book.epub");
    }

    #[test]
    fn test_render_series_page() {
        let xml = render_page(&sample_page(), Utc::now()).unwrap();
        assert!(xml.contains("xmlns=\"http://www.w3.org/2005/Atom\""));
        assert!(xml.contains("<id>urn:shelfmark:series:series:7</id>"));
        assert!(xml.contains("<title>1 - The Colour of Magic</title>"));
        assert!(xml.contains("rel=\"http://opds-spec.org/acquisition\""));
        assert!(xml.contains("href=\"../books/colour.epub\""));
        assert!(xml.contains("type=\"application/epub+zip\""));
        assert!(xml.contains("rel=\"start\" href=\"../series_Page_1.xml\""));
        assert!(xml.contains("rel=\"up\" href=\"../series_D_Page_1.xml\""));
        assert!(xml.contains("rel=\"next\" href=\"../series/series_7_Page_2.xml\""));
    }

    #[test]
    fn test_nested_navigation_keeps_navigation_kind() {
        let page = CatalogPage {
            file: "author_7/series_Page_1.xml".to_string(),
            title: "Series".to_string(),
            urn: "urn:shelfmark:author_7:series".to_string(),
            breadcrumbs: Breadcrumbs::new(),
            entries: vec![
                CatalogEntry::Content(ContentEntry {
                    title: "Series starting with A".to_string(),
                    urn: "urn:shelfmark:author_7:series:A".to_string(),
                    link: "author_7/series_A_Page_1.xml".to_string(),
                    link_kind: LinkKind::Navigation,
                    summary: None,
                    icon: None,
                }),
                CatalogEntry::Content(ContentEntry {
                    title: "Bolt".to_string(),
                    urn: "urn:shelfmark:author_7:series:series:4".to_string(),
                    link: "author_7/series_4_Page_1.xml".to_string(),
                    link_kind: LinkKind::AcquisitionFeed,
                    summary: None,
                    icon: None,
                }),
            ],
            page_number: 1,
            page_count: 1,
        };
        let xml = render_page(&page, Utc::now()).unwrap();
        assert!(xml.contains(
            "rel=\"subsection\" href=\"../author_7/series_A_Page_1.xml\" \
             type=\"application/atom+xml;profile=opds-catalog;kind=navigation\""
        ));
        assert!(xml.contains(
            "rel=\"subsection\" href=\"../author_7/series_4_Page_1.xml\" \
             type=\"application/atom+xml;profile=opds-catalog;kind=acquisition\""
        ));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut page = sample_page();
        page.title = "Tom & Jerry <Collected>".to_string();
        let xml = render_page(&page, Utc::now()).unwrap();
        assert!(xml.contains("<title>Tom &amp; Jerry &lt;Collected&gt;</title>"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut pages = AtomPages::new(dir.path()).dry_run(true);
        pages.write_page(&sample_page()).unwrap();
        assert_eq!(pages.written(), 1);
        assert!(!dir.path().join("series").exists());
    }

    #[test]
    fn test_writes_nested_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut pages = AtomPages::new(dir.path());
        pages.write_page(&sample_page()).unwrap();
        let written = fs::read_to_string(dir.path().join("series/series_7_Page_1.xml")).unwrap();
        assert!(written.starts_with("<?xml"));
    }
}
