//! Document identifier resolution.
//!
//! Document boundary comments come in several flavours depending on the corpus source.
//! Each flavour has a matcher; matchers are tried in order and the first match wins.
//!
//! ```text
//! # <doc collection="wiki" url="Suomen kieli">
//! # <doc id="1234" title="..." url="http://example.fi/" langdiff="0.42">
//! # <doc file="crawl-001.gz" ... urn="<urn:uuid:...>">
//! # <doc urn="<urn:uuid:...>" ... file="crawl-001.gz">
//! # doc_id = 1234
//! ```
use lazy_static::lazy_static;
use log::error;
use regex::Regex;
use url::form_urlencoded;

pub const UNKNOWN: &str = "<UNKNOWN>";

/// Placeholder for documents without auxiliary information.
const NO_AUX: &str = "_";

lazy_static! {
    static ref DOC_COLLECTION_RE: Regex =
        Regex::new(r#"^#\s+<doc\s+collection="([^"]+)"\s+url="(.*)">"#).unwrap();
    static ref DOC_CRAWL_RE: Regex = Regex::new(
        r#"^#\s+<doc\s+id="([^"]+)"\s.*?\burl="(.*?)"\s+langdiff="([^"]+)"\s*>"#
    )
    .unwrap();
    static ref DOC_CRAWL_FILE_URN_RE: Regex =
        Regex::new(r#"^#\s+<doc\b.*\bfile="([^"]+)".*\burn="<(.*?)>".*>"#).unwrap();
    static ref DOC_CRAWL_URN_FILE_RE: Regex =
        Regex::new(r#"^#\s+<doc\b.*\burn="<(.*?)>".*\bfile="([^"]+)".*>"#).unwrap();
    static ref DOC_ID_RE: Regex = Regex::new(r"^#\s+doc_id\s+=\s+(.*?)\s*$").unwrap();
}

/// Normalized document identifier and auxiliary information (e.g. language difference score).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocId {
    id: String,
    aux: String,
}

impl DocId {
    pub fn new(id: String, aux: String) -> Self {
        Self { id, aux }
    }

    /// Identifier used when no matcher recognizes the boundary comment.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN.to_string(), UNKNOWN.to_string())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn aux(&self) -> &str {
        &self.aux
    }

    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN
    }
}

type Matcher = fn(&str) -> Option<DocId>;

const MATCHERS: [Matcher; 5] = [
    match_collection,
    match_crawl,
    match_crawl_file_urn,
    match_crawl_urn_file,
    match_doc_id,
];

/// Percent-encode a wiki page title, keeping `/` as is.
fn quote_page(page: &str) -> String {
    form_urlencoded::byte_serialize(page.replace(' ', "_").as_bytes())
        .collect::<String>()
        .replace("%2F", "/")
        .replace("%7E", "~")
        .replace('*', "%2A")
}

fn match_collection(comment: &str) -> Option<DocId> {
    let caps = DOC_COLLECTION_RE.captures(comment)?;
    let collection = &caps[1];
    let page = if collection == "wiki" {
        quote_page(&caps[2])
    } else {
        caps[2].to_string()
    };
    Some(DocId::new(
        format!("{}/{}", collection, page),
        NO_AUX.to_string(),
    ))
}

fn match_crawl(comment: &str) -> Option<DocId> {
    let caps = DOC_CRAWL_RE.captures(comment)?;
    Some(DocId::new(
        format!("{}/{}", &caps[1], &caps[2]),
        caps[3].to_string(),
    ))
}

fn match_crawl_file_urn(comment: &str) -> Option<DocId> {
    let caps = DOC_CRAWL_FILE_URN_RE.captures(comment)?;
    Some(DocId::new(
        format!("{}/{}", &caps[1], &caps[2]),
        NO_AUX.to_string(),
    ))
}

fn match_crawl_urn_file(comment: &str) -> Option<DocId> {
    let caps = DOC_CRAWL_URN_FILE_RE.captures(comment)?;
    Some(DocId::new(
        format!("{}/{}", &caps[2], &caps[1]),
        NO_AUX.to_string(),
    ))
}

fn match_doc_id(comment: &str) -> Option<DocId> {
    let caps = DOC_ID_RE.captures(comment)?;
    Some(DocId::new(caps[1].to_string(), NO_AUX.to_string()))
}

/// Resolve a document boundary comment into a [DocId].
///
/// Unrecognized comments are logged and resolved to [DocId::unknown].
pub fn resolve(comment: &str) -> DocId {
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(comment))
        .unwrap_or_else(|| {
            error!("Failed to parse document comment: {:?}", comment);
            DocId::unknown()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki() {
        let id = resolve(r#"# <doc collection="wiki" url="Suomen kieli">"#);
        assert_eq!(id.id(), "wiki/Suomen_kieli");
        assert_eq!(id.aux(), "_");

        let id = resolve(r#"# <doc collection="wiki" url="Äänestys (vaalit)">"#);
        assert_eq!(id.id(), "wiki/%C3%84%C3%A4nestys_%28vaalit%29");
    }

    #[test]
    fn test_other_collection() {
        let id = resolve(r#"# <doc collection="news" url="http://a.fi/x y">"#);
        assert_eq!(id.id(), "news/http://a.fi/x y");
    }

    #[test]
    fn test_crawl_langdiff() {
        let id = resolve(
            r#"# <doc id="42" length="1k-10k" url="http://example.fi/page" langdiff="0.53">"#,
        );
        assert_eq!(id.id(), "42/http://example.fi/page");
        assert_eq!(id.aux(), "0.53");
    }

    #[test]
    fn test_crawl_file_urn_orders() {
        let id = resolve(r#"# <doc file="crawl-001.warc.gz" x="1" urn="<urn:uuid:abc>">"#);
        assert_eq!(id, DocId::new("crawl-001.warc.gz/urn:uuid:abc".to_string(), "_".to_string()));

        let id = resolve(r#"# <doc urn="<urn:uuid:abc>" x="1" file="crawl-001.warc.gz">"#);
        assert_eq!(id, DocId::new("crawl-001.warc.gz/urn:uuid:abc".to_string(), "_".to_string()));
    }

    #[test]
    fn test_doc_id() {
        let id = resolve("# doc_id = stt-1995-0001");
        assert_eq!(id.id(), "stt-1995-0001");
        assert_eq!(id.aux(), "_");
    }

    #[test]
    fn test_unknown() {
        let id = resolve(r#"# <doc title="no id here">"#);
        assert!(id.is_unknown());
        assert_eq!(id, DocId::unknown());
        assert_eq!(id.aux(), "<UNKNOWN>");
    }

    #[test]
    fn test_quote_page() {
        assert_eq!(quote_page("a/b c~d*e"), "a/b_c~d%2Ae");
    }
}
