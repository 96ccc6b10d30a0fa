//! One status code's rendered artifacts.
//!
//! A [`StatusEntry`] owns everything the emission layer needs for a code:
//! the verbatim status line and the pre-rendered default page. Entries are
//! built once at startup and never mutated afterwards, so any number of
//! worker threads may read them concurrently. The only per-request work is
//! the redirect substitution in [`StatusEntry::expand`], which writes into a
//! caller-local buffer and leaves the shared template untouched.

use bytes::Bytes;
use tracing::warn;

use crate::render::{self, PLACEHOLDER, PageBuf};

// ── BodyKind ──────────────────────────────────────────────────────────────────

/// How an entry's default body is to be emitted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BodyKind {
    /// No default body. The caller synthesizes a minimal bodyless response.
    None,
    /// The stored bytes are final; emit them as-is.
    Static,
    /// The stored bytes contain exactly one substitution site for the
    /// redirect target. Call [`StatusEntry::expand`] before emitting.
    Templated,
}

// ── StatusEntry ───────────────────────────────────────────────────────────────

/// An immutable registry slot: status line plus default page.
pub struct StatusEntry {
    code: u16,
    status_line: &'static str,
    body: Bytes,
    kind: BodyKind,
    /// Byte offset of the substitution site. `Some` iff `kind` is `Templated`.
    target_site: Option<usize>,
}

impl StatusEntry {
    /// Builds one entry, rendering the default page if `message` is present.
    ///
    /// If owned storage for the rendered page cannot be allocated, the entry
    /// degrades to [`BodyKind::None`] — callers already handle `None` as
    /// "status line only," so no new failure surface is introduced.
    pub(crate) fn build(
        code: u16,
        status_line: &'static str,
        message: Option<&str>,
    ) -> Self {
        // Fixed status-line layout: " <3 digits> <reason>\r\n". The renderer
        // slices digits and reason out of it positionally.
        debug_assert!(status_line.len() >= 7);
        debug_assert!(status_line.as_bytes()[0] == b' ' && status_line.as_bytes()[4] == b' ');
        debug_assert!(status_line.ends_with("\r\n"));
        debug_assert!(code == 0 || &status_line[1..4] == format!("{code:03}").as_str());

        let Some(message) = message else {
            return Self::bare(code, status_line);
        };

        let page = render::render_page(status_line, message);
        let rendered = page.as_bytes();

        let mut storage: Vec<u8> = Vec::new();
        if storage.try_reserve_exact(rendered.len()).is_err() {
            warn!(code, "default page allocation failed, entry degrades to status line only");
            return Self::bare(code, status_line);
        }
        storage.extend_from_slice(rendered);
        let body = Bytes::from(storage);

        match render::placeholder_at(&body) {
            Some(site) => {
                // Exactly one site per templated page, checked here rather
                // than re-scanned at emission time.
                debug_assert!(
                    render::placeholder_at(&body[site + PLACEHOLDER.len()..]).is_none()
                );
                Self { code, status_line, body, kind: BodyKind::Templated, target_site: Some(site) }
            }
            None => Self { code, status_line, body, kind: BodyKind::Static, target_site: None },
        }
    }

    fn bare(code: u16, status_line: &'static str) -> Self {
        Self { code, status_line, body: Bytes::new(), kind: BodyKind::None, target_site: None }
    }

    /// The 3-digit status code; `0` marks the reserved default slot.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The verbatim text written after the version token:
    /// `" <code> <ReasonPhrase>\r\n"`.
    pub fn status_line(&self) -> &'static str {
        self.status_line
    }

    /// The stored default page. Empty for [`BodyKind::None`].
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Exact byte length of the stored page — the value for a length header
    /// when the entry is [`BodyKind::Static`].
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Second-stage substitution: splices `target` into the single
    /// substitution site of a [`BodyKind::Templated`] page.
    ///
    /// Writes into a fresh bounded buffer — the shared template is never
    /// touched, so concurrent requests on the same entry cannot race. The
    /// result is truncated, never overflowed, if `target` pushes the page
    /// past the rendering bound. Returns `None` for non-templated entries.
    pub fn expand(&self, target: &str) -> Option<Vec<u8>> {
        let site = self.target_site?;
        let mut page = PageBuf::new();
        page.push_bytes(&self.body[..site]);
        page.push_bytes(target.as_bytes());
        page.push_bytes(&self.body[site + PLACEHOLDER.len()..]);
        Some(page.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVED: &str = "The document has been temporarily moved to <A HREF=\"%s\">here</A>.";

    #[test]
    fn message_free_entries_have_no_body() {
        let entry = StatusEntry::build(204, " 204 No Content\r\n", None);

        assert_eq!(entry.kind(), BodyKind::None);
        assert_eq!(entry.body_len(), 0);
        assert_eq!(entry.status_line(), " 204 No Content\r\n");
    }

    #[test]
    fn plain_message_yields_a_static_entry() {
        let entry = StatusEntry::build(
            404,
            " 404 Not Found\r\n",
            Some("The resource requested could not be found on this server!"),
        );

        assert_eq!(entry.kind(), BodyKind::Static);
        assert!(entry.body_len() > 0);
        assert!(entry.expand("http://example.com/").is_none());
    }

    #[test]
    fn placeholder_message_yields_a_templated_entry() {
        let entry = StatusEntry::build(302, " 302 Found\r\n", Some(MOVED));

        assert_eq!(entry.kind(), BodyKind::Templated);
        let body = std::str::from_utf8(entry.body()).unwrap();
        assert!(body.contains("<A HREF=\"%s\">"));
    }

    #[test]
    fn substitution_accounts_for_every_byte() {
        let entry = StatusEntry::build(302, " 302 Found\r\n", Some(MOVED));
        let target = "http://example.com/x";

        let expanded = entry.expand(target).unwrap();
        assert_eq!(expanded.len(), entry.body_len() - PLACEHOLDER.len() + target.len());

        let text = std::str::from_utf8(&expanded).unwrap();
        assert!(text.contains("<A HREF=\"http://example.com/x\">here</A>"));
        assert!(!text.contains("%s"));
    }
}
