//! Bounded rendering of default status pages.
//!
//! Every default page is formatted into a fixed-size working buffer
//! ([`PageBuf`]) and only the bytes actually produced are copied into the
//! entry's owned storage. Formatting never writes past the buffer's bound:
//! content that would not fit is dropped, and the recorded length reflects
//! exactly what was written. The same buffer type backs the second-stage
//! redirect substitution, so both stages share one overflow discipline.

use std::fmt::{self, Write};

use tracing::warn;

/// Upper bound on a rendered page, placeholder included.
pub(crate) const PAGE_BUF_SIZE: usize = 4096;

/// The single substitution site left in redirect-class pages.
pub(crate) const PLACEHOLDER: &[u8] = b"%s";

// ── PageBuf ───────────────────────────────────────────────────────────────────

/// Fixed-capacity byte sink that truncates instead of overflowing.
///
/// `write_str` copies at most the remaining room and always returns `Ok` —
/// running out of space is policy here, not an error. Callers that care can
/// check [`truncated`](PageBuf::truncated) afterwards.
pub(crate) struct PageBuf {
    buf: [u8; PAGE_BUF_SIZE],
    len: usize,
    truncated: bool,
}

impl PageBuf {
    pub(crate) fn new() -> Self {
        Self { buf: [0; PAGE_BUF_SIZE], len: 0, truncated: false }
    }

    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        let room = PAGE_BUF_SIZE - self.len;
        if bytes.len() > room {
            self.truncated = true;
        }
        let n = room.min(bytes.len());
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
    }

    /// The bytes written so far. This length is authoritative.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub(crate) fn truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Write for PageBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_bytes(s.as_bytes());
        Ok(())
    }
}

// ── Page template ─────────────────────────────────────────────────────────────

/// Renders the default HTML page for one status line + explanatory message.
///
/// The document layout is byte-exact and leans on the fixed status-line
/// format: the `<title>` is the full status-line text (CRLF included), the
/// `<h1>` digits are sliced positionally from bytes 1..4, and the `<h2>`
/// reason is everything after byte 5. Redirect messages carry their `%s`
/// placeholder through unchanged; it is resolved per request later.
pub(crate) fn render_page(status_line: &'static str, message: &str) -> PageBuf {
    let digits = &status_line[1..4];
    let reason = &status_line[5..];

    let mut page = PageBuf::new();
    let _ = write!(
        page,
        concat!(
            "<!DOCTYPE html>\n",
            "<html style=\"height:100%\">\n<head>\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, shrink-to-fit=no\">\n",
            "<title>{line}</title></head>\n",
            "<body style=\"color: #444; margin:0;font: normal 14px/20px Arial, Helvetica, sans-serif; height:100%; background-color: #fff;\">\n",
            "<div style=\"height:auto; min-height:100%; \">",
            "     <div style=\"text-align: center; width:800px; margin-left: -400px; position:absolute; top: 30%; left:50%;\">\n",
            "        <h1 style=\"margin:0; font-size:150px; line-height:150px; font-weight:bold;\">{digits}</h1>\n",
            "<h2 style=\"margin-top:20px;font-size: 30px;\">{reason}</h2>\n",
            "<p>{message}</p>\n",
            "</div></div>",
        ),
        line = status_line,
        digits = digits,
        reason = reason,
        message = message,
    );
    let _ = page.write_str("</body></html>\n");

    if page.truncated() {
        warn!(
            line = status_line.trim_end(),
            "default page truncated at {PAGE_BUF_SIZE} bytes"
        );
    }
    page
}

/// Byte offset of the substitution site, if the body contains one.
pub(crate) fn placeholder_at(body: &[u8]) -> Option<usize> {
    body.windows(PLACEHOLDER.len()).position(|w| w == PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_carries_title_heading_reason_and_message() {
        let page = render_page(" 404 Not Found\r\n", "nope");
        let text = std::str::from_utf8(page.as_bytes()).unwrap();

        assert!(text.starts_with("<!DOCTYPE html>\n"));
        assert!(text.contains("<title> 404 Not Found\r\n</title>"));
        assert!(text.contains(">404</h1>"));
        assert!(text.contains("font-size: 30px;\">Not Found\r\n</h2>"));
        assert!(text.contains("<p>nope</p>"));
        assert!(text.ends_with("</body></html>\n"));
        assert!(!page.truncated());
    }

    #[test]
    fn oversized_message_truncates_at_the_bound() {
        let long = "x".repeat(2 * PAGE_BUF_SIZE);
        let page = render_page(" 404 Not Found\r\n", &long);

        assert_eq!(page.as_bytes().len(), PAGE_BUF_SIZE);
        assert!(page.truncated());
    }

    #[test]
    fn placeholder_scan_reports_the_site() {
        assert_eq!(placeholder_at(b"moved to <A HREF=\"%s\">here</A>."), Some(18));
        assert_eq!(placeholder_at(b"no site here, 100% static"), None);
    }

    #[test]
    fn push_bytes_never_overruns() {
        let mut buf = PageBuf::new();
        buf.push_bytes(&[b'a'; PAGE_BUF_SIZE - 1]);
        buf.push_bytes(b"bcd");

        assert_eq!(buf.as_bytes().len(), PAGE_BUF_SIZE);
        assert_eq!(buf.as_bytes()[PAGE_BUF_SIZE - 1], b'b');
        assert!(buf.truncated());
    }
}
