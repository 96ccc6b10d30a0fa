//! Writing a default response to the wire.
//!
//! [`DefaultResponse`] is the surface an HTTP engine consumes: hand it the
//! entry the resolver produced (or the fallback), a redirect target if the
//! entry is templated, and a writer. It emits the version token, the stored
//! status line verbatim, a length header computed from the exact body
//! length, and the body bytes.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::entry::{BodyKind, StatusEntry};
use crate::error::Error;

/// A status-line + default-page response, ready to emit.
///
/// ```rust,no_run
/// # async fn emit(stream: &mut tokio::net::TcpStream) -> Result<(), statpage::Error> {
/// use statpage::{DefaultResponse, StatusRegistry};
///
/// let registry = StatusRegistry::new();
/// let entry = match registry.resolve("404") {
///     Some(index) => registry.get(index),
///     None => registry.fallback(),
/// };
/// DefaultResponse::new(entry).write_to(stream).await?;
/// # Ok(())
/// # }
/// ```
pub struct DefaultResponse<'a> {
    entry: &'a StatusEntry,
    redirect_target: Option<&'a str>,
}

impl<'a> DefaultResponse<'a> {
    pub fn new(entry: &'a StatusEntry) -> Self {
        Self { entry, redirect_target: None }
    }

    /// Supplies the redirect target for a
    /// [`BodyKind::Templated`] entry. Ignored for other kinds.
    pub fn redirect_target(mut self, target: &'a str) -> Self {
        self.redirect_target = Some(target);
        self
    }

    /// Writes the complete response.
    ///
    /// `BodyKind::None` emits a bodyless response with `content-length: 0`;
    /// `Static` emits the stored bytes as-is; `Templated` performs the
    /// single bounded substitution into a per-call buffer first, and fails
    /// with [`Error::MissingRedirectTarget`] if no target was supplied.
    pub async fn write_to<W: AsyncWrite + Unpin>(self, writer: &mut W) -> Result<(), Error> {
        let expanded;
        let body: &[u8] = match self.entry.kind() {
            BodyKind::None => &[],
            BodyKind::Static => self.entry.body(),
            BodyKind::Templated => {
                let target = self.redirect_target.ok_or(Error::MissingRedirectTarget)?;
                expanded = self.entry.expand(target).unwrap_or_default();
                &expanded
            }
        };

        writer.write_all(b"HTTP/1.1").await?;
        writer.write_all(self.entry.status_line().as_bytes()).await?;
        writer.write_all(format!("content-length: {}\r\n", body.len()).as_bytes()).await?;
        if !body.is_empty() {
            writer.write_all(b"content-type: text/html\r\n").await?;
        }
        writer.write_all(b"\r\n").await?;
        writer.write_all(body).await?;
        writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StatusRegistry;

    #[tokio::test]
    async fn static_entry_emits_stored_bytes_and_exact_length() {
        let registry = StatusRegistry::new();
        let entry = registry.get(registry.resolve("404").unwrap());

        let mut out = Vec::new();
        DefaultResponse::new(entry).write_to(&mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains(&format!("content-length: {}\r\n", entry.body_len())));
        assert!(text.contains("content-type: text/html\r\n"));
        assert!(text.ends_with("</body></html>\n"));
    }

    #[tokio::test]
    async fn bodyless_entry_emits_a_minimal_response() {
        let registry = StatusRegistry::new();
        let entry = registry.get(registry.resolve("204").unwrap());

        let mut out = Vec::new();
        DefaultResponse::new(entry).write_to(&mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "HTTP/1.1 204 No Content\r\ncontent-length: 0\r\n\r\n",
        );
    }

    #[tokio::test]
    async fn templated_entry_without_target_is_an_error() {
        let registry = StatusRegistry::new();
        let entry = registry.get(registry.resolve("302").unwrap());

        let mut out = Vec::new();
        let err = DefaultResponse::new(entry).write_to(&mut out).await.unwrap_err();
        assert!(matches!(err, Error::MissingRedirectTarget));
    }

    #[tokio::test]
    async fn templated_entry_substitutes_the_target_and_recomputes_length() {
        let registry = StatusRegistry::new();
        let entry = registry.get(registry.resolve("302").unwrap());
        let target = "http://example.com/x";

        let mut out = Vec::new();
        DefaultResponse::new(entry)
            .redirect_target(target)
            .write_to(&mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let final_len = entry.body_len() - 2 + target.len();
        assert!(text.starts_with("HTTP/1.1 302 Found\r\n"));
        assert!(text.contains(&format!("content-length: {final_len}\r\n")));
        assert!(text.contains("<A HREF=\"http://example.com/x\">here</A>"));
        assert!(!text.contains("%s"));
    }
}
