//! # statpage
//!
//! The status-line and default-error-page registry for an HTTP server.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The engine parses requests, negotiates content, and owns the socket.
//! statpage does not — by design. Given a 3-character status code, it hands
//! back the canonical status line and a pre-rendered default page, in
//! constant time and without a hash map in sight. Everything is built once
//! at startup; after that every operation is a lock-free read.
//!
//! What the engine owns — statpage intentionally ignores:
//!
//! - **Request parsing and headers** — that is HTTP-semantics territory
//! - **Content negotiation** — the default pages are the negotiation
//! - **Custom error pages** — configure those in the engine; these are the
//!   built-in last resort
//!
//! What's left for statpage — the part every engine needs and none should
//! rewrite:
//!
//! - Class/offset lookup — `"404"` → slot index via a six-class boundary
//!   table, O(1), fails closed on anything unregistered or malformed
//! - Bounded page rendering — every page formatted into a fixed 4 KiB
//!   buffer that truncates rather than overflows
//! - Redirect templating — `301`/`302`/`303`/`307` pages keep one
//!   substitution site for the target URL, spliced per request into a
//!   caller-local buffer
//!
//! ## Quick start
//!
//! ```rust
//! use statpage::{BodyKind, StatusRegistry};
//!
//! let registry = StatusRegistry::new();
//!
//! // Resolve, then read the slot. Unknown or malformed codes fail closed.
//! let index = registry.resolve("404").expect("404 is registered");
//! let entry = registry.get(index);
//! assert_eq!(entry.status_line(), " 404 Not Found\r\n");
//! assert_eq!(entry.kind(), BodyKind::Static);
//!
//! // Redirect pages take the target at emission time.
//! let found = registry.get(registry.resolve("302").expect("302 is registered"));
//! let page = found.expand("http://example.com/moved").expect("302 is templated");
//! assert!(!page.windows(2).any(|w| w == b"%s"));
//!
//! // Degrade instead of erroring when resolution fails.
//! let entry = match registry.resolve("999") {
//!     Some(index) => registry.get(index),
//!     None => registry.fallback(),
//! };
//! assert_eq!(entry.code(), 0);
//! ```

mod emit;
mod entry;
mod error;
mod registry;
mod render;

pub use emit::DefaultResponse;
pub use entry::{BodyKind, StatusEntry};
pub use error::Error;
pub use registry::StatusRegistry;
