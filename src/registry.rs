//! The status table: registration data, boundary index, and lookup.
//!
//! [`StatusRegistry::new`] builds the whole table in one single-threaded
//! pass; afterwards the registry is immutable and freely shared across
//! worker threads. Build it once at startup and pass it to whatever emits
//! responses — there is no ambient global to reach for.
//!
//! Lookup is not a hash map. Codes are grouped by their hundreds digit into
//! six classes, each class's entries sit contiguously in one flat array, and
//! a seven-value cumulative boundary table maps `(class, offset)` straight
//! to an array slot. That only works because every class's codes are
//! registered in ascending order with no gaps — a load-bearing invariant
//! this module asserts at build time.

use tracing::info;

use crate::entry::StatusEntry;

/// Hundreds-digit classes: the reserved default class 0, then 1xx..5xx.
const CLASSES: usize = 6;

type Registration = (u16, &'static str, Option<&'static str>);

/// Every code the server recognizes, in slot order.
///
/// Class 4 is registered contiguously from 400 to 451; codes with no
/// deployed meaning get an empty reason phrase and no page, purely to keep
/// the fast lookup's no-gap invariant intact. Redirect messages carry a
/// `%s` substitution site for the target location.
const REGISTRATIONS: &[Registration] = &[
    // ── Default slot ──────────────────────────────────────────────────────────
    (0, " 200 OK\r\n", None),
    // ── 1xx Informational ─────────────────────────────────────────────────────
    (100, " 100 Continue\r\n", None),
    (101, " 101 Switching Protocols\r\n", None),
    (102, " 102 Processing\r\n", None),
    // ── 2xx Success ───────────────────────────────────────────────────────────
    (200, " 200 OK\r\n", None),
    (201, " 201 Created\r\n", None),
    (202, " 202 Accepted\r\n", None),
    (203, " 203 Non-Authoritative Information\r\n", None),
    (204, " 204 No Content\r\n", None),
    (205, " 205 Reset Content\r\n", None),
    (206, " 206 Partial Content\r\n", None),
    (207, " 207 Multi-Status\r\n", None),
    (208, " 208 Already Reported\r\n", None),
    // ── 3xx Redirection ───────────────────────────────────────────────────────
    (300, " 300 Multiple Choices\r\n", None),
    (301, " 301 Moved Permanently\r\n",
     Some("The document has been permanently moved to <A HREF=\"%s\">here</A>.")),
    (302, " 302 Found\r\n",
     Some("The document has been temporarily moved to <A HREF=\"%s\">here</A>.")),
    (303, " 303 See Other\r\n",
     Some("The answer to your request is located <A HREF=\"%s\">here</A>.")),
    (304, " 304 Not Modified\r\n", None),
    (305, " 305 Use Proxy\r\n",
     Some("The resource is only accessible through the proxy!")),
    (306, " 306 Switch Proxy\r\n", None),
    (307, " 307 Temporary Redirect\r\n",
     Some("The document has been temporarily moved to <A HREF=\"%s\">here</A>.")),
    (308, " 308 Permanent Redirect\r\n",
     Some("The document has been permanently redirected.")),
    // ── 4xx Client errors ─────────────────────────────────────────────────────
    (400, " 400 Bad Request\r\n",
     Some("It is not a valid request!")),
    (401, " 401 Unauthorized\r\n",
     Some("Proper authorization is required to access this resource!")),
    (402, " 402 Payment Required\r\n", None),
    (403, " 403 Forbidden\r\n",
     Some("Access to this resource on the server is denied!")),
    (404, " 404 Not Found\r\n",
     Some("The resource requested could not be found on this server!")),
    (405, " 405 Method Not Allowed\r\n",
     Some("This type request is not allowed!")),
    (406, " 406 Not Acceptable\r\n", None),
    (407, " 407 Proxy Authentication Required\r\n", None),
    (408, " 408 Request Time-out\r\n", None),
    (409, " 409 Conflict\r\n",
     Some("The request could not be completed due to a conflict \
           with the current state of the resource.")),
    (410, " 410 Gone\r\n",
     Some("The requested resource is no longer available at the server \
           and no forwarding address is known.")),
    (411, " 411 Length Required\r\n",
     Some("Lenth of body must be present in the request header!")),
    (412, " 412 Precondition Failed\r\n", None),
    (413, " 413 Request Entity Too Large\r\n",
     Some("The request body is over the maximum size allowed!")),
    (414, " 414 Request-URI Too Large\r\n",
     Some("The request URL is over the maximum size allowed!")),
    (415, " 415 Unsupported Media Type\r\n",
     Some("The media type is not supported by the server!")),
    (416, " 416 Requested range not satisfiable\r\n",
     Some("None of the range specified overlap the current extent of the selected resource.\n")),
    (417, " 417 Expectation Failed\r\n", None),
    (418, " 418 reauthentication required\r\n", None),
    (419, " 419 proxy reauthentication required\r\n", None),
    (420, " 420 Policy Not Fulfilled\r\n", None),
    (421, " 421 Bad Mapping\r\n", None),
    (422, " 422 Unprocessable Entity\r\n", None),
    (423, " 423 Locked\r\n", None),
    (424, " 424 Failed Dependency\r\n", None),
    (425, " 425 Too Early\r\n", None),
    (426, " 426 Upgrade Required\r\n", None),
    (427, " 427 \r\n", None),
    (428, " 428 Precondition Required\r\n", None),
    (429, " 429 Too Many Requests\r\n", None),
    (430, " 430 \r\n", None),
    (431, " 431 Request Header Fields Too Large\r\n", None),
    (432, " 432 \r\n", None),
    (433, " 433 \r\n", None),
    (434, " 434 \r\n", None),
    (435, " 435 \r\n", None),
    (436, " 436 \r\n", None),
    (437, " 437 \r\n", None),
    (438, " 438 \r\n", None),
    (439, " 439 \r\n", None),
    (440, " 440 \r\n", None),
    (441, " 441 \r\n", None),
    (442, " 442 \r\n", None),
    (443, " 443 \r\n", None),
    (444, " 444 \r\n", None),
    (445, " 445 \r\n", None),
    (446, " 446 \r\n", None),
    (447, " 447 \r\n", None),
    (448, " 448 \r\n", None),
    (449, " 449 \r\n", None),
    (450, " 450 Website Unavailable\r\n",
     Some("The website you are trying to reach is unavailable due to security \
           measures in place which restrict unauthorized access.")),
    (451, " 451 Unavailable For Legal Reasons\r\n", None),
    // ── 5xx Server errors ─────────────────────────────────────────────────────
    (500, " 500 Internal Server Error\r\n",
     Some("An internal server error has occured.")),
    (501, " 501 Not Implemented\r\n",
     Some("The requested method is not implemented by the server.")),
    (502, " 502 Bad Gateway\r\n", None),
    (503, " 503 Service Unavailable\r\n",
     Some("The server is temporarily busy, try again later!")),
    (504, " 504 Gateway Time-out\r\n", None),
    (505, " 505 HTTP Version not supported\r\n",
     Some("Only HTTP/1.0, HTTP/1.1 is supported.")),
    (506, " 506 Loop Detected\r\n", None),
    (507, " 507 Insufficient Storage\r\n", None),
    (508, " 508 Insufficient Resource\r\n", None),
    (509, " 509 Bandwidth Limit Exceeded\r\n", None),
    (510, " 510 Not Extended\r\n", None),
];

// ── StatusRegistry ────────────────────────────────────────────────────────────

/// Process-wide, read-only table of status lines and default pages.
///
/// ```rust
/// use statpage::StatusRegistry;
///
/// let registry = StatusRegistry::new();
/// let index = registry.resolve("404").expect("404 is registered");
/// assert_eq!(registry.get(index).status_line(), " 404 Not Found\r\n");
/// ```
pub struct StatusRegistry {
    entries: Vec<StatusEntry>,
    /// Cumulative slot counts: class `c` occupies `boundary[c]..boundary[c+1]`.
    boundary: [usize; CLASSES + 1],
}

impl StatusRegistry {
    /// Builds the full table, rendering every default page once.
    ///
    /// # Panics
    ///
    /// Panics if the registration data violates the per-class ordering
    /// invariant — a defect in this crate, caught before the table can
    /// serve a single wrong lookup.
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(REGISTRATIONS.len());
        let mut boundary = [0usize; CLASSES + 1];

        for &(code, status_line, message) in REGISTRATIONS {
            let class = (code / 100) as usize;
            assert!(class < CLASSES, "status code {code} outside classes 0..{CLASSES}");
            // Lookup arithmetic relies on each class being registered as an
            // ascending, gap-free run starting at its x00 code.
            assert_eq!(
                (code % 100) as usize,
                entries.len() - boundary[class],
                "status code {code} breaks its class's contiguous ascending order",
            );
            entries.push(StatusEntry::build(code, status_line, message));
            boundary[class + 1] = entries.len();
        }

        info!(entries = entries.len(), "status table built");
        Self { entries, boundary }
    }

    /// Resolves a 3-character code string to a slot index.
    ///
    /// Constant time, no hashing: the first digit picks the class, the last
    /// two form the offset within it, and the boundary table gates
    /// reachability. Fails closed with `None` for anything else — wrong
    /// length, non-digits, a class digit outside `'0'..='5'`, or a
    /// well-formed code beyond the class's registered run. Malformed and
    /// unknown are deliberately indistinguishable here.
    pub fn resolve(&self, code: &str) -> Option<usize> {
        let code = code.as_bytes();
        if code.len() != 3 {
            return None;
        }
        let class = match code[0] {
            digit @ b'0'..=b'5' => (digit - b'0') as usize,
            _ => return None,
        };
        if !code[1].is_ascii_digit() || !code[2].is_ascii_digit() {
            return None;
        }
        let offset = (code[1] - b'0') as usize * 10 + (code[2] - b'0') as usize;
        if offset < self.boundary[class + 1] - self.boundary[class] {
            Some(self.boundary[class] + offset)
        } else {
            None
        }
    }

    /// [`resolve`](Self::resolve) for engines speaking the `http` crate's
    /// [`StatusCode`](http::StatusCode), via its canonical 3-digit string.
    pub fn resolve_status(&self, code: http::StatusCode) -> Option<usize> {
        self.resolve(code.as_str())
    }

    /// The entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Only indices produced by
    /// [`resolve`](Self::resolve) are valid — an out-of-range index is a
    /// caller bug, not a runtime condition to recover from.
    pub fn get(&self, index: usize) -> &StatusEntry {
        &self.entries[index]
    }

    /// The reserved default slot — a generic `200 OK` with no body, for
    /// callers that degrade rather than error when resolution fails.
    pub fn fallback(&self) -> &StatusEntry {
        &self.entries[0]
    }

    /// Total number of slots; valid indices are `0..len()`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter()
    }
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self::new()
    }
}
