/// Canonicalizes an asset path into the form the store accepts: no `./`
/// segments, no resolvable `/../` markers, no leading or trailing slash.
/// The apk listing code chokes on all three.
///
/// Never fails. Malformed input (a `../` with nothing left to consume)
/// degrades to leaving the marker in place.
pub fn normalize(raw: &str) -> String {
    let mut path = strip_current_dir(raw);

    // Resolve `/../` left to right by deleting the preceding segment
    // together with the marker.
    while let Some(pos) = path.find("/../") {
        let start = path[..pos].rfind('/').map(|p| p + 1).unwrap_or(0);
        path.replace_range(start..pos + 4, "");
    }

    let path = path.strip_prefix('/').unwrap_or(&path);
    let path = path.strip_suffix('/').unwrap_or(path);

    path.to_owned()
}

/// Drops `./` wherever it starts a segment, leaving `../` untouched.
fn strip_current_dir(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = String::with_capacity(path.len());
    let mut copied_to = 0;
    let mut i = 0;

    while i < bytes.len() {
        let at_segment_start = i == 0 || bytes[i - 1] == b'/';
        if at_segment_start && bytes[i] == b'.' && bytes.get(i + 1) == Some(&b'/') {
            // `.` and `/` are single bytes, so these indices sit on char
            // boundaries even in multi-byte segments.
            out.push_str(&path[copied_to..i]);
            i += 2;
            copied_to = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&path[copied_to..]);

    out
}
