const USERS_SEGMENTS: [&str; 3] = ["gmail", "v1", "users"];
const DELEGATES_SEGMENTS: [&str; 2] = ["settings", "delegates"];

/// Path segments of the delegates collection, or of one delegate when given.
pub fn delegates_segments<'a>(mailbox: &'a str, delegate: Option<&'a str>) -> Vec<&'a str> {
    let mut segments = Vec::with_capacity(7);
    segments.extend_from_slice(&USERS_SEGMENTS);
    segments.push(mailbox);
    segments.extend_from_slice(&DELEGATES_SEGMENTS);
    if let Some(delegate) = delegate {
        segments.push(delegate);
    }
    segments
}
