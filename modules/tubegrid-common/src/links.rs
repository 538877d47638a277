use crate::types::ResultKind;

/// Destination URL for a result, switching on the kind the user asked
/// for. Shorts link like plain videos.
pub fn result_link(kind: ResultKind, id: &str) -> String {
    match kind {
        ResultKind::Video | ResultKind::Shorts => {
            format!("https://www.youtube.com/watch?v={id}")
        }
        ResultKind::Playlist => format!("https://www.youtube.com/playlist?list={id}"),
        ResultKind::Channel => format!("https://www.youtube.com/channel/{id}"),
    }
}
