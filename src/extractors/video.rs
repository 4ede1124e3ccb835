use log::debug;
use scraper::{Html, Selector};

use crate::model::VideoObject;
use crate::vocab::VIDEO_HOST_MARKERS;

/// Finds an embedded video player and wraps it in a typed reference. The
/// assembler later annotates it with the record's name and description.
pub fn extract_video(document: &Html) -> Option<VideoObject> {
    let selector = Selector::parse("iframe[src]").unwrap();
    document.select(&selector).find_map(|iframe| {
        let src = iframe.value().attr("src")?;
        if !VIDEO_HOST_MARKERS.iter().any(|host| src.contains(host)) {
            return None;
        }
        let embed_url = src.split('?').next().unwrap_or(src);
        debug!("found embedded video: {embed_url}");
        Some(VideoObject::new(embed_url))
    })
}
