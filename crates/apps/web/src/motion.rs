use navigation::{MotionPreference, REDUCED_MOTION_QUERY};
use tracing::{debug, info};
use web_sys::{Document, HtmlMediaElement, Window};

use crate::config::Markup;
use crate::dom;
use crate::error::WebError;

/// Stop decorative autoplay video when the user asked for reduced motion.
/// Returns how many videos were stopped.
pub fn apply_preference(
    window: &Window,
    document: &Document,
    markup: &Markup,
) -> Result<usize, WebError> {
    let matches = window
        .match_media(REDUCED_MOTION_QUERY)?
        .is_some_and(|query| query.matches());
    if !MotionPreference::from_query_match(matches).stops_decorative_video() {
        return Ok(0);
    }
    let videos: Vec<HtmlMediaElement> = dom::query_all(document, &markup.decorative_video)?;
    for video in &videos {
        video.set_autoplay(false);
        video.remove_attribute("autoplay")?;
        if let Err(err) = video.pause() {
            debug!(error = ?err, "decorative video refused to pause");
        }
    }
    info!(videos = videos.len(), "reduced motion: decorative video stopped");
    Ok(videos.len())
}
