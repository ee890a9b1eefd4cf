/// Media query signalling the user's reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    pub fn from_query_match(matches: bool) -> Self {
        if matches {
            MotionPreference::Reduce
        } else {
            MotionPreference::NoPreference
        }
    }

    /// Decorative autoplay video has to be paused and kept from restarting.
    pub fn stops_decorative_video(self) -> bool {
        self == MotionPreference::Reduce
    }
}

#[cfg(test)]
mod tests {
    use super::MotionPreference;

    #[test]
    fn only_reduce_stops_video() {
        assert!(MotionPreference::from_query_match(true).stops_decorative_video());
        assert!(!MotionPreference::from_query_match(false).stops_decorative_video());
    }
}
