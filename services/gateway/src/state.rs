use matching_engine::EpitopeMatcher;

#[derive(Clone)]
pub struct AppState {
    pub matcher: EpitopeMatcher,
}

impl AppState {
    pub fn new(matcher: EpitopeMatcher) -> Self {
        Self { matcher }
    }
}
