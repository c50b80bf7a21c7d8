use crate::models::TodayReview;

/// Renders a finished report. Never receives failures.
pub trait ReviewPresenter {
    fn present(&self, review: &TodayReview);
}
