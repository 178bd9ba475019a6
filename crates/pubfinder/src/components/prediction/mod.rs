//! Category prediction page.

mod prediction_card;
mod prediction_page;

pub use prediction_card::PredictionCard;
pub use prediction_page::PredictionPage;
