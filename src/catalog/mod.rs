//! Static catalog content: products, reviews and the Q&A board.

mod products;
mod qna;
mod reviews;

pub use products::{format_krw, FeaturedProduct, RankedProduct, FEATURED, RANKING};
pub use qna::{questions_for, Question, QuestionKind, QUESTIONS};
pub use reviews::{filtered_reviews, Review, ReviewFilter, REVIEWS};
