use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

const REVIEWS: &[&str] = &[
    "Quantum Fit has transformed my health and well-being. Highly recommended! - Jane Smith",
    "Quantum Fit has transformed my health and well-being. Highly recommended - Brock Lesnar",
    "I love the variety of exercises and diet plans. Quantum Fit is my go-to fitness platform - Dwayne Johnson",
    "I was too lazy until I found this site. It's amazing! - John Cena",
];

const QUOTES: &[&str] = &[
    "I hated every minute of training, but I said, Don't quit. Suffer now and live the rest of your life as a champion. - Muhammad Ali",
    "We are what we repeatedly do. Excellence then is not an act but a habit. - Aristotle",
    "The body achieves what the mind believes. - Napoleon Hill",
    "Exercise should be regarded as tribute to the heart. - Gene Tunney",
    "Most people fail, not because of lack of desire, but, because of lack of commitment. - Vince Lombardi",
    "If something stands between you and your success, move it. Never be denied. - Dwayne (The Rock) Johnson",
    "All progress takes place outside the comfort zone. - Michael John Bobak",
    "Just believe in yourself. Even if you don't, just pretend that you do and at some point, you will. - Venus Williams",
];

#[derive(Debug, Serialize)]
pub struct Inspiration {
    pub reviews: &'static [&'static str],
    pub quotes: &'static [&'static str],
}

pub fn router() -> Router<AppState> {
    Router::new().route("/inspiration", get(inspiration))
}

pub async fn inspiration() -> Json<Inspiration> {
    Json(Inspiration {
        reviews: REVIEWS,
        quotes: QUOTES,
    })
}
