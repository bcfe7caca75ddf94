use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Category;

/// Phrases that mark a post as written by a passenger looking for a ride.
///
/// Matching runs on the lowercased text, so the patterns are written in
/// lowercase Vietnamese. Order is irrelevant: a single hit anywhere decides
/// the category.
static PASSENGER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"cần\s+tìm\s+xe",            // "cần tìm xe" - need to find a car
        r"tìm\s+xe",                  // "tìm xe" - find a car
        r"cần\s+xe",                  // "cần xe" - need a car
        r"cần\s+bao(?:\s+\d)?\s+xe",  // "cần bao (1) xe" - need to charter a car
        r"cần\s+gửi",                 // "cần gửi" - need to send something
        r"có\s+xe\s+tiện\s+chuyến\s+nào", // "có xe tiện chuyến nào" - any convenient ride
        r"có\s+xe\s+nào",             // "có xe nào" - any car available
        r"nhà\s+em",                  // "nhà em" - my household (requester self-reference)
        r"cần\s+\d+\s+xe",            // "cần 2 xe" - need N cars
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid passenger pattern"))
    .collect()
});

/// Guesses whether a free-text ride post was written by a driver offering a
/// ride (`Offer`) or a passenger looking for one (`Request`).
///
/// Only explicit passenger-seeking phrasing routes a post to `Request`;
/// everything else, including empty text, defaults to `Offer`. Driver posts
/// dominate the source group and their linguistic markers (prices, hotlines,
/// phone numbers) are too noisy to score reliably, so absence of passenger
/// language is the signal for an offer.
///
/// Total and deterministic: any input yields exactly one category.
pub fn classify(content: &str) -> Category {
    let normalized = content.to_lowercase();
    if PASSENGER_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(&normalized))
    {
        Category::Request
    } else {
        Category::Offer
    }
}
