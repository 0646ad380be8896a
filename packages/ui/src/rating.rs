use dioxus::prelude::*;

/// Ratings are out of five; anything above renders as a full row.
pub const MAX_STARS: usize = 5;

/// Number of filled stars: the rating rounded to the nearest integer,
/// capped at [`MAX_STARS`].
pub fn star_count(rating: f64) -> usize {
    if rating.is_finite() && rating > 0.0 {
        rating.round().min(MAX_STARS as f64) as usize
    } else {
        0
    }
}

pub fn stars(rating: f64) -> String {
    "★".repeat(star_count(rating))
}

/// One-decimal label, or `None` when there is no (non-zero) rating.
pub fn rating_label(rating: Option<f64>) -> Option<String> {
    rating.filter(|r| *r != 0.0).map(|r| format!("{r:.1}"))
}

/// Stars followed by the numeric rating; renders nothing without a rating.
#[component]
pub fn RatingStars(rating: Option<f64>) -> Element {
    let Some(label) = rating_label(rating) else {
        return rsx! {};
    };
    let filled = stars(rating.unwrap_or_default());

    rsx! {
        span { class: "text-yellow-400", "{filled}" }
        span { class: "text-gray-500 ml-1", "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_round_to_nearest() {
        assert_eq!(stars(4.7), "★★★★★");
        assert_eq!(stars(4.2), "★★★★");
        assert_eq!(stars(2.5), "★★★");
        assert_eq!(star_count(0.4), 0);
        assert_eq!(star_count(-1.0), 0);
        assert_eq!(star_count(f64::NAN), 0);
    }

    #[test]
    fn test_out_of_range_rating_is_capped() {
        assert_eq!(stars(5.4), "★★★★★");
        assert_eq!(stars(1e9), "★★★★★");
        assert_eq!(stars(1e20), "★★★★★");
        assert_eq!(star_count(f64::INFINITY), 0);
        assert_eq!(rating_label(Some(1e20)).as_deref(), Some("100000000000000000000.0"));
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(Some(4.7)).as_deref(), Some("4.7"));
        assert_eq!(rating_label(Some(5.0)).as_deref(), Some("5.0"));
        assert_eq!(rating_label(Some(0.0)), None);
        assert_eq!(rating_label(None), None);
    }
}
