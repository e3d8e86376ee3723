use crate::analysis::to_fixed;
use crate::models::Recommendation;

use super::Lang;

/// Round to whole rupees and group digits the Indian way (`12,34,567`).
pub fn format_rupees(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Rule-based answer describing the top recommendation.
pub fn respond(top: &Recommendation, lang: Lang, image_attached: bool) -> String {
    let profit = format_rupees(top.profit_per_ha);
    let yield_t = to_fixed(top.yield_t_per_ha, 1);
    let mut answer = match lang {
        Lang::Hi => format!(
            "आपके डाटा के अनुसार {} उपयुक्त है। अनुमानित उत्पादन {} टन/हे., मुनाफ़ा ₹{} प्रति हेक्टेयर और सस्टेनेबिलिटी {}% है।",
            top.crop, yield_t, profit, top.sustainability
        ),
        Lang::En => format!(
            "Based on your data, {} looks best. Estimated yield {} t/ha, profit ₹{} per ha, and sustainability {}%.",
            top.crop, yield_t, profit, top.sustainability
        ),
    };

    if image_attached {
        answer.push_str(match lang {
            Lang::Hi => " आपने एक छवि भेजी है, हम पत्ती/मिट्टी स्वास्थ्य भी जाँचेंगे।",
            Lang::En => " You shared an image; we'll also assess leaf/soil health.",
        });
    }

    answer
}

/// Answer from a ranked recommendation list. Only the first entry is used.
pub fn reply(recs: &[Recommendation], lang: Lang, image_attached: bool) -> Option<String> {
    recs.first().map(|top| respond(top, lang, image_attached))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::recommend;
    use crate::models::FarmInput;

    fn top() -> Recommendation {
        recommend(&FarmInput::default()).remove(0)
    }

    #[test]
    fn test_format_rupees_small() {
        assert_eq!(format_rupees(0.0), "0");
        assert_eq!(format_rupees(152.8956), "153");
        assert_eq!(format_rupees(999.4), "999");
    }

    #[test]
    fn test_format_rupees_indian_grouping() {
        assert_eq!(format_rupees(1000.0), "1,000");
        assert_eq!(format_rupees(123_456.0), "1,23,456");
        assert_eq!(format_rupees(1_234_567.0), "12,34,567");
        assert_eq!(format_rupees(12_345_678.4), "1,23,45,678");
    }

    #[test]
    fn test_format_rupees_negative() {
        assert_eq!(format_rupees(-123_456.0), "-1,23,456");
    }

    #[test]
    fn test_respond_english() {
        insta::assert_snapshot!(
            respond(&top(), Lang::En, false),
            @"Based on your data, Chickpea looks best. Estimated yield 2.5 t/ha, profit ₹153 per ha, and sustainability 98%."
        );
    }

    #[test]
    fn test_respond_hindi() {
        insta::assert_snapshot!(
            respond(&top(), Lang::Hi, false),
            @"आपके डाटा के अनुसार Chickpea उपयुक्त है। अनुमानित उत्पादन 2.5 टन/हे., मुनाफ़ा ₹153 प्रति हेक्टेयर और सस्टेनेबिलिटी 98% है।"
        );
    }

    #[test]
    fn test_respond_with_image() {
        let en = respond(&top(), Lang::En, true);
        assert!(en.ends_with(" You shared an image; we'll also assess leaf/soil health."));
        let hi = respond(&top(), Lang::Hi, true);
        assert!(hi.ends_with("स्वास्थ्य भी जाँचेंगे।"));
    }

    #[test]
    fn test_respond_yield_tie_rounds_up() {
        let rec = Recommendation {
            yield_t_per_ha: 6.25,
            ..top()
        };
        assert!(respond(&rec, Lang::En, false).contains("Estimated yield 6.3 t/ha"));
        assert!(respond(&rec, Lang::Hi, false).contains("अनुमानित उत्पादन 6.3 टन/हे."));
    }

    #[test]
    fn test_reply_uses_first_only() {
        let recs = recommend(&FarmInput::default());
        let answer = reply(&recs, Lang::En, false).unwrap();
        assert!(answer.contains("Chickpea"));
        assert!(!answer.contains("Maize"));
    }

    #[test]
    fn test_reply_empty() {
        assert!(reply(&[], Lang::En, false).is_none());
    }
}
