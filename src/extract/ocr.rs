//! Single-pattern OCR extraction mode.
//!
//! One combined regex with named capture groups runs across the whole
//! whitespace-collapsed document and every match becomes a record. Used
//! for exported OCR text where many records are concatenated back-to-back
//! without blank-line separators, which is why this mode cannot share the
//! blank-line splitting of labeled-block parsing.

use regex::Regex;

use super::RawFields;

/// Field order is fixed by the export format; matching is non-greedy
/// between the literal label anchors. The birth date is the last field of
/// a record, so it is bounded by a digit/separator class instead of a
/// lazy wildcard that would bleed into the next record's serial.
const RECORD_PATTERN: &str = concat!(
    r"(?P<serial>[0-9০-৯]+)\.\s*",
    r"নাম:\s*(?P<name>.+?)\s*",
    r"ভোটার নং:\s*(?P<voter>.+?)\s*",
    r"পিতা:\s*(?P<father>.+?)\s*",
    r"মাতা:\s*(?P<mother>.+?)\s*",
    r"পেশা:\s*(?P<occupation>.+?),\s*",
    r"জন্ম তারিখ:\s*(?P<birth>[0-9০-৯/.\-]+)",
);

pub(crate) struct OcrParser {
    whitespace: Regex,
    record: Regex,
}

impl OcrParser {
    pub(crate) fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").unwrap(),
            record: Regex::new(RECORD_PATTERN).unwrap(),
        }
    }

    pub(crate) fn parse(&self, text: &str) -> Vec<RawFields> {
        let collapsed = self.whitespace.replace_all(text, " ");

        let records: Vec<RawFields> = self
            .record
            .captures_iter(&collapsed)
            .map(|caps| RawFields {
                serial_number: caps["serial"].to_string(),
                name: caps["name"].to_string(),
                voter_number: caps["voter"].to_string(),
                father_name: caps["father"].to_string(),
                mother_name: caps["mother"].to_string(),
                occupation: caps["occupation"].to_string(),
                birth_date: caps["birth"].to_string(),
                ..RawFields::default()
            })
            .collect();

        log::debug!("OCR pattern matched {} records", records.len());
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str =
        "1. নাম: X ভোটার নং: ১২৩ পিতা: Y মাতা: Z পেশা: কৃষি, জন্ম তারিখ: ০১/০১/১৯৯০";

    #[test]
    fn test_single_match() {
        let parser = OcrParser::new();
        let records = parser.parse(ONE);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].serial_number, "1");
        assert_eq!(records[0].name, "X");
        assert_eq!(records[0].voter_number, "১২৩");
        assert_eq!(records[0].occupation, "কৃষি");
        assert_eq!(records[0].birth_date, "০১/০১/১৯৯০");
    }

    #[test]
    fn test_back_to_back_records() {
        let parser = OcrParser::new();
        let doc = format!(
            "{ONE} ২. নাম: সালমা ভোটার নং: ৪৫৬ পিতা: করিম মাতা: আমেনা পেশা: গৃহিণী, জন্ম তারিখ: ০৫/১১/১৯৮৫"
        );
        let records = parser.parse(&doc);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].serial_number, "২");
        assert_eq!(records[1].name, "সালমা");
    }

    #[test]
    fn test_newlines_collapsed_before_matching() {
        let parser = OcrParser::new();
        let doc = ONE.replace(' ', "\n");
        assert_eq!(parser.parse(&doc).len(), 1);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let parser = OcrParser::new();
        assert!(parser.parse("নাম: রহিম without the rest").is_empty());
    }
}
