//! Labeled-block extraction mode.
//!
//! Splits pasted text on blank-line boundaries into blocks. Within a
//! block, a line consisting solely of a number becomes the serial; every
//! other line is scanned for a fixed set of label prefixes and the text
//! after the first recognized label (to end of line) becomes that field's
//! raw value.

use regex::Regex;

use super::RawFields;

/// A field a label prefix can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Father,
    Mother,
    VoterNumber,
    BirthDate,
    Occupation,
}

/// Recognized label prefixes. The multi-word labels come first so a line
/// like "ভোটার নং: ১২৩" is never claimed by a shorter label.
const LABELS: &[(&str, Field)] = &[
    ("ভোটার নং:", Field::VoterNumber),
    ("জন্ম তারিখ:", Field::BirthDate),
    ("নাম:", Field::Name),
    ("পিতা:", Field::Father),
    ("মাতা:", Field::Mother),
    ("পেশা:", Field::Occupation),
];

pub(crate) struct LabeledParser {
    block_split: Regex,
    serial_line: Regex,
}

impl LabeledParser {
    pub(crate) fn new() -> Self {
        Self {
            block_split: Regex::new(r"\r?\n[ \t]*\r?\n").unwrap(),
            serial_line: Regex::new(r"^([0-9০-৯]+)\.?$").unwrap(),
        }
    }

    pub(crate) fn parse(&self, text: &str) -> Vec<RawFields> {
        self.block_split
            .split(text)
            .filter_map(|block| self.parse_block(block))
            .collect()
    }

    fn parse_block(&self, block: &str) -> Option<RawFields> {
        let mut fields = RawFields::default();
        let mut saw_anything = false;

        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            saw_anything = true;

            if fields.serial_number.is_empty() {
                if let Some(caps) = self.serial_line.captures(line) {
                    fields.serial_number = caps[1].to_string();
                    continue;
                }
            }

            // First recognized label by position wins the line.
            let hit = LABELS
                .iter()
                .filter_map(|(label, field)| line.find(label).map(|pos| (pos, *label, *field)))
                .min_by_key(|(pos, _, _)| *pos);

            if let Some((pos, label, field)) = hit {
                let value = line[pos + label.len()..].trim();
                let slot = match field {
                    Field::Name => &mut fields.name,
                    Field::Father => &mut fields.father_name,
                    Field::Mother => &mut fields.mother_name,
                    Field::VoterNumber => &mut fields.voter_number,
                    Field::BirthDate => &mut fields.birth_date,
                    Field::Occupation => &mut fields.occupation,
                };
                if slot.is_empty() {
                    *slot = value.to_string();
                }
            }
        }

        saw_anything.then_some(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block() {
        let parser = LabeledParser::new();
        let blocks = parser.parse("১\nনাম: রহিম\nপিতা: করিম\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].serial_number, "১");
        assert_eq!(blocks[0].name, "রহিম");
        assert_eq!(blocks[0].father_name, "করিম");
        assert_eq!(blocks[0].mother_name, "");
    }

    #[test]
    fn test_blank_line_splits_blocks() {
        let parser = LabeledParser::new();
        let blocks = parser.parse("নাম: রহিম\n\nনাম: সালমা\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].name, "সালমা");
    }

    #[test]
    fn test_voter_number_label_not_shadowed() {
        let parser = LabeledParser::new();
        let blocks = parser.parse("নাম: রহিম\nভোটার নং: ১২৩৪\nজন্ম তারিখ: ০১/০১/১৯৯০\n");
        assert_eq!(blocks[0].voter_number, "১২৩৪");
        assert_eq!(blocks[0].birth_date, "০১/০১/১৯৯০");
    }

    #[test]
    fn test_serial_line_with_trailing_dot() {
        let parser = LabeledParser::new();
        let blocks = parser.parse("12.\nনাম: রহিম\n");
        assert_eq!(blocks[0].serial_number, "12");
    }

    #[test]
    fn test_first_label_occurrence_wins() {
        let parser = LabeledParser::new();
        let blocks = parser.parse("নাম: রহিম\nনাম: অন্য\n");
        assert_eq!(blocks[0].name, "রহিম");
    }

    #[test]
    fn test_block_without_labels_kept_raw() {
        // The name gate lives in post-processing, not here.
        let parser = LabeledParser::new();
        let blocks = parser.parse("just some text\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "");
    }
}
