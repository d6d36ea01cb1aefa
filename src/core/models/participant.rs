use std::collections::HashMap;

/// Avatar label used when an address yields no initials.
pub const FALLBACK_INITIALS: &str = "U";

/// One rendered participant entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    pub initials: String,
    /// How many earlier rows in the same list carry this exact address
    pub occurrence: usize,
}

impl ParticipantRow {
    pub fn new(email: &str, occurrence: usize) -> Self {
        Self {
            email: email.to_string(),
            initials: initials_for(email),
            occurrence,
        }
    }

    /// Identity of the row in its list. Independent of position, so dropping
    /// one participant leaves the keys of every other row untouched.
    pub fn key(&self) -> (String, usize) {
        (self.email.clone(), self.occurrence)
    }
}

/// Rows for a participant list, numbering repeated addresses 0, 1, 2...
pub fn participant_rows(emails: &[String]) -> Vec<ParticipantRow> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    emails
        .iter()
        .map(|email| {
            let count = seen.entry(email.as_str()).or_insert(0);
            let row = ParticipantRow::new(email, *count);
            *count += 1;
            row
        })
        .collect()
}

/// Up to two uppercase initials from the local part of an email address.
///
/// The local part is split on `.`, `-` and `_`; the first character of each of
/// the first two non-empty segments is used.
pub fn initials_for(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let initials: String = local
        .split(['.', '-', '_'])
        .filter_map(|segment| segment.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        FALLBACK_INITIALS.to_string()
    } else {
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_segments_give_two_letters() {
        assert_eq!(initials_for("jane.doe@x.com"), "JD");
        assert_eq!(initials_for("mary-ann_smith@x.com"), "MA");
    }

    #[test]
    fn single_segment_gives_one_letter() {
        assert_eq!(initials_for("bob@x.com"), "B");
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(initials_for(".jane..doe@x.com"), "JD");
        assert_eq!(initials_for("_x@x.com"), "X");
    }

    #[test]
    fn no_usable_segment_falls_back() {
        assert_eq!(initials_for("...@x.com"), "U");
        assert_eq!(initials_for("@x.com"), "U");
        assert_eq!(initials_for(""), "U");
    }

    #[test]
    fn address_without_at_uses_whole_string() {
        assert_eq!(initials_for("michael.j"), "MJ");
    }

    fn emails(list: &[&str]) -> Vec<String> {
        list.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn row_keeps_full_email() {
        let row = ParticipantRow::new("emma@mergington.edu", 0);
        assert_eq!(row.email, "emma@mergington.edu");
        assert_eq!(row.initials, "E");
    }

    #[test]
    fn row_keys_survive_removing_an_earlier_participant() {
        let before: Vec<_> = participant_rows(&emails(&["a@x.com", "b@x.com", "c@x.com"]))
            .iter()
            .map(ParticipantRow::key)
            .collect();
        let after: Vec<_> = participant_rows(&emails(&["b@x.com", "c@x.com"]))
            .iter()
            .map(ParticipantRow::key)
            .collect();

        assert_eq!(after, before[1..].to_vec());
    }

    #[test]
    fn duplicate_addresses_get_distinct_keys() {
        let rows = participant_rows(&emails(&["a@x.com", "b@x.com", "a@x.com"]));
        let keys: Vec<_> = rows.iter().map(ParticipantRow::key).collect();
        assert_eq!(
            keys,
            vec![
                ("a@x.com".to_string(), 0),
                ("b@x.com".to_string(), 0),
                ("a@x.com".to_string(), 1),
            ]
        );
    }
}
