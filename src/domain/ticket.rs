use std::fmt;

/// Ordered set of literal ticket prefixes, e.g. `TAG-` or `#`.
///
/// Order is the order the prefixes were configured in; the first prefix that
/// matches wins when several overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPrefixes(Vec<String>);

impl TicketPrefixes {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for prefix in prefixes {
            let prefix = prefix.into();
            if !prefix.is_empty() && !unique.contains(&prefix) {
                unique.push(prefix);
            }
        }
        Self(unique)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// A prefix immediately followed by one or more decimal digits, e.g. `TAG-1234`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketReference(String);

impl TicketReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the ticket reference `text` starts with, if any.
///
/// Prefixes are tried in configured order at position 0. A prefix only counts
/// when at least one digit follows it directly; the digit run is greedy and
/// ends at the first non-digit.
pub fn match_ticket(text: &str, prefixes: &TicketPrefixes) -> Option<TicketReference> {
    prefixes.iter().find_map(|prefix| {
        let rest = text.strip_prefix(prefix)?;
        let digits = rest
            .bytes()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }
        Some(TicketReference(text[..prefix.len() + digits].to_string()))
    })
}
