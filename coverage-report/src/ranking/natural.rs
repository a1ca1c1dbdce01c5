//! Natural ordering for route designations.
//!
//! Designations are compared as alternating non-digit and digit runs, with
//! digit runs compared by numeric value, so `I-2 < I-10 < I-100`.

use std::cmp::Ordering;

/// A run of a designation.
#[derive(Debug, PartialEq, Eq)]
enum Run<'a> {
    Text(&'a str),
    Digits(&'a str),
}

fn runs(s: &str) -> impl Iterator<Item = Run<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(if digits { Run::Digits(run) } else { Run::Text(run) })
    })
}

/// Compare two digit runs by value without parsing, so long runs cannot overflow.
fn cmp_value(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()))
}

/// Walk both run sequences, comparing aligned runs with `digits` or `text`.
fn cmp_runs(
    a: &str,
    b: &str,
    digits: impl Fn(&str, &str) -> Ordering,
    text: impl Fn(&str, &str) -> Ordering,
) -> Ordering {
    let mut left = runs(a);
    let mut right = runs(b);

    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Run::Digits(x)), Some(Run::Digits(y))) => digits(x, y),
            (Some(Run::Text(x)), Some(Run::Text(y))) => text(x, y),
            (Some(Run::Digits(_)), Some(Run::Text(_))) => Ordering::Less,
            (Some(Run::Text(_)), Some(Run::Digits(_))) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Natural comparison of two designations.
///
/// The whole designation is first compared with digit runs by value and text
/// runs case-insensitively; a digit run sorts before a text run at the same
/// position. Only designations equal under that comparison are then ordered
/// by fewer leading zeros, and finally by exact bytes. The result is a total
/// order consistent with string equality.
///
/// # Examples
///
/// ```
/// use coverage_report::ranking::natural_cmp;
///
/// let mut routes = vec!["I-100", "I-2", "I-10"];
/// routes.sort_by(|a, b| natural_cmp(a, b));
/// assert_eq!(routes, vec!["I-2", "I-10", "I-100"]);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    cmp_runs(a, b, cmp_value, cmp_folded)
        .then_with(|| cmp_runs(a, b, |x, y| x.len().cmp(&y.len()), |_, _| Ordering::Equal))
        .then_with(|| a.cmp(b))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Numeric suffixes order by value.
        #[test]
        fn numeric_suffix_order(a in 0u32..100_000, b in 0u32..100_000) {
            let x = format!("I-{a}");
            let y = format!("I-{b}");
            prop_assert_eq!(natural_cmp(&x, &y), a.cmp(&b));
        }

        /// Swapping arguments reverses the ordering.
        #[test]
        fn antisymmetric(a in "[A-Za-z0-9-]{0,8}", b in "[A-Za-z0-9-]{0,8}") {
            prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
        }

        /// Only identical strings compare equal.
        #[test]
        fn equal_only_when_identical(a in "[A-Za-z0-9-]{0,8}", b in "[A-Za-z0-9-]{0,8}") {
            prop_assert_eq!(natural_cmp(&a, &b) == Ordering::Equal, a == b);
        }

        /// Sorting is transitive across triples.
        #[test]
        fn transitive(
            a in "[A-C0-9-]{0,5}",
            b in "[A-C0-9-]{0,5}",
            c in "[A-C0-9-]{0,5}",
        ) {
            let mut v = [a, b, c];
            v.sort_by(|x, y| natural_cmp(x, y));
            prop_assert_ne!(natural_cmp(&v[0], &v[1]), Ordering::Greater);
            prop_assert_ne!(natural_cmp(&v[1], &v[2]), Ordering::Greater);
            prop_assert_ne!(natural_cmp(&v[0], &v[2]), Ordering::Greater);
        }
    }
}
