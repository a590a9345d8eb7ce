//! Canonical forms for symmetric label pairs.

/// The two labels in lexicographic order, joined by `#`.
///
/// `sorted_pair(a, b) == sorted_pair(b, a)` for every pair of labels.
pub fn sorted_pair(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut pair = String::with_capacity(first.len() + second.len() + 1);
    pair.push_str(first);
    pair.push('#');
    pair.push_str(second);
    pair
}

/// Role qualified by the event type it belongs to, e.g. `PersonEnd-Position`.
/// Roles such as `Person` mean different things under different events.
pub fn role_with_label(role: &str, label: &str) -> String {
    format!("{}{}", role, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_pair_is_symmetric() {
        let labels = ["Attack", "Die", "End-Position", "attack", "", "Die#x"];
        for a in labels {
            for b in labels {
                assert_eq!(sorted_pair(a, b), sorted_pair(b, a));
            }
        }
    }

    #[test]
    fn test_sorted_pair_format() {
        assert_eq!(sorted_pair("Die", "Attack"), "Attack#Die");
        assert_eq!(sorted_pair("Attack", "Attack"), "Attack#Attack");
        assert_eq!(sorted_pair("Time-Within", "Time-Before"), "Time-Before#Time-Within");
    }

    #[test]
    fn test_role_with_label() {
        assert_eq!(role_with_label("Person", "Die"), "PersonDie");
    }
}
