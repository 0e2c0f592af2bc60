use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub label: String,
    pub count: usize,
}

/// Most frequent label. Among labels tied for the highest count, the one that
/// appears first in `labels` wins.
pub fn majority_vote(labels: &[String]) -> Option<Vote> {
    let mut tallies: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for label in labels {
        match positions.get(label.as_str()) {
            Some(&position) => tallies[position].1 += 1,
            None => {
                positions.insert(label.as_str(), tallies.len());
                tallies.push((label.as_str(), 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(label, count) in &tallies {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((label, count));
        }
    }

    best.map(|(label, count)| Vote {
        label: label.to_string(),
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(majority_vote(&[]), None);
    }

    #[test]
    fn test_clear_majority() {
        let vote = majority_vote(&labels(&["B", "A", "A"])).unwrap();
        assert_eq!(vote.label, "A");
        assert_eq!(vote.count, 2);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        for _ in 0..20 {
            assert_eq!(
                majority_vote(&labels(&["A", "B", "A", "B"])).unwrap().label,
                "A"
            );
            assert_eq!(
                majority_vote(&labels(&["C", "B", "A", "B", "A", "C"]))
                    .unwrap()
                    .label,
                "C"
            );
        }
    }

    #[test]
    fn test_later_label_can_overtake() {
        let vote = majority_vote(&labels(&["A", "B", "B", "C", "B"])).unwrap();
        assert_eq!(vote.label, "B");
        assert_eq!(vote.count, 3);
    }
}
