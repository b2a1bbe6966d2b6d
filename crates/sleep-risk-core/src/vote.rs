use crate::category::Category;

/// Most frequent category in `votes`.
///
/// On equal counts the one that appears first in `votes` wins, so with
/// three distinct votes the first rule decides. `None` for an empty slice.
pub fn majority(votes: &[Category]) -> Option<Category> {
    let mut winner: Option<(Category, usize)> = None;
    for (idx, &candidate) in votes.iter().enumerate() {
        // Only the first occurrence of a category is scored.
        if votes[..idx].contains(&candidate) {
            continue;
        }
        let count = votes.iter().filter(|&&v| v == candidate).count();
        match winner {
            Some((_, best)) if best >= count => {}
            _ => winner = Some((candidate, count)),
        }
    }
    winner.map(|(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    #[test]
    fn two_of_three_wins() {
        assert_eq!(majority(&[Insomnia, Apnea, Apnea]), Some(Apnea));
        assert_eq!(majority(&[Insomnia, Apnea, Insomnia]), Some(Insomnia));
        assert_eq!(majority(&[Healthy, Healthy, Insomnia]), Some(Healthy));
    }

    #[test]
    fn distinct_votes_resolve_to_first() {
        assert_eq!(majority(&[Insomnia, Apnea, Healthy]), Some(Insomnia));
        assert_eq!(majority(&[Apnea, Healthy, Insomnia]), Some(Apnea));
        assert_eq!(majority(&[Healthy, Apnea, Insomnia]), Some(Healthy));
    }

    #[test]
    fn longer_ballots_keep_first_on_tie() {
        assert_eq!(majority(&[Apnea, Insomnia, Insomnia, Apnea]), Some(Apnea));
        assert_eq!(majority(&[Healthy]), Some(Healthy));
        assert_eq!(majority(&[]), None);
    }
}
