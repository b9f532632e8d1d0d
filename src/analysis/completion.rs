use crate::config::Probability;

/// Compounds per-segment reach odds into "finish everything from here" odds.
/// `finish[i] = reach[i] * reach[i + 1] * ... * reach[n - 1]`
pub fn finish_odds(reach: &[Probability]) -> Vec<Probability> {
    let mut finish = vec![Probability::CERTAIN; reach.len()];
    let mut carry = Probability::CERTAIN;

    for (slot, &odds) in finish.iter_mut().zip(reach).rev() {
        carry = carry * odds;
        *slot = carry;
    }

    finish
}
