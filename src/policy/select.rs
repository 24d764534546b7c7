use crate::Cluster;
use crate::Point;
use crate::Probability;
use crate::Result;

/// Index and value of the largest weight. Lowest index wins ties.
pub fn argmax(weights: &[Probability]) -> Option<(usize, Probability)> {
    weights
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, w)| match best {
            Some((_, b)) if b >= w => best,
            _ => Some((i, w)),
        })
}

/// 1.0 at the argmax, 0.0 elsewhere
pub fn one_hot(probabilities: Vec<Probability>) -> Vec<Probability> {
    match argmax(&probabilities) {
        None => probabilities,
        Some((k, _)) => (0..probabilities.len())
            .map(|i| if i == k { 1. } else { 0. })
            .collect(),
    }
}

/// each model's pdf scaled to sum to one
pub fn normalized_pdfs(point: &Point, models: &[Cluster]) -> Result<Vec<Probability>> {
    let pdfs = crate::distances(point, models)?
        .into_iter()
        .map(|d| 1. / (1. + d))
        .collect::<Vec<_>>();
    let ref total = pdfs.iter().sum::<Probability>();
    Ok(pdfs.into_iter().map(|p| p / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_lowest_index() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), Some((1, 0.4)));
        assert_eq!(argmax(&[0.5]), Some((0, 0.5)));
        assert_eq!(argmax(&[]), None);
    }
    #[test]
    fn one_hot_marks_argmax() {
        assert_eq!(one_hot(vec![0.1, 0.7, 0.2]), vec![0., 1., 0.]);
        assert_eq!(one_hot(vec![0.5, 0.5]), vec![1., 0.]);
        assert_eq!(one_hot(vec![]), Vec::<Probability>::new());
    }
}
