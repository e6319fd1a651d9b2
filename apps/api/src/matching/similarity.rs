//! Embedding-based similarity: pairwise cosine plus optimistic many-to-many
//! aggregation (one strong match is enough).

use crate::nlp::Embedder;

/// Cosine similarity of two vectors. Returns 0.0 when either vector has zero
/// norm or the lengths differ, so degenerate inputs never produce NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    f64::from(dot / (norm_a * norm_b))
}

/// Embeds each string in a list.
pub fn embed_list<'a, I>(embedder: &dyn Embedder, items: I) -> Vec<Vec<f32>>
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().map(|item| embedder.embed(item)).collect()
}

/// Maximum pairwise cosine similarity across the full cross product.
/// Defined as 0.0 when either list is empty.
pub fn aggregate_similarity(list_a: &[Vec<f32>], list_b: &[Vec<f32>]) -> f64 {
    let mut best = 0.0f64;
    for a in list_a {
        for b in list_b {
            best = best.max(cosine_similarity(a, b));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::embedding::HashEmbedder;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![0.6, 0.8];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn zero_vector_is_defined_as_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn empty_lists_aggregate_to_zero() {
        let embedder = HashEmbedder::default();
        let some = embed_list(&embedder, ["aws certified developer"]);
        assert_eq!(aggregate_similarity(&[], &some), 0.0);
        assert_eq!(aggregate_similarity(&some, &[]), 0.0);
        assert_eq!(aggregate_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn aggregate_takes_the_best_pair() {
        let embedder = HashEmbedder::default();
        let student = embed_list(&embedder, ["aws cloud practitioner", "first aid"]);
        let required = embed_list(&embedder, ["aws cloud practitioner"]);
        let sim = aggregate_similarity(&student, &required);
        assert!(sim > 0.99, "identical cert should dominate, got {sim}");
    }

    #[test]
    fn unrelated_lists_score_low() {
        let embedder = HashEmbedder::default();
        let a = embed_list(&embedder, ["deep learning specialization"]);
        let b = embed_list(&embedder, ["forklift operation"]);
        assert!(aggregate_similarity(&a, &b) < 0.5);
    }
}
