//! Deterministic feature-hashing embedder: the default `Embedder` backend.
//!
//! Training-free and fast: words and character trigrams are hashed into a
//! fixed-dimension vector with sign hashing, then L2-normalized. A hosted
//! sentence-embedding model can be swapped in behind the same trait.

use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

use super::Embedder;

// Fixed seeds keep embeddings stable across processes and Rust versions.
// Changing them changes every embedding.
const HASH_SEED_K0: u64 = 0x5163_6f6e_6e65_6374;
const HASH_SEED_K1: u64 = 0x736b_696c_6c00_0001;

pub const DEFAULT_DIMENSION: usize = 256;

pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn hash_feature(&self, feature: &str) -> (usize, f32) {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        feature.hash(&mut hasher);
        let h = hasher.finish();
        let index = (h as usize) % self.dimension;
        // Sign hashing keeps the expected dot product of unrelated texts near zero.
        let sign = if (h >> 32) & 1 == 0 { 1.0 } else { -1.0 };
        (index, sign)
    }

    fn features(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut features = Vec::new();
        for word in lowered.split_whitespace() {
            features.push(format!("w:{word}"));
            let chars: Vec<char> = word.chars().collect();
            for window in chars.windows(3) {
                features.push(format!("t:{}", window.iter().collect::<String>()));
            }
        }
        features
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl Embedder for HashEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        for feature in Self::features(text) {
            let (index, sign) = self.hash_feature(&feature);
            vector[index] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_is_deterministic() {
        let embedder = HashEmbedder::default();
        assert_eq!(embedder.embed("AWS Cloud Practitioner"), embedder.embed("AWS Cloud Practitioner"));
    }

    #[test]
    fn embedding_is_l2_normalized() {
        let embedder = HashEmbedder::default();
        let v = embedder.embed("machine learning engineer");
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[test]
    fn embedding_is_case_insensitive() {
        let embedder = HashEmbedder::default();
        assert_eq!(embedder.embed("Python"), embedder.embed("python"));
    }

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let embedder = HashEmbedder::default();
        let v = embedder.embed("   ");
        assert_eq!(v.len(), DEFAULT_DIMENSION);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn dimension_floors_at_one() {
        let embedder = HashEmbedder::new(0);
        assert_eq!(embedder.dimension(), 1);
        assert_eq!(embedder.embed("rust").len(), 1);
    }
}
