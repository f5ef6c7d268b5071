use ark_bn254::{G1Affine, G2Affine};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The common reference string produced by trusted setup.
///
/// Ordering is contractual and shared with the prover's coefficient
/// extraction: `g1_srs[k]` and `g2_srs[k]` carry `τ^(n−1−k)` and
/// `t_tau_srs[k]` carries `τ^(n−2−k)·t(τ)`, highest powers first.
///
/// The bundle is immutable after setup; any number of provers may share
/// one instance. Only `alpha_g1` and `beta_g2` ever reach a verifier;
/// see [`Crs::verifying_key`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crs {
    /// `[α]₁`
    pub alpha_g1: G1Affine,
    /// `[β]₁`
    pub beta_g1: G1Affine,
    /// `[β]₂`
    pub beta_g2: G2Affine,
    /// `[[τ^{n−1}]₁, …, [τ⁰]₁]`, one entry per combination-polynomial
    /// coefficient
    pub g1_srs: Vec<G1Affine>,
    /// `[[τ^{n−1}]₂, …, [τ⁰]₂]`
    pub g2_srs: Vec<G2Affine>,
    /// `[[τ^{n−2}·t(τ)]₁, …, [τ⁰·t(τ)]₁]`, one entry per quotient
    /// coefficient
    pub t_tau_srs: Vec<G1Affine>,
    /// `ψⱼ = [α·vⱼ(τ) + β·uⱼ(τ) + wⱼ(τ)]₁`, one entry per wire
    pub psis: Vec<G1Affine>,
}

impl Crs {
    /// The verifier-side projection of the reference string.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            alpha_g1: self.alpha_g1,
            beta_g2: self.beta_g2,
        }
    }
}

/// The two reference-string elements the verifier consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    pub alpha_g1: G1Affine,
    pub beta_g2: G2Affine,
}

/// Serializes a single arkworks type into canonical compressed bytes.
fn serialize_to_bytes<T>(value: &T) -> Vec<u8>
where
    T: CanonicalSerialize,
{
    let mut bytes = Vec::new();
    value.serialize_compressed(&mut bytes).unwrap();
    bytes
}

fn deserialize_from_bytes<T>(bytes: &[u8]) -> T
where
    T: CanonicalDeserialize,
{
    T::deserialize_compressed(bytes).unwrap()
}

/// Concatenates the canonical compressed encodings of a vector of
/// arkworks types. Element boundaries are recovered on read because the
/// compressed size per type is fixed.
fn serialize_vec_to_bytes<T>(values: &[T]) -> Vec<u8>
where
    T: CanonicalSerialize,
{
    let mut bytes = Vec::new();
    for value in values {
        value.serialize_compressed(&mut bytes).unwrap();
    }
    bytes
}

fn deserialize_vec_from_bytes<T>(bytes: &[u8]) -> Vec<T>
where
    T: CanonicalDeserialize,
{
    let mut reader = bytes;
    let mut values = Vec::new();
    while !reader.is_empty() {
        values.push(T::deserialize_compressed(&mut reader).unwrap());
    }
    values
}

/// Serializable representation of [`Crs`]. Group elements do not speak
/// serde natively, so each field crosses as canonical compressed bytes.
#[derive(Serialize, Deserialize)]
struct CrsRepr {
    #[serde(with = "serde_bytes")]
    alpha_g1: Vec<u8>,
    #[serde(with = "serde_bytes")]
    beta_g1: Vec<u8>,
    #[serde(with = "serde_bytes")]
    beta_g2: Vec<u8>,
    #[serde(with = "serde_bytes")]
    g1_srs: Vec<u8>,
    #[serde(with = "serde_bytes")]
    g2_srs: Vec<u8>,
    #[serde(with = "serde_bytes")]
    t_tau_srs: Vec<u8>,
    #[serde(with = "serde_bytes")]
    psis: Vec<u8>,
}

impl From<&Crs> for CrsRepr {
    fn from(crs: &Crs) -> Self {
        CrsRepr {
            alpha_g1: serialize_to_bytes(&crs.alpha_g1),
            beta_g1: serialize_to_bytes(&crs.beta_g1),
            beta_g2: serialize_to_bytes(&crs.beta_g2),
            g1_srs: serialize_vec_to_bytes(&crs.g1_srs),
            g2_srs: serialize_vec_to_bytes(&crs.g2_srs),
            t_tau_srs: serialize_vec_to_bytes(&crs.t_tau_srs),
            psis: serialize_vec_to_bytes(&crs.psis),
        }
    }
}

impl From<&CrsRepr> for Crs {
    fn from(repr: &CrsRepr) -> Self {
        Crs {
            alpha_g1: deserialize_from_bytes(&repr.alpha_g1),
            beta_g1: deserialize_from_bytes(&repr.beta_g1),
            beta_g2: deserialize_from_bytes(&repr.beta_g2),
            g1_srs: deserialize_vec_from_bytes(&repr.g1_srs),
            g2_srs: deserialize_vec_from_bytes(&repr.g2_srs),
            t_tau_srs: deserialize_vec_from_bytes(&repr.t_tau_srs),
            psis: deserialize_vec_from_bytes(&repr.psis),
        }
    }
}

impl Serialize for Crs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CrsRepr::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Crs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = CrsRepr::deserialize(deserializer)?;
        Ok(Crs::from(&repr))
    }
}
