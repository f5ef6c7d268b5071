use crate::crs::Crs;
use crate::error::Groth16Error;
use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{One, UniformRand, Zero};
use rand::Rng;
use snark_qap::Qap;
use zeroize::Zeroize;

/// How many consecutive zero draws the sampler tolerates before blaming
/// the random source. Under a uniform distribution a single zero draw
/// has probability ~2⁻²⁵⁴.
const MAX_SAMPLE_RETRIES: usize = 8;

/// The setup secrets `τ, α, β`.
///
/// They exist only inside the setup functions and overwrite themselves
/// when dropped, on success and error paths alike. Knowledge of any of
/// them allows forging proofs.
struct ToxicScalars {
    tau: Fr,
    alpha: Fr,
    beta: Fr,
}

impl Zeroize for ToxicScalars {
    fn zeroize(&mut self) {
        self.tau = Fr::zero();
        self.alpha = Fr::zero();
        self.beta = Fr::zero();
    }
}

impl Drop for ToxicScalars {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Runs the single-party trusted setup for `qap`.
///
/// Samples `τ, α, β` uniformly from `F_p^*` (zero draws are resampled;
/// only a random source that keeps producing zeros surfaces as
/// [`Groth16Error::BadRandomness`]) and derives the reference string.
/// The secrets never leave this function.
///
/// # Security
///
/// `rng` must be cryptographically secure in production. Anyone who
/// learns the sampled scalars can forge proofs for any witness, which is
/// why they are zeroized before this function returns.
pub fn run_setup<R: Rng>(qap: &Qap<Fr>, rng: &mut R) -> Result<Crs, Groth16Error> {
    // sample into the container; a draw that fails partway through must
    // still zeroize the scalars already taken
    let mut secrets = ToxicScalars {
        tau: Fr::zero(),
        alpha: Fr::zero(),
        beta: Fr::zero(),
    };
    secrets.tau = sample_nonzero(rng)?;
    secrets.alpha = sample_nonzero(rng)?;
    secrets.beta = sample_nonzero(rng)?;
    Ok(derive_crs(qap, &secrets))
}

/// Deterministic setup from caller-chosen secrets.
///
/// For tests and reproducible fixtures only: a production reference
/// string must come from [`run_setup`] with fresh randomness. Zero
/// scalars are rejected outright.
pub fn run_setup_with_secrets(
    qap: &Qap<Fr>,
    tau: Fr,
    alpha: Fr,
    beta: Fr,
) -> Result<Crs, Groth16Error> {
    if tau.is_zero() || alpha.is_zero() || beta.is_zero() {
        return Err(Groth16Error::BadRandomness);
    }
    let secrets = ToxicScalars { tau, alpha, beta };
    Ok(derive_crs(qap, &secrets))
}

fn sample_nonzero<R: Rng>(rng: &mut R) -> Result<Fr, Groth16Error> {
    for _ in 0..MAX_SAMPLE_RETRIES {
        let scalar = Fr::rand(rng);
        if !scalar.is_zero() {
            return Ok(scalar);
        }
    }
    Err(Groth16Error::BadRandomness)
}

/// Derives the full reference string from the secrets.
///
/// * `g1_srs` / `g2_srs`: `[τ^{n−1}, …, τ⁰]` lifted into each group,
///   length `n`.
/// * `t_tau_srs`: `[τ^{n−2}·t(τ), …, τ⁰·t(τ)]` in G₁, length `n − 1`,
///   exactly enough slots for a quotient of degree `n − 2`.
/// * `psis[j] = [α·vⱼ(τ) + β·uⱼ(τ) + wⱼ(τ)]₁`, with each polynomial
///   evaluated at `τ` by Horner's rule.
fn derive_crs(qap: &Qap<Fr>, secrets: &ToxicScalars) -> Crs {
    let n = qap.num_constraints();
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();

    let tau_powers = descending_powers(secrets.tau, n);
    let g1_srs: Vec<G1Affine> = tau_powers.iter().map(|p| (g1 * *p).into_affine()).collect();
    let g2_srs: Vec<G2Affine> = tau_powers.iter().map(|p| (g2 * *p).into_affine()).collect();

    // t(τ) = ∏ (τ − i) over the constraint points
    let mut t_at_tau = Fr::one();
    for i in 1..=n as u64 {
        t_at_tau *= secrets.tau - Fr::from(i);
    }

    let t_tau_srs: Vec<G1Affine> = descending_powers(secrets.tau, n.saturating_sub(1))
        .iter()
        .map(|p| (g1 * (*p * t_at_tau)).into_affine())
        .collect();

    let psis: Vec<G1Affine> = (0..qap.num_wires())
        .map(|j| {
            let u_tau = qap.u[j].evaluate(secrets.tau);
            let v_tau = qap.v[j].evaluate(secrets.tau);
            let w_tau = qap.w[j].evaluate(secrets.tau);
            (g1 * (secrets.alpha * v_tau + secrets.beta * u_tau + w_tau)).into_affine()
        })
        .collect();

    Crs {
        alpha_g1: (g1 * secrets.alpha).into_affine(),
        beta_g1: (g1 * secrets.beta).into_affine(),
        beta_g2: (g2 * secrets.beta).into_affine(),
        g1_srs,
        g2_srs,
        t_tau_srs,
        psis,
    }
}

/// `[s^{count−1}, …, s¹, s⁰]`.
fn descending_powers(s: Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= s;
    }
    powers.reverse();
    powers
}
