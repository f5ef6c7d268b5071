//! Runs the whole protocol on the quartic example circuit
//! `z = x⁴ − 5·y²·x²` with `x = 4`, `y = −2`: R1CS, QAP, trusted setup,
//! proof, verification.

use anyhow::Result;
use ark_bn254::Fr;
use snark_circuits::QuarticCircuit;
use snark_groth16::{prove, run_setup, verify_proof};
use snark_qap::Qap;

fn main() -> Result<()> {
    let circuit = QuarticCircuit::new(Fr::from(4u64), -Fr::from(2u64));

    println!("--- Building the R1CS ---");
    let r1cs = QuarticCircuit::<Fr>::r1cs()?;
    let witness = circuit.witness();
    println!(
        "{} constraints, {} wires, witness satisfies: {}",
        r1cs.num_constraints(),
        r1cs.num_wires(),
        r1cs.is_satisfied(&witness)
    );

    println!("--- Interpolating the QAP ---");
    let qap = Qap::from_r1cs(&r1cs);

    println!("--- Running the trusted setup ---");
    let crs = run_setup(&qap, &mut rand::thread_rng())?;
    println!(
        "reference string: {} G1 powers, {} G2 powers, {} t(τ) powers, {} ψ points",
        crs.g1_srs.len(),
        crs.g2_srs.len(),
        crs.t_tau_srs.len(),
        crs.psis.len()
    );

    println!("--- Proving ---");
    let proof = prove(&crs, &qap, &witness)?;
    println!("A = {:?}", proof.a);
    println!("B = {:?}", proof.b);
    println!("C = {:?}", proof.c);

    println!("--- Verifying ---");
    let valid = verify_proof(&crs.verifying_key(), &proof);
    println!("proof is valid: {valid}");

    Ok(())
}
