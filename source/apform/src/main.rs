use apform::ApState;
use rand::prelude::*;

fn main() {
    env_logger::init();
    let state = random_state(512, 200_000);
    println!(
        "{} projectors, {} cz terms over {} qubits",
        state.projectors().len(),
        state.cz_terms().len(),
        state.num_qubits()
    );
}

fn random_state(num_qubits: usize, num_gates: usize) -> ApState {
    let mut rng = thread_rng();
    let mut state = ApState::new(num_qubits);
    for _ in 0..num_gates {
        let qubit = rng.gen_range(0..num_qubits);
        match rng.gen_range(0..4) {
            0 => state.h(qubit),
            1 => state.s(qubit),
            2 => state.cz(qubit, distinct_from(&mut rng, qubit, num_qubits)),
            _ => state.cx(qubit, distinct_from(&mut rng, qubit, num_qubits)),
        };
    }
    state
}

fn distinct_from(rng: &mut ThreadRng, qubit: usize, num_qubits: usize) -> usize {
    loop {
        let other = rng.gen_range(0..num_qubits);
        if other != qubit {
            return other;
        }
    }
}
