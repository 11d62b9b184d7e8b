//! Decorative quantum circuit demo.
//!
//! The maze walker's namesake: a small Grover-flavored circuit that is built, simulated and
//! measured entirely for show. Nothing in this module is reachable from the path search; the
//! histogram it prints is the whole point. The demo runs behind the `--circuit-demo` command line
//! flag instead of cluttering the fullscreen interface.

use std::collections::BTreeMap;

use rand::{rngs::StdRng, Rng as _, SeedableRng as _};

/// Number of measurement shots taken by the demo circuit.
const DEMO_SHOTS: u32 = 100;

/// A statevector simulator restricted to real amplitudes.
///
/// Hadamard, X, controlled-Z and Toffoli all have real matrices, so the demo circuit never leaves
/// the real subspace and a plain `f64` per basis state suffices. Qubit 0 is the least significant
/// bit of a basis index.
pub(crate) struct StateVector {
    /// One amplitude per basis state, `2^qubits` entries, starting in the all-zeros state.
    amplitudes: Vec<f64>,
}

impl StateVector {
    /// Creates a register of the given size in the all-zeros state.
    pub(crate) fn new(qubits: usize) -> Self {
        let mut amplitudes = vec![0.0; 1_usize << qubits];
        if let Some(first) = amplitudes.first_mut() {
            *first = 1.0;
        }

        Self { amplitudes }
    }

    /// Applies a Hadamard gate to the given qubit.
    pub(crate) fn hadamard(&mut self, qubit: usize) {
        let mask = 1_usize << qubit;

        for index in 0..self.amplitudes.len() {
            if index & mask == 0 {
                let low = self.amplitude(index);
                let high = self.amplitude(index | mask);
                self.set_amplitude(index, (low + high) * std::f64::consts::FRAC_1_SQRT_2);
                self.set_amplitude(index | mask, (low - high) * std::f64::consts::FRAC_1_SQRT_2);
            }
        }
    }

    /// Applies an X (NOT) gate to the given qubit.
    pub(crate) fn pauli_x(&mut self, qubit: usize) {
        let mask = 1_usize << qubit;

        for index in 0..self.amplitudes.len() {
            if index & mask == 0 {
                self.amplitudes.swap(index, index | mask);
            }
        }
    }

    /// Applies a controlled-Z gate between two qubits.
    pub(crate) fn cz(&mut self, control: usize, target: usize) {
        let both = (1_usize << control) | (1_usize << target);

        for index in 0..self.amplitudes.len() {
            if index & both == both {
                let amplitude = self.amplitude(index);
                self.set_amplitude(index, -amplitude);
            }
        }
    }

    /// Applies a Toffoli gate: X on the target when both controls are set.
    pub(crate) fn toffoli(&mut self, control_a: usize, control_b: usize, target: usize) {
        let controls = (1_usize << control_a) | (1_usize << control_b);
        let target_mask = 1_usize << target;

        for index in 0..self.amplitudes.len() {
            if index & controls == controls && index & target_mask == 0 {
                self.amplitudes.swap(index, index | target_mask);
            }
        }
    }

    /// Returns the probability of measuring the given basis state.
    pub(crate) fn probability(&self, basis: usize) -> f64 {
        let amplitude = self.amplitude(basis);
        amplitude * amplitude
    }

    /// Samples repeated measurements of the lowest `measured` qubits.
    ///
    /// The histogram keys are binary strings of the measured bits, most significant qubit first.
    pub(crate) fn sample(
        &self,
        rng: &mut StdRng,
        measured: usize,
        shots: u32,
    ) -> BTreeMap<String, u32> {
        let measured_mask = (1_usize << measured) - 1;
        let mut histogram = BTreeMap::new();

        for _ in 0..shots {
            let mut pick: f64 = rng.gen();
            // Attribute rounding residue to the last basis state.
            let mut chosen = self.amplitudes.len().saturating_sub(1);

            for basis in 0..self.amplitudes.len() {
                let probability = self.probability(basis);
                if pick < probability {
                    chosen = basis;
                    break;
                }
                pick -= probability;
            }

            let key = format!("{:0width$b}", chosen & measured_mask, width = measured);
            *histogram.entry(key).or_insert(0) += 1;
        }

        histogram
    }

    /// Reads one amplitude, treating out-of-range indices as zero.
    fn amplitude(&self, index: usize) -> f64 {
        self.amplitudes.get(index).copied().unwrap_or_default()
    }

    /// Writes one amplitude, ignoring out-of-range indices.
    fn set_amplitude(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.amplitudes.get_mut(index) {
            *slot = value;
        }
    }
}

/// Runs the decorative three-qubit circuit and prints its measurement histogram.
///
/// Two Hadamards put the walk qubits in superposition, a Toffoli oracle marks the both-set input
/// on the ancilla, and one diffusion round follows before 100 shots are measured. The output is
/// for the eyes only; the maze search never consumes it.
pub fn run_circuit_demo(seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut state = StateVector::new(3);

    // Superposition over the two walk qubits.
    state.hadamard(0);
    state.hadamard(1);

    // Oracle marking the both-set input on the ancilla.
    state.toffoli(0, 1, 2);

    // One diffusion round over the walk qubits.
    state.hadamard(0);
    state.hadamard(1);
    state.pauli_x(0);
    state.pauli_x(1);
    state.cz(0, 1);
    state.pauli_x(0);
    state.pauli_x(1);
    state.hadamard(0);
    state.hadamard(1);

    println!("circuit histogram over {DEMO_SHOTS} shots (decorative only):");
    for (basis, count) in state.sample(&mut rng, 2, DEMO_SHOTS) {
        println!("  {basis}: {count}");
    }
}
