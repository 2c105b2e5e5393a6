// demos/bell_pair.rs

//! Builds a Bell pair and shows that entanglement empties both Bloch views:
//! each qubit's marginal collapses to the center of the sphere even though
//! the joint state is pure.

use blochview::{AsciiSphere, CircuitBuilder, Render, Simulator, VisError};

fn main() -> Result<(), VisError> {
    let circuit = CircuitBuilder::new(2)?
        .hadamard(0)?
        .cnot(0, 1)?
        .build();

    println!("{}", circuit);

    let snapshot = Simulator::new().run(&circuit)?;
    println!("{}", snapshot);

    let sphere = AsciiSphere::new();
    for (i, view) in snapshot.qubits().iter().enumerate() {
        println!("{}", sphere.render(view.bloch(), &format!("Qubit {}", i)));
        println!("purity = {:.4}", view.density().purity());
        println!();
    }

    Ok(())
}
