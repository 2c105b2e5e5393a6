// demos/rotations.rs

//! Applies the palette's two fixed rotations - RX(π/3) on qubit 0 and
//! RY(π/4) on qubit 1 - and plots both resulting pure states on the sphere
//! surface.

use blochview::{AsciiSphere, CircuitBuilder, Render, Simulator, VisError};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_4};

fn main() -> Result<(), VisError> {
    let circuit = CircuitBuilder::new(2)?
        .rotate_x(0, FRAC_PI_3)?
        .rotate_y(1, FRAC_PI_4)?
        .build();

    println!("{}", circuit);

    let snapshot = Simulator::new().run(&circuit)?;
    println!("{}", snapshot);

    let sphere = AsciiSphere::new();
    for (i, view) in snapshot.qubits().iter().enumerate() {
        let label = format!("Qubit {} (|r| = {:.4})", i, view.bloch().magnitude());
        println!("{}", sphere.render(view.bloch(), &label));
        println!();
    }

    Ok(())
}
