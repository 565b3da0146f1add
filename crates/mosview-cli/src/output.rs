//! Text output for the snapshot and curves commands.

use std::fmt::Write as _;

use mosview::Session;
use mosview::plot::PlotData;

/// Print the readouts and operating point of a session.
pub fn print_snapshot(session: &Session) {
    let r = session.readouts();
    let state = session.state();

    println!("MOSFET Operating Point");
    println!("======================");
    println!();
    println!("  V_GS   = {}", r.vgs);
    println!("  V_DS   = {}", r.vds);
    println!("  V_TH   = {}", r.vth);
    println!("  V_OV   = {}", r.overdrive);
    println!("  Mode   = {}", r.mode);
    println!("  Length = {}", r.length);
    println!("  Width  = {}", r.width);
    println!("  W/L    = {}", r.aspect_ratio);
    println!();
    println!("  K      = {:.4e} A/V^2", state.k);
    println!("  lambda = {} 1/V", state.lambda);
    println!("  I_D    = {:.6} mA", state.drain_current * 1e3);
    println!();
}

/// Tab-separated sweep table: one row per sweep point, currents in mA.
pub fn curve_table(plots: &PlotData) -> String {
    let mut table = String::from("v\tid_sat_mA\tboundary_mA\tid_mA\n");
    let rows = plots
        .saturation_envelope
        .points
        .iter()
        .zip(&plots.saturation_boundary.points)
        .zip(&plots.output_curve.points);
    for ((envelope, boundary), curve) in rows {
        let _ = writeln!(
            table,
            "{:.2}\t{:.6}\t{:.6}\t{:.6}",
            envelope.x, envelope.y, boundary.y, curve.y
        );
    }
    table
}
