//! Streaming accumulation demo.
//!
//! Shows the additive output contract: chunks arriving over time are folded
//! into a single `[sum, count]` pair with `nansum_ndarray`, and the running
//! NaN-aware mean is read off at any point. Run with:
//!
//! ```sh
//! cargo run --example streaming_accumulate
//! ```

use pwsum::nansum_ndarray;

fn main() {
    // Sensor batches with occasional dropouts recorded as NaN.
    let batches: Vec<Vec<f64>> = vec![
        vec![20.1, 20.3, f64::NAN, 20.2],
        vec![19.8, f64::NAN, f64::NAN, 20.0, 20.4],
        vec![20.6, 20.5],
        vec![f64::NAN],
    ];

    // One pair of slots, zeroed once up front. Every batch adds to it.
    let mut acc = [0.0, 0.0];

    for (i, batch) in batches.iter().enumerate() {
        nansum_ndarray(batch.len(), batch, 1, 0, &mut acc, 1, 0);
        let [total, count] = acc;
        if count > 0.0 {
            println!(
                "after batch {}: {} valid readings, total {:.1}, mean {:.3}",
                i,
                count,
                total,
                total / count
            );
        } else {
            println!("after batch {}: no valid readings yet", i);
        }
    }
}
