//! `ckv algorithms` – list supported algorithms.

use ckv_core::Algorithm;

pub fn run_algorithms() {
    println!("{:<8} {:>9}", "NAME", "HEX CHARS");
    for algo in Algorithm::ALL {
        println!("{:<8} {:>9}", algo, algo.hex_len());
    }
}
