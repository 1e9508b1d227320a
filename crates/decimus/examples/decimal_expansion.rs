//! Prints the first digits of a few famous fractions and a large factorial.
//!
//! Run with `cargo run -p decimus --example decimal_expansion`.

use decimus::prelude::*;

fn factorial(n: u32) -> BigInt {
    let mut acc = BigInt::new(1);
    let mut k = BigInt::new(1);
    for _ in 0..n {
        acc *= &k;
        k.increment();
    }
    acc
}

fn main() {
    println!("=== Fractions ===\n");
    for (name, n, d) in [("1/7", 1, 7), ("22/7", 22, 7), ("355/113", 355, 113), ("-2/3", -2, 3)] {
        let r = Rational::from_i64(n, d);
        println!("{name:>8} = {:<28} ({r})", r.as_decimal(25));
    }

    println!("\n=== Harmonic numbers ===\n");
    let mut h = Rational::from(0);
    for k in 1..=20 {
        h += Rational::from_i64(1, k);
        if k % 5 == 0 {
            println!("H({k:>2}) = {h} ~ {}", h.as_decimal(10));
        }
    }

    println!("\n=== Factorial ===\n");
    let f = factorial(100);
    println!("100! = {f}");
    println!("100! has {} digits", f.to_string().len());

    let g = gcd(&f, &factorial(60).pow(2));
    println!("gcd(100!, (60!)^2) has {} digits", g.to_string().len());
}
