//! Benchmark runner comparing sequential and parallel multiplication.
//!
//! Generates random square matrices, times both strategies over several
//! runs, prints a table, and appends the statistics to `results.csv`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::thread;
use std::time::Instant;

use parmul::{multiply, multiply_parallel_with, Error, Matrix};
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Matrix Multiplication Benchmark ===\n");

    let sizes = [200, 500, 1000];
    let runs_per_case = 5;
    let workers = thread::available_parallelism().map_or(1, |n| n.get());

    println!("Parallel workers: {}\n", workers);

    let mut csv = BufWriter::new(File::create("results.csv")?);
    writeln!(csv, "RowsLeft,ColsLeft,RowsRight,ColsRight,Mode,Mean,StdDev")?;

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let left = random_matrix(size, size)?;
        let right = random_matrix(size, size)?;

        let (seq_mean, seq_dev) = measure(runs_per_case, || multiply(&left, &right))?;
        let (par_mean, par_dev) = measure(runs_per_case, || {
            multiply_parallel_with(&left, &right, workers)
        })?;

        println!("{:<12} {:>10.4} s  ± {:.4} s", "Sequential", seq_mean, seq_dev);
        println!("{:<12} {:>10.4} s  ± {:.4} s", "Parallel", par_mean, par_dev);
        println!("{:<12} {:>10.2}×\n", "Speedup", seq_mean / par_mean);

        write_row(&mut csv, size, "Sequential", seq_mean, seq_dev)?;
        write_row(&mut csv, size, "Parallel", par_mean, par_dev)?;
    }

    println!("Statistics written to results.csv");

    Ok(())
}

/// Runs `action` once to warm up, then `runs` timed repetitions.
/// Returns the mean and standard deviation in seconds.
fn measure<F>(runs: usize, mut action: F) -> Result<(f64, f64), Error>
where
    F: FnMut() -> Result<Matrix, Error>,
{
    action()?;

    let mut times = Vec::with_capacity(runs);
    for _ in 0..runs {
        let started = Instant::now();
        action()?;
        times.push(started.elapsed().as_secs_f64());
    }

    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let variance = times.iter().map(|t| (t - mean) * (t - mean)).sum::<f64>() / times.len() as f64;

    Ok((mean, variance.sqrt()))
}

fn write_row(
    csv: &mut impl Write,
    size: usize,
    mode: &str,
    mean: f64,
    dev: f64,
) -> std::io::Result<()> {
    writeln!(
        csv,
        "{},{},{},{},{},{:.9},{:.9}",
        size, size, size, size, mode, mean, dev
    )
}

fn random_matrix(rows: usize, columns: usize) -> Result<Matrix, Error> {
    let mut rng = rand::thread_rng();
    let data = (0..rows)
        .map(|_| (0..columns).map(|_| rng.gen_range(-100..100)).collect())
        .collect();

    Matrix::from_rows(data)
}
