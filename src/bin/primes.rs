use std::io::{self, BufRead, BufWriter, Write};
use std::process::exit;

use clap::Parser;
use log::{debug, error};

use workpool::{PoolError, Result, SharedQueueThreadPool, TaskHandle, ThreadPool};

#[derive(Parser)]
#[command(
    name = "primes",
    version,
    about = "Tests integers read from stdin for primality on a thread pool"
)]
struct Cli {
    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(long, value_name = "N")]
    threads: Option<u32>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let threads = cli.threads.unwrap_or(num_cpus::get() as u32);
    let pool = SharedQueueThreadPool::new(threads)?;
    debug!("Testing primality with {} workers", threads);

    let mut results: Vec<TaskHandle<bool>> = Vec::new();
    for line in io::stdin().lock().lines() {
        for token in line?.split_whitespace() {
            let n: u64 = token
                .parse()
                .map_err(|_| PoolError::StringError(format!("Invalid integer: {}", token)))?;
            results.push(pool.submit(move || is_prime(n))?);
        }
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for handle in results {
        writeln!(out, "{}", u8::from(handle.get()?))?;
    }
    out.flush()?;

    pool.join();
    Ok(())
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
