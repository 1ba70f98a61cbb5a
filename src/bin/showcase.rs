use clap::{Parser, Subcommand};
use infvec::{
    bijection::{pair_nr, triple_nr},
    cursor::{count_if, equal},
    prelude::*,
    primes::PrimeSieve,
};
use itertools::iproduct;
use log::info;
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build small sparse vectors and compare them
    Vectors {
        /// Coefficient stored in the example vector
        #[clap(long, default_value_t = 23.0)]
        number: f64,
    },
    /// Print the primes up to n and compare them with the primes up to n-1
    Primes {
        #[clap(short = 'n', default_value_t = 23)]
        n: usize,
    },
    /// Enumerate composite keys by their number
    Keys {
        /// Upper bound (exclusive) of each component
        #[clap(short = 'n', default_value_t = 4)]
        n: u64,
        /// Enumerate triples instead of pairs
        #[clap(long)]
        triple: bool,
    },
}

fn vectors(number: f64) {
    let v: OrderedSparseVector<u64, f64> = SparseVector::new();
    println!("v.get(42)={}", v.get(42));
    println!("v.len()={}", v.len());
    print!("v=\n{}", v);

    let mut m = BTreeMap::new();
    m.insert(42, number);
    m.insert(123, number);
    m.insert(0, 0.0);
    let w: OrderedSparseVector<u64, f64> = SparseVector::from_storage(&m);
    print!("w=\n{}", w);
    println!("w.len()={}", w.len());

    let u = w.to_hashed().to_ordered();
    println!("v==w: {}", v == w);
    println!("w==u: {}", w == u);
    println!("equal(w, u): {}", equal(w.begin(), w.end(), u.begin()));
    let n = count_if(w.begin(), w.end(), |(_, value)| **value == number);
    println!("count of {} in w: {}", number, n);
}

fn primes(n: usize) {
    let p = PrimeSieve::new(n);
    let q = PrimeSieve::new(n.saturating_sub(1));
    println!("primes up to {}: {}", n, p);
    println!("primes up to {}: {}", q.limit(), q);
    let same = p.len() == q.len() && equal(p.begin(), p.end(), q.begin());
    println!("same primes: {}", same);
}

fn keys(n: u64, triple: bool) {
    if triple {
        let mut keys: Vec<(u64, Triple)> = iproduct!(0..n, 0..n, 0..n)
            .map(|(j, k, l)| (triple_nr(j, k, l), Triple::new(j, k, l)))
            .collect();
        keys.sort();
        for (nr, key) in keys {
            println!("{}\t{}", nr, key);
        }
    } else {
        let mut keys: Vec<(u64, Pair)> = iproduct!(0..n, 0..n)
            .map(|(j, k)| (pair_nr(j, k), Pair::new(j, k)))
            .collect();
        keys.sort();
        for (nr, key) in keys {
            println!("{}\t{}", nr, key);
        }
    }
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    info!("opts={:?}", opts);
    match opts.command {
        Commands::Vectors { number } => vectors(number),
        Commands::Primes { n } => primes(n),
        Commands::Keys { n, triple } => keys(n, triple),
    }
}
