pub mod bijection;
pub mod cursor;
pub mod key;
pub mod prelude;
pub mod primes;
pub mod vector;
