//! Demonstration driver: fills a table past its capacity, resizes it, and
//! runs a few deletes.

use chained_hashtable::logger::initialize_logger;
use chained_hashtable::{djb2, Djb2, Fnv1, HashTable, KeyHash};
use clap::{Parser, ValueEnum};
use log::info;

const STANZA: [&str; 12] = [
    "'Twas brillig, and the slithy toves",
    "Did gyre and gimble in the wabe:",
    "All mimsy were the borogoves,",
    "And the mome raths outgrabe.",
    "\"Beware the Jabberwock, my son!",
    "The jaws that bite, the claws that catch!",
    "Beware the Jubjub bird, and shun",
    "The frumious Bandersnatch!\"",
    "He took his vorpal sword in hand;",
    "Long time the manxome foe he sought--",
    "So rested he by the Tumtum tree",
    "And stood awhile in thought.",
];

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Hasher {
    Djb2,
    Fnv1,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial number of buckets (raised to the minimum if smaller).
    #[arg(short, long, default_value_t = 8)]
    capacity: usize,

    #[arg(long, value_enum, default_value_t = Hasher::Djb2)]
    hasher: Hasher,
}

fn print_lines<H: KeyHash>(table: &HashTable<&str, H>) {
    for i in 1..=STANZA.len() {
        match table.get(&format!("line_{i}")) {
            Some(line) => println!("{line}"),
            None => println!("<missing line_{i}>"),
        }
    }
}

fn car_line<H: KeyHash>(table: &HashTable<&str, H>, make: &str) -> String {
    match table.get(make) {
        Some(model) => format!("{make}: {model}"),
        None => format!("{make}: None"),
    }
}

fn print_car<H: KeyHash>(table: &HashTable<&str, H>, make: &str) {
    println!("{}", car_line(table, make));
}

fn run<H: KeyHash + Copy>(capacity: usize, hasher: H) {
    let mut ht = HashTable::with_capacity_and_hasher(capacity, hasher);
    for (i, line) in STANZA.iter().enumerate() {
        ht.put(format!("line_{}", i + 1), *line);
    }
    info!(
        "stored {} lines in {} slots (load factor {:.2})",
        ht.len(),
        ht.num_slots(),
        ht.load_factor()
    );

    println!();
    print_lines(&ht);

    let old_capacity = ht.num_slots();
    ht.resize(old_capacity * 2);
    let new_capacity = ht.num_slots();
    println!("\nResized from {old_capacity} to {new_capacity}.\n");
    print_lines(&ht);
    println!();

    let mut cars = HashTable::with_capacity_and_hasher(capacity, hasher);
    cars.put("Toyota", "Tacoma");
    cars.put("Honda", "Accord");
    cars.put("Porsche", "911");
    println!("{}", cars.num_slots());
    for make in ["Honda", "Toyota", "Porsche"] {
        print_car(&cars, make);
    }
    cars.delete("Porsche");
    cars.delete("Honda");
    // Already gone; logs a warning.
    cars.delete("Honda");
    print_car(&cars, "Toyota");
    print!("{}", cars.buckets());
}

fn main() {
    initialize_logger();
    let args = Args::parse();

    println!("{}", djb2("car"));
    println!("{}", djb2("rae"));

    match args.hasher {
        Hasher::Djb2 => run(args.capacity, Djb2),
        Hasher::Fnv1 => run(args.capacity, Fnv1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_lines_show_bare_values() {
        let mut cars = HashTable::new(8);
        cars.put("Honda", "Accord");
        assert_eq!(car_line(&cars, "Honda"), "Honda: Accord");
        cars.delete("Honda");
        assert_eq!(car_line(&cars, "Honda"), "Honda: None");
    }
}
