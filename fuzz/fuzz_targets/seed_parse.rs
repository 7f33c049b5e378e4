use honggfuzz::fuzz;
use keccak_bitcount::parse_seed;
use num_bigint::BigUint;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                if let Ok(seed) = parse_seed(text) {
                    let back = BigUint::from_bytes_be(&seed).to_str_radix(10);
                    assert_eq!(parse_seed(&back).unwrap(), seed);
                }
            }
        });
    }
}
